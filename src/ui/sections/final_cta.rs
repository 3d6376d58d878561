use leptos::prelude::*;

use crate::core::content::Anchor;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};
use crate::ui::sections::hero::{ParticleBackdrop, headline_timeline};

const CTA_PARTICLE_SEED: u64 = 0x0c7a;

/// Closing call to action; replays the hero entrance on scroll
#[component]
pub fn FinalCta() -> impl IntoView {
    let config = use_motion_config();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let plan = RevealPlan::new(headline_timeline(0.0), use_reveal(section_ref, config.trigger));

    view! {
        <section
            id=Anchor::Cta.id()
            node_ref=section_ref
            class="relative min-h-screen w-full overflow-hidden bg-black flex items-center justify-center"
        >
            <ParticleBackdrop seed=CTA_PARTICLE_SEED white=50 purple=30/>

            <div class="relative z-20 text-center px-6 max-w-4xl mx-auto">
                <h2 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight text-white" style=plan.style(0)>
                    "Ready to Transform Your"
                    <br/>
                    <span class="bg-gradient-to-r from-white to-purple-200 bg-clip-text text-transparent">
                        "Business with AI?"
                    </span>
                </h2>

                <p class="text-lg md:text-xl lg:text-2xl text-gray-300 mb-12 leading-relaxed max-w-2xl mx-auto" style=plan.style(1)>
                    "Book a free strategy session and discover how intelligent automation can revolutionize your operations."
                </p>

                <a
                    href=Anchor::Contact.href()
                    class="inline-flex px-8 py-4 bg-black border border-white/20 rounded-lg font-semibold text-white items-center gap-2 hover:bg-white/5 hover:border-white/50 transition-all duration-300"
                    style=plan.style(2)
                >
                    <span>"Book a Free Strategy Session"</span>
                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5"/>
                </a>
            </div>
        </section>
    }
}
