use leptos::prelude::*;

use crate::core::content::{Anchor, FAQS, INITIAL_OPEN_FAQ};
use crate::core::interaction::Accordion;
use crate::core::motion::VisualState;
use crate::ui::common::SectionHeading;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

const ITEM_STAGGER: f64 = 0.08;

/// Accordion of common questions; at most one answer open at a time
#[component]
pub fn Faq() -> impl IntoView {
    let config = use_motion_config();
    let accordion = RwSignal::new(Accordion::new(Some(INITIAL_OPEN_FAQ)));

    let list_ref = NodeRef::<leptos::html::Div>::new();
    let plan = RevealPlan::new(
        config.reveal.list(FAQS.len(), VisualState::beside(-30.0), ITEM_STAGGER),
        use_reveal(list_ref, config.item_trigger),
    );

    view! {
        <section id=Anchor::Faqs.id() class="min-h-screen py-32 px-6 relative overflow-hidden bg-black">
            <div class="container mx-auto max-w-4xl">
                <SectionHeading
                    title="FAQs"
                    subtitle="Find answers to the most common questions about our services, AI solutions, and how we can help your business grow."
                />

                <div node_ref=list_ref class="space-y-4">
                    {FAQS.iter().enumerate().map(|(index, faq)| {
                        let id = faq.id;
                        let is_open = move || accordion.with(|accordion| accordion.is_open(id));
                        view! {
                            <div class="group" style=plan.style(index) data-faq=id.to_string()>
                                <div class="glass rounded-xl border border-white/10 hover:border-neon-cyan/50 transition-all duration-500 overflow-hidden">
                                    <button
                                        class="w-full p-6 flex items-center justify-between text-left"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| accordion.update(|accordion| accordion.toggle(id))
                                    >
                                        <span class="text-lg font-semibold text-white group-hover:text-neon-cyan transition-colors pr-4">
                                            {faq.question}
                                        </span>
                                        <div
                                            class="flex-shrink-0 transition-transform duration-300"
                                            style=move || if is_open() { "transform: rotate(180deg);" } else { "transform: rotate(0deg);" }
                                        >
                                            <Icon name=icons::CHEVRON_DOWN class="w-5 h-5 text-neon-cyan"/>
                                        </div>
                                    </button>

                                    {move || is_open().then(|| view! {
                                        <div class="overflow-hidden accordion-open" data-faq-answer="">
                                            <div class="px-6 pb-6 pt-0">
                                                <p class="text-gray-400 leading-relaxed">{faq.answer}</p>
                                            </div>
                                        </div>
                                    })}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
