use leptos::prelude::*;

use crate::core::content::TESTIMONIALS;
use crate::core::motion::{Position, Timeline, TriggerConfig, VisualState};
use crate::ui::common::SectionHeading;
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

/// Horizontal strip of client quotes
#[component]
pub fn Testimonials() -> impl IntoView {
    let config = use_motion_config();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(section_ref, TriggerConfig::at(0.75));
    let cards = Timeline::new().add_staggered(
        TESTIMONIALS.len(),
        VisualState::beside(50.0),
        0.8,
        config.reveal.ease,
        config.reveal.stagger,
        Position::At(0.0),
    );
    let plan = RevealPlan::new(cards, revealed);

    view! {
        <section node_ref=section_ref class="min-h-screen py-32 px-6 relative overflow-hidden bg-black">
            <div class="container mx-auto">
                <SectionHeading
                    title="Client Success Stories"
                    subtitle="Hear from businesses transformed by intelligent automation"
                />

                <div class="max-w-7xl mx-auto">
                    <div class="flex gap-8 overflow-x-auto pb-8 scrollbar-hide snap-x snap-mandatory">
                        {TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| view! {
                            <div
                                class="flex-shrink-0 w-full md:w-1/2 lg:w-1/3 snap-center group"
                                style=plan.style(index)
                                data-testimonial=testimonial.name
                            >
                                <div class="glass rounded-2xl p-8 h-full border border-white/10 group-hover:border-neon-cyan/70 transition-all duration-500 relative overflow-hidden">
                                    <div class="relative z-10">
                                        <span class="block text-6xl leading-none text-neon-cyan mb-6 opacity-50" aria-hidden="true">"“"</span>
                                        <p class="text-gray-300 mb-6 leading-relaxed text-lg">
                                            {format!("\u{201C}{}\u{201D}", testimonial.content)}
                                        </p>
                                        <div class="flex items-center justify-between">
                                            <div>
                                                <h4 class="text-white font-semibold text-lg mb-1">{testimonial.name}</h4>
                                                <p class="text-gray-400 text-sm">{testimonial.role}</p>
                                            </div>
                                            <div class="flex gap-1" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                                                {(0..testimonial.rating).map(|_| view! {
                                                    <span class="text-neon-cyan text-xl" data-star="">"★"</span>
                                                }).collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
