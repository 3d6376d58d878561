use leptos::prelude::*;

use crate::core::content::{Anchor, PROCESS_STEPS};
use crate::core::motion::VisualState;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

const DASHED_LINE: &str = "width: 2px; background: repeating-linear-gradient(to bottom, transparent, transparent 8px, rgba(255, 255, 255, 0.2) 8px, rgba(255, 255, 255, 0.2) 12px);";

/// Five-step implementation timeline next to its headline panel
#[component]
pub fn Process() -> impl IntoView {
    let config = use_motion_config();
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let revealed = use_reveal(section_ref, config.trigger);

    // Tween 0 is the headline panel, 1 the timeline column, 2.. the steps
    let timeline = config.reveal.panels_then_items(
        &[VisualState::beside(-50.0), VisualState::beside(50.0)],
        PROCESS_STEPS.len(),
        VisualState::below(30.0).scaled(0.95),
    );
    let plan = RevealPlan::new(timeline, revealed);
    let last = PROCESS_STEPS.len().saturating_sub(1);

    view! {
        <section
            id=Anchor::Process.id()
            node_ref=section_ref
            class="py-32 px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16 items-start">
                    <div class="flex flex-col justify-center items-start space-y-8" style=plan.style(0)>
                        <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white leading-tight">
                            "The AI Agent Implementation Process"
                        </h2>
                        <a
                            href=Anchor::Contact.href()
                            class="px-8 py-4 bg-white hover:bg-gray-100 rounded-xl font-semibold text-black flex items-center gap-3 transition-all duration-300 group"
                        >
                            <span>"Shape your Idea"</span>
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 transition-transform group-hover:translate-x-1"/>
                        </a>
                    </div>

                    <div class="relative" style=plan.style(1)>
                        <div class="absolute left-6 top-0 bottom-0" style=DASHED_LINE></div>

                        <div class="space-y-6">
                            {PROCESS_STEPS.iter().enumerate().map(|(index, step)| view! {
                                <div class="relative pl-16" style=plan.style(2 + index) data-step=step.number>
                                    <div class="absolute left-0 top-0 w-12 h-12 flex items-center justify-center z-10">
                                        <div class="w-12 h-12 bg-white/10 border border-white/20 rounded-full flex items-center justify-center hover:border-purple-400/50 hover:bg-white/15 transition-all duration-300">
                                            <Icon name=step.icon class="w-5 h-5 text-white"/>
                                        </div>
                                        {(index != last).then(|| view! {
                                            <div class="absolute top-12 left-1/2 -translate-x-1/2 w-0.5 h-6 border-l-2 border-dashed border-white/20"></div>
                                        })}
                                    </div>

                                    <div class="bg-[#0a0a0a] border border-white/10 rounded-xl p-6 hover:border-white/20 hover:bg-white/5 transition-all duration-300">
                                        <h3 class="text-lg font-bold text-white mb-2">{step.title}</h3>
                                        <p class="text-sm text-gray-400 leading-relaxed">{step.description}</p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_steps_render_in_order() {
        let html = render(|| view! { <Process/> });
        assert!(html.contains("id=\"process\""));
        assert_eq!(html.matches("data-step=").count(), PROCESS_STEPS.len());
        assert_in_order(&html, PROCESS_STEPS.iter().map(|s| s.title));
    }

    #[test]
    fn test_panels_enter_from_opposite_sides() {
        let html = render(|| view! { <Process/> });
        assert_in_order(
            &html,
            [
                "translate3d(-50px, 0px, 0)",
                "translate3d(50px, 0px, 0)",
                "translate3d(0px, 30px, 0) scale(0.95)",
            ],
        );
    }
}
