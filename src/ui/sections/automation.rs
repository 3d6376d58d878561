use leptos::prelude::*;

use crate::core::content::{AI_AGENTS, AUTOMATION_TOOLS, AUTOMATION_WORKFLOWS, Anchor};
use crate::core::motion::{Position, Timeline, VisualState};
use crate::ui::common::SectionHeading;
use crate::ui::icon::Icon;
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

/// Workflow automation and AI agent offerings side by side
#[component]
pub fn Automation() -> impl IntoView {
    let config = use_motion_config();
    let timing = config.reveal;

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let panels = Timeline::new()
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0))
        .add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0));
    let panel_plan = RevealPlan::new(panels, use_reveal(section_ref, config.trigger));

    let workflows_ref = NodeRef::<leptos::html::Div>::new();
    let workflow_plan = RevealPlan::new(
        timing.list(AUTOMATION_WORKFLOWS.len(), VisualState::below(30.0).scaled(0.95), timing.stagger),
        use_reveal(workflows_ref, config.item_trigger),
    );

    let agents_ref = NodeRef::<leptos::html::Div>::new();
    let agent_plan = RevealPlan::new(
        timing.list(AI_AGENTS.len(), VisualState::beside(30.0).scaled(0.95), timing.stagger),
        use_reveal(agents_ref, config.item_trigger),
    );

    view! {
        <section
            id=Anchor::Automation.id()
            node_ref=section_ref
            class="py-32 px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <SectionHeading
                    title="AI Automation & Workflow Systems"
                    subtitle="Helping businesses save time and money by automating daily operations."
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 md:p-8 overflow-hidden" style=panel_plan.style(0)>
                        <div class="mb-6">
                            <h3 class="text-2xl font-bold mb-2 text-white">"Workflow Automation"</h3>
                            <p class="text-sm text-gray-400">
                                "Automate daily operations and streamline business processes."
                            </p>
                        </div>

                        <div class="mb-6 flex flex-wrap items-center gap-2">
                            <span class="text-xs text-gray-500 uppercase tracking-wider">"Tools:"</span>
                            {AUTOMATION_TOOLS.iter().enumerate().map(|(index, tool)| view! {
                                <div
                                    class="fade-in px-3 py-1 bg-white/5 border border-white/10 rounded-lg text-xs text-gray-300"
                                    style=format!("animation-delay: {:.1}s;", index as f64 * 0.1)
                                    data-tool=""
                                >
                                    {*tool}
                                </div>
                            }).collect_view()}
                        </div>

                        <div node_ref=workflows_ref class="space-y-3">
                            {AUTOMATION_WORKFLOWS.iter().enumerate().map(|(index, workflow)| view! {
                                <div
                                    class="flex items-center justify-between p-4 bg-white/5 rounded-lg border border-white/10 hover:bg-white/10 transition-colors group"
                                    style=workflow_plan.style(index)
                                    data-workflow=""
                                >
                                    <div class="flex items-center gap-4">
                                        <div class="p-2 bg-white/5 rounded-lg border border-white/10">
                                            <Icon name=workflow.icon class="w-5 h-5 text-white"/>
                                        </div>
                                        <div>
                                            <p class="text-white font-medium">{workflow.title}</p>
                                            <p class="text-sm text-gray-400 mt-1">{workflow.description}</p>
                                        </div>
                                    </div>
                                    <div class="opacity-0 group-hover:opacity-100 transition-opacity">
                                        <div class="w-2 h-2 bg-white/40 rounded-full"></div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 md:p-8 overflow-hidden" style=panel_plan.style(1)>
                        <div class="mb-6">
                            <h3 class="text-2xl font-bold mb-2 text-white">"AI Agents"</h3>
                            <p class="text-sm text-gray-400">
                                "Intelligent agents for advanced automation and decision-making."
                            </p>
                        </div>

                        <div node_ref=agents_ref class="space-y-4">
                            {AI_AGENTS.iter().enumerate().map(|(index, agent)| view! {
                                <div
                                    class="p-5 bg-white/5 rounded-xl border border-white/10 hover:border-white/20 hover:bg-white/10 transition-all duration-300 group"
                                    style=agent_plan.style(index)
                                    data-agent=""
                                >
                                    <div class="flex items-start gap-4">
                                        <div class="p-3 bg-white/5 rounded-lg border border-white/10 group-hover:border-white/20 transition-colors">
                                            <Icon name=agent.icon class="w-6 h-6 text-white"/>
                                        </div>
                                        <div class="flex-1">
                                            <h4 class="text-lg font-semibold text-white mb-2">{agent.title}</h4>
                                            <p class="text-sm text-gray-400 leading-relaxed">{agent.description}</p>
                                        </div>
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
    fn test_lists_render_in_declared_order() {
        let html = render(|| view! { <Automation/> });
        assert!(html.contains("id=\"automation\""));

        assert_eq!(html.matches("data-workflow=").count(), AUTOMATION_WORKFLOWS.len());
        assert_eq!(html.matches("data-agent=").count(), AI_AGENTS.len());
        assert_eq!(html.matches("data-tool=").count(), AUTOMATION_TOOLS.len());

        assert_in_order(&html, AUTOMATION_WORKFLOWS.iter().map(|w| w.title));
        assert_in_order(&html, AI_AGENTS.iter().map(|a| a.title));
    }

    #[test]
    fn test_items_start_offset_toward_their_entry_side() {
        let html = render(|| view! { <Automation/> });
        // Workflows rise from below, agents slide in from the right
        assert!(html.contains("translate3d(0px, 30px, 0) scale(0.95)"));
        assert!(html.contains("translate3d(30px, 0px, 0) scale(0.95)"));
    }
}
