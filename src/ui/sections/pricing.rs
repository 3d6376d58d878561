use leptos::prelude::*;

use crate::core::content::{Anchor, PRICING_PLANS, PricingPlan};
use crate::core::motion::{Position, Timeline, VisualState};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

#[component]
pub fn Pricing() -> impl IntoView {
    let config = use_motion_config();
    let timing = config.reveal;

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let header = RevealPlan::new(
        Timeline::new().add(VisualState::below(50.0), timing.duration, timing.ease, Position::At(0.0)),
        use_reveal(section_ref, config.trigger),
    );

    let cards_ref = NodeRef::<leptos::html::Div>::new();
    let cards = RevealPlan::new(
        timing.list(PRICING_PLANS.len(), VisualState::below(30.0).scaled(0.95), timing.stagger),
        use_reveal(cards_ref, config.item_trigger),
    );

    view! {
        <section
            id=Anchor::Pricing.id()
            node_ref=section_ref
            class="py-32 px-6 relative overflow-hidden bg-black"
        >
            <div class="container mx-auto max-w-7xl">
                <div class="text-center mb-16" style=header.style(0)>
                    <h2 class="text-4xl md:text-5xl font-bold mb-4 text-white">"Pricing"</h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                        "Choose the perfect plan for your automation needs"
                    </p>
                </div>

                <div node_ref=cards_ref class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {PRICING_PLANS.iter().enumerate().map(|(index, plan)| view! {
                        <PlanCard plan=*plan style=Signal::derive(cards.style(index))/>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(
    plan: PricingPlan,
    /// Entrance style from the cards reveal
    style: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="group relative hover:-translate-y-2 transition-transform" style=move || style.get() data-plan=plan.name>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 transform -translate-x-1/2 z-20">
                    <div class="badge-pulse px-4 py-1.5 bg-black border border-white/20 rounded-full text-xs font-semibold flex items-center gap-2 text-white backdrop-blur-sm" data-popular="">
                        <Icon name=icons::SPARKLES class="w-3.5 h-3.5 text-purple-400"/>
                        "Most Popular"
                    </div>
                </div>
            })}

            <div class="bg-[#0a0a0a] border border-white/10 rounded-2xl p-6 md:p-8 h-full hover:border-white/20 hover:bg-white/5 transition-all duration-300 relative overflow-hidden">
                <div class="relative z-10">
                    <h3 class="text-2xl font-bold mb-2 text-white group-hover:text-purple-200 transition-colors">
                        {plan.name}
                    </h3>
                    <p class="text-sm text-gray-400 mb-6 leading-relaxed">{plan.description}</p>

                    <div class="mb-6">
                        <span class="text-4xl md:text-5xl font-bold text-white">{plan.price}</span>
                        {plan.period_label().map(|period| view! {
                            <span class="text-gray-400 ml-2 text-sm" data-period="">{period}</span>
                        })}
                    </div>

                    <a
                        href=Anchor::Contact.href()
                        class="block text-center w-full py-3 rounded-lg font-semibold mb-8 bg-black border border-white/20 text-white hover:bg-white/5 hover:border-white/30 transition-all duration-300"
                    >
                        "Get Started"
                    </a>

                    <ul class="space-y-3">
                        {plan.features.iter().map(|feature| view! {
                            <li class="flex items-start gap-3">
                                <div class="flex-shrink-0 w-5 h-5 rounded-full bg-white/5 border border-white/10 flex items-center justify-center mt-0.5 group-hover:border-purple-400/50 transition-colors">
                                    <Icon name=icons::CHECK class="w-3 h-3 text-white"/>
                                </div>
                                <span class="text-sm text-gray-300 group-hover:text-gray-200 transition-colors leading-relaxed">
                                    {*feature}
                                </span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_plans_badge_and_periods() {
        let html = render(|| view! { <Pricing/> });
        assert!(html.contains("id=\"pricing\""));
        assert_eq!(html.matches("data-plan=").count(), PRICING_PLANS.len());
        assert_in_order(&html, PRICING_PLANS.iter().map(|p| p.name));

        assert_eq!(html.matches("data-popular").count(), 1);
        // "Custom" has no period suffix
        assert_eq!(html.matches("data-period").count(), PRICING_PLANS.len() - 1);
        assert!(html.contains("/one-time"));
        assert!(!html.contains("/project-based"));
    }
}
