use leptos::prelude::*;

use crate::core::content::{Anchor, STATS, Stat};
use crate::core::motion::{CountUp, Position, Timeline, VisualState};
use crate::ui::common::SectionHeading;
use crate::ui::icon::Icon;
use crate::ui::motion::{RevealPlan, use_count_up, use_motion_config, use_reveal};

/// Headline numbers counting up as their cards scroll in
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section id=Anchor::Results.id() class="min-h-screen py-32 px-6 relative overflow-hidden bg-black">
            <div class="container mx-auto">
                <SectionHeading
                    title="Our Results"
                    subtitle="Tangible results, not empty claims. We build efficient AI tools that scale, optimize, and save valuable hours."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                    {STATS.iter().enumerate().map(|(index, stat)| view! {
                        <StatCard stat=*stat index=index/>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat, index: usize) -> impl IntoView {
    let config = use_motion_config();
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(card_ref, config.trigger);

    let entrance = Timeline::new().with_delay(index as f64 * 0.1).add(
        VisualState::below(50.0).scaled(0.95),
        0.8,
        config.reveal.ease,
        Position::End,
    );
    let plan = RevealPlan::new(entrance, revealed);
    let count = CountUp::new(stat.target, stat.is_percentage).with_duration(config.count_up);
    let label = use_count_up(count, revealed);

    view! {
        <div node_ref=card_ref class="group relative" style=plan.style(0) data-stat=stat.label>
            <div class="glass rounded-2xl p-8 h-full border border-white/10 hover:border-neon-cyan/50 transition-all duration-500 relative overflow-hidden">
                <div class="relative z-10 text-center">
                    <div class="mb-6 flex justify-center">
                        <div class=format!("w-16 h-16 rounded-xl bg-gradient-to-br from-neon-cyan/20 to-neon-blue/20 flex items-center justify-center {} group-hover:scale-110 transition-transform duration-300", stat.color)>
                            <Icon name=stat.icon class="w-8 h-8"/>
                        </div>
                    </div>

                    <div class="text-5xl md:text-6xl font-bold mb-2 gradient-text" data-count="">
                        {move || label.get()}
                    </div>

                    <h3 class="text-xl font-semibold mb-3 text-white group-hover:text-neon-cyan transition-colors">
                        {stat.label}
                    </h3>
                    <p class="text-gray-400 text-sm leading-relaxed">{stat.description}</p>
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
    fn test_counters_ship_at_zero() {
        let html = render(|| view! { <Stats/> });
        assert!(html.contains("id=\"results\""));
        assert_eq!(html.matches("data-stat=").count(), STATS.len());
        assert_in_order(&html, STATS.iter().map(|s| s.label));

        // 500, 95%, 10,000 and 50 all start from zero before the reveal
        assert!(html.contains("0%"));
        assert!(!html.contains("10,000+"));
    }
}
