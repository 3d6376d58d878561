use leptos::prelude::*;

use crate::core::motion::{Ease, Position, Timeline, VisualState};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

/// Centered section title with its own one-shot reveal
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let config = use_motion_config();
    let heading_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = use_reveal(heading_ref, config.trigger);
    let timeline = Timeline::new().add(VisualState::below(50.0), 0.8, Ease::Power3Out, Position::End);
    let plan = RevealPlan::new(timeline, revealed);

    view! {
        <div node_ref=heading_ref class="text-center mb-16" style=plan.style(0)>
            <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4 text-white">{title}</h2>
            {subtitle.map(|text| view! {
                <p class="text-base sm:text-lg text-gray-400 max-w-2xl mx-auto px-4">{text}</p>
            })}
        </div>
    }
}
