use leptos::prelude::*;

use crate::core::content::COMPANIES;
use crate::core::motion::{Ease, Position, Timeline, VisualState};
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

const TILE_STAGGER: f64 = 0.05;

/// Grid of client logo placeholders
#[component]
pub fn Companies() -> impl IntoView {
    let config = use_motion_config();

    let caption_ref = NodeRef::<leptos::html::Div>::new();
    let caption = RevealPlan::new(
        Timeline::new().add(VisualState::below(30.0), 0.8, Ease::Power3Out, Position::End),
        use_reveal(caption_ref, config.trigger),
    );

    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let tiles = RevealPlan::new(
        config.reveal.list(COMPANIES.len(), VisualState::below(20.0).scaled(0.8), TILE_STAGGER),
        use_reveal(grid_ref, config.item_trigger),
    );

    view! {
        <section class="py-20 px-6 relative overflow-hidden">
            <div class="container mx-auto">
                <div node_ref=caption_ref class="text-center mb-12" style=caption.style(0)>
                    <p class="text-sm text-gray-400 uppercase tracking-wider mb-2">
                        "Trusted by 100+ companies worldwide"
                    </p>
                </div>

                <div node_ref=grid_ref class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-8 max-w-7xl mx-auto">
                    {COMPANIES.iter().enumerate().map(|(index, company)| view! {
                        <div class="group hover:scale-110 transition-transform" style=tiles.style(index) data-company="">
                            <div class="glass rounded-xl p-6 border border-white/5 hover:border-neon-cyan/30 transition-all duration-500 flex items-center justify-center h-24">
                                <span class="text-gray-400 group-hover:text-neon-cyan transition-colors font-semibold text-sm">
                                    {*company}
                                </span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::render;

    #[test]
    fn test_renders_every_tile() {
        let html = render(|| view! { <Companies/> });
        assert_eq!(html.matches("data-company=").count(), COMPANIES.len());
        // Tiles start shrunk and grow into place
        assert!(html.contains("scale(0.8)"));
    }
}
