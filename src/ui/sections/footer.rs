use leptos::prelude::*;

use crate::core::content::{FOOTER_LEGAL, FOOTER_NAVIGATION, FOOTER_SOCIAL, LOGO_PATH, NavLink};
use crate::core::motion::{Ease, Position, Timeline, VisualState};
use crate::ui::icon::Icon;
use crate::ui::motion::{RevealPlan, use_motion_config, use_reveal};

const WORDMARK_OPACITY: f64 = 0.15;

#[component]
fn LinkColumn(heading: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-bold mb-6 text-sm uppercase tracking-wider">{heading}</h4>
            <ul class="space-y-3">
                {links.iter().map(|link| view! {
                    <li>
                        <a href=link.href class="text-white hover:text-purple-200 transition-colors text-sm" data-footer-link="">
                            {link.label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Site footer with the faded wordmark behind the link columns
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_motion_config();
    let footer_ref = NodeRef::<leptos::html::Footer>::new();
    let wordmark = Timeline::new().add(
        VisualState::below(0.0),
        1.0,
        Ease::None,
        Position::End,
    );
    let plan = RevealPlan::new(wordmark, use_reveal(footer_ref, config.trigger));

    view! {
        <footer node_ref=footer_ref class="relative overflow-hidden bg-gradient-to-b from-black via-black to-purple-900/30">
            <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                // Fades to full opacity over a layer held at the wordmark's faint level
                <div style=plan.style(0)>
                    <div class="wordmark-glow" style=format!("opacity: {WORDMARK_OPACITY};")>
                        <span class="text-[200px] md:text-[300px] lg:text-[400px] font-bold text-white select-none">"Enigma"</span>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-6 py-16 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12">
                    <div class="lg:col-span-1">
                        <div class="flex items-center gap-3 mb-6">
                            <img src=LOGO_PATH alt="Enigma Logo" width="40" height="40" class="object-contain h-10 w-10"/>
                            <span class="text-2xl font-bold text-white">"Enigma"</span>
                        </div>
                        <p class="text-white text-sm leading-relaxed mb-6 max-w-xs">
                            "Enigma is a premium AI agency designed specifically for Artificial Intelligence (AI) solutions and automation."
                        </p>
                        <div class="w-1 h-1 bg-white rounded-full"></div>
                    </div>

                    <LinkColumn heading="Navigation" links=FOOTER_NAVIGATION/>
                    <LinkColumn heading="Legals" links=FOOTER_LEGAL/>

                    <div>
                        <h4 class="text-white font-bold mb-6 text-sm uppercase tracking-wider">"Social"</h4>
                        <ul class="space-y-3">
                            {FOOTER_SOCIAL.iter().map(|link| view! {
                                <li>
                                    <a href=link.href class="text-white hover:text-purple-200 transition-colors text-sm flex items-center gap-2" data-social="">
                                        <Icon name=link.icon class="w-4 h-4"/>
                                        {link.label}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-white/10 flex items-center justify-center gap-4">
                    <p class="text-white text-sm">"© 2025, Enigma."</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_columns_and_copyright() {
        let html = render(|| view! { <Footer/> });
        assert_eq!(
            html.matches("data-footer-link").count(),
            FOOTER_NAVIGATION.len() + FOOTER_LEGAL.len()
        );
        assert_eq!(html.matches("data-social").count(), FOOTER_SOCIAL.len());
        assert_in_order(&html, FOOTER_NAVIGATION.iter().map(|l| l.label));
        assert!(html.contains("© 2025, Enigma."));
    }
}
