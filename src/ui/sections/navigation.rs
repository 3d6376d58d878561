use leptos::prelude::*;

use crate::core::content::{Anchor, LOGO_PATH, NAV_LINKS, SITE_NAME};
use crate::core::interaction::NavState;
use crate::core::motion::{Ease, Position, Timeline, VisualState};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{RevealPlan, use_reveal_on_mount};

/// Fixed top bar: transparent over the hero, glass once the page scrolls
#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            let mut next = nav.get_untracked();
            if next.on_scroll(y) {
                nav.set(next);
            }
        });

        on_cleanup(move || handle_scroll.remove());
    }

    let mounted = use_reveal_on_mount();
    let slide_in = Timeline::new().add(
        VisualState {
            y: -100.0,
            ..VisualState::RESTING
        },
        0.6,
        Ease::Power3Out,
        Position::End,
    );
    let plan = RevealPlan::new(slide_in, mounted);

    let close_menu = move |_: leptos::ev::MouseEvent| nav.update(NavState::close_menu);

    view! {
        <nav
            class=move || {
                if nav.with(|state| state.scrolled) {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 glass border-b border-white/10 backdrop-blur-xl"
                } else {
                    "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
                }
            }
            style=plan.style(0)
        >
            <div class="container mx-auto px-6">
                <div class="flex items-center justify-between h-20">
                    <a href="/" class="flex items-center gap-3 hover:scale-105 transition-transform">
                        <img src=LOGO_PATH alt="Enigma Logo" width="60" height="60" class="object-contain h-15 w-15"/>
                        <span class="text-xl font-bold text-white">{SITE_NAME}</span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="text-gray-300 hover:text-white transition-colors text-sm font-medium"
                                data-nav-link=""
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                        <a href=Anchor::Contact.href() class="btn-light px-6 py-2 text-sm">"Book a call"</a>
                    </div>

                    <button
                        class="md:hidden w-10 h-10 flex items-center justify-center z-50 relative"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        aria-label="Toggle mobile menu"
                    >
                        {move || {
                            let name = if nav.with(|state| state.menu_open) { icons::X } else { icons::MENU };
                            view! { <Icon name=name class="w-6 h-6 text-white"/> }
                        }}
                    </button>
                </div>
            </div>

            {move || nav.with(|state| state.menu_open).then(|| view! {
                <div class="md:hidden glass border-t border-white/10 backdrop-blur-xl menu-drop-in">
                    <div class="container mx-auto px-6 py-6 space-y-4">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="block text-gray-300 hover:text-white transition-colors py-2"
                                on:click=close_menu
                            >
                                {link.label}
                            </a>
                        }).collect_view()}
                        <a href=Anchor::Contact.href() class="btn-light block w-full text-center px-6 py-2 mt-4" on:click=close_menu>
                            "Book a call"
                        </a>
                    </div>
                </div>
            })}
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::sections::testing::{assert_in_order, render};

    #[test]
    fn test_renders_every_link_once_in_order() {
        let html = render(|| view! { <Navigation/> });
        assert_eq!(html.matches("data-nav-link").count(), NAV_LINKS.len());
        assert_in_order(&html, NAV_LINKS.iter().map(|l| l.label));
        assert!(html.contains("bg-transparent"));
        // Mobile menu is closed on first paint
        assert!(!html.contains("menu-drop-in"));
    }

    #[test]
    fn test_call_button_targets_contact_section() {
        let html = render(|| view! { <Navigation/> });
        let target = format!("href=\"{}\"", Anchor::Contact.href());
        // The "Contact" nav link plus the call button
        assert_eq!(html.matches(&target).count(), 2);
        assert_in_order(&html, [target.as_str(), "Book a call"]);
    }
}
