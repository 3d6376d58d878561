use crate::core::interaction::ModalEvent;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Detail overlay with a dimmed backdrop.
///
/// Mount it only while something is selected. Every interaction is reported
/// as a [`ModalEvent`]; clicks inside the dialog are stopped before they
/// reach the backdrop.
#[component]
pub fn DetailModal(
    /// Dialog title
    title: String,
    /// Receives backdrop, body, close-button and Escape events
    on_event: Callback<ModalEvent>,
    /// Dialog content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                on_event.run(ModalEvent::EscapeKey);
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm modal-fade-in"
            role="dialog"
            aria-modal="true"
            data-modal-backdrop=""
            on:click=move |_| on_event.run(ModalEvent::BackdropClick)
        >
            <div
                class=format!("relative w-full {} glass-card rounded-3xl p-8 md:p-12 modal-pop-in", max_width)
                data-modal-body=""
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_event.run(ModalEvent::BodyClick);
                }
            >
                <button
                    class="absolute top-6 right-6 text-gray-400 hover:text-white transition-colors"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_event.run(ModalEvent::CloseButton);
                    }
                    title="Close"
                    aria-label="Close modal"
                >
                    <Icon name=icons::X class="w-6 h-6"/>
                </button>

                <h3 class="text-3xl md:text-4xl font-bold text-white mb-6 pr-10">{title}</h3>

                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_modal_renders_title_body_and_close_control() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <DetailModal title="Details".to_string() on_event=Callback::new(|_| {})>
                    <p>"inner"</p>
                </DetailModal>
            }
            .to_html()
        });

        assert!(html.contains("Details"));
        assert!(html.contains("inner"));
        assert!(html.contains("data-modal-backdrop"));
        assert!(html.contains("data-modal-body"));
        assert!(html.contains("Close modal"));
    }
}
