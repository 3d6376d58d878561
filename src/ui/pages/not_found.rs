//! 404 page for any path other than the landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::{LOGO_PATH, SITE_NAME};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=format!("Page Not Found | {SITE_NAME}")/>

        <div class="min-h-screen bg-black flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <img src=LOGO_PATH alt="Enigma Logo" width="64" height="64" class="mx-auto mb-6 h-16 w-16 object-contain"/>

                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-light inline-flex items-center gap-2 px-6 py-3">
                    "Back to home"
                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5"/>
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">"© 2025, Enigma."</p>
            </div>
        </div>
    }
}
