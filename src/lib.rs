//! Enigma Studio AI - marketing site
//!
//! A single scroll-animated landing page for an AI automation agency,
//! rendered on the server with Leptos and hydrated in the browser.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
