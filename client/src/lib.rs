//! # client
//!
//! Leptos + WASM frontend for the storefront admin dashboard.
//!
//! This crate contains pages, components, application state, and the typed
//! REST client for the business API. Notification coordination (toasts and
//! confirmations) comes from the `notices` crate and is exposed to pages
//! through the providers in `components`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
