//! # onboard-client
//!
//! Leptos + WASM onboarding frontend. The signup form keeps its in-progress
//! values in a best-effort draft store (`util::form_storage`) backed by
//! browser `localStorage`, so a reload or an accidental close does not lose
//! what the user typed.

pub mod app;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
