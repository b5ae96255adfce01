//! # mugiwara-ui
//!
//! Leptos + WASM front-end for the One Piece character classifier.
//! Consolidates the previous near-duplicate desktop and mobile JS variants
//! into one parameterized implementation: drag-and-drop upload, prediction
//! via the external `/predict` endpoint, result rendering with a probability
//! chart, a static character gallery, and toast notifications.
//!
//! The model and its serving endpoint are external collaborators; this crate
//! contains no inference or preprocessing logic.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
