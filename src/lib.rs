//! # emotion-aware-client
//!
//! Leptos + WASM front-end for the Emotion Aware journaling application.
//! Users authenticate against the REST backend, write journal entries, and
//! see the emotion analysis the backend attaches to each entry.
//!
//! This crate contains pages, components, application state, the REST
//! client, and shared UI helpers. The backend (persistence and emotion
//! detection) lives in a separate service reached over `/api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
