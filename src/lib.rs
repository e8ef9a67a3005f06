//! # food-pitch
//!
//! Leptos + WASM front-end for a food vendor marketplace directory.
//! Visitors browse and filter vendors, view vendor profiles, and chat with a
//! vendor over a hosted realtime channel. Identity comes from a hosted
//! provider; profiles and chat transcripts live in browser local storage.
//!
//! This crate contains pages, components, application state, provider
//! adapters, and the `food-pitch` host binary (feature `ssr`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
