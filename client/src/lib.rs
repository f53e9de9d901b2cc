//! # client
//!
//! Leptos + WASM frontend for the agri advisor. Renders the question form and
//! the result region, submits questions to `POST /ask` via `gloo-net`, and
//! shapes responses with the shared `advice` crate.
//!
//! Built with `hydrate` for the browser bundle and with `ssr` when linked into
//! the host server for server-side rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
