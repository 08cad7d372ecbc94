//! # client
//!
//! Leptos + WASM frontend for placing logos into video scenes.
//!
//! This crate contains the pages, components, session state and REST
//! helpers. It is compiled with `hydrate` for the browser and linked into
//! the `logoplace` host with `ssr` for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
