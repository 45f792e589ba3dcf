//! # site
//!
//! Leptos + WASM frontend for the public contact and FAQ pages.
//!
//! The crate holds the pure rules (validation, sanitizing, FAQ normalization
//! and filtering) as plain modules, the browser bridges behind the `hydrate`
//! feature, and the two routed pages. The `contacto` host server renders it
//! with the `ssr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
