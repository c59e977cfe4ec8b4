//! # dashboard-client
//!
//! Leptos + WASM frontend for the Texas energy dashboard.
//!
//! This crate holds the page, the presentational chart components, the
//! dashboard load state, and the dataset fetch helpers. It is compiled twice:
//! with `ssr` into the server binary, and with `hydrate` into the browser
//! bundle that performs the data load.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
