//! # laporin
//!
//! Leptos + WASM front end for the Laporin public-complaint service.
//!
//! This crate holds the authenticated API-access layer (token store, HTTP
//! pipeline, auth and domain services, route guard) together with the thin
//! page shell that drives it. Everything below `net`, `state` and `util` is
//! framework-light and tested off-browser; `app`, `pages` and `components`
//! render it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
