//! # crm-client
//!
//! Leptos + WASM browser client for the CRM backend.
//!
//! The crate is organised around one session provider (`state::provider`)
//! and one authorization gate (`components::protected_route`, decisions in
//! `util::gate`). Pages under `pages` talk to the REST API through
//! `net::api` using the bearer token the provider holds.
//!
//! Build with the `hydrate` feature for the browser bundle and `ssr` for the
//! server-rendered shell. Without `hydrate`, browser-only operations compile
//! to inert stubs so the pure logic can be unit tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_build_env();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    log::info!("crm-client starting against {}", config.api_base);
    leptos::mount::hydrate_body(app::App);
}
