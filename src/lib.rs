//! # conversor-client
//!
//! Leptos + WASM frontend for the File Conversor desktop application.
//! The crate runs inside the desktop shell's embedded webview and talks to
//! the local HTTP backend for conversion jobs and to the pywebview host
//! bridge for native window chrome.
//!
//! This crate contains pages, components, application state, network types,
//! and the job-status poller that tracks long-running conversions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
