//! # outreach
//!
//! Leptos + WASM dashboard for managing outreach campaigns and leads.
//!
//! This crate contains pages, components, the campaign/lead/sidebar stores,
//! payload types, and mock data generators that stand in for a backend until
//! one exists. The browser entry point is compiled with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
