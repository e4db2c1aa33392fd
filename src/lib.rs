//! # activity-client
//!
//! Leptos + WASM browser client for the activity-signup service.
//!
//! The client keeps an explicit copy of the activity catalog, renders it as
//! a pure function of that state, and talks to the REST API for catalog
//! loads, signups, and participant removals. Browser-only code is gated
//! behind the `csr` feature so the state and wire layers build and test
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

/// WASM start entry: install logging, then mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    util::logging::init();
    leptos::mount::mount_to_body(App);
}
