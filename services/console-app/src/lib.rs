//! CloudForge platform status console - Leptos frontend
//!
//! Probes backend service health on a fixed cadence and shows the system
//! user roster when it is available. All state lives in the page session.

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod model;
pub mod prober;
pub mod roster;

pub use app::App;
pub use error::{ConsoleError, Result};

/// Browser entry point for the WASM bundle
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
