//! Web UI for games-gallery
//!
//! A Yew-based front end for the student games gallery. The same module
//! serves both the games page and the students page; each view mounts only
//! when its host element is present.

pub mod app;
pub mod components;
pub mod index_view;
pub mod loader;
pub mod location;
pub mod students_view;

use games_gallery::SiteConfig;
use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    app::when_ready(|| wasm_bindgen_futures::spawn_local(app::start(SiteConfig::default())));
}
