//! # folio
//!
//! Leptos + WASM client for a personal website: a validated contact form
//! with async submission, a persisted dark/slate theme, expandable content
//! cards, a scroll-spy mini-map, and smooth same-page anchors.
//!
//! Browser glue is gated behind the `csr` feature. Without it the crate
//! builds natively and the state models are exercised by plain unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging, read the site config, mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    // Start at the default level so config problems are reported, then
    // narrow to whatever the config asks for.
    let _ = console_log::init_with_level(log::Level::Trace);
    log::set_max_level(log::LevelFilter::Warn);

    let config = config::SiteConfig::load();
    log::set_max_level(config.level_filter().unwrap_or(log::LevelFilter::Warn));

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
