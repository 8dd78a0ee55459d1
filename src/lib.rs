//! # blog-console
//!
//! Leptos + WASM client for the blog admin console and the blog theme.
//!
//! The admin side routes on the URL fragment, loads static HTML fragments
//! into the page, and talks to the JSON admin API with the session token.
//! The theme side only mounts two small widgets (scroll-to-top and the
//! responsive menu toggle).
//!
//! Browser glue is gated behind the `csr` feature. Everything else runs on
//! the host so it can be unit tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

pub use config::ConsoleOptions;
pub use console::Console;
pub use error::ConsoleError;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the admin console into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_console() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

/// Mount the blog theme widgets.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_theme() {
    init_browser_logging();
    components::theme::mount();
}

#[cfg(feature = "csr")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    // A second mount on the same page finds the logger already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
}
