//! Keystone HQ - flexible office space website
//!
//! A client-side rendered Leptos site compiled to WebAssembly, with an
//! optional axum host for the built bundle.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "server")]
pub mod server;
pub mod ui;

/// Mount the site into `<body>`
#[cfg(feature = "csr")]
pub fn mount() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("mounting {}", crate::core::SITE_NAME);
    leptos::mount::mount_to_body(App);
}
