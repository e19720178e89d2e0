#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
mod components;
mod pages;
pub mod styles;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
///
/// Installs the panic hook and console logger, then mounts the site.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
