#![allow(non_snake_case)]

pub mod components;
pub mod services;

mod app;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    web_sys::console::log_1(
        &format!("Starting Timeless Trips v{}", timeless_trips::VERSION).into(),
    );

    // Remove loading spinner
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(loader) = document.get_element_by_id("app-loading") {
            loader.remove();
        }
    }

    leptos::mount::mount_to_body(App);
}
