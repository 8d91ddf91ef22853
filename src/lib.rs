/// Tab Sorter - Chrome Extension that groups open tabs by category
/// Built with Rust + WASM + Yew

pub mod classifier;
pub mod config;
pub mod controller;
pub mod domain;
pub mod heuristics;
pub mod operations;
pub mod reconcile;
pub mod tab_data;
pub mod tab_source;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Category key ("development", "media", ...) for a URL, for JavaScript callers
#[wasm_bindgen]
pub fn classify_url(url: &str) -> String {
    classifier::Classifier::default().classify_url(url).key().to_string()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
