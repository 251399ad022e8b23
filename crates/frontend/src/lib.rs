//! Yaamod - Yew WASM front-end
//!
//! Synagogue roster administration: login, registration, the synagogue
//! list and the member table.

mod api;
mod app;
mod components;
mod config;
mod hooks;
mod pages;

pub use api::HttpClient;
pub use app::{App, Route};
pub use hooks::use_member_list;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!(
        "Starting yaamod front-end (api: {})",
        config::api_config().base_url()
    );

    yew::Renderer::<App>::new().render();
}
