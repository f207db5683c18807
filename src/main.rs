//! Party Planner Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dates;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match mount_point() {
        Some(root) => leptos::mount::mount_to(root, App).forget(),
        None => {
            log::warn!("[APP] #{} not found, mounting to <body>", config::MOUNT_ID);
            mount_to_body(App);
        }
    }
}

fn mount_point() -> Option<web_sys::HtmlElement> {
    document()
        .get_element_by_id(config::MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
