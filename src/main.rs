//! Todo Admin Frontend Entry Point

mod app;
mod components;
mod context;
mod list_controller;
mod record_form;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
