//! Sticky Todo Frontend Entry Point

mod api;
mod app;
mod auth;
mod board;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod presentation;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    log::info!("[APP] Starting");
    mount_to_body(App);
}
