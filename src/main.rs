//! QuickBite Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod guard;
mod handlers;
mod models;
mod notify;
mod session;
mod store;
mod tasks;
mod validation;
mod view;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ClientConfig::from_env();
    let _ = console_logger::init(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
