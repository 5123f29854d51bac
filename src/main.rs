//! Coach Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod list_handle;
mod logging;
mod models;
mod pages;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    logging::init(config.log_level);
    log::info!("[App] starting against {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
