//! Kanban Board Frontend Entry Point

mod app;
mod auth;
mod components;
mod config;
mod context;
mod i18n;
mod logging;
mod storage;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    logging::init(config.max_level());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring malformed config; using defaults");
    }

    tracing::info!("starting kanban board");
    mount_to_body(move || view! { <App config=config.clone() /> });
}
