//! Master Planner Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod pages;
mod router;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logger::init(config.log_level);
    log::info!("starting master planner");

    mount_to_body(move || view! { <App config=config /> });
}
