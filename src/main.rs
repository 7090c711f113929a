mod chart;
mod components;
mod config;
mod error;
mod fetch;
mod format;
mod gateway;
mod models;
mod normalize;
mod refresh;
mod upload;
mod validator;

use components::app::{App, AppProps};
use config::Config;

fn main() {
    let config = Config::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(
        config.log_level.to_level().unwrap_or(log::Level::Error),
    ));
    log::info!("dashboard starting against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
