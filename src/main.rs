mod app;
mod components;
mod config;
mod logging;
mod session;

use leptos::prelude::*;

use app::App;

fn main() {
    let (config, config_error) = config::load();
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!("Ignoring stored config '{}': {}", config::CONFIG_KEY, e);
    }
    tracing::info!("Starting SwipeDeck with {} cards per deal", config.deck_size);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
