use swipedeck_core::{DeckConfig, DeckError};

/// localStorage key holding an optional JSON override of [`DeckConfig`].
pub const CONFIG_KEY: &str = "swipedeck.config";

fn stored_config() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(CONFIG_KEY)
        .ok()
        .flatten()
}

/// Load the deck config. A broken override falls back to the defaults; the
/// error is handed back so it can be logged once logging is up.
pub fn load() -> (DeckConfig, Option<DeckError>) {
    match stored_config() {
        Some(json) => match DeckConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (DeckConfig::default(), Some(e)),
        },
        None => (DeckConfig::default(), None),
    }
}
