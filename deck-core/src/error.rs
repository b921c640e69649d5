use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::ConfigParse(err.to_string())
    }
}

impl From<DeckError> for String {
    fn from(err: DeckError) -> Self {
        err.to_string()
    }
}
