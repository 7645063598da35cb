use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unknown color group `{0}`")]
    UnknownColorGroup(String),

    #[error("color group `{0}` is a shade scale; a shade key is required")]
    MissingShade(String),

    #[error("invalid storage key `{0}`")]
    InvalidStorageKey(String),

    #[error("font weight must be an integer, got `{0}`")]
    InvalidFontWeight(String),
}
