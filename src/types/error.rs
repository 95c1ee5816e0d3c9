//! Error types for keyword generation and catalog loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KwError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate locality slug: {0}")]
    DuplicateLocality(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KwResult<T> = Result<T, KwError>;
