//! Error types for the riskgate system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API error: {message}")]
    Api { message: String, status: Option<u16> },
}

impl Error {
    /// True for construction-time failures that must surface to the
    /// operator. Everything else is a per-call transport failure that
    /// callers may degrade on (see the gating engine's fail-open path).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
