//! Error types for the scoreline service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScorelineError>;

#[derive(Error, Debug)]
pub enum ScorelineError {
    /// Lifecycle misuse: a fetch or cache operation ran before the handle
    /// was opened.
    #[error("client not initialized: open the connection before use")]
    ClientNotInitialized,

    #[error("upstream unreachable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("upstream returned status {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("cache unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("player not found")]
    PlayerNotFound,

    #[error("malformed cache entry for key {key}: {message}")]
    MalformedCacheEntry { key: String, message: String },

    #[error("unexpected provider payload: missing {field}")]
    MalformedPayload { field: String },

    #[error("invalid value for {name}: {message}")]
    InvalidConfig { name: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests;
