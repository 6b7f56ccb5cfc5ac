// Error types for ghorg.
// Separates fetch failures from lookups into the returned JSON.

use thiserror::Error;

/// Failure of a JSON fetch, surfaced unchanged to the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub API error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A key could not be resolved, either absent or applied to a non-object.
    /// Holds only that key.
    #[error("key not found: '{0}'")]
    KeyNotFound(String),

    /// A resolved value has the wrong JSON type, e.g. a numeric `repos_url`.
    #[error("expected {expected} at '{key}'")]
    UnexpectedType { key: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
