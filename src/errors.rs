use thiserror::Error;

// Define an enum covering the failures the I/O helpers and the shortener
// adapter can surface. Filesystem and parse failures stay distinguishable
// so callers can tell "file missing" from "file present but malformed".
#[derive(Debug, Error)]
pub enum HelperError {
    /// File could not be read (absent, unreadable, not UTF-8).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Input was read but is not valid JSON (or failed to serialize).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The shortening provider answered but produced no usable result.
    #[error("shortenUrl: service not available")]
    ServiceUnavailable,

    /// Transport-level failure talking to the shortening provider.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

// Type alias for results that use `HelperError` as the error type
pub type Result<T> = std::result::Result<T, HelperError>;
