//! Routing backend error types.

/// Errors that can occur when talking to the routing backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Backend could not be reached for a non-HTTP reason
    #[error("backend unavailable: {message}")]
    Unavailable { message: String },
}
