use std::fmt;

/// Errors produced by calls against the UCRM REST API.
///
/// Every variant is recoverable at the per-client boundary: the batch runner
/// logs it and moves on to the next record.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Network-level failure reaching the API (connect, TLS, timeout).
    Transport(String),
    /// The API answered with a non-success HTTP status.
    Http { status: u16, body: String },
    /// The response body was not valid JSON or had an unexpected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Http { status, body } => write!(f, "HTTP error {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
