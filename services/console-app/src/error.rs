//! Error types for the console frontend

/// Errors that can occur while talking to the platform APIs
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
