use thiserror::Error as ThisError;

/// Error types for the document store
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
