use thiserror::Error;

/// Local upload failures. None of these reach the network.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please select a valid JSON file.")]
    UnsupportedFile,

    #[error("Could not read file: {0}")]
    Unreadable(String),

    #[error("Invalid JSON file: {0}")]
    Malformed(String),

    #[error("The file must contain a JSON array of transactions.")]
    NotAnArray,

    #[error("Transaction at index {index} is not an object.")]
    NotAnObject { index: usize },

    #[error("Transaction at index {index} has an invalid `{field}` (expected {expected}).")]
    InvalidField {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Decode(String),
}

impl GatewayError {
    /// Network error carrying `message`, or `fallback` when the transport gave
    /// nothing usable.
    pub fn network(message: impl Into<String>, fallback: &str) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            GatewayError::Network(fallback.to_string())
        } else {
            GatewayError::Network(message)
        }
    }
}

/// Anything that can end an upload attempt.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Rejected(#[from] GatewayError),
}
