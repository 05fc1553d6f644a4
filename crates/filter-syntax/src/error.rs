use thiserror::Error;

/// Errors raised while building or decoding a filter tree.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An operator name outside the known set.
    #[error("Unknown operator encountered: {0}")]
    UnknownOperator(String),

    /// A target pointer that is not a valid JSON pointer.
    #[error("Invalid JSON pointer: {0:?}")]
    InvalidPointer(String),

    /// A node of the document does not have the expected shape.
    #[error("Malformed filter at {location}: {message}")]
    Malformed { location: String, message: String },
}

impl SyntaxError {
    pub fn malformed(location: &str, message: impl Into<String>) -> Self {
        SyntaxError::Malformed {
            location: location.to_string(),
            message: message.into(),
        }
    }
}
