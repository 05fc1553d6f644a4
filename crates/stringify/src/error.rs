use filter_syntax::{Operator, PathSegment, error::SyntaxError};
use thiserror::Error;

/// All errors raised while turning a filter into a query fragment.
///
/// Every error is terminal for the call: no partial output is produced.
#[derive(Debug, Error)]
pub enum StringifyError {
    /// The options were malformed or contradictory.
    #[error("Invalid options: {0}")]
    Configuration(String),

    /// A field outside the configured allow list.
    #[error("Non-allowed field encountered: {0}")]
    NonallowedField(String),

    /// A field on the configured deny list.
    #[error("Denied field encountered: {0}")]
    DeniedField(String),

    /// A required field never appeared in the filter.
    #[error("Missing required field: {0}")]
    RequiredField(String),

    /// A path segment contains a character that cannot be quoted safely.
    #[error("Invalid target encountered: {target}")]
    InvalidTarget {
        target: String,
        path: Vec<PathSegment>,
    },

    #[error("Unknown operator encountered: {0}")]
    UnknownOperator(String),

    /// The operator has no meaning when compared against null.
    #[error("Invalid operator used in IS NULL expression: {0}")]
    InvalidNullOperator(Operator),

    /// The filter tree is structurally invalid.
    #[error("Invalid filter, unable to stringify: {0}")]
    Stringify(String),
}

impl StringifyError {
    pub fn stringify(message: impl Into<String>) -> Self {
        StringifyError::Stringify(message.into())
    }

    /// Whether the filter was rejected by the allow, deny or require lists,
    /// as opposed to being structurally invalid.
    pub fn is_field_policy(&self) -> bool {
        matches!(
            self,
            StringifyError::NonallowedField(_)
                | StringifyError::DeniedField(_)
                | StringifyError::RequiredField(_)
        )
    }
}

impl From<SyntaxError> for StringifyError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::UnknownOperator(op) => StringifyError::UnknownOperator(op),
            other => StringifyError::Stringify(other.to_string()),
        }
    }
}
