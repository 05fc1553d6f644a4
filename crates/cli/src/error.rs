use filter_syntax::error::SyntaxError;
use stringify::error::StringifyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode the filter document: {0}")]
    Decode(#[from] SyntaxError),

    #[error("Failed to stringify the filter: {0}")]
    Stringify(#[from] StringifyError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
