use crate::{commands::OptionArgs, error::CliError};
use std::io::Read;
use stringify::StringifyOptions;
use tracing::debug;

/// Reads a whole document from `path`, or from stdin when `path` is `-`.
pub fn read_document(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    debug!(path, "reading document");
    Ok(std::fs::read_to_string(path)?)
}

/// Options document first, then command-line flags.
pub fn load_options(args: &OptionArgs) -> Result<StringifyOptions, CliError> {
    let base = match &args.options {
        Some(path) => StringifyOptions::from_json(&read_document(path)?)?,
        None => StringifyOptions::default(),
    };
    Ok(args.apply(base))
}
