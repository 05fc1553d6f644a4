use crate::error::CliError;
use stringify::{
    Stringified,
    dialect::{Dialect, N1ql},
};

/// The fragment on the first line, then `<placeholder> <json value>` per
/// parameter.
pub fn format_text(result: &Stringified) -> Result<String, CliError> {
    let mut lines = vec![result.value.clone()];
    for (i, param) in result.params.iter().enumerate() {
        let value = serde_json::to_string(param)?;
        lines.push(format!("{} {value}", N1ql.get_placeholder(i)));
    }
    Ok(lines.join("\n"))
}

pub fn format_json(result: &Stringified) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(result)?)
}
