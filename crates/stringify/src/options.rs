use crate::{error::StringifyError, policy::FieldAccess};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-facing options of a single stringify call, as written in an
/// options document or assembled from CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringifyOptions {
    pub allow: Vec<String>,
    pub deny: Vec<String>,
    pub identifier: Option<String>,
    pub parameterize: bool,
    pub require: Vec<String>,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            allow: Vec::new(),
            deny: Vec::new(),
            identifier: None,
            parameterize: true,
            require: Vec::new(),
        }
    }
}

impl StringifyOptions {
    /// Reads an options document. The document must be a JSON object.
    pub fn from_json(input: &str) -> Result<Self, StringifyError> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|err| StringifyError::Configuration(err.to_string()))?;
        if !value.is_object() {
            return Err(StringifyError::Configuration(
                "options must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|err| StringifyError::Configuration(err.to_string()))
    }

    pub fn allow<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn deny<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn require<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn parameterize(mut self, parameterize: bool) -> Self {
        self.parameterize = parameterize;
        self
    }

    /// Checks the options for contradictions before any filter is visited.
    pub fn validate(&self) -> Result<ValidatedOptions, StringifyError> {
        let access = match (self.allow.is_empty(), self.deny.is_empty()) {
            (true, true) => FieldAccess::Unrestricted,
            (false, true) => FieldAccess::Allow(self.allow.iter().cloned().collect()),
            (true, false) => FieldAccess::Deny(self.deny.iter().cloned().collect()),
            (false, false) => {
                return Err(StringifyError::Configuration(
                    "\"allow\" and \"deny\" cannot both be set".to_string(),
                ));
            }
        };

        let identifier = match &self.identifier {
            Some(identifier) if identifier.is_empty() => {
                return Err(StringifyError::Configuration(
                    "\"identifier\" must be a non-empty string".to_string(),
                ));
            }
            Some(identifier) => identifier.clone(),
            None => String::new(),
        };

        let validated = ValidatedOptions {
            access,
            identifier,
            parameterize: self.parameterize,
            require: self.require.clone(),
        };

        debug!(
            access = ?validated.access,
            identifier = %validated.identifier,
            parameterize = validated.parameterize,
            require = ?validated.require,
            "validated stringify options"
        );

        Ok(validated)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOptions {
    /// Which fields a filter may reference
    pub access: FieldAccess,
    /// Prefix of every rendered field expression, empty when unset
    pub identifier: String,
    /// Whether literals become placeholders rather than inline values
    pub parameterize: bool,
    /// Fields that must be referenced at least once, in reporting order
    pub require: Vec<String>,
}

impl Default for ValidatedOptions {
    fn default() -> Self {
        Self {
            access: FieldAccess::Unrestricted,
            identifier: String::new(),
            parameterize: true,
            require: Vec::new(),
        }
    }
}
