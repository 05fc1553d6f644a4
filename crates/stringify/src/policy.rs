//! Allow, deny and require enforcement for referenced fields.

use crate::error::StringifyError;
use std::collections::HashSet;
use tracing::debug;

/// Which fields a filter is permitted to reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldAccess {
    #[default]
    Unrestricted,
    Allow(HashSet<String>),
    Deny(HashSet<String>),
}

/// Per-call policy state: the configured access rule, the required fields,
/// and every field referenced so far.
#[derive(Debug, Clone, Default)]
pub struct FieldPolicy {
    access: FieldAccess,
    require: Vec<String>,
    referenced: HashSet<String>,
}

impl FieldPolicy {
    pub fn new(access: FieldAccess, require: Vec<String>) -> Self {
        Self {
            access,
            require,
            referenced: HashSet::new(),
        }
    }

    /// Checks a field against the allow or deny list.
    pub fn check(&self, field: &str) -> Result<(), StringifyError> {
        match &self.access {
            FieldAccess::Allow(allowed) if !allowed.contains(field) => {
                debug!(field, "field is not in the allow list");
                Err(StringifyError::NonallowedField(field.to_string()))
            }
            FieldAccess::Deny(denied) if denied.contains(field) => {
                debug!(field, "field is in the deny list");
                Err(StringifyError::DeniedField(field.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn record(&mut self, field: &str) {
        if !self.referenced.contains(field) {
            self.referenced.insert(field.to_string());
        }
    }

    /// Fails with the first required field, in configured order, that was
    /// never referenced.
    pub fn verify_required(&self) -> Result<(), StringifyError> {
        match self
            .require
            .iter()
            .find(|field| !self.referenced.contains(field.as_str()))
        {
            Some(missing) => {
                debug!(field = %missing, "required field missing from filter");
                Err(StringifyError::RequiredField(missing.clone()))
            }
            None => Ok(()),
        }
    }

    pub fn referenced(&self) -> &HashSet<String> {
        &self.referenced
    }
}
