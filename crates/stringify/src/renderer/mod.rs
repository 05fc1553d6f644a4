//! Defines the rendering trait and the per-call context that turns a filter
//! tree into a query fragment.

use crate::{
    Stringified, dialect::Dialect, error::StringifyError, options::ValidatedOptions,
    policy::FieldPolicy,
};
use filter_syntax::Literal;
use serde_json::Number;

pub mod clause;
pub mod filter;
pub mod operand;
pub mod pattern;

pub type RenderResult = Result<(), StringifyError>;

/// A trait for any filter node that can be rendered into the output fragment.
///
/// Rendering stops at the first failure; whatever was written to the
/// renderer so far is discarded with it.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> RenderResult;
}

/// State of one rendering pass.
///
/// It accumulates the fragment and the parameters, tracks which fields the
/// filter referenced, and provides the dialect for quoting and placeholders.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Literal>,
    pub dialect: &'a dyn Dialect,
    policy: FieldPolicy,
    identifier: String,
    parameterize: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, options: ValidatedOptions) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            policy: FieldPolicy::new(options.access, options.require),
            identifier: options.identifier,
            parameterize: options.parameterize,
        }
    }

    pub fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    /// Consumes the renderer once the whole tree is rendered, checking that
    /// every required field was referenced.
    pub fn finish(self) -> Result<Stringified, StringifyError> {
        self.policy.verify_required()?;
        Ok(Stringified {
            value: self.sql,
            params: self.params,
        })
    }

    pub fn add_param(&mut self, value: Literal) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    /// Writes a literal as a placeholder, or inline when parameterization is
    /// off. Inline strings are single-quoted as-is.
    pub fn push_literal(&mut self, literal: &Literal) {
        if self.parameterize {
            self.add_param(literal.clone());
            return;
        }

        match literal {
            Literal::String(value) => self.push_quoted(value),
            Literal::Number(value) => self.sql.push_str(&format_number(value)),
            Literal::Boolean(value) => self.sql.push_str(if *value { "true" } else { "false" }),
        }
    }

    fn push_quoted(&mut self, value: &str) {
        self.sql.push('\'');
        self.sql.push_str(value);
        self.sql.push('\'');
    }
}

/// Canonical text of a number: whole floats drop their trailing `.0`.
fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => value.to_string(),
        _ => number.to_string(),
    }
}
