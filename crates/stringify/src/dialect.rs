//! Defines the `Dialect` trait for target query-language syntax.

pub trait Dialect: Send + Sync {
    /// Wraps one path segment of a field reference in the dialect's
    /// identifier quotes.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the parameter at `index` (0-based) in
    /// the parameter list.
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "N1QL").
    fn name(&self) -> String;
}

/// N1QL: backtick-quoted identifiers and `$1`, `$2`, ... placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct N1ql;

impl Dialect for N1ql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{ident}`")
    }

    fn get_placeholder(&self, index: usize) -> String {
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "N1QL".into()
    }
}
