//! Renders filter expressions into N1QL-style `WHERE` fragments.
//!
//! Literals are extracted into an ordered parameter list by default, with
//! `$1`, `$2`, ... placeholders in the fragment. Field references are
//! checked against the configured allow, deny and require lists as they are
//! rendered.
//!
//! ```
//! use filter_syntax::{Clause, Literal, Operator, Target, builder::FilterBuilder};
//! use stringify::{StringifyOptions, stringify};
//!
//! let filter = FilterBuilder::new(Clause::new(
//!     Target::parse("/foo").unwrap(),
//!     Operator::Eq,
//!     Literal::from(42),
//! ))
//! .build();
//!
//! let result = stringify(&filter, &StringifyOptions::default()).unwrap();
//! assert_eq!(result.value, "`foo` == $1");
//! assert_eq!(result.params, vec![Literal::from(42)]);
//! ```

use crate::{
    dialect::{Dialect, N1ql},
    error::StringifyError,
    renderer::{Render, Renderer},
};
use filter_syntax::{FilterExpression, Literal};
use serde::Serialize;
use tracing::debug;

pub mod dialect;
pub mod error;
pub mod options;
pub mod policy;
pub mod renderer;

pub use options::{StringifyOptions, ValidatedOptions};

/// The rendered fragment and the values bound to its placeholders.
///
/// `params[i]` is the value of placeholder `$<i+1>` in `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stringified {
    pub value: String,
    pub params: Vec<Literal>,
}

/// Engine instance for a single filter.
pub struct Stringifier<'a> {
    options: ValidatedOptions,
    dialect: &'a dyn Dialect,
}

impl Stringifier<'static> {
    pub fn new(options: ValidatedOptions) -> Self {
        Self {
            options,
            dialect: &N1ql,
        }
    }
}

impl<'a> Stringifier<'a> {
    pub fn with_dialect<'b>(self, dialect: &'b dyn Dialect) -> Stringifier<'b> {
        Stringifier {
            options: self.options,
            dialect,
        }
    }

    pub fn stringify(self, filter: &FilterExpression) -> Result<Stringified, StringifyError> {
        debug!(filter = %filter, dialect = %self.dialect.name(), "stringifying filter");

        let mut renderer = Renderer::new(self.dialect, self.options);
        filter.render(&mut renderer)?;
        let result = renderer.finish()?;

        debug!(params = result.params.len(), "filter stringified");
        Ok(result)
    }
}

pub fn stringify(
    filter: &FilterExpression,
    options: &StringifyOptions,
) -> Result<Stringified, StringifyError> {
    let options = options.validate()?;
    Stringifier::new(options).stringify(filter)
}

/// Decodes a filter from its JSON wire form and renders it.
///
/// The options are validated before the document is decoded.
pub fn stringify_json(
    input: &str,
    options: &StringifyOptions,
) -> Result<Stringified, StringifyError> {
    let options = options.validate()?;
    let filter = filter_syntax::decode::from_str(input)?;
    Stringifier::new(options).stringify(&filter)
}
