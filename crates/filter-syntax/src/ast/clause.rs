use crate::ast::{literal::Literal, operator::Operator, target::Target};
use serde::Serialize;
use std::fmt;

/// Lower and upper bounds of a `between` / `nbetween` comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    pub lower: Literal,
    pub upper: Literal,
}

impl Range {
    pub fn new(lower: impl Into<Literal>, upper: impl Into<Literal>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }
}

/// Glob-style pattern used by `like` / `nlike`.
///
/// `*` matches any run of characters and `\` escapes the next character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pattern(pub String);

impl Pattern {
    pub fn new(value: impl Into<String>) -> Self {
        Pattern(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    Target(Target),
    Literal(Literal),
    Range(Range),
    Pattern(Pattern),
    List(Vec<Literal>),
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Target(_) => "target",
            Operand::Literal(_) => "literal",
            Operand::Range(_) => "range",
            Operand::Pattern(_) => "pattern",
            Operand::List(_) => "list",
        }
    }
}

impl From<Target> for Operand {
    fn from(value: Target) -> Self {
        Operand::Target(value)
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Operand::Literal(value)
    }
}

impl From<Range> for Operand {
    fn from(value: Range) -> Self {
        Operand::Range(value)
    }
}

impl From<Pattern> for Operand {
    fn from(value: Pattern) -> Self {
        Operand::Pattern(value)
    }
}

impl From<Vec<Literal>> for Operand {
    fn from(value: Vec<Literal>) -> Self {
        Operand::List(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Target(target) => write!(f, "{target}"),
            Operand::Literal(literal) => write!(f, "{literal}"),
            Operand::Range(range) => write!(f, "{},{}", range.lower, range.upper),
            Operand::Pattern(pattern) => write!(f, "\"{}\"", pattern.0),
            Operand::List(items) => {
                let items = items
                    .iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "[{items}]")
            }
        }
    }
}

/// A single comparison. A missing subject or object (but never both) turns
/// the clause into a null check on the remaining operand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    pub subject: Option<Operand>,
    pub operator: Operator,
    pub object: Option<Operand>,
}

impl Clause {
    pub fn new(subject: impl Into<Operand>, operator: Operator, object: impl Into<Operand>) -> Self {
        Self {
            subject: Some(subject.into()),
            operator,
            object: Some(object.into()),
        }
    }

    /// Compares `operand` against null, e.g. `/foo eq nil`.
    pub fn null_check(operand: impl Into<Operand>, operator: Operator) -> Self {
        Self {
            subject: Some(operand.into()),
            operator,
            object: None,
        }
    }

    pub fn is_null_check(&self) -> bool {
        self.subject.is_none() != self.object.is_none()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "{subject}")?,
            None => f.write_str("nil")?,
        }
        write!(f, " {} ", self.operator)?;
        match &self.object {
            Some(object) => write!(f, "{object}"),
            None => f.write_str("nil"),
        }
    }
}
