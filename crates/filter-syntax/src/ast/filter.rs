use crate::ast::clause::Clause;
use serde::Serialize;
use std::fmt;

/// Keyword joining a statement to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunctive {
    /// Only meaningful on the first statement of a group.
    #[default]
    None,
    And,
    Or,
}

impl fmt::Display for Conjunctive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunctive::None => write!(f, "none"),
            Conjunctive::And => write!(f, "and"),
            Conjunctive::Or => write!(f, "or"),
        }
    }
}

/// Either a nested, parenthesized group or a single comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Term {
    Filter(FilterExpression),
    Clause(Clause),
}

impl From<Clause> for Term {
    fn from(value: Clause) -> Self {
        Term::Clause(value)
    }
}

impl From<FilterExpression> for Term {
    fn from(value: FilterExpression) -> Self {
        Term::Filter(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub conjunctive: Conjunctive,
    pub value: Term,
}

impl Statement {
    pub fn new(conjunctive: Conjunctive, value: impl Into<Term>) -> Self {
        Self {
            conjunctive,
            value: value.into(),
        }
    }
}

/// Ordered list of statements, evaluated left to right.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterExpression {
    pub statements: Vec<Statement>,
}

impl FilterExpression {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", statement.conjunctive)?;
            }
            match &statement.value {
                Term::Filter(group) => write!(f, "({group})")?,
                Term::Clause(clause) => write!(f, "{clause}")?,
            }
        }
        Ok(())
    }
}
