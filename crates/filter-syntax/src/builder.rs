use crate::ast::filter::{Conjunctive, FilterExpression, Statement, Term};

/// Fluent construction of a [`FilterExpression`].
///
/// ```
/// use filter_syntax::{builder::FilterBuilder, Clause, Literal, Operator, Target};
///
/// let foo = Target::parse("/foo").unwrap();
/// let bar = Target::parse("/bar").unwrap();
///
/// let filter = FilterBuilder::new(Clause::new(foo, Operator::Gt, Literal::from(1)))
///     .or(Clause::null_check(bar, Operator::Eq))
///     .build();
///
/// assert_eq!(filter.to_string(), "/foo gt 1 or /bar eq nil");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    ast: FilterExpression,
}

impl FilterBuilder {
    pub fn new(first: impl Into<Term>) -> Self {
        Self {
            ast: FilterExpression::new(vec![Statement::new(Conjunctive::None, first)]),
        }
    }

    pub fn and(self, term: impl Into<Term>) -> Self {
        self.push(Conjunctive::And, term)
    }

    pub fn or(self, term: impl Into<Term>) -> Self {
        self.push(Conjunctive::Or, term)
    }

    pub fn push(mut self, conjunctive: Conjunctive, term: impl Into<Term>) -> Self {
        self.ast.statements.push(Statement::new(conjunctive, term));
        self
    }

    pub fn build(self) -> FilterExpression {
        self.ast
    }
}
