//! Data model for logical filter expressions.
//!
//! A filter is an ordered list of statements joined by `and`/`or`, where
//! each statement is either a comparison clause or a nested group. Trees are
//! built in code through [`builder::FilterBuilder`] or decoded from their
//! JSON wire form through [`decode`].

pub mod ast;
pub mod builder;
pub mod decode;
pub mod error;

pub use ast::{
    clause::{Clause, Operand, Pattern, Range},
    filter::{Conjunctive, FilterExpression, Statement, Term},
    literal::Literal,
    operator::Operator,
    target::{PathSegment, Target},
};
