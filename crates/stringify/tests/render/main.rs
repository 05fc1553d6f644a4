//! Rendering tests
//!
//! These tests verify that filter trees are rendered into the expected
//! fragment and parameter list, covering every operator, operand shape and
//! grouping rule.

mod clauses;
mod literals;
mod targets;
