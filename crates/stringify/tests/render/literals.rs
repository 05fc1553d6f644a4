//! Tests for parameter extraction and inline literals

use crate::common::{render, render_inline, single, target};
use filter_syntax::{Clause, Literal, Operator, Range, builder::FilterBuilder};

#[test]
fn test_object_literal_is_parameterized() {
    let filter = single(Clause::new(target("/foo"), Operator::Eq, Literal::from(42)));
    let result = render(&filter);

    assert_eq!(result.value, "`foo` == $1");
    assert_eq!(result.params, vec![Literal::from(42)]);
}

#[test]
fn test_inline_number() {
    let filter = single(Clause::new(target("/foo"), Operator::Eq, Literal::from(42)));
    assert_eq!(render_inline(&filter), "`foo` == 42");

    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/foo")));
    assert_eq!(render_inline(&filter), "42 == `foo`");
}

#[test]
fn test_inline_string_is_single_quoted() {
    let filter = single(Clause::new(target("/foo"), Operator::Eq, Literal::from("bar")));
    assert_eq!(render_inline(&filter), "`foo` == 'bar'");

    let filter = single(Clause::new(Literal::from("bar"), Operator::Eq, target("/foo")));
    assert_eq!(render_inline(&filter), "'bar' == `foo`");
}

#[test]
fn test_inline_string_quotes_are_not_escaped() {
    let filter = single(Clause::new(target("/foo"), Operator::Eq, Literal::from("it's")));
    assert_eq!(render_inline(&filter), "`foo` == 'it's'");
}

#[test]
fn test_inline_boolean_and_float() {
    let filter = single(Clause::new(target("/foo"), Operator::Neq, Literal::from(false)));
    assert_eq!(render_inline(&filter), "`foo` != false");

    let filter = single(Clause::new(
        target("/foo"),
        Operator::Lt,
        Literal::float(0.5).unwrap(),
    ));
    assert_eq!(render_inline(&filter), "`foo` < 0.5");
}

#[test]
fn test_params_follow_depth_first_order() {
    let group = FilterBuilder::new(Clause::new(target("/b"), Operator::Between, Range::new("x", "y")))
        .or(Clause::new(
            target("/c"),
            Operator::In,
            vec![Literal::from(true), Literal::from(7)],
        ))
        .build();
    let filter = FilterBuilder::new(Clause::new(Literal::from(1), Operator::Lt, target("/a")))
        .and(group)
        .and(Clause::new(target("/d"), Operator::Eq, Literal::from("z")))
        .build();

    let result = render(&filter);
    assert_eq!(
        result.value,
        "$1 < `a` AND (`b` BETWEEN $2 AND $3 OR `c` IN [$4,$5]) AND `d` == $6"
    );
    assert_eq!(
        result.params,
        vec![
            Literal::from(1),
            Literal::from("x"),
            Literal::from("y"),
            Literal::from(true),
            Literal::from(7),
            Literal::from("z"),
        ]
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let filter = FilterBuilder::new(Clause::new(target("/foo"), Operator::Gt, Literal::from(1)))
        .or(Clause::new(target("/bar"), Operator::Eq, Literal::from("x")))
        .build();

    assert_eq!(render(&filter), render(&filter));
}
