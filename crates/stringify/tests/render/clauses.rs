//! Tests for the operator table and operand placement

use crate::common::{render, single, target};
use filter_syntax::{Clause, Literal, Operator, Pattern, Range};

#[test]
fn test_comparison_operators() {
    let cases = [
        (Operator::Eq, "`foo` == $1"),
        (Operator::Neq, "`foo` != $1"),
        (Operator::Gt, "`foo` > $1"),
        (Operator::Gte, "`foo` >= $1"),
        (Operator::Lt, "`foo` < $1"),
        (Operator::Lte, "`foo` <= $1"),
    ];

    for (operator, expected) in cases {
        let filter = single(Clause::new(target("/foo"), operator, Literal::from(42)));
        let result = render(&filter);
        assert_eq!(result.value, expected);
        assert_eq!(result.params, vec![Literal::from(42)]);
    }
}

#[test]
fn test_range_operators() {
    let filter = single(Clause::new(target("/foo"), Operator::Between, Range::new(0, 42)));
    assert_eq!(render(&filter).value, "`foo` BETWEEN $1 AND $2");

    let filter = single(Clause::new(target("/foo"), Operator::Nbetween, Range::new(0, 42)));
    assert_eq!(render(&filter).value, "`foo` NOT BETWEEN $1 AND $2");
}

#[test]
fn test_list_operators() {
    let items = vec![Literal::from(0), Literal::from(42)];

    let filter = single(Clause::new(target("/foo"), Operator::In, items.clone()));
    assert_eq!(render(&filter).value, "`foo` IN [$1,$2]");

    let filter = single(Clause::new(target("/foo"), Operator::Nin, items));
    assert_eq!(render(&filter).value, "`foo` NOT IN [$1,$2]");
}

#[test]
fn test_pattern_operators() {
    let filter = single(Clause::new(target("/foo"), Operator::Like, Pattern::new("test")));
    assert_eq!(render(&filter).value, "`foo` LIKE $1");

    let filter = single(Clause::new(target("/foo"), Operator::Nlike, Pattern::new("test")));
    assert_eq!(render(&filter).value, "`foo` NOT LIKE $1");
}

#[test]
fn test_literal_subject() {
    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/foo")));
    let result = render(&filter);

    assert_eq!(result.value, "$1 == `foo`");
    assert_eq!(result.params, vec![Literal::from(42)]);
}

#[test]
fn test_target_on_both_sides() {
    let filter = single(Clause::new(target("/foo"), Operator::Eq, target("/bar")));
    let result = render(&filter);

    assert_eq!(result.value, "`foo` == `bar`");
    assert!(result.params.is_empty());
}
