//! Tests for field references

use crate::common::{render, render_err, render_with, single, target};
use filter_syntax::{Clause, Literal, Operator, PathSegment, Target};
use stringify::{StringifyOptions, error::StringifyError};

#[test]
fn test_segments_are_quoted_and_dotted() {
    let filter = single(Clause::new(target("/foo/bar"), Operator::Eq, Literal::from(42)));
    assert_eq!(render(&filter).value, "`foo`.`bar` == $1");

    let filter = single(Clause::new(
        Literal::from(42),
        Operator::Eq,
        target("/foo/bar/baz"),
    ));
    assert_eq!(render(&filter).value, "$1 == `foo`.`bar`.`baz`");
}

#[test]
fn test_integer_segments_are_indices() {
    let filter = single(Clause::new(target("/foo/2"), Operator::Eq, Literal::from(42)));
    assert_eq!(render(&filter).value, "`foo`[2] == $1");

    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/foo/bar/3")));
    assert_eq!(render(&filter).value, "$1 == `foo`.`bar`[3]");
}

#[test]
fn test_identifier_prefix() {
    let options = StringifyOptions::default().identifier("`test`");

    let filter = single(Clause::new(target("/foo"), Operator::Eq, Literal::from(42)));
    assert_eq!(render_with(&filter, &options).value, "`test`.`foo` == $1");

    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/foo")));
    assert_eq!(render_with(&filter, &options).value, "$1 == `test`.`foo`");
}

#[test]
fn test_identifier_before_leading_index() {
    let options = StringifyOptions::default().identifier("t");
    let filter = single(Clause::new(
        Target::new("/0/name", vec![PathSegment::Index(0), "name".into()]),
        Operator::Eq,
        Literal::from("x"),
    ));
    assert_eq!(render_with(&filter, &options).value, "t[0].`name` == $1");
}

#[test]
fn test_backtick_in_segment_rejected() {
    let filter = single(Clause::new(target("/f`oo"), Operator::Eq, Literal::from(42)));
    assert!(matches!(
        render_err(&filter),
        StringifyError::InvalidTarget { target: ref pointer, ref path }
            if pointer == "/f`oo" && path == &vec![PathSegment::from("f`oo")]
    ));

    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/fo`o")));
    assert!(matches!(
        render_err(&filter),
        StringifyError::InvalidTarget { .. }
    ));
}

#[test]
fn test_single_quote_in_segment_rejected() {
    let filter = single(Clause::new(target("/f'oo"), Operator::Eq, Literal::from(42)));
    assert!(matches!(
        render_err(&filter),
        StringifyError::InvalidTarget { .. }
    ));

    let filter = single(Clause::new(Literal::from(42), Operator::Eq, target("/bar/fo'o")));
    assert!(matches!(
        render_err(&filter),
        StringifyError::InvalidTarget { target: ref pointer, ref path }
            if pointer == "/bar/fo'o"
                && path == &vec![PathSegment::from("bar"), PathSegment::from("fo'o")]
    ));
}
