//! Tests for documents rejected by the decoder

use filter_syntax::{decode::from_value, error::SyntaxError};
use serde_json::{Value, json};

fn clause_doc(clause: Value) -> Value {
    json!({ "statements": [{ "value": clause }] })
}

fn assert_malformed_at(doc: Value, expected: &str) {
    match from_value(&doc) {
        Err(SyntaxError::Malformed { location, .. }) => assert_eq!(location, expected),
        other => panic!("expected a malformed error at {expected}, got {other:?}"),
    }
}

#[test]
fn test_invalid_json() {
    let result = filter_syntax::decode::from_str("{ not json");
    assert!(matches!(result, Err(SyntaxError::Json(_))));
}

#[test]
fn test_root_must_be_filter() {
    assert_malformed_at(json!(42), "$");
    assert_malformed_at(json!({ "value": {} }), "$");
}

#[test]
fn test_statement_value_not_filter_or_clause() {
    assert_malformed_at(
        json!({ "statements": [{ "value": 42 }] }),
        "$.statements[0].value",
    );
}

#[test]
fn test_unknown_conjunctive() {
    let doc = json!({ "statements": [{ "conjunctive": "xor", "value": {
        "subject": { "target": "/foo" }, "operator": "eq", "object": { "literal": 1 }
    } }] });
    assert_malformed_at(doc, "$.statements[0].conjunctive");
}

#[test]
fn test_both_operands_absent() {
    assert_malformed_at(
        clause_doc(json!({ "subject": null, "operator": "eq", "object": null })),
        "$.statements[0].value",
    );
}

#[test]
fn test_operand_with_several_kinds() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": "/foo", "literal": 1 },
            "operator": "eq",
            "object": { "literal": 1 }
        })),
        "$.statements[0].value.subject",
    );
}

#[test]
fn test_path_segment_not_integer_or_string() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": { "field": "foo", "path": [{}] } },
            "operator": "eq",
            "object": { "literal": 1 }
        })),
        "$.statements[0].value.subject.target.path[0]",
    );
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": { "field": "foo", "path": ["foo", -1] } },
            "operator": "eq",
            "object": { "literal": 1 }
        })),
        "$.statements[0].value.subject.target.path[1]",
    );
}

#[test]
fn test_non_scalar_literal() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "literal": [] }, "operator": "eq", "object": { "target": "/foo" }
        })),
        "$.statements[0].value.subject.literal",
    );
}

#[test]
fn test_malformed_range_bounds() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": "/foo" },
            "operator": "between",
            "object": { "range": { "lower": {}, "upper": 42 } }
        })),
        "$.statements[0].value.object.range.lower",
    );
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": "/foo" },
            "operator": "between",
            "object": { "range": "oops" }
        })),
        "$.statements[0].value.object.range",
    );
}

#[test]
fn test_non_literal_list_element() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": "/foo" },
            "operator": "in",
            "object": { "list": [1, {}, 3] }
        })),
        "$.statements[0].value.object.list[1]",
    );
}

#[test]
fn test_non_string_pattern() {
    assert_malformed_at(
        clause_doc(json!({
            "subject": { "target": "/foo" },
            "operator": "like",
            "object": { "pattern": 42 }
        })),
        "$.statements[0].value.object.pattern",
    );
}

#[test]
fn test_invalid_pointer() {
    let doc = clause_doc(json!({
        "subject": { "target": "foo" }, "operator": "eq", "object": { "literal": 1 }
    }));
    assert!(matches!(from_value(&doc), Err(SyntaxError::InvalidPointer(_))));
}

#[test]
fn test_unknown_operator() {
    let doc = clause_doc(json!({
        "subject": { "target": "/foo" }, "operator": "blorg", "object": { "literal": 1 }
    }));
    assert!(matches!(
        from_value(&doc),
        Err(SyntaxError::UnknownOperator(ref op)) if op == "blorg"
    ));
}
