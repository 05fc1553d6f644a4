//! Decoder for the JSON wire form of a filter.
//!
//! ```text
//! Filter    = { "statements": [Statement, ...] }
//! Statement = { "conjunctive": "none" | "and" | "or", "value": Filter | Clause }
//! Clause    = { "subject": Operand | null, "operator": "<op>", "object": Operand | null }
//! Operand   = { "target": "<json pointer>" | { "field": "<name>", "path": [...] } }
//!           | { "literal": <scalar> }
//!           | { "range": { "lower": <scalar>, "upper": <scalar> } | [<scalar>, <scalar>] }
//!           | { "pattern": "<glob>" }
//!           | { "list": [<scalar>, ...] }
//! ```
//!
//! Errors carry the location of the offending node, e.g.
//! `$.statements[1].value.object`.

use crate::{
    ast::{
        clause::{Clause, Operand, Pattern, Range},
        filter::{Conjunctive, FilterExpression, Statement, Term},
        literal::Literal,
        operator::Operator,
        target::{PathSegment, Target},
    },
    error::SyntaxError,
};
use serde_json::{Map, Value};
use tracing::trace;

pub type DecodeResult<T> = Result<T, SyntaxError>;

/// Decode a filter from JSON text
pub fn from_str(input: &str) -> DecodeResult<FilterExpression> {
    let value: Value = serde_json::from_str(input)?;
    from_value(&value)
}

/// Decode a filter from an already parsed JSON document
pub fn from_value(value: &Value) -> DecodeResult<FilterExpression> {
    let filter = decode_filter(value, "$")?;
    trace!(filter = %filter, "decoded filter");
    Ok(filter)
}

fn malformed(location: &str, message: impl Into<String>) -> SyntaxError {
    SyntaxError::malformed(location, message)
}

fn as_object<'a>(
    value: &'a Value,
    location: &str,
    expected: &str,
) -> DecodeResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| malformed(location, format!("expected {expected} object")))
}

fn decode_filter(value: &Value, location: &str) -> DecodeResult<FilterExpression> {
    let object = as_object(value, location, "a filter")?;
    let statements = object
        .get("statements")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed(location, "filter requires a \"statements\" array"))?;

    statements
        .iter()
        .enumerate()
        .map(|(i, statement)| decode_statement(statement, &format!("{location}.statements[{i}]")))
        .collect::<DecodeResult<Vec<_>>>()
        .map(FilterExpression::new)
}

fn decode_statement(value: &Value, location: &str) -> DecodeResult<Statement> {
    let object = as_object(value, location, "a statement")?;

    let conjunctive = match object.get("conjunctive") {
        None | Some(Value::Null) => Conjunctive::None,
        Some(Value::String(name)) => match name.as_str() {
            "none" => Conjunctive::None,
            "and" => Conjunctive::And,
            "or" => Conjunctive::Or,
            other => {
                return Err(malformed(
                    &format!("{location}.conjunctive"),
                    format!("unknown conjunctive {other:?}"),
                ));
            }
        },
        Some(_) => {
            return Err(malformed(
                &format!("{location}.conjunctive"),
                "conjunctive must be a string",
            ));
        }
    };

    let value_location = format!("{location}.value");
    let term = match object.get("value") {
        Some(inner @ Value::Object(map)) if map.contains_key("statements") => {
            Term::Filter(decode_filter(inner, &value_location)?)
        }
        Some(inner @ Value::Object(map)) if map.contains_key("operator") => {
            Term::Clause(decode_clause(inner, &value_location)?)
        }
        _ => {
            return Err(malformed(
                &value_location,
                "statement value must be a filter or a clause",
            ));
        }
    };

    Ok(Statement {
        conjunctive,
        value: term,
    })
}

fn decode_clause(value: &Value, location: &str) -> DecodeResult<Clause> {
    let object = as_object(value, location, "a clause")?;

    let operator = match object.get("operator") {
        Some(Value::String(name)) => name.parse::<Operator>()?,
        _ => {
            return Err(malformed(
                &format!("{location}.operator"),
                "operator must be a string",
            ));
        }
    };

    let subject = decode_optional_operand(object.get("subject"), &format!("{location}.subject"))?;
    let object_operand =
        decode_optional_operand(object.get("object"), &format!("{location}.object"))?;

    if subject.is_none() && object_operand.is_none() {
        return Err(malformed(location, "clause requires a subject or an object"));
    }

    Ok(Clause {
        subject,
        operator,
        object: object_operand,
    })
}

fn decode_optional_operand(value: Option<&Value>, location: &str) -> DecodeResult<Option<Operand>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(inner) => decode_operand(inner, location).map(Some),
    }
}

fn decode_operand(value: &Value, location: &str) -> DecodeResult<Operand> {
    let object = as_object(value, location, "an operand")?;

    let mut entries = object.iter();
    let (kind, inner) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(malformed(
                location,
                "operand must have exactly one of \"target\", \"literal\", \"range\", \"pattern\" or \"list\"",
            ));
        }
    };

    let inner_location = format!("{location}.{kind}");
    match kind.as_str() {
        "target" => decode_target(inner, &inner_location).map(Operand::Target),
        "literal" => decode_literal(inner, &inner_location).map(Operand::Literal),
        "range" => decode_range(inner, &inner_location).map(Operand::Range),
        "pattern" => match inner {
            Value::String(glob) => Ok(Operand::Pattern(Pattern::new(glob.clone()))),
            _ => Err(malformed(&inner_location, "pattern must be a string")),
        },
        "list" => decode_list(inner, &inner_location).map(Operand::List),
        other => Err(malformed(location, format!("unknown operand kind {other:?}"))),
    }
}

fn decode_target(value: &Value, location: &str) -> DecodeResult<Target> {
    match value {
        Value::String(pointer) => Target::parse(pointer),
        Value::Object(object) => {
            let field = object
                .get("field")
                .and_then(Value::as_str)
                .ok_or_else(|| malformed(location, "target requires a \"field\" string"))?;
            let path = object
                .get("path")
                .and_then(Value::as_array)
                .ok_or_else(|| malformed(location, "target requires a \"path\" array"))?
                .iter()
                .enumerate()
                .map(|(i, segment)| decode_segment(segment, &format!("{location}.path[{i}]")))
                .collect::<DecodeResult<Vec<_>>>()?;

            Ok(Target::new(field, path))
        }
        _ => Err(malformed(
            location,
            "target must be a JSON pointer or an object",
        )),
    }
}

fn decode_segment(value: &Value, location: &str) -> DecodeResult<PathSegment> {
    match value {
        Value::String(key) => Ok(PathSegment::Key(key.clone())),
        Value::Number(number) => number
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .map(PathSegment::Index)
            .ok_or_else(|| malformed(location, "index segment must be a non-negative integer")),
        _ => Err(malformed(
            location,
            "path segment must be an integer or a string",
        )),
    }
}

fn decode_literal(value: &Value, location: &str) -> DecodeResult<Literal> {
    match value {
        Value::String(s) => Ok(Literal::String(s.clone())),
        Value::Number(n) => Ok(Literal::Number(n.clone())),
        Value::Bool(b) => Ok(Literal::Boolean(*b)),
        _ => Err(malformed(
            location,
            "literal must be a string, number or boolean",
        )),
    }
}

fn decode_range(value: &Value, location: &str) -> DecodeResult<Range> {
    let (lower, upper) = match value {
        Value::Object(object) => (object.get("lower"), object.get("upper")),
        Value::Array(items) if items.len() == 2 => (items.first(), items.get(1)),
        _ => {
            return Err(malformed(
                location,
                "range must be an object with \"lower\" and \"upper\" or a two-element array",
            ));
        }
    };

    let lower = lower.ok_or_else(|| malformed(location, "range requires a lower bound"))?;
    let upper = upper.ok_or_else(|| malformed(location, "range requires an upper bound"))?;

    Ok(Range {
        lower: decode_literal(lower, &format!("{location}.lower"))?,
        upper: decode_literal(upper, &format!("{location}.upper"))?,
    })
}

fn decode_list(value: &Value, location: &str) -> DecodeResult<Vec<Literal>> {
    value
        .as_array()
        .ok_or_else(|| malformed(location, "list must be an array"))?
        .iter()
        .enumerate()
        .map(|(i, item)| decode_literal(item, &format!("{location}[{i}]")))
        .collect()
}
