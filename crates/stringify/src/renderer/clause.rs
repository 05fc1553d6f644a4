use crate::{
    error::StringifyError,
    renderer::{
        Render, RenderResult, Renderer,
        operand::{render_list, render_value},
    },
};
use filter_syntax::{Clause, Operand, Operator};

/// Query syntax of a binary comparison operator.
pub fn operator_syntax(operator: Operator) -> &'static str {
    match operator {
        Operator::Eq => "==",
        Operator::Neq => "!=",
        Operator::Gt => ">",
        Operator::Gte => ">=",
        Operator::Lt => "<",
        Operator::Lte => "<=",
        Operator::Like => "LIKE",
        Operator::Nlike => "NOT LIKE",
        Operator::Between => "BETWEEN",
        Operator::Nbetween => "NOT BETWEEN",
        Operator::In => "IN",
        Operator::Nin => "NOT IN",
    }
}

/// Suffix of a comparison against null.
pub fn null_suffix(operator: Operator) -> Result<&'static str, StringifyError> {
    match operator {
        Operator::Eq | Operator::Lt | Operator::Lte => Ok(" IS NULL"),
        Operator::Neq | Operator::Gt | Operator::Gte => Ok(" IS NOT NULL"),
        other => Err(StringifyError::InvalidNullOperator(other)),
    }
}

fn mismatch(operator: Operator, expected: &str, found: &Operand) -> StringifyError {
    StringifyError::stringify(format!(
        "operator {operator} expects {expected}, found a {} operand",
        found.kind()
    ))
}

fn render_object(operator: Operator, object: &Operand, r: &mut Renderer) -> RenderResult {
    match (operator, object) {
        (
            Operator::Eq
            | Operator::Neq
            | Operator::Gt
            | Operator::Gte
            | Operator::Lt
            | Operator::Lte,
            _,
        ) => render_value(object, r),
        (Operator::Like | Operator::Nlike, Operand::Pattern(pattern)) => pattern.render(r),
        (Operator::Like | Operator::Nlike, other) => Err(mismatch(operator, "a pattern", other)),
        (Operator::Between | Operator::Nbetween, Operand::Range(range)) => range.render(r),
        (Operator::Between | Operator::Nbetween, other) => {
            Err(mismatch(operator, "a range", other))
        }
        (Operator::In | Operator::Nin, Operand::List(items)) => render_list(items, r),
        (Operator::In | Operator::Nin, other) => Err(mismatch(operator, "a list", other)),
    }
}

impl Render for Clause {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        match (&self.subject, &self.object) {
            (Some(subject), Some(object)) => {
                render_value(subject, r)?;
                r.sql.push(' ');
                r.sql.push_str(operator_syntax(self.operator));
                r.sql.push(' ');
                render_object(self.operator, object, r)
            }
            (Some(operand), None) | (None, Some(operand)) => {
                render_value(operand, r)?;
                r.sql.push_str(null_suffix(self.operator)?);
                Ok(())
            }
            (None, None) => Err(StringifyError::stringify(
                "clause has neither a subject nor an object",
            )),
        }
    }
}
