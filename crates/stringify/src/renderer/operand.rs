use crate::{
    error::StringifyError,
    renderer::{Render, RenderResult, Renderer},
};
use filter_syntax::{Literal, Operand, PathSegment, Range, Target};

/// Renders an operand used directly on either side of a comparison, i.e.
/// a target or a single literal.
pub fn render_value(operand: &Operand, r: &mut Renderer) -> RenderResult {
    match operand {
        Operand::Target(target) => target.render(r),
        Operand::Literal(literal) => literal.render(r),
        other => Err(StringifyError::stringify(format!(
            "a {} operand cannot be compared directly",
            other.kind()
        ))),
    }
}

/// Renders `[a,b,...]` for `in` / `nin`.
pub fn render_list(items: &[Literal], r: &mut Renderer) -> RenderResult {
    r.sql.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            r.sql.push(',');
        }
        item.render(r)?;
    }
    r.sql.push(']');
    Ok(())
}

fn is_unsafe(c: char) -> bool {
    c == '`' || c == '\''
}

impl Render for Target {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        r.policy.check(&self.field)?;

        let mut expr = r.identifier.clone();
        for segment in &self.path {
            match segment {
                PathSegment::Index(index) => {
                    expr.push('[');
                    expr.push_str(&index.to_string());
                    expr.push(']');
                }
                PathSegment::Key(key) => {
                    if key.contains(is_unsafe) {
                        return Err(StringifyError::InvalidTarget {
                            target: self.to_json_pointer(),
                            path: self.path.clone(),
                        });
                    }
                    if !expr.is_empty() {
                        expr.push('.');
                    }
                    expr.push_str(&r.dialect.quote_identifier(key));
                }
            }
        }

        r.policy.record(&self.field);
        r.sql.push_str(&expr);
        Ok(())
    }
}

impl Render for Literal {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        r.push_literal(self);
        Ok(())
    }
}

impl Render for Range {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        self.lower.render(r)?;
        r.sql.push_str(" AND ");
        self.upper.render(r)
    }
}
