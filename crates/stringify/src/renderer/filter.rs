use crate::{
    error::StringifyError,
    renderer::{Render, RenderResult, Renderer},
};
use filter_syntax::{Conjunctive, FilterExpression, Term};

impl Render for FilterExpression {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        for (i, statement) in self.statements.iter().enumerate() {
            // The first conjunctive of a group is never rendered.
            if i > 0 {
                let keyword = match statement.conjunctive {
                    Conjunctive::And => " AND ",
                    Conjunctive::Or => " OR ",
                    Conjunctive::None => {
                        return Err(StringifyError::stringify(format!(
                            "statement {i} is missing its conjunctive"
                        )));
                    }
                };
                r.sql.push_str(keyword);
            }

            match &statement.value {
                Term::Filter(group) => {
                    r.sql.push('(');
                    group.render(r)?;
                    r.sql.push(')');
                }
                Term::Clause(clause) => clause.render(r)?,
            }
        }
        Ok(())
    }
}
