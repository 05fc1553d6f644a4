use crate::renderer::{Render, RenderResult, Renderer};
use filter_syntax::{Literal, Pattern};

/// Translates a glob (`*` for any run, `\` escapes) into LIKE syntax.
///
/// Unescaped `*` becomes `%` and `'` is doubled. `\*` is a literal `*`,
/// `\_` stays escaped and any other escaped character keeps its backslash.
/// A trailing lone `\` is dropped.
pub fn translate(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len());
    let mut escaping = false;

    for c in glob.chars() {
        if escaping {
            escaping = false;
            match c {
                '*' => out.push('*'),
                '_' => out.push_str("\\_"),
                other => {
                    out.push('\\');
                    out.push(other);
                }
            }
            continue;
        }

        match c {
            '\\' => escaping = true,
            '\'' => out.push_str("''"),
            '*' => out.push('%'),
            other => out.push(other),
        }
    }

    out
}

impl Render for Pattern {
    fn render(&self, r: &mut Renderer) -> RenderResult {
        let translated = translate(self.as_str());
        if r.parameterize {
            r.add_param(Literal::String(translated));
        } else {
            r.push_quoted(&translated);
        }
        Ok(())
    }
}
