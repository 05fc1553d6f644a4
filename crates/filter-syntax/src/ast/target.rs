use crate::error::SyntaxError;
use serde::Serialize;
use std::fmt;

/// One step into a nested document: an array index or a property name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Key(value.to_string())
    }
}

/// Reference to a field, optionally reaching into nested properties and
/// array elements (e.g. `/orders/0/total`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    /// Name checked against allow, deny and require lists.
    pub field: String,
    pub path: Vec<PathSegment>,
}

impl Target {
    pub fn new(field: impl Into<String>, path: Vec<PathSegment>) -> Self {
        Self {
            field: field.into(),
            path,
        }
    }

    /// Parses an RFC 6901 JSON pointer such as `/foo/bar/2`.
    ///
    /// The pointer text becomes the target's field. Segments made of ASCII
    /// digits (without a leading zero) are array indices, everything else is
    /// a property name with `~1` and `~0` unescaped.
    pub fn parse(pointer: &str) -> Result<Self, SyntaxError> {
        let rest = pointer
            .strip_prefix('/')
            .ok_or_else(|| SyntaxError::InvalidPointer(pointer.to_string()))?;

        let path = rest
            .split('/')
            .map(parse_segment)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SyntaxError::InvalidPointer(pointer.to_string()))?;

        Ok(Self {
            field: pointer.to_string(),
            path,
        })
    }

    pub fn to_json_pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.path {
            pointer.push('/');
            match segment {
                PathSegment::Index(index) => pointer.push_str(&index.to_string()),
                PathSegment::Key(key) => {
                    pointer.push_str(&key.replace('~', "~0").replace('/', "~1"))
                }
            }
        }
        pointer
    }
}

fn parse_segment(raw: &str) -> Option<PathSegment> {
    let is_index = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));

    if is_index {
        if let Ok(index) = raw.parse::<usize>() {
            return Some(PathSegment::Index(index));
        }
    }

    unescape(raw).map(PathSegment::Key)
}

fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return None,
        }
    }
    Some(out)
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_pointer())
    }
}
