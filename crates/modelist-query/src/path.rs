//! Validated dotted field paths.
//!
//! A [`FieldPath`] addresses a (possibly nested) attribute within a record,
//! e.g. `parent` or `token_costs.input`. Paths are validated at construction
//! time, before any operator or value parsing happens for the filter that
//! uses them; an invalid path aborts parsing of the whole filter set.

use crate::error::{FilterError, Result};

/// Maximum number of dotted segments in a path.
pub const MAX_PATH_DEPTH: usize = 10;

/// Maximum total length of a path in characters.
pub const MAX_PATH_LEN: usize = 200;

/// A validated dotted field path.
///
/// Grammar: `identifier ('.' identifier)*` where an identifier starts with a
/// letter or underscore and continues with letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses and validates a raw field-path string.
    ///
    /// Rejects empty paths, empty segments (`a..b`), segments starting with
    /// a digit, and paths exceeding [`MAX_PATH_DEPTH`] or [`MAX_PATH_LEN`].
    pub fn parse(raw: &str) -> Result<FieldPath> {
        let err = |reason: &str| FilterError::FieldPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(err("path is empty"));
        }
        if raw.len() > MAX_PATH_LEN {
            return Err(err("path is too long"));
        }

        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() > MAX_PATH_DEPTH {
            return Err(err("path is too deep"));
        }

        for segment in &segments {
            if segment.is_empty() {
                return Err(err("empty path segment"));
            }
            let mut chars = segment.chars();
            let first = chars.next().expect("segment is non-empty");
            if !(first.is_ascii_alphabetic() || first == '_') {
                return Err(err("segment must start with a letter or underscore"));
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(err("segment contains invalid characters"));
            }
        }

        Ok(FieldPath {
            segments: segments.into_iter().map(str::to_string).collect(),
        })
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if this path is the single given identifier.
    pub fn is_ident(&self, ident: &str) -> bool {
        self.segments.len() == 1 && self.segments[0] == ident
    }

    /// Resolves this path against an attribute tree.
    ///
    /// Walks nested objects segment by segment; returns `None` when any
    /// segment is missing or an intermediate value is not an object.
    pub fn resolve<'a>(
        &self,
        attrs: &'a serde_json::Map<String, serde_json::Value>,
    ) -> Option<&'a serde_json::Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = attrs.get(first)?;
        for segment in rest {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
