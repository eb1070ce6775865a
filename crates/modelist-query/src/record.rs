//! Registry records and field value resolution.
//!
//! A [`Record`] is one registry entry: a unique name plus an attribute tree
//! decoded from the registry file. Field resolution returns a borrowed
//! [`FieldValue`], which the predicate evaluators coerce to a string or a
//! number as the operator requires.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::path::FieldPath;

/// One registry entry: a unique name and its attribute mapping.
///
/// Records are immutable for the duration of an invocation; the registry is
/// loaded once and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// The unique record identifier (the registry key).
    pub name: String,
    /// The attribute tree, addressable by dotted field paths.
    pub attrs: Map<String, Value>,
}

impl Record {
    /// Creates a record from a name and attribute mapping.
    pub fn new(name: impl Into<String>, attrs: Map<String, Value>) -> Self {
        Record {
            name: name.into(),
            attrs,
        }
    }

    /// Resolves a field path against this record.
    ///
    /// The bare path `model` falls back to the record name when the
    /// attributes carry no `model` key, so the identifier is addressable
    /// like any other field. JSON `null` resolves as missing.
    pub fn field(&self, path: &FieldPath) -> FieldValue<'_> {
        match path.resolve(&self.attrs) {
            Some(Value::Null) => FieldValue::Missing,
            Some(value) => FieldValue::Attr(value),
            None if path.is_ident("model") => FieldValue::Name(&self.name),
            None => FieldValue::Missing,
        }
    }
}

/// A field value resolved from a record, borrowed for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The record's own name (the `model` pseudo-field).
    Name(&'a str),
    /// A value from the attribute tree.
    Attr(&'a Value),
    /// Field absent or null.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Returns `true` when the field is absent or null.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Returns the string form of the value, or `None` when missing.
    ///
    /// Strings pass through unquoted; numbers and booleans use their JSON
    /// display form; arrays and objects serialize compactly.
    pub fn display(&self) -> Option<String> {
        match self {
            FieldValue::Name(name) => Some((*name).to_string()),
            FieldValue::Attr(value) => Some(display_value(value)),
            FieldValue::Missing => None,
        }
    }

    /// Attempts to coerce the value to a number.
    ///
    /// JSON numbers pass through, strings are parsed as f64, and booleans
    /// coerce to 1/0. Everything else (and any parse failure) yields `None`,
    /// which the numeric predicates treat as a silent non-match rather than
    /// an error.
    pub fn coerce_number(&self) -> Option<f64> {
        match self {
            FieldValue::Name(name) => name.trim().parse().ok(),
            FieldValue::Attr(value) => coerce_number(value),
            FieldValue::Missing => None,
        }
    }
}

/// Coerces a JSON value to a number, if it has a numeric reading.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Renders a JSON value as display text (strings unquoted, null empty).
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
