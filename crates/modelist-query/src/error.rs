//! Error types for the query engine.
//!
//! Every variant is raised during the parse/validation phase, before any
//! record is evaluated. Numeric coercion failure during evaluation is not an
//! error; it is a silent non-match (see [`crate::record::coerce_number`]).

use thiserror::Error;

/// Errors that can occur while building filters from user input.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Expression text does not match `field:operator:value` or `field=value`.
    #[error("invalid filter expression '{expr}': expected 'field:operator:value' or 'field=value'")]
    Expression { expr: String },

    /// The field segment of an expression is blank.
    #[error("empty field name in filter expression '{expr}'")]
    EmptyField { expr: String },

    /// Malformed dotted field path.
    #[error("invalid field path '{path}': {reason}")]
    FieldPath { path: String, reason: String },

    /// Operator token is not a known operator or alias.
    #[error("unknown operator '{op}'")]
    UnknownOperator { op: String },

    /// Regex pattern is too long, heuristically dangerous, or invalid.
    #[error("rejected regex pattern '{pattern}': {reason}")]
    Regex { pattern: String, reason: String },

    /// `between` operand is not a `low-high` (or `low,high`) pair.
    #[error("invalid range '{value}': expected 'low-high' with exactly two numeric bounds")]
    Range { value: String },

    /// A numeric operator was given an operand that is not a number.
    #[error("operator '{op}' requires a numeric value, got '{value}'")]
    Operand { op: String, value: String },
}

/// Result type for filter construction.
pub type Result<T> = std::result::Result<T, FilterError>;
