//! Filter expression parsing.
//!
//! Expressions arrive as `field:operator:value` (canonical) or `field=value`
//! (shorthand for `equals`). The raw text splits on at most the first two
//! colons, so a value may itself contain colons (a URL, a regex with `\:`)
//! without being mis-parsed.
//!
//! Validation order is fixed: field path first, then operator, then the
//! operand (where the regex guard runs). Every expression is parsed before
//! any record is evaluated, so one bad expression aborts the whole run.

use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::guard::RegexGuard;
use crate::op::FilterOp;
use crate::path::FieldPath;

/// Parses one filter expression into a [`Filter`].
pub fn parse_expression(
    expr: &str,
    case_sensitive: bool,
    guard: &mut RegexGuard,
) -> Result<Filter> {
    let (field, op_token, value) = split_expression(expr)?;

    if field.is_empty() {
        return Err(FilterError::EmptyField {
            expr: expr.to_string(),
        });
    }

    // Path validation runs before operator and value parsing.
    let path = FieldPath::parse(field)?;

    let op = FilterOp::parse(op_token).ok_or_else(|| FilterError::UnknownOperator {
        op: op_token.to_string(),
    })?;

    Filter::new(path, op, value, case_sensitive, guard)
}

/// Parses a whole list of expressions, failing on the first bad one.
pub fn parse_expressions(
    exprs: &[String],
    case_sensitive: bool,
    guard: &mut RegexGuard,
) -> Result<Vec<Filter>> {
    exprs
        .iter()
        .map(|expr| parse_expression(expr, case_sensitive, guard))
        .collect()
}

/// Splits raw expression text into `(field, operator, value)`.
///
/// Splits on at most the first two colons; with fewer than three parts,
/// falls back to the `field=value` equality shorthand.
fn split_expression(expr: &str) -> Result<(&str, &str, &str)> {
    let parts: Vec<&str> = expr.splitn(3, ':').collect();
    if parts.len() == 3 {
        return Ok((parts[0].trim(), parts[1].trim(), parts[2].trim()));
    }

    if let Some((field, value)) = expr.split_once('=') {
        return Ok((field.trim(), "equals", value.trim()));
    }

    Err(FilterError::Expression {
        expr: expr.to_string(),
    })
}
