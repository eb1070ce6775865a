//! Filter operators and alias normalization.
//!
//! The [`FilterOp`] enum defines every supported operator, split into a
//! string group and a numeric group. User-facing spellings are normalized
//! through [`FilterOp::parse`], which accepts the canonical names plus a
//! table of aliases (`=`, `~`, `^`, `lt`, `like`, ...).

/// A comparison operator for a single filter.
///
/// Operators come in two groups:
/// - **String**: `equals`, `not_equals`, `contains`, `not_contains`,
///   `starts_with`, `ends_with`, `regex`, `in`, `not_in`, `exists`,
///   `not_exists` - evaluated against the string form of a field.
/// - **Numeric**: `==`, `!=`, `<`, `<=`, `>`, `>=`, `between` - evaluated
///   after coercing the field value to a number.
///
/// Note that string `equals` and numeric `==` are distinct operators:
/// `enabled:equals:1` compares text, `enabled:==:1` compares numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    // String operators
    /// Exact string match.
    Equals,
    /// String inequality.
    NotEquals,
    /// Substring match.
    Contains,
    /// Negated substring match.
    NotContains,
    /// String prefix match.
    StartsWith,
    /// String suffix match.
    EndsWith,
    /// Regular expression search (guarded, see [`crate::guard`]).
    Regex,
    /// Membership in a comma-separated literal set.
    In,
    /// Negated set membership.
    NotIn,
    /// Field is present with a non-null value.
    Exists,
    /// Field is absent or null.
    NotExists,

    // Numeric operators
    /// Numeric equality.
    NumEq,
    /// Numeric inequality.
    NumNe,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Inclusive range test against a `low-high` pair.
    Between,
}

impl FilterOp {
    /// Parses an operator token, normalizing aliases to canonical operators.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown tokens.
    pub fn parse(token: &str) -> Option<FilterOp> {
        let op = match token.to_ascii_lowercase().as_str() {
            "equals" | "eq" | "=" => FilterOp::Equals,
            "not_equals" | "ne" | "<>" => FilterOp::NotEquals,
            "contains" | "like" | "~" | "*" => FilterOp::Contains,
            "not_contains" | "not_like" | "!~" => FilterOp::NotContains,
            "starts_with" | "startswith" | "^" => FilterOp::StartsWith,
            "ends_with" | "endswith" | "$" => FilterOp::EndsWith,
            "regex" | "regexp" | "re" | "match" => FilterOp::Regex,
            "in" => FilterOp::In,
            "not_in" => FilterOp::NotIn,
            "exists" => FilterOp::Exists,
            "not_exists" => FilterOp::NotExists,
            "==" => FilterOp::NumEq,
            "!=" => FilterOp::NumNe,
            "<" | "lt" => FilterOp::Lt,
            "<=" | "le" => FilterOp::Le,
            ">" | "gt" => FilterOp::Gt,
            ">=" | "ge" => FilterOp::Ge,
            "between" | "range" | "btw" => FilterOp::Between,
            _ => return None,
        };
        Some(op)
    }

    /// Returns `true` for operators evaluated against the string form of a field.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            FilterOp::Equals
                | FilterOp::NotEquals
                | FilterOp::Contains
                | FilterOp::NotContains
                | FilterOp::StartsWith
                | FilterOp::EndsWith
                | FilterOp::Regex
                | FilterOp::In
                | FilterOp::NotIn
                | FilterOp::Exists
                | FilterOp::NotExists
        )
    }

    /// Returns `true` for operators that coerce the field value to a number.
    pub fn is_numeric_op(self) -> bool {
        !self.is_string_op()
    }

    /// Returns the canonical name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Equals => "equals",
            FilterOp::NotEquals => "not_equals",
            FilterOp::Contains => "contains",
            FilterOp::NotContains => "not_contains",
            FilterOp::StartsWith => "starts_with",
            FilterOp::EndsWith => "ends_with",
            FilterOp::Regex => "regex",
            FilterOp::In => "in",
            FilterOp::NotIn => "not_in",
            FilterOp::Exists => "exists",
            FilterOp::NotExists => "not_exists",
            FilterOp::NumEq => "==",
            FilterOp::NumNe => "!=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::Between => "between",
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
