//! Single-filter predicates.
//!
//! A [`Filter`] is one typed predicate over one field path. The comparison
//! operand is parsed once at construction (ranges split, numbers parsed,
//! regexes guarded and compiled), so evaluation against a record is pure and
//! allocation-light.
//!
//! Two policies from the expression language are worth calling out:
//!
//! - **Missing fields.** A missing (or null) field matches `not_exists`, and
//!   also matches `not_equals` / `not_in` because string predicates see a
//!   missing field as the empty string. No other operator matches a missing
//!   field.
//! - **Silent numeric non-match.** Numeric operators coerce the field value
//!   per record; when coercion fails the predicate simply does not match.
//!   This is specified behavior, not an oversight - changing it would change
//!   observable filtering results.

use regex::Regex;

use crate::error::{FilterError, Result};
use crate::guard::RegexGuard;
use crate::op::FilterOp;
use crate::path::FieldPath;
use crate::record::{FieldValue, Record};

/// The parsed comparison operand of a filter.
#[derive(Debug, Clone)]
pub enum FilterValue {
    /// Raw text operand for string operators.
    Text(String),
    /// Literal set for `in` / `not_in`.
    List(Vec<String>),
    /// Parsed numeric operand.
    Number(f64),
    /// Inclusive `between` bounds.
    Range(f64, f64),
    /// Guarded, pre-compiled regex.
    Pattern(Regex),
}

/// A single typed predicate over one field path.
///
/// Constructed once from parsed input and never mutated afterward.
#[derive(Debug, Clone)]
pub struct Filter {
    /// The field this predicate reads.
    pub path: FieldPath,
    /// The comparison operator.
    pub op: FilterOp,
    /// The parsed comparison operand.
    pub value: FilterValue,
    /// Case-sensitive string comparison.
    pub case_sensitive: bool,
    /// Invert this filter's result.
    pub negate: bool,
}

impl Filter {
    /// Builds a filter, parsing the raw operand according to the operator.
    ///
    /// Regex patterns are validated and compiled through the guard here, so
    /// every rejection happens before any record is evaluated. `between`
    /// takes `low-high` (or `low,high`); the other numeric operators require
    /// an operand that parses as a number.
    pub fn new(
        path: FieldPath,
        op: FilterOp,
        raw_value: &str,
        case_sensitive: bool,
        guard: &mut RegexGuard,
    ) -> Result<Filter> {
        let value = match op {
            FilterOp::Regex => FilterValue::Pattern(guard.compile(raw_value, case_sensitive)?),
            FilterOp::In | FilterOp::NotIn => {
                FilterValue::List(raw_value.split(',').map(|v| v.trim().to_string()).collect())
            }
            FilterOp::Between => parse_range(raw_value)?,
            op if op.is_numeric_op() => {
                let n = raw_value
                    .trim()
                    .parse()
                    .map_err(|_| FilterError::Operand {
                        op: op.to_string(),
                        value: raw_value.to_string(),
                    })?;
                FilterValue::Number(n)
            }
            _ => FilterValue::Text(raw_value.to_string()),
        };

        Ok(Filter {
            path,
            op,
            value,
            case_sensitive,
            negate: false,
        })
    }

    /// Flips this filter's negation flag.
    pub fn negated(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    /// Evaluates this filter against a record.
    ///
    /// Pure: repeated evaluation yields the same result with no side effects.
    pub fn matches(&self, record: &Record) -> bool {
        let resolved = record.field(&self.path);

        let result = match self.op {
            FilterOp::Exists => !resolved.is_missing(),
            FilterOp::NotExists => resolved.is_missing(),
            op if op.is_numeric_op() => self.match_numeric(&resolved),
            _ => self.match_string(&resolved),
        };

        if self.negate {
            !result
        } else {
            result
        }
    }

    fn match_numeric(&self, resolved: &FieldValue<'_>) -> bool {
        // Coercion failure (including a missing field) is a silent non-match.
        let Some(field) = resolved.coerce_number() else {
            return false;
        };

        match (&self.op, &self.value) {
            (FilterOp::NumEq, FilterValue::Number(n)) => field == *n,
            (FilterOp::NumNe, FilterValue::Number(n)) => field != *n,
            (FilterOp::Lt, FilterValue::Number(n)) => field < *n,
            (FilterOp::Le, FilterValue::Number(n)) => field <= *n,
            (FilterOp::Gt, FilterValue::Number(n)) => field > *n,
            (FilterOp::Ge, FilterValue::Number(n)) => field >= *n,
            (FilterOp::Between, FilterValue::Range(low, high)) => field >= *low && field <= *high,
            _ => false,
        }
    }

    fn match_string(&self, resolved: &FieldValue<'_>) -> bool {
        // Missing fields compare as the empty string (except exists ops,
        // handled before we get here).
        let raw_field = resolved.display().unwrap_or_default();

        if let FilterValue::Pattern(regex) = &self.value {
            // Case-insensitivity is baked into the compiled pattern.
            return regex.is_match(&raw_field);
        }

        let fold = |s: &str| {
            if self.case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };
        let field = fold(&raw_field);

        match (&self.op, &self.value) {
            (FilterOp::Equals, FilterValue::Text(v)) => field == fold(v),
            (FilterOp::NotEquals, FilterValue::Text(v)) => field != fold(v),
            (FilterOp::Contains, FilterValue::Text(v)) => field.contains(&fold(v)),
            (FilterOp::NotContains, FilterValue::Text(v)) => !field.contains(&fold(v)),
            (FilterOp::StartsWith, FilterValue::Text(v)) => field.starts_with(&fold(v)),
            (FilterOp::EndsWith, FilterValue::Text(v)) => field.ends_with(&fold(v)),
            (FilterOp::In, FilterValue::List(values)) => values.iter().any(|v| fold(v) == field),
            (FilterOp::NotIn, FilterValue::List(values)) => {
                values.iter().all(|v| fold(v) != field)
            }
            _ => false,
        }
    }
}

fn parse_range(raw: &str) -> Result<FilterValue> {
    let err = || FilterError::Range {
        value: raw.to_string(),
    };

    let parts: Vec<&str> = if raw.contains('-') {
        raw.split('-').collect()
    } else if raw.contains(',') {
        raw.split(',').collect()
    } else {
        return Err(err());
    };

    if parts.len() != 2 {
        return Err(err());
    }

    let low: f64 = parts[0].trim().parse().map_err(|_| err())?;
    let high: f64 = parts[1].trim().parse().map_err(|_| err())?;
    Ok(FilterValue::Range(low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        Record::new(
            "gpt-4o",
            json!({
                "alias": "chatgpt",
                "parent": "OpenAI",
                "model_category": "LLM",
                "enabled": 1,
                "available": 9,
                "context_window": 128000,
                "nested": { "field": "value", "number": 42 }
            })
            .as_object()
            .unwrap()
            .clone(),
        )
    }

    fn filter(field: &str, op: FilterOp, value: &str) -> Filter {
        let mut guard = RegexGuard::new();
        Filter::new(FieldPath::parse(field).unwrap(), op, value, false, &mut guard).unwrap()
    }

    fn filter_cs(field: &str, op: FilterOp, value: &str) -> Filter {
        let mut guard = RegexGuard::new();
        Filter::new(FieldPath::parse(field).unwrap(), op, value, true, &mut guard).unwrap()
    }

    #[test]
    fn string_equals() {
        assert!(filter("parent", FilterOp::Equals, "OpenAI").matches(&sample()));
        assert!(filter("parent", FilterOp::Equals, "openai").matches(&sample()));
        assert!(!filter("parent", FilterOp::Equals, "Anthropic").matches(&sample()));

        assert!(filter_cs("parent", FilterOp::Equals, "OpenAI").matches(&sample()));
        assert!(!filter_cs("parent", FilterOp::Equals, "openai").matches(&sample()));
    }

    #[test]
    fn string_not_equals() {
        assert!(filter("parent", FilterOp::NotEquals, "Anthropic").matches(&sample()));
        assert!(!filter("parent", FilterOp::NotEquals, "OpenAI").matches(&sample()));
    }

    #[test]
    fn equals_and_not_equals_are_exclusive() {
        let rec = sample();
        for value in ["OpenAI", "Anthropic", ""] {
            let eq = filter("parent", FilterOp::Equals, value).matches(&rec);
            let ne = filter("parent", FilterOp::NotEquals, value).matches(&rec);
            assert_ne!(eq, ne);
        }
    }

    #[test]
    fn contains_and_not_contains() {
        assert!(filter("model", FilterOp::Contains, "gpt").matches(&sample()));
        assert!(filter("model", FilterOp::Contains, "GPT").matches(&sample()));
        assert!(!filter("model", FilterOp::Contains, "claude").matches(&sample()));

        assert!(filter("model", FilterOp::NotContains, "claude").matches(&sample()));
        assert!(!filter("model", FilterOp::NotContains, "gpt").matches(&sample()));
    }

    #[test]
    fn starts_and_ends_with() {
        assert!(filter("model", FilterOp::StartsWith, "gpt").matches(&sample()));
        assert!(!filter("model", FilterOp::StartsWith, "claude").matches(&sample()));
        assert!(filter("model", FilterOp::EndsWith, "4o").matches(&sample()));
        assert!(!filter("model", FilterOp::EndsWith, "sonnet").matches(&sample()));
    }

    #[test]
    fn string_equals_works_on_numbers() {
        // The string form of a numeric field is its JSON display.
        assert!(filter("enabled", FilterOp::Equals, "1").matches(&sample()));
        assert!(!filter("enabled", FilterOp::Equals, "2").matches(&sample()));
    }

    #[test]
    fn in_and_not_in() {
        assert!(filter("parent", FilterOp::In, "OpenAI,Anthropic,Google").matches(&sample()));
        assert!(filter("parent", FilterOp::In, "openai , anthropic").matches(&sample()));
        assert!(!filter("parent", FilterOp::In, "Anthropic,Google").matches(&sample()));

        assert!(filter("parent", FilterOp::NotIn, "Anthropic,Google").matches(&sample()));
        assert!(!filter("parent", FilterOp::NotIn, "OpenAI,Anthropic").matches(&sample()));
    }

    #[test]
    fn regex_matching() {
        assert!(filter("model", FilterOp::Regex, r"gpt-\d+o").matches(&sample()));
        assert!(!filter("model", FilterOp::Regex, r"claude-\d+").matches(&sample()));

        // Case flag is honored through compilation.
        assert!(filter("model", FilterOp::Regex, r"GPT-\d+O").matches(&sample()));
        assert!(!filter_cs("model", FilterOp::Regex, r"GPT-\d+O").matches(&sample()));
    }

    #[test]
    fn dangerous_regex_rejected_at_construction() {
        let mut guard = RegexGuard::new();
        let result = Filter::new(
            FieldPath::parse("model").unwrap(),
            FilterOp::Regex,
            r"(a+)+",
            false,
            &mut guard,
        );
        assert!(matches!(result, Err(FilterError::Regex { .. })));
    }

    #[test]
    fn exists_and_not_exists() {
        assert!(filter("parent", FilterOp::Exists, "").matches(&sample()));
        assert!(!filter("ghost", FilterOp::Exists, "").matches(&sample()));
        assert!(filter("ghost", FilterOp::NotExists, "").matches(&sample()));
        assert!(!filter("parent", FilterOp::NotExists, "").matches(&sample()));
    }

    #[test]
    fn missing_field_policy() {
        let rec = sample();
        // Missing fields read as the empty string, so the negative string
        // operators match and everything else does not.
        assert!(filter("ghost", FilterOp::NotEquals, "x").matches(&rec));
        assert!(filter("ghost", FilterOp::NotIn, "a,b").matches(&rec));
        assert!(!filter("ghost", FilterOp::Equals, "x").matches(&rec));
        assert!(!filter("ghost", FilterOp::Contains, "x").matches(&rec));
        assert!(!filter("ghost", FilterOp::StartsWith, "x").matches(&rec));
        assert!(!filter("ghost", FilterOp::Gt, "0").matches(&rec));
        assert!(!filter("ghost", FilterOp::NumNe, "0").matches(&rec));
    }

    #[test]
    fn numeric_comparisons() {
        let rec = sample();
        assert!(filter("enabled", FilterOp::NumEq, "1").matches(&rec));
        assert!(filter("enabled", FilterOp::Ge, "1").matches(&rec));
        assert!(filter("available", FilterOp::Gt, "5").matches(&rec));
        assert!(filter("available", FilterOp::Le, "9").matches(&rec));
        assert!(!filter("available", FilterOp::Lt, "9").matches(&rec));
        assert!(filter("enabled", FilterOp::NumNe, "0").matches(&rec));
    }

    #[test]
    fn numeric_coercion_from_strings_and_bools() {
        let rec = Record::new(
            "r",
            json!({ "window": "4096", "vision": true })
                .as_object()
                .unwrap()
                .clone(),
        );
        assert!(filter("window", FilterOp::Ge, "1000").matches(&rec));
        assert!(filter("vision", FilterOp::Ge, "1").matches(&rec));
    }

    #[test]
    fn numeric_coercion_failure_is_silent() {
        let rec = sample();
        // parent is "OpenAI", which has no numeric reading.
        assert!(!filter("parent", FilterOp::Gt, "0").matches(&rec));
        assert!(!filter("parent", FilterOp::NumEq, "0").matches(&rec));
        assert!(!filter("parent", FilterOp::Between, "0-9").matches(&rec));
    }

    #[test]
    fn between_is_inclusive() {
        let rec = Record::new(
            "r",
            json!({ "n": 4096 }).as_object().unwrap().clone(),
        );
        assert!(filter("n", FilterOp::Between, "1000-5000").matches(&rec));
        assert!(filter("n", FilterOp::Between, "4096-5000").matches(&rec));
        assert!(filter("n", FilterOp::Between, "1000-4096").matches(&rec));
        assert!(!filter("n", FilterOp::Between, "5000-9000").matches(&rec));

        // Comma form also accepted.
        assert!(filter("n", FilterOp::Between, "1000,5000").matches(&rec));
    }

    #[test]
    fn malformed_ranges_fail_fast() {
        let mut guard = RegexGuard::new();
        for raw in ["1000", "1-2-3", "a-b", "1,2,3"] {
            let result = Filter::new(
                FieldPath::parse("n").unwrap(),
                FilterOp::Between,
                raw,
                false,
                &mut guard,
            );
            assert!(matches!(result, Err(FilterError::Range { .. })), "{raw}");
        }
    }

    #[test]
    fn non_numeric_operand_fails_fast() {
        let mut guard = RegexGuard::new();
        let result = Filter::new(
            FieldPath::parse("n").unwrap(),
            FilterOp::Gt,
            "fast",
            false,
            &mut guard,
        );
        assert!(matches!(result, Err(FilterError::Operand { .. })));
    }

    #[test]
    fn negate_inverts_result() {
        let rec = sample();
        let f = filter("parent", FilterOp::Equals, "OpenAI");
        assert!(f.matches(&rec));
        let f = f.negated();
        assert!(!f.matches(&rec));
        let f = f.negated();
        assert!(f.matches(&rec));
    }

    #[test]
    fn nested_field_filters() {
        let rec = sample();
        assert!(filter("nested.field", FilterOp::Equals, "value").matches(&rec));
        assert!(filter("nested.number", FilterOp::NumEq, "42").matches(&rec));
        assert!(!filter("nested.missing", FilterOp::Equals, "value").matches(&rec));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let rec = sample();
        let f = filter("model", FilterOp::Contains, "gpt");
        let first = f.matches(&rec);
        for _ in 0..10 {
            assert_eq!(f.matches(&rec), first);
        }
    }
}
