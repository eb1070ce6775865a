//! Aggregation over a filtered record set.
//!
//! Everything here is purely derived and read-only: grouped counts, distinct
//! values, numeric field statistics, and the whole-registry [`Summary`].
//! Callers run these on the already-filtered subset.

use std::collections::BTreeMap;

use crate::path::FieldPath;
use crate::record::Record;

/// Bucket label for records missing the grouped field (or holding an empty
/// string).
pub const MISSING_BUCKET: &str = "[None]";

/// Counts records grouped by a field's value.
///
/// Missing and empty values land in the [`MISSING_BUCKET`]. Results are
/// sorted by count descending, then value ascending.
pub fn count_by(records: &[Record], field: &FieldPath) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let value = match record.field(field).display() {
            Some(v) if !v.is_empty() => v,
            _ => MISSING_BUCKET.to_string(),
        };
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

/// Returns the sorted distinct non-empty values of a field.
pub fn unique_values(records: &[Record], field: &FieldPath) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|record| record.field(field).display())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Aggregate statistics for a numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStats {
    /// Number of records with a numeric value for the field.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub avg: f64,
    /// Number of distinct numeric values.
    pub unique: usize,
}

/// Computes numeric statistics for a field, skipping non-numeric values.
///
/// Returns `None` when no record has a numeric value for the field.
pub fn field_stats(records: &[Record], field: &FieldPath) -> Option<FieldStats> {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.field(field).coerce_number())
        .collect();

    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut distinct: Vec<u64> = values.iter().map(|v| v.to_bits()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    Some(FieldStats {
        count: values.len(),
        min,
        max,
        sum,
        avg: sum / values.len() as f64,
        unique: distinct.len(),
    })
}

/// Whole-registry summary counts, computed from the filtered subset.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total: usize,
    /// Counts per provider (`parent`), most common first.
    pub by_parent: Vec<(String, usize)>,
    /// Counts per `model_category`, most common first.
    pub by_category: Vec<(String, usize)>,
    /// Counts per `available` level, ascending by level.
    pub by_available: Vec<(String, usize)>,
    /// Counts per `enabled` level, ascending by level.
    pub by_enabled: Vec<(String, usize)>,
    /// Records with `vision` greater than zero.
    pub vision_count: usize,
    /// Min, max, and mean `context_window` over records that carry one.
    pub context_window: Option<FieldStats>,
}

impl Summary {
    /// Computes the summary for a record set.
    pub fn compute(records: &[Record]) -> Summary {
        let path = |raw: &str| FieldPath::parse(raw).expect("static field name");

        let by_level = |field: &FieldPath| {
            let mut pairs = count_by(records, field);
            pairs.sort_by(|a, b| level_key(&a.0).partial_cmp(&level_key(&b.0)).unwrap());
            pairs
        };

        let vision = path("vision");
        let vision_count = records
            .iter()
            .filter(|r| r.field(&vision).coerce_number().unwrap_or(0.0) > 0.0)
            .count();

        Summary {
            total: records.len(),
            by_parent: count_by(records, &path("parent")),
            by_category: count_by(records, &path("model_category")),
            by_available: by_level(&path("available")),
            by_enabled: by_level(&path("enabled")),
            vision_count,
            context_window: field_stats(records, &path("context_window")),
        }
    }
}

fn level_key(label: &str) -> f64 {
    // Missing-value buckets sort after the numeric levels.
    label.parse().unwrap_or(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Vec<Record> {
        [
            (
                "gpt-4o",
                json!({ "parent": "OpenAI", "model_category": "LLM", "available": 9,
                        "enabled": 1, "vision": 1, "context_window": 128000 }),
            ),
            (
                "gpt-4o-mini",
                json!({ "parent": "OpenAI", "model_category": "LLM", "available": 9,
                        "enabled": 1, "vision": 1, "context_window": 128000 }),
            ),
            (
                "claude-sonnet",
                json!({ "parent": "Anthropic", "model_category": "LLM", "available": 8,
                        "enabled": 5, "vision": 0, "context_window": 200000 }),
            ),
            ("text-embed", json!({ "parent": "OpenAI", "model_category": "embed" })),
        ]
        .into_iter()
        .map(|(name, attrs)| Record::new(name, attrs.as_object().unwrap().clone()))
        .collect()
    }

    fn path(raw: &str) -> FieldPath {
        FieldPath::parse(raw).unwrap()
    }

    #[test]
    fn count_by_sorts_by_count_then_value() {
        let counts = count_by(&registry(), &path("parent"));
        assert_eq!(
            counts,
            vec![("OpenAI".to_string(), 3), ("Anthropic".to_string(), 1)]
        );
    }

    #[test]
    fn count_by_buckets_missing_values() {
        let counts = count_by(&registry(), &path("vision"));
        assert!(counts.contains(&(MISSING_BUCKET.to_string(), 1)));
        assert!(counts.contains(&("1".to_string(), 2)));
        assert!(counts.contains(&("0".to_string(), 1)));
    }

    #[test]
    fn unique_values_sorted_and_deduped() {
        let values = unique_values(&registry(), &path("model_category"));
        assert_eq!(values, vec!["LLM".to_string(), "embed".to_string()]);
    }

    #[test]
    fn unique_values_skip_missing() {
        let values = unique_values(&registry(), &path("context_window"));
        assert_eq!(values, vec!["128000".to_string(), "200000".to_string()]);
    }

    #[test]
    fn field_stats_numeric_only() {
        let stats = field_stats(&registry(), &path("context_window")).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 128000.0);
        assert_eq!(stats.max, 200000.0);
        assert_eq!(stats.unique, 2);
        assert!((stats.avg - 152000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn field_stats_none_when_no_numeric_values() {
        assert!(field_stats(&registry(), &path("parent")).is_none());
        assert!(field_stats(&registry(), &path("ghost")).is_none());
    }

    #[test]
    fn summary_counts() {
        let summary = Summary::compute(&registry());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_parent[0], ("OpenAI".to_string(), 3));
        assert_eq!(summary.vision_count, 2);
        assert!(summary.context_window.is_some());

        // Level buckets come back ascending, missing bucket last.
        let levels: Vec<&str> = summary.by_enabled.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(levels, ["1", "5", MISSING_BUCKET]);
    }

    #[test]
    fn stats_are_read_only() {
        let records = registry();
        let before: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        let _ = Summary::compute(&records);
        let _ = count_by(&records, &path("parent"));
        let after: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        assert_eq!(before, after);
    }
}
