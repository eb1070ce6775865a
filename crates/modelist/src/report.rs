//! Text rendering for the statistics modes (`-S`, `-b`, `-u`).

use modelist_query::stats::{count_by, field_stats, unique_values, Summary};
use modelist_query::{FieldPath, Record};

const RULE: &str = "========================================";

/// Renders the grouped-count report for `-b FIELD`.
pub fn render_count_by(records: &[Record], field: &FieldPath) -> String {
    if records.is_empty() {
        return "No models to analyze.".to_string();
    }

    let counts = count_by(records, field);
    let mut lines = vec![format!("Model count by '{field}':"), RULE.to_string()];
    for (value, count) in &counts {
        lines.push(format!("{value:<30} : {count:>4}"));
    }
    lines.push(RULE.to_string());
    lines.push(format!(
        "Total: {} models in {} groups",
        records.len(),
        counts.len()
    ));
    lines.join("\n")
}

/// Renders the distinct-values report for `-u FIELD`.
pub fn render_unique(records: &[Record], field: &FieldPath) -> String {
    if records.is_empty() {
        return "No models to analyze.".to_string();
    }

    let values = unique_values(records, field);
    let mut lines = vec![format!("Unique values for '{field}':"), RULE.to_string()];
    if values.is_empty() {
        lines.push("[No values found]".to_string());
    } else {
        for value in &values {
            lines.push(format!("  {value}"));
        }
    }
    lines.push(RULE.to_string());
    lines.push(format!("Total: {} unique values", values.len()));
    lines.join("\n")
}

/// Renders the overall summary for `-S`.
pub fn render_summary(records: &[Record]) -> String {
    if records.is_empty() {
        return "No models to analyze.".to_string();
    }

    let summary = Summary::compute(records);
    let mut lines = vec![
        "Model Statistics Summary".to_string(),
        "========================".to_string(),
        format!("Total models: {}", summary.total),
        String::new(),
    ];

    lines.push("By Provider:".to_string());
    for (parent, count) in &summary.by_parent {
        lines.push(format!("  {parent}: {count}"));
    }
    lines.push(String::new());

    lines.push("By Category:".to_string());
    for (category, count) in &summary.by_category {
        lines.push(format!("  {category}: {count}"));
    }
    lines.push(String::new());

    lines.push("By Availability Level:".to_string());
    for (level, count) in &summary.by_available {
        lines.push(format!("  Level {level}: {count} models"));
    }
    lines.push(String::new());

    lines.push("By Enabled Level:".to_string());
    for (level, count) in &summary.by_enabled {
        lines.push(format!("  Level {level}: {count} models"));
    }
    lines.push(String::new());

    let percent = summary.vision_count as f64 / summary.total as f64 * 100.0;
    lines.push(format!(
        "Vision-capable models: {} ({percent:.1}%)",
        summary.vision_count
    ));

    if let Some(ctx) = &summary.context_window {
        lines.push(String::new());
        lines.push("Context Window Stats:".to_string());
        lines.push(format!("  Min: {} tokens", ctx.min as i64));
        lines.push(format!("  Max: {} tokens", ctx.max as i64));
        lines.push(format!("  Average: {:.0} tokens", ctx.avg));
    }

    lines.join("\n")
}

/// Renders detailed numeric statistics for one field (used by tests and
/// library callers; the CLI surfaces it through the summary).
pub fn render_field_stats(records: &[Record], field: &FieldPath) -> Option<String> {
    let stats = field_stats(records, field)?;
    Some(format!(
        "{field}: count={} min={} max={} avg={:.2} sum={} unique={}",
        stats.count, stats.min, stats.max, stats.avg, stats.sum, stats.unique
    ))
}
