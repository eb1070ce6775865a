//! The invocation pipeline.
//!
//! Order of operations: load → build the filter chain (presets, `-F`
//! expressions, quick-filter shortcuts - all parsed before evaluation) →
//! availability gate → chain filter → statistics short-circuit → sort →
//! limit → format. Every validation failure surfaces here as an error
//! value; only `main` turns it into an exit code.

use anyhow::{anyhow, Context};
use tracing::{debug, warn};

use modelist_query::{
    parse_expression, Combine, FieldPath, FilterChain, Record, RegexGuard, SortSpec,
};

use crate::cli::Cli;
use crate::format::{formatter_for, FormatOptions};
use crate::loader::load_registry;
use crate::presets;
use crate::report;

/// Runs one full invocation and returns the rendered output.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let records = load_registry(&cli.registry_file)?;

    let chain = build_chain(cli)?;
    debug!(filters = chain.len(), or = cli.use_or, negate = cli.negate, "filter chain built");

    let mut subset: Vec<Record> = records
        .into_iter()
        .filter(|record| cli.include_disabled || is_active(record))
        .filter(|record| chain.matches(record))
        .collect();
    debug!(matched = subset.len(), "records matched");

    // Statistics modes render the filtered subset and stop.
    if cli.stats {
        return Ok(report::render_summary(&subset));
    }
    if let Some(field) = &cli.count_by {
        return Ok(report::render_count_by(&subset, &FieldPath::parse(field)?));
    }
    if let Some(field) = &cli.unique {
        return Ok(report::render_unique(&subset, &FieldPath::parse(field)?));
    }

    if let Some(sort) = &cli.sort {
        let fields: Vec<String> = sort.split(',').map(|f| f.trim().to_string()).collect();
        let spec = SortSpec::parse(&fields, cli.reverse, cli.case_sensitive)?;
        let order = spec.sort_order(&subset);
        subset = apply_order(subset, order);
    }

    if let Some(limit) = cli.limit {
        subset.truncate(limit);
    }

    let opts = format_options(cli)?;
    let output = formatter_for(cli.format)
        .format(&subset, &opts)
        .context("rendering output")?;
    Ok(output)
}

/// Builds the filter chain from presets, `-F` expressions, and the
/// quick-filter shortcuts. All expressions are parsed before any record is
/// evaluated; the first bad expression aborts the run.
fn build_chain(cli: &Cli) -> anyhow::Result<FilterChain> {
    let combine = if cli.use_or { Combine::Any } else { Combine::All };
    let mut chain = FilterChain::with_combine(combine).negate(cli.negate);
    let mut guard = RegexGuard::new();

    if let Some(name) = &cli.preset {
        let preset = presets::find(name).ok_or_else(|| {
            anyhow!(
                "unknown preset '{name}'; available presets: {}",
                presets::names().join(", ")
            )
        })?;
        for expr in preset.filters {
            chain.push(parse_expression(expr, cli.case_sensitive, &mut guard)?);
        }
    }

    for expr in &cli.filters {
        chain.push(parse_expression(expr, cli.case_sensitive, &mut guard)?);
    }

    let quick = quick_filter_expressions(cli);
    if !quick.is_empty() {
        warn!("quick filter options are deprecated, use -F instead");
        for expr in &quick {
            chain.push(parse_expression(expr, cli.case_sensitive, &mut guard)?);
        }
    }

    Ok(chain)
}

/// Expands the single-field shortcut flags into filter expressions.
fn quick_filter_expressions(cli: &Cli) -> Vec<String> {
    let mut exprs = Vec::new();
    if let Some(alias) = &cli.alias {
        exprs.push(format!("alias:equals:{alias}"));
    }
    if let Some(parent) = &cli.parent {
        exprs.push(format!("parent:equals:{parent}"));
    }
    if let Some(category) = &cli.model_category {
        exprs.push(format!("model_category:equals:{category}"));
    }
    if let Some(family) = &cli.family {
        exprs.push(format!("family:equals:{family}"));
    }
    if let Some(available) = cli.available {
        exprs.push(format!("available:<=:{available}"));
    }
    if let Some(enabled) = cli.enabled {
        exprs.push(format!("enabled:<=:{enabled}"));
    }
    exprs
}

/// Records with `available == 0` or `enabled == 0` (or missing either) are
/// excluded unless `-d` is given.
fn is_active(record: &Record) -> bool {
    let level = |name: &str| {
        let path = FieldPath::parse(name).expect("static field name");
        record.field(&path).coerce_number().unwrap_or(0.0)
    };
    level("available") != 0.0 && level("enabled") != 0.0
}

/// Reorders records by a permutation produced from `SortSpec::sort_order`.
fn apply_order(records: Vec<Record>, order: Vec<usize>) -> Vec<Record> {
    let mut slots: Vec<Option<Record>> = records.into_iter().map(Some).collect();
    order
        .into_iter()
        .map(|i| slots[i].take().expect("order is a permutation"))
        .collect()
}

fn format_options(cli: &Cli) -> anyhow::Result<FormatOptions> {
    let columns = match &cli.columns {
        Some(raw) => Some(
            raw.split(',')
                .map(|c| FieldPath::parse(c.trim()))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => None,
    };
    let group_by = match &cli.group {
        Some(field) => Some(FieldPath::parse(field)?),
        None => None,
    };

    Ok(FormatOptions {
        columns,
        show_header: !cli.no_header,
        group_by,
    })
}
