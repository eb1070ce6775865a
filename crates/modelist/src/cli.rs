//! Command-line argument surface.

use std::path::PathBuf;

use clap::Parser;

use crate::format::OutputFormat;

/// List, filter, and inspect models from a registry file.
///
/// Filters use `field:operator:value` expressions (or `field=value` for
/// equality) and can be combined with AND (default) or OR logic. Nested
/// fields use dot notation, e.g. `token_costs.input`.
#[derive(Debug, Parser)]
#[command(name = "modelist", version)]
#[command(about = "Query, filter, and format an LLM model registry")]
#[command(after_help = "\
Filter operators:
  equals, not_equals, contains, not_contains, starts_with, ends_with,
  regex, in, not_in, exists, not_exists, ==, !=, <, <=, >, >=, between

Examples:
  modelist                                # list all enabled models
  modelist -F \"parent:equals:OpenAI\"      # filter by provider
  modelist -F \"context_window:>=:100000\" -o table -l 10
  modelist -P production -s parent,model
  modelist -b parent                      # count models per provider")]
pub struct Cli {
    /// Filter expression "field:operator:value" (repeatable)
    #[arg(short = 'F', long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    /// Use OR logic between filters (default: AND)
    #[arg(short = 'O', long = "or")]
    pub use_or: bool,

    /// Negate the combined filter result
    #[arg(short = 'N', long = "not")]
    pub negate: bool,

    /// Case-sensitive string matching
    #[arg(short = 'C', long)]
    pub case_sensitive: bool,

    /// Use a predefined filter preset
    #[arg(short = 'P', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Filter by alias (shortcut for -F "alias:equals:VALUE")
    #[arg(short = 'a', long)]
    pub alias: Option<String>,

    /// Filter by parent/provider (shortcut for -F "parent:equals:VALUE")
    #[arg(short = 'p', long)]
    pub parent: Option<String>,

    /// Filter by category (shortcut for -F "model_category:equals:VALUE")
    #[arg(short = 'c', long)]
    pub model_category: Option<String>,

    /// Filter by family (shortcut for -F "family:equals:VALUE")
    #[arg(short = 'f', long)]
    pub family: Option<String>,

    /// Filter by available level <= N
    #[arg(short = 'v', long, value_name = "N")]
    pub available: Option<u8>,

    /// Filter by enabled level <= N
    #[arg(short = 'e', long, value_name = "N")]
    pub enabled: Option<u8>,

    /// Output format
    #[arg(short = 'o', long = "format", value_enum, default_value = "default")]
    pub format: OutputFormat,

    /// Comma-separated list of columns for table/csv output
    #[arg(long, visible_alias = "col", value_name = "LIST")]
    pub columns: Option<String>,

    /// Omit header row in table/csv output
    #[arg(short = 'H', long = "no-header")]
    pub no_header: bool,

    /// Group results by field (tree format)
    #[arg(short = 'g', long = "group", value_name = "FIELD")]
    pub group: Option<String>,

    /// Comma-separated fields to sort by
    #[arg(short = 's', long = "sort", value_name = "FIELDS")]
    pub sort: Option<String>,

    /// Reverse sort order
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Limit output to N results
    #[arg(short = 'l', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show registry statistics
    #[arg(short = 'S', long)]
    pub stats: bool,

    /// Count models by field value
    #[arg(short = 'b', long = "count-by", value_name = "FIELD")]
    pub count_by: Option<String>,

    /// Show unique values for a field
    #[arg(short = 'u', long, value_name = "FIELD")]
    pub unique: Option<String>,

    /// Path to the registry file
    #[arg(short = 'm', long = "registry-file", value_name = "PATH", default_value = "Models.json")]
    pub registry_file: PathBuf,

    /// Include models with available=0 or enabled=0
    #[arg(short = 'd', long)]
    pub include_disabled: bool,
}
