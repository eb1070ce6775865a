//! Output formatting strategies.
//!
//! Five interchangeable renderers share the [`Formatter`] contract: given
//! the filtered (and possibly sorted/limited) record subset plus
//! format-specific options, produce one text output. Structured formats
//! (JSON, YAML) serialize the full attribute trees; tabular formats (table,
//! CSV) project records onto a column set.

mod csv_format;
mod json;
mod simple;
mod table;
mod tree;
mod yaml;

use clap::ValueEnum;
use thiserror::Error;

use modelist_query::{FieldPath, Record};

pub use csv_format::CsvFormatter;
pub use json::JsonFormatter;
pub use simple::SimpleFormatter;
pub use table::TableFormatter;
pub use tree::TreeFormatter;
pub use yaml::YamlFormatter;

/// The user-facing output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Simple `name (alias)` listing.
    #[default]
    Default,
    /// Fixed-width aligned columns.
    Table,
    /// Pretty-printed JSON of the record mapping.
    Json,
    /// One row per record, quoted as needed.
    Csv,
    /// YAML rendering of the record mapping.
    Yaml,
    /// Records grouped under one field's values.
    Tree,
}

/// Errors that can occur while rendering output.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Format-specific options resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Column subset for table/CSV output; `None` means the default set.
    pub columns: Option<Vec<FieldPath>>,
    /// Emit the header row in table/CSV output.
    pub show_header: bool,
    /// Grouping field for tree output; `None` means `parent`.
    pub group_by: Option<FieldPath>,
}

/// Renders a record subset as text.
pub trait Formatter {
    fn format(&self, records: &[Record], opts: &FormatOptions) -> Result<String, FormatError>;
}

/// Selects the formatter implementation for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Default => Box::new(SimpleFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Tree => Box::new(TreeFormatter),
    }
}

/// Default column set for table and CSV output.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "model",
    "alias",
    "parent",
    "model_category",
    "enabled",
    "available",
    "context_window",
];

/// Resolves the effective column paths for tabular output.
pub(crate) fn effective_columns(opts: &FormatOptions) -> Vec<FieldPath> {
    match &opts.columns {
        Some(columns) => columns.clone(),
        None => DEFAULT_COLUMNS
            .iter()
            .map(|c| FieldPath::parse(c).expect("static column name"))
            .collect(),
    }
}

/// Cell text for a record field; `null_repr` stands in for missing values.
pub(crate) fn cell(record: &Record, path: &FieldPath, null_repr: &str) -> String {
    record
        .field(path)
        .display()
        .unwrap_or_else(|| null_repr.to_string())
}
