//! Fixed-width table output.
//!
//! Column widths fit the widest cell (or header) measured in display
//! columns, so wide characters align correctly. Missing values render
//! as `-`.

use unicode_width::UnicodeWidthStr;

use modelist_query::Record;

use super::{cell, effective_columns, FormatError, FormatOptions, Formatter};

const COLUMN_SEP: &str = "  ";
const NULL_REPR: &str = "-";

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, records: &[Record], opts: &FormatOptions) -> Result<String, FormatError> {
        let columns = effective_columns(opts);

        let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|path| cell(record, path, NULL_REPR))
                    .collect()
            })
            .collect();

        // Size each column to its widest content.
        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        if !opts.show_header {
            widths.iter_mut().for_each(|w| *w = 0);
        }
        for row in &rows {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.width());
            }
        }

        let render_row = |row: &[String]| -> String {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(value, width)| {
                    let pad = width.saturating_sub(value.width());
                    format!("{}{}", value, " ".repeat(pad))
                })
                .collect();
            cells.join(COLUMN_SEP).trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(rows.len() + 2);
        if opts.show_header {
            lines.push(render_row(&header));
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(rule.join(COLUMN_SEP).trim_end().to_string());
        }
        for row in &rows {
            lines.push(render_row(row));
        }

        Ok(lines.join("\n"))
    }
}
