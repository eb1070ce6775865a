//! CSV output: one row per record over the effective column set.
//!
//! Quoting (values containing the delimiter, quotes, or newlines) is
//! handled by the `csv` writer. Missing values render as empty cells.

use modelist_query::Record;

use super::{cell, effective_columns, FormatError, FormatOptions, Formatter};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, records: &[Record], opts: &FormatOptions) -> Result<String, FormatError> {
        let columns = effective_columns(opts);
        let csv_err = |e: csv::Error| FormatError::Csv(e.to_string());

        let mut writer = csv::Writer::from_writer(vec![]);

        if opts.show_header {
            let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
            writer.write_record(&header).map_err(csv_err)?;
        }

        for record in records {
            let row: Vec<String> = columns
                .iter()
                .map(|path| cell(record, path, ""))
                .collect();
            writer.write_record(&row).map_err(csv_err)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| FormatError::Csv(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| FormatError::Csv(e.to_string()))?;
        Ok(text.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelist_query::FieldPath;
    use serde_json::json;

    fn opts(columns: &[&str], show_header: bool) -> FormatOptions {
        FormatOptions {
            columns: Some(
                columns
                    .iter()
                    .map(|c| FieldPath::parse(c).unwrap())
                    .collect(),
            ),
            show_header,
            group_by: None,
        }
    }

    #[test]
    fn rows_with_header() {
        let records = vec![Record::new(
            "gpt-4o",
            json!({ "parent": "OpenAI", "enabled": 1 })
                .as_object()
                .unwrap()
                .clone(),
        )];

        let output = CsvFormatter
            .format(&records, &opts(&["model", "parent", "enabled"], true))
            .unwrap();
        assert_eq!(output, "model,parent,enabled\ngpt-4o,OpenAI,1");
    }

    #[test]
    fn values_with_delimiter_are_quoted() {
        let records = vec![Record::new(
            "m",
            json!({ "notes": "fast, cheap" }).as_object().unwrap().clone(),
        )];

        let output = CsvFormatter
            .format(&records, &opts(&["model", "notes"], false))
            .unwrap();
        assert_eq!(output, "m,\"fast, cheap\"");
    }

    #[test]
    fn missing_values_are_empty_cells() {
        let records = vec![Record::new(
            "m",
            json!({}).as_object().unwrap().clone(),
        )];

        let output = CsvFormatter
            .format(&records, &opts(&["model", "alias"], false))
            .unwrap();
        assert_eq!(output, "m,");
    }
}
