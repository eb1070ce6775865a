//! Default listing: one `name (alias)` line per record.

use modelist_query::{FieldPath, Record};

use super::{FormatError, FormatOptions, Formatter};

pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn format(&self, records: &[Record], _opts: &FormatOptions) -> Result<String, FormatError> {
        let alias = FieldPath::parse("alias").expect("static field name");

        let lines: Vec<String> = records
            .iter()
            .map(|record| match record.field(&alias).display() {
                Some(a) if !a.is_empty() => format!("{} ({})", record.name, a),
                _ => record.name.clone(),
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_name_and_alias() {
        let records = vec![
            Record::new(
                "gpt-4o",
                json!({ "alias": "chatgpt" }).as_object().unwrap().clone(),
            ),
            Record::new("bare-model", json!({}).as_object().unwrap().clone()),
        ];

        let output = SimpleFormatter
            .format(&records, &FormatOptions::default())
            .unwrap();
        assert_eq!(output, "gpt-4o (chatgpt)\nbare-model");
    }

    #[test]
    fn empty_set_renders_empty() {
        let output = SimpleFormatter
            .format(&[], &FormatOptions::default())
            .unwrap();
        assert!(output.is_empty());
    }
}
