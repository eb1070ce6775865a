//! YAML output: a serialization usable as a configuration file.

use serde_json::{Map, Value};

use modelist_query::Record;

use super::{FormatError, FormatOptions, Formatter};

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, records: &[Record], _opts: &FormatOptions) -> Result<String, FormatError> {
        let mapping: Map<String, Value> = records
            .iter()
            .map(|record| (record.name.clone(), Value::Object(record.attrs.clone())))
            .collect();

        let text = serde_yaml::to_string(&Value::Object(mapping))?;
        Ok(text.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_nested_attributes() {
        let records = vec![Record::new(
            "gpt-4o",
            json!({ "parent": "OpenAI", "token_costs": { "input": 2.5 } })
                .as_object()
                .unwrap()
                .clone(),
        )];

        let output = YamlFormatter
            .format(&records, &FormatOptions::default())
            .unwrap();
        assert!(output.contains("gpt-4o:"));
        assert!(output.contains("parent: OpenAI"));
        assert!(output.contains("input: 2.5"));
    }

    #[test]
    fn output_parses_back_as_yaml() {
        let records = vec![Record::new(
            "m",
            json!({ "enabled": 1 }).as_object().unwrap().clone(),
        )];

        let output = YamlFormatter
            .format(&records, &FormatOptions::default())
            .unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed["m"]["enabled"], serde_yaml::Value::from(1));
    }
}
