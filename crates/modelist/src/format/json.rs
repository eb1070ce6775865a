//! JSON output: a lossless serialization of the record subset.
//!
//! The output reparses to the same name → attributes mapping, which the
//! round-trip tests rely on.

use serde_json::{Map, Value};

use modelist_query::Record;

use super::{FormatError, FormatOptions, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, records: &[Record], _opts: &FormatOptions) -> Result<String, FormatError> {
        let mapping: Map<String, Value> = records
            .iter()
            .map(|record| (record.name.clone(), Value::Object(record.attrs.clone())))
            .collect();

        Ok(serde_json::to_string_pretty(&Value::Object(mapping))?)
    }
}
