//! Tree output: records grouped under one field's values.
//!
//! Groups print alphabetically with a per-group count; records keep their
//! registry order inside each group. Records missing the grouping field
//! land in the `[None]` bucket.

use std::collections::BTreeMap;

use modelist_query::stats::MISSING_BUCKET;
use modelist_query::{FieldPath, Record};

use super::{FormatError, FormatOptions, Formatter};

pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn format(&self, records: &[Record], opts: &FormatOptions) -> Result<String, FormatError> {
        let default_group = FieldPath::parse("parent").expect("static field name");
        let group_by = opts.group_by.as_ref().unwrap_or(&default_group);
        let alias = FieldPath::parse("alias").expect("static field name");

        let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
        for record in records {
            let key = match record.field(group_by).display() {
                Some(v) if !v.is_empty() => v,
                _ => MISSING_BUCKET.to_string(),
            };
            groups.entry(key).or_default().push(record);
        }

        let mut lines = Vec::new();
        for (key, members) in &groups {
            lines.push(format!("{} ({})", key, members.len()));
            for record in members {
                match record.field(&alias).display() {
                    Some(a) if !a.is_empty() => lines.push(format!("  {} ({})", record.name, a)),
                    _ => lines.push(format!("  {}", record.name)),
                }
            }
        }

        Ok(lines.join("\n"))
    }
}
