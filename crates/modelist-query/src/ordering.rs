//! Stable multi-key ordering over a record set.
//!
//! Sorting works over an index array into the record slice rather than
//! copying the records; callers reconstruct their ordered view from the
//! returned indices. The sort is stable: records comparing equal on every
//! key keep their original relative order, and the `reverse` flag inverts
//! the computed ordering once (equal stays equal), so ties keep insertion
//! order in both directions.

use std::cmp::Ordering;

use crate::error::Result;
use crate::path::FieldPath;
use crate::record::Record;

/// A multi-key sort specification.
#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    fields: Vec<FieldPath>,
    reverse: bool,
    case_sensitive: bool,
}

impl SortSpec {
    /// Builds a sort spec from raw field names, validating each as a path.
    pub fn parse(fields: &[String], reverse: bool, case_sensitive: bool) -> Result<SortSpec> {
        let fields = fields
            .iter()
            .map(|f| FieldPath::parse(f.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(SortSpec {
            fields,
            reverse,
            case_sensitive,
        })
    }

    /// Returns `true` if no sort fields were given.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Computes the sorted order of `records` as an index array.
    ///
    /// Comparison per field is numeric when both values coerce to numbers,
    /// otherwise lexicographic (lowercased unless case-sensitive). Missing
    /// values compare as empty strings.
    pub fn sort_order(&self, records: &[Record]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        if self.fields.is_empty() {
            return indices;
        }

        indices.sort_by(|&a, &b| {
            let ordering = self.compare(&records[a], &records[b]);
            if self.reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
        indices
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        for field in &self.fields {
            let va = a.field(field);
            let vb = b.field(field);

            let ordering = match (va.coerce_number(), vb.coerce_number()) {
                (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
                _ => {
                    let sa = self.fold(va.display().unwrap_or_default());
                    let sb = self.fold(vb.display().unwrap_or_default());
                    sa.cmp(&sb)
                }
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn fold(&self, s: String) -> String {
        if self.case_sensitive {
            s
        } else {
            s.to_lowercase()
        }
    }
}
