//! modelist-query - Filter/query engine for model registry records.
//!
//! The engine takes a registry of [`Record`]s (name plus attribute tree),
//! parses user-supplied filter expressions into typed [`Filter`]s, combines
//! them with a [`FilterChain`], and sorts and aggregates the surviving set.
//! It is fully synchronous, holds no global state, and raises every
//! validation error before the first record is evaluated.
//!
//! # Quick Start
//!
//! ```rust
//! use modelist_query::{Combine, FilterChain, RegexGuard, Record, parse_expression};
//! use serde_json::json;
//!
//! let records: Vec<Record> = [
//!     ("gpt-4o", json!({ "parent": "OpenAI", "enabled": 1 })),
//!     ("claude-sonnet", json!({ "parent": "Anthropic", "enabled": 0 })),
//! ]
//! .into_iter()
//! .map(|(name, attrs)| Record::new(name, attrs.as_object().unwrap().clone()))
//! .collect();
//!
//! // Every expression is validated here, before evaluation.
//! let mut guard = RegexGuard::new();
//! let mut chain = FilterChain::with_combine(Combine::All);
//! chain.push(parse_expression("parent:equals:OpenAI", false, &mut guard).unwrap());
//! chain.push(parse_expression("enabled:>=:1", false, &mut guard).unwrap());
//!
//! let matching = chain.matching_indices(&records);
//! assert_eq!(matching, vec![0]);
//! ```
//!
//! # Expression syntax
//!
//! `field:operator:value`, or `field=value` as shorthand for equality. The
//! value may contain colons - splitting stops after the second colon. Nested
//! fields use dot notation (`token_costs.input`). See [`FilterOp`] for the
//! operator set and [`guard`] for how regex operands are vetted.

mod chain;
mod error;
mod expr;
mod filter;
pub mod guard;
mod op;
mod ordering;
mod path;
mod record;
pub mod stats;

pub use chain::{ChainMember, Combine, FilterChain};
pub use error::{FilterError, Result};
pub use expr::{parse_expression, parse_expressions};
pub use filter::{Filter, FilterValue};
pub use guard::{RegexGuard, MAX_PATTERN_LEN};
pub use op::FilterOp;
pub use ordering::SortSpec;
pub use path::{FieldPath, MAX_PATH_DEPTH, MAX_PATH_LEN};
pub use record::{coerce_number, display_value, FieldValue, Record};
