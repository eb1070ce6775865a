//! modelist - Query, filter, and format an LLM model registry.
//!
//! The binary front for [`modelist_query`]: loads a JSON registry of model
//! records, applies filter expressions, and renders the result through one
//! of six output formats. The whole pipeline lives in [`run::execute`] and
//! returns errors as values; `main` is the only place that exits.

pub mod cli;
pub mod format;
pub mod loader;
pub mod presets;
pub mod report;
pub mod run;
