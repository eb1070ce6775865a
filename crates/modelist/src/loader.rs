//! Registry loading.
//!
//! The registry file is a JSON object mapping record name to attribute
//! mapping. Loading is all-or-nothing: any failure returns a typed
//! [`LoadError`] and no partial data, before any filtering begins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use modelist_query::Record;

/// Errors raised while loading the registry file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("registry file not found: {0}")]
    NotFound(PathBuf),

    #[error("permission denied reading: {0}")]
    PermissionDenied(PathBuf),

    #[error("path is a directory, not a file: {0}")]
    IsDirectory(PathBuf),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid registry shape in {path}: {reason}")]
    Shape { path: PathBuf, reason: String },
}

/// Loads the full registry, preserving the file's record order.
pub fn load_registry(path: &Path) -> Result<Vec<Record>, LoadError> {
    if path.is_dir() {
        return Err(LoadError::IsDirectory(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => LoadError::PermissionDenied(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let root: Value = serde_json::from_str(&text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let Value::Object(entries) = root else {
        return Err(LoadError::Shape {
            path: path.to_path_buf(),
            reason: "top level must be an object of record name to attributes".to_string(),
        });
    };

    let mut records = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let Value::Object(attrs) = value else {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                reason: format!("record '{name}' is not an attribute mapping"),
            });
        };
        records.push(Record::new(name, attrs));
    }

    debug!(count = records.len(), path = %path.display(), "loaded registry");
    Ok(records)
}
