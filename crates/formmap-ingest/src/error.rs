//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading collaborator inputs.
///
/// These are the only fatal failures in the mapping subsystem: a field record
/// missing its required keys, unreadable files, or malformed JSON. Coverage
/// gaps and stale targets are data, not errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Physical field list is not the expected JSON shape.
    #[error("malformed field list {path}: {source}")]
    FieldList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Override configuration is not the expected JSON shape.
    #[error("malformed override config {path}: {source}")]
    OverrideConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialized mapping table is not the expected JSON shape.
    #[error("malformed mapping table {path}: {source}")]
    MappingTable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/data/fields.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/data/fields.json"));
    }
}
