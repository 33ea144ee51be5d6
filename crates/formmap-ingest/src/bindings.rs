//! Logical field extraction from application form source.
//!
//! The application binds inputs with `register('field_name')` calls; the
//! literal identifiers in those calls are the logical field list. Extraction
//! returns them in first-occurrence order with duplicates removed.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use formmap_model::LogicalField;

use crate::error::{IngestError, Result};

static REGISTER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"register\(\s*'([^']+)'\s*\)|register\(\s*"([^"]+)"\s*\)"#)
        .expect("Invalid binding pattern regex")
});

/// Extracts logical field names from form source text.
pub fn extract_logical_fields(source: &str) -> Vec<LogicalField> {
    let mut seen = BTreeSet::new();
    let mut fields = Vec::new();
    for captures in REGISTER_CALL.captures_iter(source) {
        let name = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }
        fields.push(LogicalField::new(name));
    }
    fields
}

/// Reads a form source file and extracts its logical fields.
pub fn load_logical_fields(path: &Path) -> Result<Vec<LogicalField>> {
    let source = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let fields = extract_logical_fields(&source);
    debug!(path = %path.display(), count = fields.len(), "extracted logical fields");
    Ok(fields)
}
