//! Physical field list loading.
//!
//! The PDF-inspection capability writes a flat JSON array of
//! `{"name": ..., "type": ...}` records. Loading is strict: a record missing
//! either key is a hard failure, with no partial processing. An empty array
//! is valid and means the document has no interactive form fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use formmap_model::PhysicalField;

use crate::error::{IngestError, Result};

/// On-disk shape of one inspected field record.
#[derive(Debug, Deserialize)]
struct RawFieldRecord {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
}

/// Loads the physical field list from a JSON file, preserving record order.
///
/// Order matters downstream: the resolver breaks score ties by first maximum
/// in load order.
pub fn load_physical_fields(path: &Path) -> Result<Vec<PhysicalField>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawFieldRecord> =
        serde_json::from_str(&contents).map_err(|source| IngestError::FieldList {
            path: path.to_path_buf(),
            source,
        })?;
    if records.is_empty() {
        warn!(path = %path.display(), "field list is empty: document has no interactive fields");
    }
    let fields: Vec<PhysicalField> = records
        .into_iter()
        .map(|record| PhysicalField::new(record.name, &record.type_tag))
        .collect();
    debug!(path = %path.display(), count = fields.len(), "loaded physical fields");
    Ok(fields)
}
