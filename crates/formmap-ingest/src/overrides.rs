//! Override configuration and serialized mapping table loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use formmap_model::{MappingTable, OverrideConfig};

use crate::error::{IngestError, Result};

/// Loads an override configuration from a JSON file.
///
/// Absent sections default to empty; callers pass [`OverrideConfig::default`]
/// when no file is configured at all.
pub fn load_overrides(path: &Path) -> Result<OverrideConfig> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: OverrideConfig =
        serde_json::from_str(&contents).map_err(|source| IngestError::OverrideConfig {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        renames = config.renames.len(),
        manual = config.manual.len(),
        "loaded override config"
    );
    Ok(config)
}

/// Loads a previously serialized mapping table for re-analysis.
///
/// The table may have been hand-edited since it was written; stale entries
/// are the coverage analyzer's concern, not a load failure.
pub fn load_mapping_table(path: &Path) -> Result<MappingTable> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table: MappingTable =
        serde_json::from_str(&contents).map_err(|source| IngestError::MappingTable {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = table.len(), "loaded mapping table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use formmap_model::EntryKind;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_renames_and_manual_entries() {
        let file = write_temp(
            r#"{
                "renames": {"email": "Email Address"},
                "manual": {
                    "title": {
                        "type": "radio_group",
                        "pdf_field": "Mr",
                        "value_map": {"Mr.": "Mr", "Mrs.": "Mrs"}
                    }
                }
            }"#,
        );
        let config = load_overrides(file.path()).expect("load overrides");
        assert_eq!(config.renames.get("email").map(String::as_str), Some("Email Address"));
        assert_eq!(config.manual["title"].kind, EntryKind::RadioGroup);
        assert!(config.logical_fields.is_empty());
    }

    #[test]
    fn malformed_overrides_are_fatal() {
        let file = write_temp(r#"{"renames": ["not", "a", "map"]}"#);
        let err = load_overrides(file.path()).expect_err("must fail");
        assert!(matches!(err, IngestError::OverrideConfig { .. }));
    }

    #[test]
    fn loads_mapping_table() {
        let file = write_temp(
            r#"{
                "city": {"type": "text", "pdf_field": "City"},
                "rrsp": {"type": "checkbox", "pdf_field": "RRSP", "checked_value": "On"}
            }"#,
        );
        let table = load_mapping_table(file.path()).expect("load table");
        assert_eq!(table.len(), 2);
        assert_eq!(table["city"].target, "City");
        assert_eq!(table["rrsp"].checked_value.as_deref(), Some("On"));
    }
}
