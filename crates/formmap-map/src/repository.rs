//! Filesystem repository for resolved mapping tables.
//!
//! Tables are stored as JSON files named `{form_id}.json` so a reviewed
//! mapping can be reused across runs (and re-analyzed after the source PDF
//! changes). Resolution itself never persists anything; saving is an
//! explicit step.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use formmap_model::{MappingEntry, MappingTable};

/// Directory-based store of mapping tables keyed by form identifier.
#[derive(Debug, Clone)]
pub struct MappingRepository {
    base_dir: PathBuf,
}

/// Summary of one stored table, for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTableInfo {
    /// Form identifier the table belongs to.
    pub form_id: String,
    /// File path where the table is stored.
    pub file_path: PathBuf,
    /// Number of mapping entries.
    pub entry_count: usize,
}

/// A mapping table with repository metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMappingTable {
    /// Form identifier this table was resolved for.
    pub form_id: String,
    /// Logical name to entry, the filler contract.
    pub entries: BTreeMap<String, MappingEntry>,
    /// When this table was saved (ISO 8601).
    pub saved_at: Option<String>,
    /// Optional reviewer notes.
    pub description: Option<String>,
    /// Version of the storage format.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredMappingTable {
    /// Wraps a resolved table for storage.
    pub fn new(form_id: impl Into<String>, table: MappingTable) -> Self {
        Self {
            form_id: form_id.into(),
            entries: table,
            saved_at: Some(timestamp()),
            description: None,
            version: default_version(),
        }
    }

    /// Adds reviewer notes.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Current UTC timestamp in ISO 8601 form, without an external dependency.
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format_timestamp(duration.as_secs())
}

fn format_timestamp(secs: u64) -> String {
    let (year, month, day) = civil_from_days(secs / 86_400);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        (secs % 86_400) / 3_600,
        (secs % 3_600) / 60,
        secs % 60
    )
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of the
    // 400-year era arithmetic.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = era * 400 + yoe + u64::from(month <= 2);
    (year, month, day)
}


impl MappingRepository {
    /// Opens a repository at the given directory, creating it if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).with_context(|| {
            format!(
                "failed to create mapping repository: {}",
                base_dir.display()
            )
        })?;
        Ok(Self { base_dir })
    }

    /// Base directory of this repository.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves a resolved table under the given form id.
    pub fn save(&self, form_id: &str, table: &MappingTable) -> Result<PathBuf> {
        let stored = StoredMappingTable::new(form_id, table.clone());
        self.save_stored(&stored)
    }

    /// Saves a stored table (with metadata).
    pub fn save_stored(&self, stored: &StoredMappingTable) -> Result<PathBuf> {
        let filename = table_filename(&stored.form_id);
        let path = self.base_dir.join(&filename);
        let json = serde_json::to_string_pretty(stored)
            .with_context(|| format!("failed to serialize mapping table for {filename}"))?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write mapping table to {}", path.display()))?;
        Ok(path)
    }

    /// Loads the table for a form id. Returns `None` when none is stored.
    pub fn load(&self, form_id: &str) -> Result<Option<MappingTable>> {
        Ok(self.load_stored(form_id)?.map(|stored| stored.entries))
    }

    /// Loads a stored table with its metadata.
    pub fn load_stored(&self, form_id: &str) -> Result<Option<StoredMappingTable>> {
        let path = self.base_dir.join(table_filename(form_id));
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read mapping table from {}", path.display()))?;
        let stored: StoredMappingTable = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse mapping table from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// Lists all stored tables, sorted by form id.
    pub fn list(&self) -> Result<Vec<StoredTableInfo>> {
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("failed to read repository: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            if let Ok(stored) = serde_json::from_str::<StoredMappingTable>(&contents) {
                infos.push(StoredTableInfo {
                    form_id: stored.form_id.clone(),
                    file_path: path,
                    entry_count: stored.entries.len(),
                });
            }
        }
        infos.sort_by(|a, b| a.form_id.cmp(&b.form_id));
        Ok(infos)
    }

    /// Deletes a stored table; returns whether one existed.
    pub fn delete(&self, form_id: &str) -> Result<bool> {
        let path = self.base_dir.join(table_filename(form_id));
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to delete mapping table: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Checks whether a table is stored for the form id.
    #[must_use]
    pub fn exists(&self, form_id: &str) -> bool {
        self.base_dir.join(table_filename(form_id)).exists()
    }
}

fn table_filename(form_id: &str) -> String {
    format!("{}.json", normalize_id(form_id))
}

/// Normalizes a form id for use in filenames.
fn normalize_id(id: &str) -> String {
    id.trim()
        .to_uppercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { '_' })
        .collect()
}
