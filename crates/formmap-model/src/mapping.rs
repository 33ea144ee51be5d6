//! Mapping table types shared between the resolver and its consumers.
//!
//! A [`MappingTable`] is the serialized contract with the form-filling
//! component: a JSON object from logical name to [`MappingEntry`]. The filler
//! relies only on `target`, `value_map`, and `checked_value`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the filler should write a value into the mapped field(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Plain text field.
    Text,
    /// Single checkbox toggled with `checked_value`.
    Checkbox,
    /// One logical value selects one of several physical buttons via
    /// `value_map`. Only manual overrides produce this kind.
    RadioGroup,
}

/// One resolved mapping from a logical field to the document.
///
/// `target` must reference a physical field name for the entry to be valid.
/// Entries whose target is absent from the physical set are *invalid*: they
/// are kept in the table and surfaced by the coverage analyzer, never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Entry kind, serialized as `type` for the filler.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Physical field name this entry writes to.
    #[serde(rename = "pdf_field")]
    pub target: String,
    /// Logical value to physical button name, for grouped layouts. Every
    /// value in the map is a claimed physical-field reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_map: Option<BTreeMap<String, String>>,
    /// Export value written when a checkbox is checked (usually `"On"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_value: Option<String>,
}

impl MappingEntry {
    /// Creates a plain entry with no value map or checked value.
    pub fn new(kind: EntryKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            value_map: None,
            checked_value: None,
        }
    }

    /// Every physical name this entry claims: the target plus all value-map
    /// values. Names may repeat when the target also appears in the map.
    pub fn claimed_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.target.as_str()).chain(
            self.value_map
                .iter()
                .flat_map(|map| map.values().map(String::as_str)),
        )
    }
}

/// Resolved mapping table keyed by logical name.
///
/// Built fresh each run by composing the automatic, rename, and manual
/// passes; later passes overwrite by key.
pub type MappingTable = BTreeMap<String, MappingEntry>;

/// Override configuration applied on top of the automatic pass.
///
/// Loaded from JSON; all sections are optional and default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Exact physical targets for known logical names. The entry kind is
    /// recomputed from the renamed target.
    pub renames: BTreeMap<String, String>,
    /// Fully-specified entries inserted verbatim, replacing any earlier
    /// result for the same logical name. The only source of
    /// [`EntryKind::RadioGroup`], `value_map`, and `checked_value`.
    pub manual: BTreeMap<String, MappingEntry>,
    /// Extra logical names appended after the ones extracted from source.
    pub logical_fields: Vec<String>,
}

impl OverrideConfig {
    /// True when no override of any kind is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty() && self.manual.is_empty() && self.logical_fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_filler_field_names() {
        let entry = MappingEntry::new(EntryKind::Text, "Email Address");
        let json = serde_json::to_value(&entry).expect("serialize entry");
        assert_eq!(json["type"], "text");
        assert_eq!(json["pdf_field"], "Email Address");
        assert!(json.get("value_map").is_none());
        assert!(json.get("checked_value").is_none());
    }

    #[test]
    fn radio_group_round_trips() {
        let json = r#"{
            "type": "radio_group",
            "pdf_field": "Mr",
            "value_map": {"Mr.": "Mr", "Mrs.": "Mrs"}
        }"#;
        let entry: MappingEntry = serde_json::from_str(json).expect("parse entry");
        assert_eq!(entry.kind, EntryKind::RadioGroup);
        let claimed: Vec<&str> = entry.claimed_names().collect();
        assert_eq!(claimed, vec!["Mr", "Mr", "Mrs"]);
    }

    #[test]
    fn override_config_defaults_to_empty() {
        let config: OverrideConfig = serde_json::from_str("{}").expect("parse config");
        assert!(config.is_empty());
    }
}
