//! Mapping resolution: automatic scoring pass plus override layers.
//!
//! Resolution never fails: every logical field gets exactly one entry. An
//! unresolvable field degrades to a self-referential fallback target, which
//! the coverage analyzer later reports as invalid. The output feeds a human
//! review step, not a final authority.

use std::collections::BTreeMap;

use tracing::debug;

use formmap_model::{
    EntryKind, FieldKind, LogicalField, MappingEntry, MappingTable, OverrideConfig, PhysicalField,
};

use crate::score::score;

/// Builds the mapping table from three layers, later layers winning by key:
/// the automatic scoring pass, configured renames, and verbatim manual
/// entries.
#[must_use]
pub fn resolve(
    logical: &[LogicalField],
    physical: &[PhysicalField],
    overrides: &OverrideConfig,
) -> MappingTable {
    let kinds = kind_index(physical);
    let table = automatic_pass(logical, physical, &kinds);
    let table = apply_renames(table, &overrides.renames, &kinds);
    apply_manual(table, &overrides.manual)
}

/// Scores every logical field against every physical field and picks the
/// first maximum in physical load order. A maximum of 0 falls back to the
/// logical name itself as the target (best effort, never fail).
#[must_use]
pub fn automatic_pass(
    logical: &[LogicalField],
    physical: &[PhysicalField],
    kinds: &BTreeMap<&str, FieldKind>,
) -> MappingTable {
    let mut table = MappingTable::new();
    for field in logical {
        let mut best: Option<&str> = None;
        let mut best_score = 0usize;
        for candidate in physical {
            let candidate_score = score(&field.name, &candidate.name);
            // Strictly-greater keeps the first maximum in load order.
            if candidate_score > best_score {
                best_score = candidate_score;
                best = Some(&candidate.name);
            }
        }
        let target = match best {
            Some(name) => name.to_string(),
            None => {
                debug!(logical = %field.name, "no candidate overlaps; falling back to verbatim target");
                field.name.clone()
            }
        };
        let entry = MappingEntry::new(entry_kind_for(&target, kinds), target);
        table.insert(field.name.clone(), entry);
    }
    table
}

/// Replaces the automatic target for configured logical names with an exact
/// physical name. The entry kind is recomputed from the renamed target.
/// Names without an entry from the automatic pass are left alone.
#[must_use]
pub fn apply_renames(
    mut table: MappingTable,
    renames: &BTreeMap<String, String>,
    kinds: &BTreeMap<&str, FieldKind>,
) -> MappingTable {
    for (logical, target) in renames {
        if let Some(entry) = table.get_mut(logical) {
            entry.target = target.clone();
            entry.kind = entry_kind_for(target, kinds);
        }
    }
    table
}

/// Inserts fully-specified entries verbatim, replacing any earlier result
/// for the same logical name. Manual entries are the only source of
/// radio-group kinds, value maps, and checked values.
#[must_use]
pub fn apply_manual(
    mut table: MappingTable,
    manual: &BTreeMap<String, MappingEntry>,
) -> MappingTable {
    for (logical, entry) in manual {
        table.insert(logical.clone(), entry.clone());
    }
    table
}

/// Index from physical name to kind, for recomputing entry kinds.
#[must_use]
pub fn kind_index(physical: &[PhysicalField]) -> BTreeMap<&str, FieldKind> {
    physical
        .iter()
        .map(|field| (field.name.as_str(), field.kind))
        .collect()
}

/// Checkbox when the target is a button field, Text otherwise. Targets
/// outside the physical set (fallbacks, stale renames) default to Text.
fn entry_kind_for(target: &str, kinds: &BTreeMap<&str, FieldKind>) -> EntryKind {
    match kinds.get(target) {
        Some(FieldKind::Button) => EntryKind::Checkbox,
        _ => EntryKind::Text,
    }
}
