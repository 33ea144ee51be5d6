//! Coverage and gap analysis over a resolved mapping table.

use std::collections::BTreeSet;

use formmap_model::{CoverageReport, MappingTable, PhysicalField};

/// Reconciles a mapping table against the document's field set.
///
/// Claimed names are every entry's target plus every value-map value; a
/// manual entry can contribute through both at once. The derived sets obey
/// `unmapped = physical - claimed` and `invalid = claimed - physical`, so
/// they are disjoint by construction. Purely derived, safe to recompute
/// after any edit to the table.
#[must_use]
pub fn analyze(table: &MappingTable, physical: &[PhysicalField]) -> CoverageReport {
    let physical_names: BTreeSet<&str> =
        physical.iter().map(|field| field.name.as_str()).collect();
    let claimed: BTreeSet<&str> = table
        .values()
        .flat_map(|entry| entry.claimed_names())
        .collect();

    let unmapped: Vec<String> = physical_names
        .difference(&claimed)
        .map(|name| (*name).to_string())
        .collect();
    let invalid: Vec<String> = claimed
        .difference(&physical_names)
        .map(|name| (*name).to_string())
        .collect();

    let covered = claimed.intersection(&physical_names).count();
    let coverage_pct = if physical_names.is_empty() {
        0.0
    } else {
        covered as f64 / physical_names.len() as f64 * 100.0
    };

    CoverageReport {
        total_physical: physical_names.len(),
        mapped_count: claimed.len(),
        unmapped,
        invalid,
        coverage_pct,
    }
}
