//! Coverage report derived from a mapping table and a physical field set.

use serde::{Deserialize, Serialize};

/// Reconciliation of a mapping table against the document's field set.
///
/// Purely derived data: recomputed on demand from the current table and
/// physical field list, with no side effects. `unmapped` and `invalid` are
/// sorted lexicographically and disjoint by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Number of distinct physical field names in the document.
    pub total_physical: usize,
    /// Distinct physical names claimed by the table via `target` or
    /// `value_map` values. Counts stale claims too, so this can exceed the
    /// number of covered fields.
    pub mapped_count: usize,
    /// Physical names no entry claims.
    pub unmapped: Vec<String>,
    /// Claimed names absent from the physical set.
    pub invalid: Vec<String>,
    /// Percentage of physical fields claimed by the table, 0.0 for an empty
    /// document.
    pub coverage_pct: f64,
}

impl CoverageReport {
    /// True when every physical field is claimed and every claim is valid.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty() && self.invalid.is_empty()
    }

    /// Number of physical fields no entry claims.
    #[must_use]
    pub fn unmapped_count(&self) -> usize {
        self.unmapped.len()
    }

    /// Number of stale claims pointing outside the physical set.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips() {
        let report = CoverageReport {
            total_physical: 3,
            mapped_count: 2,
            unmapped: vec!["City".to_string()],
            invalid: vec![],
            coverage_pct: 66.7,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CoverageReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
        assert!(!round.is_clean());
        assert_eq!(round.unmapped_count(), 1);
        assert_eq!(round.invalid_count(), 0);
    }
}
