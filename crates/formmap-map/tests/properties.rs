//! Property tests for the normalizer, scorer, and coverage invariants.

use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::{ProptestConfig, prop_assert, prop_assert_eq, proptest};

use formmap_map::{analyze, normalize, resolve, score};
use formmap_model::{LogicalField, OverrideConfig, PhysicalField};

fn name_strategy() -> impl proptest::strategy::Strategy<Value = String> {
    "[A-Za-z0-9_ $,.-]{0,16}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalize_is_idempotent(name in name_strategy()) {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn normalize_yields_only_lowercase_alphanumerics(name in name_strategy()) {
        let normalized = normalize(&name);
        prop_assert!(normalized
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn containment_scores_by_the_logical_side_in_both_directions(name in name_strategy(), suffix in "[a-z]{1,4}") {
        // Build a guaranteed containment pair: whichever side is passed as
        // the logical name supplies the score, by its normalized length.
        let longer = format!("{name}{suffix}");
        let short_norm = normalize(&name);
        let long_norm = normalize(&longer);
        if !short_norm.is_empty() {
            prop_assert_eq!(score(&name, &longer), short_norm.len());
            prop_assert_eq!(score(&longer, &name), long_norm.len());
        }
    }

    #[test]
    fn token_rule_is_symmetric(a in name_strategy(), b in name_strategy()) {
        let a_norm = normalize(&a);
        let b_norm = normalize(&b);
        // Restrict to pairs decided by token intersection.
        if !a_norm.is_empty()
            && !b_norm.is_empty()
            && !a_norm.contains(&b_norm)
            && !b_norm.contains(&a_norm)
        {
            prop_assert_eq!(score(&a, &b), score(&b, &a));
        }
    }

    #[test]
    fn unmapped_and_invalid_are_always_disjoint(
        physical_names in vec("[A-Za-z0-9_ ]{1,10}", 0..8),
        logical_names in vec("[a-z0-9_]{1,10}", 0..8),
    ) {
        let physical: Vec<PhysicalField> = physical_names
            .iter()
            .map(|name| PhysicalField::new(name.clone(), "Tx"))
            .collect();
        let logical: Vec<LogicalField> = logical_names
            .iter()
            .map(|name| LogicalField::new(name.clone()))
            .collect();

        let table = resolve(&logical, &physical, &OverrideConfig::default());
        let report = analyze(&table, &physical);

        let unmapped: BTreeSet<&String> = report.unmapped.iter().collect();
        let invalid: BTreeSet<&String> = report.invalid.iter().collect();
        prop_assert!(unmapped.is_disjoint(&invalid));

        // unmapped comes from the physical set; invalid from outside it.
        let physical_set: BTreeSet<&str> =
            physical.iter().map(|field| field.name.as_str()).collect();
        prop_assert!(report.unmapped.iter().all(|name| physical_set.contains(name.as_str())));
        prop_assert!(report.invalid.iter().all(|name| !physical_set.contains(name.as_str())));
    }

    #[test]
    fn tables_built_from_physical_names_have_no_invalid_entries(
        physical_names in vec("[A-Za-z0-9 ]{1,10}", 1..8),
    ) {
        let physical: Vec<PhysicalField> = physical_names
            .iter()
            .map(|name| PhysicalField::new(name.clone(), "Tx"))
            .collect();
        // Logical names copied from the physical side always resolve inside
        // the set (exact substring match with score >= 1).
        let logical: Vec<LogicalField> = physical
            .iter()
            .map(|field| LogicalField::new(field.name.clone()))
            .collect();

        let table = resolve(&logical, &physical, &OverrideConfig::default());
        let report = analyze(&table, &physical);
        prop_assert!(report.invalid.is_empty());

        let covered = report.total_physical - report.unmapped.len();
        let expected_pct = covered as f64 / report.total_physical as f64 * 100.0;
        prop_assert!((report.coverage_pct - expected_pct).abs() < 1e-9);
    }
}
