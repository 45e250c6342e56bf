//! Property tests for breakpoint normalization and resolution.

use breaky::breakpoints::{locate, normalize, resolve, BreakpointTable, Resolution};
use breaky::models::BreakpointSpec;
use proptest::prelude::*;

/// Up to eight breakpoints with distinct names and arbitrary thresholds.
fn spec_strategy() -> impl Strategy<Value = BreakpointSpec> {
    prop::collection::vec(0u32..5000, 1..8).prop_map(|thresholds| {
        thresholds
            .into_iter()
            .enumerate()
            .map(|(i, t)| (format!("bp{i}"), format!("{t}px")))
            .collect()
    })
}

fn min_threshold(table: &BreakpointTable) -> u32 {
    table.first().threshold
}

proptest! {
    #[test]
    fn normalize_is_idempotent(spec in spec_strategy()) {
        let table = normalize(&spec).unwrap();

        let again: BreakpointSpec = table
            .entries()
            .iter()
            .map(|entry| (entry.name.clone(), entry.value.clone()))
            .collect();
        let table_again = normalize(&again).unwrap();

        prop_assert_eq!(table.entries(), table_again.entries());
    }

    #[test]
    fn thresholds_are_ascending(spec in spec_strategy()) {
        let table = normalize(&spec).unwrap();
        let thresholds: Vec<_> = table.entries().iter().map(|e| e.threshold).collect();
        prop_assert!(thresholds.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(table.len(), spec.len());
    }

    #[test]
    fn below_first_iff_width_below_min(spec in spec_strategy(), width in 0u32..6000) {
        let table = normalize(&spec).unwrap();
        let resolution = resolve(&table, Some(width));

        prop_assert_eq!(resolution.is_below_first(), width < min_threshold(&table));
    }

    #[test]
    fn resolution_is_monotonic(spec in spec_strategy(), a in 0u32..6000, b in 0u32..6000) {
        let table = normalize(&spec).unwrap();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let rank = |width| match resolve(&table, Some(width)) {
            Resolution::BelowFirst => 0,
            Resolution::AtIndex(i) => i + 1,
            Resolution::Unresolved => unreachable!("width is always measured here"),
        };

        prop_assert!(rank(low) <= rank(high));
    }

    #[test]
    fn active_bucket_contains_width(spec in spec_strategy(), width in 0u32..6000) {
        let table = normalize(&spec).unwrap();

        if let Resolution::AtIndex(i) = resolve(&table, Some(width)) {
            let entries = table.entries();
            prop_assert!(entries[i].threshold <= width);
            if let Some(next) = entries.get(i + 1) {
                prop_assert!(width < next.threshold);
            }
        }
    }

    #[test]
    fn exact_threshold_starts_its_bucket(spec in spec_strategy(), pick in any::<prop::sample::Index>()) {
        let table = normalize(&spec).unwrap();
        let entries = table.entries();
        let threshold = entries[pick.index(entries.len())].threshold;

        match resolve(&table, Some(threshold)) {
            Resolution::AtIndex(i) => prop_assert_eq!(entries[i].threshold, threshold),
            other => prop_assert!(false, "expected a bucket, got {:?}", other),
        }
    }

    #[test]
    fn locate_finds_first_strictly_greater(spec in spec_strategy(), width in 0u32..6000) {
        let table = normalize(&spec).unwrap();
        let expected = table.entries().iter().position(|e| e.threshold > width);
        prop_assert_eq!(locate(&table, width), expected);
    }
}

#[test]
fn unmeasured_width_is_unresolved() {
    let table = normalize(&BreakpointSpec::default()).unwrap();
    assert_eq!(resolve(&table, None), Resolution::Unresolved);
    assert_eq!(resolve(&table, None).label(&table), "-");
}
