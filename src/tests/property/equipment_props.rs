//! Property-based tests for equipment selection
//!
//! Tests invariants:
//! - Loadout size always lands within the requested bounds
//! - At most one bundle appears in any loadout
//! - Drawn quantities respect each entry's configured range

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::generator::equipment::{choose, EquipmentItem};
use crate::core::tables::{DataTables, EquipmentEntry, EquipmentKind};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate valid (min, max) loadout bounds
fn arb_bounds() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=20, 0u32..=20).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: loadout size is within the requested bounds
    #[test]
    fn prop_loadout_size_in_bounds(
        seed in any::<u64>(),
        (min, max) in arb_bounds()
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let items = choose(&mut rng, &tables.equipment, min, max).unwrap();
        prop_assert!(
            items.len() >= min as usize && items.len() <= max as usize,
            "loadout of {} outside {}..={}",
            items.len(),
            min,
            max
        );
    }

    /// Property: at most one bundle per loadout
    #[test]
    fn prop_at_most_one_bundle(
        seed in any::<u64>(),
        (min, max) in arb_bounds()
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let items = choose(&mut rng, &tables.equipment, min, max).unwrap();
        let bundles = items.iter().filter(|i| i.is_bundle()).count();
        prop_assert!(bundles <= 1, "got {} bundles", bundles);
    }

    /// Property: inverted bounds are always rejected
    #[test]
    fn prop_inverted_bounds_rejected(
        seed in any::<u64>(),
        max in 0u32..=49,
        delta in 1u32..=10
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let result = choose(&mut rng, &tables.equipment, max + delta, max);
        prop_assert!(result.is_err());
    }

    /// Property: an empty table degrades to an empty loadout
    #[test]
    fn prop_empty_table_is_empty_loadout(
        seed in any::<u64>(),
        (min, max) in arb_bounds()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let items = choose(&mut rng, &[], min, max).unwrap();
        prop_assert!(items.is_empty());
    }

    /// Property: drawn quantities respect the entry's configured range
    #[test]
    fn prop_quantities_in_entry_range(
        seed in any::<u64>(),
        lo in 1u32..=10,
        span in 0u32..=10
    ) {
        let hi = lo + span;
        let table = vec![EquipmentEntry {
            kind: EquipmentKind::Ammo,
            min_qty: Some(lo),
            max_qty: Some(hi),
            allow_duplicate: true,
            ..EquipmentEntry::single("Arrows")
        }];
        let mut rng = StdRng::seed_from_u64(seed);
        let items = choose(&mut rng, &table, 3, 3).unwrap();
        for item in items {
            match item {
                EquipmentItem::Detailed(detail) => prop_assert!(
                    detail.qty >= lo && detail.qty <= hi,
                    "qty {} outside {}..={}",
                    detail.qty,
                    lo,
                    hi
                ),
                EquipmentItem::Plain(name) => {
                    prop_assert!(false, "ammo '{}' lost its quantity", name)
                }
            }
        }
    }

    /// Property: selection is deterministic given the same seed
    #[test]
    fn prop_deterministic_with_same_seed(
        seed in any::<u64>(),
        (min, max) in arb_bounds()
    ) {
        let tables = DataTables::builtin();
        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        let items1 = choose(&mut rng1, &tables.equipment, min, max).unwrap();
        let items2 = choose(&mut rng2, &tables.equipment, min, max).unwrap();
        prop_assert_eq!(items1, items2);
    }
}
