//! Property-based tests for the coin allocator
//!
//! Tests invariants:
//! - The reconstructed total never exceeds the requested budget
//! - A zero (or negative) budget allocates zero coins
//! - Coin stacks preserve per-denomination totals and respect caps

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::generator::currency::{allocate, split_into_stacks, CoinSet};
use crate::core::tables::DataTables;

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate a budget in the range real generation produces (pool of at most
/// 100 gp plus a background bonus of at most 100).
fn arb_budget() -> impl Strategy<Value = f64> {
    0.0f64..=200.0
}

/// Generate an arbitrary coin set
fn arb_coins() -> impl Strategy<Value = CoinSet> {
    (0u32..2000, 0u32..2000, 0u32..2000).prop_map(|(gp, sp, cp)| CoinSet { gp, sp, cp })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the reconstructed total never exceeds the budget
    #[test]
    fn prop_total_never_exceeds_budget(
        seed in any::<u64>(),
        budget in arb_budget()
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let alloc = allocate(&mut rng, budget, &tables).unwrap();
        prop_assert!(
            alloc.total_gp <= budget + 1e-9,
            "budget {} overshot: {}",
            budget,
            alloc.total_gp
        );
        prop_assert!(alloc.total_gp >= 0.0);
    }

    /// Property: with the built-in base rates the full budget is preserved
    ///
    /// 1 gp = 10 sp = 100 cp, so any budget that is a whole number of copper
    /// converts without loss.
    #[test]
    fn prop_whole_copper_budget_preserved(
        seed in any::<u64>(),
        copper in 0u32..20_000
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let budget = copper as f64 / 100.0;
        let alloc = allocate(&mut rng, budget, &tables).unwrap();
        prop_assert!(
            (alloc.total_gp - budget).abs() < 1e-9,
            "budget {} reconstructed as {}",
            budget,
            alloc.total_gp
        );
    }

    /// Property: the reconstructed total matches the coin counts
    #[test]
    fn prop_total_matches_coin_counts(
        seed in any::<u64>(),
        budget in arb_budget()
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let alloc = allocate(&mut rng, budget, &tables).unwrap();
        let implied = alloc.coins.gp as f64
            + alloc.coins.sp as f64 * 0.1
            + alloc.coins.cp as f64 * 0.01;
        prop_assert!((alloc.total_gp - implied).abs() < 1e-9);
    }

    /// Property: a non-positive budget allocates zero coins
    #[test]
    fn prop_non_positive_budget_is_empty(
        seed in any::<u64>(),
        budget in -100.0f64..=0.0
    ) {
        let tables = DataTables::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let alloc = allocate(&mut rng, budget, &tables).unwrap();
        prop_assert_eq!(alloc.coins, CoinSet::default());
        prop_assert_eq!(alloc.total_gp, 0.0);
        prop_assert!(alloc.stacks.is_empty());
    }

    /// Property: allocation is deterministic given the same seed
    #[test]
    fn prop_deterministic_with_same_seed(
        seed in any::<u64>(),
        budget in arb_budget()
    ) {
        let tables = DataTables::builtin();
        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        let alloc1 = allocate(&mut rng1, budget, &tables).unwrap();
        let alloc2 = allocate(&mut rng2, budget, &tables).unwrap();
        prop_assert_eq!(alloc1, alloc2);
    }

    /// Property: stacks preserve per-denomination totals and respect caps
    #[test]
    fn prop_stacks_preserve_totals(coins in arb_coins()) {
        let tables = DataTables::builtin();
        let stacks = split_into_stacks(&coins, &tables);

        for (denom, qty) in [("gp", coins.gp), ("sp", coins.sp), ("cp", coins.cp)] {
            let total: u32 = stacks
                .iter()
                .filter(|s| s.denom == denom)
                .map(|s| s.qty)
                .sum();
            prop_assert_eq!(total, qty, "{} total lost in stacking", denom);

            let cap = tables.stack_cap(denom);
            for stack in stacks.iter().filter(|s| s.denom == denom) {
                prop_assert!(
                    stack.qty >= 1 && stack.qty <= cap,
                    "{} stack of {} violates cap {}",
                    denom,
                    stack.qty,
                    cap
                );
            }
        }
    }

    /// Property: stack count is exactly ceil(qty / cap) per denomination
    #[test]
    fn prop_stack_count_is_minimal(coins in arb_coins()) {
        let tables = DataTables::builtin();
        let stacks = split_into_stacks(&coins, &tables);

        for (denom, qty) in [("gp", coins.gp), ("sp", coins.sp), ("cp", coins.cp)] {
            let cap = tables.stack_cap(denom);
            let expected = (qty + cap - 1) / cap;
            let actual = stacks.iter().filter(|s| s.denom == denom).count() as u32;
            prop_assert_eq!(actual, expected);
        }
    }
}
