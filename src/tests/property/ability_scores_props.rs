//! Property-based tests for ability score rolling
//!
//! Tests invariants:
//! - 4d6-drop-lowest scores always land in 3..=18
//! - The standard array comes back as a permutation of its fixed multiset
//! - Point-buy stays within 8..=15 and never overspends its budget
//! - Modifiers follow floor((score - 10) / 2) for any score

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::generator::abilities::{modifiers, roll_scores, AbilityMethod, STANDARD_ARRAY};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate an arbitrary AbilityMethod
fn arb_method() -> impl Strategy<Value = AbilityMethod> {
    prop_oneof![
        Just(AbilityMethod::FourD6DropLowest),
        Just(AbilityMethod::StandardArray),
        Just(AbilityMethod::PointBuy),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: every method produces exactly six scores
    #[test]
    fn prop_six_scores_for_any_method(
        seed in any::<u64>(),
        method in arb_method()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scores = roll_scores(&mut rng, method);
        prop_assert_eq!(scores.len(), 6);
    }

    /// Property: 4d6-drop-lowest scores are in 3..=18
    ///
    /// Three kept dice bound the sum: 3x1 below, 3x6 above.
    #[test]
    fn prop_4d6_scores_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scores = roll_scores(&mut rng, AbilityMethod::FourD6DropLowest);
        for s in scores {
            prop_assert!(
                (3..=18).contains(&s),
                "score {} outside 3..=18",
                s
            );
        }
    }

    /// Property: the standard array is returned as a permutation
    #[test]
    fn prop_standard_array_is_permutation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scores = roll_scores(&mut rng, AbilityMethod::StandardArray);
        scores.sort_unstable();
        let mut expected = STANDARD_ARRAY.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(scores, expected);
    }

    /// Property: point-buy scores stay within 8..=15
    #[test]
    fn prop_point_buy_scores_bounded(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let scores = roll_scores(&mut rng, AbilityMethod::PointBuy);
        for s in scores {
            prop_assert!(
                (8..=15).contains(&s),
                "point-buy score {} outside 8..=15",
                s
            );
        }
    }

    /// Property: point-buy never overspends its 27-point budget
    ///
    /// Reconstruct the spend from the published cost schedule
    /// (9..13 cost 1..5 marginally, 14 costs 7, 15 costs 9).
    #[test]
    fn prop_point_buy_respects_budget(seed in any::<u64>()) {
        let cost_to_reach = |s: i32| -> i32 {
            (9..=s)
                .map(|t| match t {
                    9..=13 => t - 8,
                    14 => 7,
                    15 => 9,
                    _ => 0,
                })
                .sum()
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let scores = roll_scores(&mut rng, AbilityMethod::PointBuy);
        let spend: i32 = scores.iter().map(|&s| cost_to_reach(s)).sum();
        prop_assert!(spend <= 27, "spent {} points", spend);
    }

    /// Property: rolling is deterministic given the same seed
    #[test]
    fn prop_deterministic_with_same_seed(
        seed in any::<u64>(),
        method in arb_method()
    ) {
        let mut rng1 = StdRng::seed_from_u64(seed);
        let mut rng2 = StdRng::seed_from_u64(seed);
        prop_assert_eq!(
            roll_scores(&mut rng1, method),
            roll_scores(&mut rng2, method)
        );
    }

    /// Property: the modifier of any score is floor((score - 10) / 2)
    ///
    /// Floor division, not truncation toward zero; checked against a direct
    /// f64 floor computation.
    #[test]
    fn prop_modifier_is_floor_division(score in -50i32..100) {
        let expected = (((score - 10) as f64) / 2.0).floor() as i32;
        prop_assert_eq!(modifiers(&[score]), vec![expected]);
    }

    /// Property: modifiers are elementwise and length-preserving
    #[test]
    fn prop_modifiers_preserve_length(scores in prop::collection::vec(1i32..=20, 0..12)) {
        let mods = modifiers(&scores);
        prop_assert_eq!(mods.len(), scores.len());
        for (s, m) in scores.iter().zip(&mods) {
            prop_assert_eq!(*m, (s - 10).div_euclid(2));
        }
    }
}
