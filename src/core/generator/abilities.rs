//! Ability score generation.
//!
//! Three methods: 4d6-drop-lowest (the default and the fallback for unknown
//! method strings), the standard array in random order, and a 27-point
//! point-buy. All draws come from the caller's random source; nothing here
//! fails.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The fixed standard array multiset.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Point-buy budget.
const POINT_BUY_BUDGET: i32 = 27;

/// How ability scores are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityMethod {
    #[serde(rename = "4d6")]
    FourD6DropLowest,
    #[serde(rename = "standard")]
    StandardArray,
    #[serde(rename = "pointbuy")]
    PointBuy,
}

impl AbilityMethod {
    /// Parse a method string. Unknown strings fall back to 4d6-drop-lowest.
    pub fn parse(s: &str) -> Self {
        match s {
            "standard" => Self::StandardArray,
            "pointbuy" => Self::PointBuy,
            _ => Self::FourD6DropLowest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FourD6DropLowest => "4d6",
            Self::StandardArray => "standard",
            Self::PointBuy => "pointbuy",
        }
    }
}

/// Generate six ability scores with the given method.
///
/// No ordering guarantee among the six results.
pub fn roll_scores(rng: &mut impl Rng, method: AbilityMethod) -> Vec<i32> {
    match method {
        AbilityMethod::FourD6DropLowest => roll_4d6_drop_lowest(rng),
        AbilityMethod::StandardArray => {
            let mut scores = STANDARD_ARRAY.to_vec();
            scores.shuffle(rng);
            scores
        }
        AbilityMethod::PointBuy => point_buy(rng),
    }
}

/// Elementwise ability modifiers: floor((score - 10) / 2).
///
/// Floor division, not truncation toward zero: a score of 7 gives -2.
pub fn modifiers(scores: &[i32]) -> Vec<i32> {
    scores.iter().map(|s| (s - 10).div_euclid(2)).collect()
}

/// For each of six scores: roll four d6, drop the lowest, sum the rest.
fn roll_4d6_drop_lowest(rng: &mut impl Rng) -> Vec<i32> {
    (0..6)
        .map(|_| {
            let mut rolls: Vec<i32> = (0..4).map(|_| rng.gen_range(1..=6)).collect();
            rolls.sort();
            rolls[1..].iter().sum()
        })
        .collect()
}

/// Marginal cost of raising a score to `target`, per the point-buy schedule.
fn point_buy_cost(target: i32) -> Option<i32> {
    match target {
        9 => Some(1),
        10 => Some(2),
        11 => Some(3),
        12 => Some(4),
        13 => Some(5),
        14 => Some(7),
        15 => Some(9),
        _ => None,
    }
}

/// Greedy point-buy: start at [8; 6] and repeatedly raise the currently
/// lowest score (first index on ties) by one, until the budget runs out or
/// the cap of 15 is reached. The result order is randomly permuted.
fn point_buy(rng: &mut impl Rng) -> Vec<i32> {
    let mut scores = vec![8i32; 6];
    let mut points = POINT_BUY_BUDGET;
    loop {
        // min() returns the first of equal elements, which is the tie-break
        // the greedy schedule relies on.
        let idx = scores
            .iter()
            .enumerate()
            .min_by_key(|&(_, s)| *s)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let target = scores[idx] + 1;
        let cost = match point_buy_cost(target) {
            Some(cost) => cost,
            None => break, // would exceed 15
        };
        if cost > points {
            break;
        }
        scores[idx] = target;
        points -= cost;
    }
    scores.shuffle(rng);
    scores
}
