//! Currency allocation: turning an abstract gold budget into coins.
//!
//! Works in "smallest units" so every denomination has an integer per-coin
//! value, then allocates greedily from the largest denomination down with a
//! randomized mix. The reconstructed total (not the requested budget) is the
//! authoritative money value on the character, and it never exceeds the
//! request.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::tables::DataTables;

use super::errors::GenerationError;

/// Concrete coin counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSet {
    pub gp: u32,
    pub sp: u32,
    pub cp: u32,
}

impl CoinSet {
    fn get(&self, denom: &str) -> u32 {
        match denom {
            "gp" => self.gp,
            "sp" => self.sp,
            "cp" => self.cp,
            _ => 0,
        }
    }
}

/// One display line item: up to `cap` coins of one denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinStack {
    pub name: String,
    pub denom: String,
    pub qty: u32,
}

/// The full result of allocating a money budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyAllocation {
    pub coins: CoinSet,
    /// Implied value of the coin set in gold pieces, rounded to 2 decimals.
    pub total_gp: f64,
    pub stacks: Vec<CoinStack>,
}

/// Allocate `total_gp` into a randomized gp/sp/cp mix.
///
/// Negative budgets are treated as zero. A non-positive conversion rate in
/// the tables is a generation error (the smallest-unit arithmetic would be
/// meaningless).
pub fn allocate(
    rng: &mut impl Rng,
    total_gp: f64,
    tables: &DataTables,
) -> Result<MoneyAllocation, GenerationError> {
    for denom in ["gp", "sp", "cp"] {
        if tables.rate(denom) <= 0.0 {
            return Err(GenerationError::invalid_rate(denom, tables.rate(denom)));
        }
    }

    // One coin of the cheapest denomination is worth exactly one smallest
    // unit; every other denomination is an integer multiple of it.
    let multiplier = tables
        .currency_rates
        .values()
        .filter(|r| **r > 0.0)
        .map(|r| (1.0 / r).round() as i64)
        .max()
        .unwrap_or(1)
        .max(1);
    let unit_value = |denom: &str| ((tables.rate(denom) * multiplier as f64).round() as i64).max(1);

    // Floor, not round: rounding up would overshoot the budget by up to half
    // a smallest unit. The epsilon keeps a budget that is exactly a whole
    // number of units from losing one to representation error.
    let mut units = (total_gp.max(0.0) * multiplier as f64 + 1e-9).floor() as i64;

    let gp_unit = unit_value("gp");
    let max_gold = units / gp_unit;
    let gold = if max_gold > 0 {
        rng.gen_range(max_gold / 2..=max_gold)
    } else {
        0
    };
    units -= gold * gp_unit;

    let sp_unit = unit_value("sp");
    let max_silver = units / sp_unit;
    let silver = if max_silver > 0 {
        rng.gen_range(max_silver / 3..=max_silver)
    } else {
        0
    };
    units -= silver * sp_unit;

    let copper = units / unit_value("cp");

    let coins = CoinSet {
        gp: gold as u32,
        sp: silver as u32,
        cp: copper as u32,
    };
    let total = round2(
        gold as f64 * tables.rate("gp")
            + silver as f64 * tables.rate("sp")
            + copper as f64 * tables.rate("cp"),
    );
    let stacks = split_into_stacks(&coins, tables);

    Ok(MoneyAllocation {
        coins,
        total_gp: total,
        stacks,
    })
}

/// Expand nonzero coin counts into stack-capped display line items.
///
/// A quantity Q with cap C produces ceil(Q / C) stacks of at most C each,
/// preserving the total.
pub fn split_into_stacks(coins: &CoinSet, tables: &DataTables) -> Vec<CoinStack> {
    let mut stacks = Vec::new();
    for denom in ["gp", "sp", "cp"] {
        let mut qty = coins.get(denom);
        if qty == 0 {
            continue;
        }
        let cap = tables.stack_cap(denom).max(1);
        let name = tables.coin_name(denom);
        while qty > 0 {
            let take = qty.min(cap);
            stacks.push(CoinStack {
                name: name.clone(),
                denom: denom.to_string(),
                qty: take,
            });
            qty -= take;
        }
    }
    stacks
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
