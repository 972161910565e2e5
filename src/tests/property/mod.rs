//! Property-based tests for Rollwright
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! Run all property tests:
//! ```sh
//! cargo test property --release
//! ```
//!
//! Run a specific property test module:
//! ```sh
//! cargo test property::currency_props --release
//! ```
//!
//! ## Test Modules
//!
//! - `ability_scores_props`: Tests for ability score rolling
//!   - 4d6-drop-lowest scores always land in 3..=18
//!   - The standard array is returned as a permutation
//!   - Point-buy never exceeds 15 or spends more than its budget
//!   - Modifiers follow the floor-division table for any score
//!
//! - `currency_props`: Tests for the coin allocator
//!   - The reconstructed total never exceeds the budget
//!   - A zero budget allocates zero coins
//!   - Coin stacks preserve per-denomination totals and respect caps
//!
//! - `equipment_props`: Tests for equipment selection
//!   - Loadout size always lands within the configured bounds
//!   - At most one bundle appears in any loadout
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod ability_scores_props;
mod currency_props;
mod equipment_props;
