//! Data tables backing character generation.
//!
//! All selectable content (races, classes, equipment, currency rates, ...)
//! lives in one [`DataTables`] value, loaded once at startup and treated as
//! immutable afterwards. Every category defaults to empty so an absent
//! category degrades gracefully instead of failing generation; the handful of
//! categories that must never be empty (currency rates, stack caps, money
//! pools) are filled by a single normalization pass at load time rather than
//! at each lookup site.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

mod builtin;
mod error;

pub use error::TablesError;

// ============================================================================
// Equipment Entries
// ============================================================================

/// How an equipment entry behaves when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    /// One item, quantity 1.
    #[default]
    Single,
    /// Carried in quantity (rope, torches).
    Stackable,
    /// Quantity-ranged ammunition.
    Ammo,
    /// Quantity-ranged consumables (rations, potions).
    Consumable,
    /// A pre-assembled kit; at most one per character.
    Bundle,
}

/// One row of the equipment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: EquipmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_qty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_qty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
    /// Entries that may be drawn more than once per character.
    #[serde(default)]
    pub allow_duplicate: bool,
    /// Denomination tag ("gp", "sp", "cp") for coin display names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl EquipmentEntry {
    /// A plain single item with no quantity range or annotations.
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EquipmentKind::Single,
            min_qty: None,
            max_qty: None,
            notes: None,
            contents: None,
            allow_duplicate: false,
            currency: None,
        }
    }

    /// Resolved quantity bounds: min defaults to 1, max to max(min, 4).
    pub fn qty_bounds(&self) -> (u32, u32) {
        let min = self.min_qty.unwrap_or(1).max(1);
        let max = self.max_qty.unwrap_or_else(|| min.max(4));
        (min, max.max(min))
    }

    pub fn is_bundle(&self) -> bool {
        self.kind == EquipmentKind::Bundle
    }
}

/// Pronoun choice offered to callers building selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounPreset {
    pub label: String,
    pub value: String,
}

// ============================================================================
// DataTables
// ============================================================================

/// Immutable, loaded-once set of named lists and mappings.
///
/// Serializable in full so a surrounding service can expose the snapshot
/// read-only for populating choice UIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTables {
    pub backgrounds: Vec<String>,
    pub races: Vec<String>,
    pub classes: Vec<String>,
    pub alignments: Vec<String>,
    pub pronoun_presets: Vec<PronounPreset>,
    pub first_names: Vec<String>,
    pub surnames: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub equipment: Vec<EquipmentEntry>,
    pub personality_traits: Vec<String>,
    pub ideals: Vec<String>,
    pub bonds: Vec<String>,
    pub flaws: Vec<String>,
    /// Per-race (Δheight inches, Δweight pounds) against the 60in/120lb base.
    pub race_builds: HashMap<String, (i32, i32)>,
    /// Per-race [lo, hi] age range in years.
    pub race_ages: HashMap<String, (u32, u32)>,
    /// Bonus languages granted by a race, beyond Common.
    pub race_languages: HashMap<String, Vec<String>>,
    /// Subclass pool per class; classes without an entry get no subclass.
    pub class_subclasses: HashMap<String, Vec<String>>,
    /// Value of one coin of each denomination, in gold pieces.
    pub currency_rates: BTreeMap<String, f64>,
    /// Largest quantity of a denomination grouped into one display line item.
    pub stack_caps: HashMap<String, u32>,
    /// Candidate base money budgets, in gold pieces.
    pub money_pools: Vec<u32>,
    /// Per-background adjustment to the base money budget, in gold pieces.
    pub background_money: HashMap<String, i64>,
}

impl DataTables {
    /// Load tables from a JSON file.
    ///
    /// A missing or unparsable file is fatal: generation without a caller's
    /// chosen tables would silently produce the wrong content. Absent
    /// categories inside a parsable file are fine and default to empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TablesError::not_found(path)
            } else {
                TablesError::read_failed(path, e)
            }
        })?;
        let tables: Self =
            serde_json::from_str(&content).map_err(|e| TablesError::parse_failed(path, e))?;
        log::info!("Loaded data tables from {}", path.display());
        Ok(tables.normalized())
    }

    /// The built-in dataset, matching the shipped web UI's content.
    pub fn builtin() -> Self {
        builtin::tables().normalized()
    }

    /// Apply the one-time default-resolution pass.
    ///
    /// Fills the categories generation cannot run without and repairs
    /// inverted equipment quantity ranges, so later lookups never need
    /// fallback logic of their own.
    pub fn normalized(mut self) -> Self {
        for denom in ["gp", "sp", "cp"] {
            self.currency_rates
                .entry(denom.to_string())
                .or_insert_with(|| default_rate(denom));
            self.stack_caps
                .entry(denom.to_string())
                .or_insert_with(|| default_stack_cap(denom));
        }
        if self.money_pools.is_empty() {
            self.money_pools = vec![0, 5, 10, 15, 25, 50, 75, 100];
        }
        for entry in &mut self.equipment {
            if let (Some(min), Some(max)) = (entry.min_qty, entry.max_qty) {
                if min > max {
                    log::warn!(
                        "Equipment entry '{}' has min_qty {} > max_qty {}; swapping",
                        entry.name,
                        min,
                        max
                    );
                    entry.min_qty = Some(max);
                    entry.max_qty = Some(min);
                }
            }
        }
        self
    }

    /// Conversion rate for a denomination, in gold pieces per coin.
    pub fn rate(&self, denom: &str) -> f64 {
        self.currency_rates
            .get(denom)
            .copied()
            .unwrap_or_else(|| default_rate(denom))
    }

    /// Stack cap for a denomination.
    pub fn stack_cap(&self, denom: &str) -> u32 {
        self.stack_caps
            .get(denom)
            .copied()
            .unwrap_or_else(|| default_stack_cap(denom))
    }

    /// Display name for a coin of the given denomination.
    ///
    /// Resolved from any equipment entry tagged with that `currency`, falling
    /// back to "<Denomination> Piece (coin)".
    pub fn coin_name(&self, denom: &str) -> String {
        self.equipment
            .iter()
            .find(|e| e.currency.as_deref() == Some(denom))
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("{} Piece (coin)", denom_label(denom)))
    }
}

fn default_rate(denom: &str) -> f64 {
    match denom {
        "sp" => 0.1,
        "cp" => 0.01,
        _ => 1.0,
    }
}

fn default_stack_cap(denom: &str) -> u32 {
    match denom {
        "sp" => 50,
        "cp" => 200,
        _ => 100,
    }
}

/// Human-readable denomination label for fallback coin names.
pub(crate) fn denom_label(denom: &str) -> &str {
    match denom {
        "gp" => "Gold",
        "sp" => "Silver",
        "cp" => "Copper",
        other => other,
    }
}
