//! Equipment selection: what the character carries.
//!
//! Draws a variable-size loadout from the equipment table. Bundles (kits)
//! are limited to one per character; everything else is sampled without
//! replacement unless the entry allows duplicates, refilling the pool only if
//! it runs dry before the target count is reached.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::tables::{EquipmentEntry, EquipmentKind};

use super::errors::GenerationError;

/// Chance of including one bundle, when the table offers any.
const BUNDLE_CHANCE: f64 = 0.25;

/// A chosen piece of equipment.
///
/// A plain single item with no annotations serializes as a bare string; all
/// other cases carry a structured object. Untagged so the JSON matches the
/// (string | object) union the record promises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EquipmentItem {
    Plain(String),
    Detailed(DetailedItem),
}

/// The structured form of a chosen item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EquipmentKind,
    pub qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<String>>,
}

impl EquipmentItem {
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) => name,
            Self::Detailed(item) => &item.name,
        }
    }

    pub fn is_bundle(&self) -> bool {
        matches!(
            self,
            Self::Detailed(DetailedItem {
                kind: EquipmentKind::Bundle,
                ..
            })
        )
    }
}

/// Draw a loadout of `n` items, `n` uniform in [min_choices, max_choices].
///
/// An empty table degrades to an empty loadout. Inverted bounds are a caller
/// error.
pub fn choose(
    rng: &mut impl Rng,
    table: &[EquipmentEntry],
    min_choices: u32,
    max_choices: u32,
) -> Result<Vec<EquipmentItem>, GenerationError> {
    if min_choices > max_choices {
        return Err(GenerationError::equipment_bounds(min_choices, max_choices));
    }

    // Currency-tagged entries only name coin stacks; they are never dealt
    // out as gear.
    let drawable: Vec<&EquipmentEntry> = table.iter().filter(|e| e.currency.is_none()).collect();
    if drawable.is_empty() {
        return Ok(Vec::new());
    }

    let n = rng.gen_range(min_choices..=max_choices) as usize;
    let mut items = Vec::with_capacity(n);
    let mut remaining = n;
    let mut has_bundle = false;

    let bundles: Vec<&EquipmentEntry> = drawable
        .iter()
        .copied()
        .filter(|e| e.is_bundle())
        .collect();
    let singles: Vec<&EquipmentEntry> = drawable
        .iter()
        .copied()
        .filter(|e| !e.is_bundle())
        .collect();

    // At most one bundle per character, consuming one slot.
    if remaining > 0 && !bundles.is_empty() && rng.gen_bool(BUNDLE_CHANCE) {
        if let Some(bundle) = bundles.choose(rng) {
            items.push(draw_item(rng, bundle));
            has_bundle = true;
            remaining -= 1;
        }
    }

    // Fill the remaining slots from the non-bundle pool; a table of nothing
    // but bundles falls back to the bundle pool, but once one typed bundle
    // is in the loadout further kit draws degrade to their bare names.
    let base_pool: &[&EquipmentEntry] = if singles.is_empty() { &bundles } else { &singles };
    let mut pool: Vec<&EquipmentEntry> = base_pool.to_vec();
    while remaining > 0 {
        if pool.is_empty() {
            pool = base_pool.to_vec();
        }
        let idx = rng.gen_range(0..pool.len());
        let entry = pool[idx];
        if entry.is_bundle() && has_bundle {
            items.push(EquipmentItem::Plain(entry.name.clone()));
        } else {
            if entry.is_bundle() {
                has_bundle = true;
            }
            items.push(draw_item(rng, entry));
        }
        if !entry.allow_duplicate {
            pool.swap_remove(idx);
        }
        remaining -= 1;
    }

    Ok(items)
}

/// Materialize one drawn entry, applying the terse-output special case.
fn draw_item(rng: &mut impl Rng, entry: &EquipmentEntry) -> EquipmentItem {
    let qty = match entry.kind {
        EquipmentKind::Stackable | EquipmentKind::Ammo | EquipmentKind::Consumable => {
            let (lo, hi) = entry.qty_bounds();
            rng.gen_range(lo..=hi)
        }
        EquipmentKind::Single | EquipmentKind::Bundle => 1,
    };
    if entry.kind == EquipmentKind::Single
        && qty == 1
        && entry.notes.is_none()
        && entry.contents.is_none()
    {
        EquipmentItem::Plain(entry.name.clone())
    } else {
        EquipmentItem::Detailed(DetailedItem {
            name: entry.name.clone(),
            kind: entry.kind,
            qty,
            notes: entry.notes.clone(),
            contents: entry.contents.clone(),
        })
    }
}
