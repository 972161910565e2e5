//! Character generation.
//!
//! [`CharacterGenerator`] orchestrates the ability-score, trait, equipment,
//! and currency draws into one [`CharacterRecord`]. Generation is pure
//! composition over an injected random source; the only shared state is the
//! immutable data tables.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::tables::DataTables;

pub mod abilities;
pub mod currency;
pub mod equipment;
mod errors;
pub mod traits;

pub use abilities::AbilityMethod;
pub use currency::{CoinSet, CoinStack};
pub use equipment::EquipmentItem;
pub use errors::GenerationError;

pub const DEFAULT_PRONOUNS: &str = "they/them";

// ============================================================================
// Request / Record
// ============================================================================

/// Transport-agnostic generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    /// Ability score method; unknown values fall back to 4d6-drop-lowest.
    pub method: String,
    pub name: Option<String>,
    pub pronouns: Option<String>,
    pub gender: Option<String>,
    pub race: Option<String>,
}

impl GenerationRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }
}

/// One fully assembled character sheet.
///
/// Never mutated after construction; `id` and `saved_at` are assigned by the
/// favorites store when (and only when) a record is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub pronouns: String,
    pub gender: String,
    pub age: u32,
    pub background: String,
    pub personality_trait: String,
    pub ideal: String,
    pub bond: String,
    pub flaw: String,
    pub alignment: String,
    pub race: String,
    pub height: String,
    pub weight: String,
    pub class: String,
    pub subclass: String,
    pub ability_scores: Vec<i32>,
    pub ability_average: f64,
    pub modifiers: Vec<i32>,
    pub money_gp_total: f64,
    pub coins: CoinSet,
    pub coin_stacks: Vec<CoinStack>,
    pub languages: Vec<String>,
    pub proficiencies: Vec<String>,
    pub double_proficiencies: Vec<String>,
    pub equipment: Vec<EquipmentItem>,
    pub stat_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Generator
// ============================================================================

/// Tunables a surrounding service may override from configuration.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub min_equipment: u32,
    pub max_equipment: u32,
    pub default_pronouns: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_equipment: 5,
            max_equipment: 15,
            default_pronouns: DEFAULT_PRONOUNS.to_string(),
        }
    }
}

/// The character assembler.
pub struct CharacterGenerator {
    tables: DataTables,
    options: GeneratorOptions,
}

impl CharacterGenerator {
    pub fn new(tables: DataTables) -> Self {
        Self::with_options(tables, GeneratorOptions::default())
    }

    pub fn with_options(tables: DataTables, options: GeneratorOptions) -> Self {
        Self { tables, options }
    }

    /// Read-only snapshot of the loaded tables, for populating choice UIs.
    pub fn tables(&self) -> &DataTables {
        &self.tables
    }

    /// Assemble one character.
    ///
    /// Calls the ability, trait, equipment, and currency steps in sequence
    /// and merges their outputs; any sub-step fault surfaces as a
    /// [`GenerationError`] rather than a partial record.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        request: &GenerationRequest,
    ) -> Result<CharacterRecord, GenerationError> {
        let method = AbilityMethod::parse(&request.method);
        let ability_scores = abilities::roll_scores(rng, method);
        let modifiers = abilities::modifiers(&ability_scores);
        let ability_average =
            ability_scores.iter().sum::<i32>() as f64 / ability_scores.len() as f64;

        let profile = traits::select(
            rng,
            &self.tables,
            traits::TraitOverrides {
                name: request.name.as_deref(),
                race: request.race.as_deref(),
            },
        );

        let equipment = equipment::choose(
            rng,
            &self.tables.equipment,
            self.options.min_equipment,
            self.options.max_equipment,
        )?;

        let budget = self.money_budget(rng, &profile.background);
        let money = currency::allocate(rng, budget, &self.tables)?;

        log::debug!(
            "Generated {} ({} {} {}), {} items, {} gp",
            profile.name,
            profile.race,
            profile.class,
            profile.background,
            equipment.len(),
            money.total_gp
        );

        Ok(CharacterRecord {
            id: None,
            name: profile.name,
            pronouns: non_empty(request.pronouns.as_deref())
                .unwrap_or(&self.options.default_pronouns)
                .to_string(),
            gender: non_empty(request.gender.as_deref())
                .unwrap_or_default()
                .to_string(),
            age: profile.age,
            background: profile.background,
            personality_trait: profile.personality_trait,
            ideal: profile.ideal,
            bond: profile.bond,
            flaw: profile.flaw,
            alignment: profile.alignment,
            race: profile.race,
            height: profile.height,
            weight: profile.weight,
            class: profile.class,
            subclass: profile.subclass,
            ability_scores,
            ability_average,
            modifiers,
            money_gp_total: money.total_gp,
            coins: money.coins,
            coin_stacks: money.stacks,
            languages: profile.languages,
            proficiencies: profile.proficiencies,
            double_proficiencies: profile.double_proficiencies,
            equipment,
            // The caller's method string is echoed back as supplied; only
            // the rolls themselves fall back for unknown methods.
            stat_method: non_empty(Some(request.method.as_str()))
                .unwrap_or(method.as_str())
                .to_string(),
            saved_at: None,
        })
    }

    /// Base budget drawn from the configured pool, adjusted per background
    /// and floored at zero.
    fn money_budget(&self, rng: &mut impl Rng, background: &str) -> f64 {
        let base = self.tables.money_pools.choose(rng).copied().unwrap_or(0) as i64;
        let adjustment = self
            .tables
            .background_money
            .get(background)
            .copied()
            .unwrap_or(0);
        (base + adjustment).max(0) as f64
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
