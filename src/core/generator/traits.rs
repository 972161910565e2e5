//! Trait selection: who the character is.
//!
//! Draws background, race, class, alignment, personality, and name from the
//! data tables, then derives the race-dependent attributes (height, weight,
//! age, bonus languages) and the class-dependent subclass. Empty tables fall
//! back to fixed defaults rather than failing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::tables::DataTables;

const BASE_HEIGHT_IN: i32 = 60;
const BASE_WEIGHT_LB: i32 = 120;
const DEFAULT_AGE_RANGE: (u32, u32) = (16, 120);

/// Chance of knowing one extra language beyond Common and racial bonuses.
const EXTRA_LANGUAGE_CHANCE: f64 = 0.25;

/// Caller-supplied overrides; empty or whitespace-only values are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraitOverrides<'a> {
    pub name: Option<&'a str>,
    pub race: Option<&'a str>,
}

/// Everything the trait selector decides about a character.
#[derive(Debug, Clone)]
pub struct TraitProfile {
    pub background: String,
    pub race: String,
    pub class: String,
    pub alignment: String,
    pub age: u32,
    pub height: String,
    pub weight: String,
    pub languages: Vec<String>,
    pub proficiencies: Vec<String>,
    /// Reserved for expertise-style double proficiencies; always empty.
    pub double_proficiencies: Vec<String>,
    pub name: String,
    pub personality_trait: String,
    pub ideal: String,
    pub bond: String,
    pub flaw: String,
    pub subclass: String,
}

/// Draw a full trait profile from the tables.
pub fn select(rng: &mut impl Rng, tables: &DataTables, overrides: TraitOverrides) -> TraitProfile {
    let background = pick_or(rng, &tables.backgrounds, "Folk Hero");
    let race = match non_empty(overrides.race) {
        Some(race) => race.to_string(),
        None => pick_or(rng, &tables.races, "Human"),
    };
    let class = pick_or(rng, &tables.classes, "Fighter");
    let alignment = pick_or(rng, &tables.alignments, "True Neutral");

    let (height, weight) = random_height_weight(rng, tables, &race);
    let age = random_age(rng, tables, &race);
    let languages = known_languages(rng, tables, &race);
    let proficiencies: Vec<String> = tables
        .skills
        .choose_multiple(rng, 2)
        .cloned()
        .collect();
    let subclass = tables
        .class_subclasses
        .get(&class)
        .and_then(|pool| pool.choose(rng))
        .cloned()
        .unwrap_or_default();
    let name = character_name(rng, tables, overrides.name);

    TraitProfile {
        background,
        race,
        class,
        alignment,
        age,
        height,
        weight,
        languages,
        proficiencies,
        double_proficiencies: Vec::new(),
        name,
        personality_trait: pick_or(rng, &tables.personality_traits, ""),
        ideal: pick_or(rng, &tables.ideals, ""),
        bond: pick_or(rng, &tables.bonds, ""),
        flaw: pick_or(rng, &tables.flaws, ""),
        subclass,
    }
}

/// Uniform draw, or the fixed fallback when the table is empty.
fn pick_or(rng: &mut impl Rng, table: &[String], fallback: &str) -> String {
    table
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Base 60in/120lb adjusted by the per-race build modifier (default (0, 0))
/// and independent uniform noise, rendered as "5ft 8in" / "132lbs".
fn random_height_weight(rng: &mut impl Rng, tables: &DataTables, race: &str) -> (String, String) {
    let (dh, dw) = tables.race_builds.get(race).copied().unwrap_or((0, 0));
    let inches = (BASE_HEIGHT_IN + dh + rng.gen_range(-6..=8)).max(0);
    let pounds = (BASE_WEIGHT_LB + dw + rng.gen_range(-20..=60)).max(1);
    (
        format!("{}ft {}in", inches / 12, inches % 12),
        format!("{}lbs", pounds),
    )
}

/// Uniform age in the race's range, default [16, 120].
fn random_age(rng: &mut impl Rng, tables: &DataTables, race: &str) -> u32 {
    let (lo, hi) = tables
        .race_ages
        .get(race)
        .copied()
        .unwrap_or(DEFAULT_AGE_RANGE);
    rng.gen_range(lo..=hi.max(lo))
}

/// Common, then racial bonus languages, then maybe one extra.
fn known_languages(rng: &mut impl Rng, tables: &DataTables, race: &str) -> Vec<String> {
    let mut languages = vec!["Common".to_string()];
    if let Some(bonus) = tables.race_languages.get(race) {
        for lang in bonus {
            if !languages.contains(lang) {
                languages.push(lang.clone());
            }
        }
    }
    let unknown: Vec<&String> = tables
        .languages
        .iter()
        .filter(|l| !languages.contains(l))
        .collect();
    if !unknown.is_empty() && rng.gen_bool(EXTRA_LANGUAGE_CHANCE) {
        if let Some(extra) = unknown.choose(rng) {
            languages.push((*extra).clone());
        }
    }
    languages
}

/// A trimmed non-empty override wins; otherwise first + surname, or the
/// literal "Unnamed" when either name table is empty.
fn character_name(rng: &mut impl Rng, tables: &DataTables, override_name: Option<&str>) -> String {
    if let Some(name) = non_empty(override_name) {
        return name.to_string();
    }
    match (
        tables.first_names.choose(rng),
        tables.surnames.choose(rng),
    ) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        _ => "Unnamed".to_string(),
    }
}
