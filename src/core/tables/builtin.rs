//! Built-in dataset.
//!
//! Mirrors the content shipped with the web UI so the generator works out of
//! the box with no tables file.

use std::collections::{BTreeMap, HashMap};

use super::{DataTables, EquipmentEntry, EquipmentKind, PronounPreset};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn tables() -> DataTables {
    DataTables {
        backgrounds: strings(&[
            "Acolyte",
            "Sage",
            "Criminal",
            "Soldier",
            "Entertainer",
            "Hermit",
            "Guild Artisan",
            "Folk Hero",
            "Noble",
            "Urchin",
            "Investigator",
            "Archivist",
            "Shipwright",
            "Cartographer",
        ]),
        races: strings(&[
            "Human",
            "High Elf",
            "Wood Elf",
            "Drow",
            "Halfling",
            "Lightfoot Halfling",
            "Stout Halfling",
            "Half-Elf",
            "Half-Orc",
            "Tiefling",
            "Dragonborn",
            "Gnome",
            "Forest Gnome",
            "Rock Gnome",
            "Aasimar",
            "Goliath",
            "Kenku",
            "Tabaxi",
        ]),
        classes: strings(&[
            "Fighter", "Rogue", "Wizard", "Sorcerer", "Cleric", "Barbarian", "Ranger", "Paladin",
            "Warlock", "Bard", "Monk", "Druid",
        ]),
        alignments: strings(&[
            "Lawful Good",
            "Neutral Good",
            "Chaotic Good",
            "Lawful Neutral",
            "True Neutral",
            "Chaotic Neutral",
            "Lawful Evil",
            "Neutral Evil",
            "Chaotic Evil",
        ]),
        pronoun_presets: vec![
            PronounPreset {
                label: "They/Them".to_string(),
                value: "they/them".to_string(),
            },
            PronounPreset {
                label: "She/Her".to_string(),
                value: "she/her".to_string(),
            },
            PronounPreset {
                label: "He/Him".to_string(),
                value: "he/him".to_string(),
            },
            PronounPreset {
                label: "Custom".to_string(),
                value: "custom".to_string(),
            },
        ],
        first_names: strings(&[
            "Ash", "Rowan", "Kai", "Zara", "Mira", "Ira", "Sol", "Ren", "Luca", "Nia", "Asha",
            "Diego", "Omar", "Min", "Priya", "Kwame", "Aiko", "Sofia", "Mateo", "Lian", "Amara",
            "Chike", "Yara", "Noor", "Hana", "Eiji", "Marisol",
        ]),
        surnames: strings(&[
            "Thorne",
            "Brightwood",
            "Maris",
            "Gale",
            "Ironheart",
            "Voss",
            "Kell",
            "N'dour",
            "Takeda",
            "Singh",
            "Garcia",
            "Okoye",
            "Hossain",
            "Ivanov",
            "Mbatha",
        ]),
        languages: strings(&[
            "Common",
            "Elvish",
            "Dwarvish",
            "Halfling",
            "Infernal",
            "Abyssal",
            "Gnomish",
            "Goblin",
            "Orcish",
            "Sylvan",
            "Primordial",
            "Draconic",
            "Celestial",
            "Undercommon",
            "Thieves' Cant",
        ]),
        skills: strings(&[
            "Athletics",
            "Acrobatics",
            "Sleight of Hand",
            "Stealth",
            "Arcana",
            "History",
            "Investigation",
            "Nature",
            "Religion",
            "Animal Handling",
            "Insight",
            "Medicine",
            "Perception",
            "Survival",
            "Persuasion",
            "Deception",
            "Intimidation",
        ]),
        equipment: equipment(),
        personality_traits: strings(&[
            "Brave",
            "Cautious",
            "Curious",
            "Stoic",
            "Charismatic",
            "Reserved",
            "Hot-headed",
            "Playful",
            "Methodical",
        ]),
        ideals: strings(&[
            "Greater good",
            "Personal freedom",
            "Greed",
            "Balance",
            "Knowledge",
            "Power",
            "Honor",
        ]),
        bonds: strings(&[
            "My family",
            "A mentor",
            "A lost love",
            "My sworn oath",
            "My home village",
            "A debt",
            "An old patron",
        ]),
        flaws: strings(&[
            "I judge too quickly",
            "I have a weakness for vices",
            "I hide secrets",
            "I act rashly",
            "I am distrustful",
        ]),
        race_builds: pairs(&[
            ("Halfling", (-12, -30)),
            ("Lightfoot Halfling", (-12, -30)),
            ("Stout Halfling", (-12, -30)),
            ("High Elf", (0, -5)),
            ("Wood Elf", (-2, -10)),
            ("Drow", (-3, -15)),
            ("Half-Elf", (-1, -10)),
            ("Half-Orc", (4, 20)),
            ("Dragonborn", (6, 30)),
            ("Tiefling", (0, -5)),
            ("Human", (0, 0)),
            ("Gnome", (-10, -25)),
            ("Aasimar", (2, 5)),
            ("Goliath", (10, 50)),
            ("Kenku", (-8, -20)),
            ("Tabaxi", (-4, -5)),
        ]),
        race_ages: pairs(&[
            ("Human", (16, 80)),
            ("High Elf", (100, 750)),
            ("Wood Elf", (100, 700)),
            ("Drow", (90, 600)),
            ("Halfling", (20, 150)),
            ("Lightfoot Halfling", (20, 150)),
            ("Stout Halfling", (20, 150)),
            ("Half-Elf", (20, 180)),
            ("Half-Orc", (14, 80)),
            ("Tiefling", (16, 120)),
            ("Dragonborn", (15, 80)),
            ("Gnome", (40, 500)),
            ("Forest Gnome", (40, 500)),
            ("Rock Gnome", (40, 500)),
            ("Aasimar", (18, 300)),
            ("Goliath", (12, 90)),
            ("Kenku", (10, 60)),
            ("Tabaxi", (8, 80)),
        ]),
        race_languages: string_lists(&[
            ("High Elf", &["Elvish"]),
            ("Wood Elf", &["Elvish"]),
            ("Drow", &["Elvish", "Undercommon"]),
            ("Half-Elf", &["Elvish"]),
            ("Halfling", &["Halfling"]),
            ("Lightfoot Halfling", &["Halfling"]),
            ("Stout Halfling", &["Halfling"]),
            ("Tiefling", &["Infernal"]),
            ("Dragonborn", &["Draconic"]),
            ("Half-Orc", &["Orcish"]),
            ("Gnome", &["Gnomish"]),
            ("Forest Gnome", &["Gnomish", "Sylvan"]),
            ("Rock Gnome", &["Gnomish"]),
            ("Aasimar", &["Celestial"]),
            ("Goliath", &["Dwarvish"]),
        ]),
        class_subclasses: string_lists(&[
            ("Barbarian", &["Path of the Totem Warrior"]),
            ("Sorcerer", &["Wild Magic", "Draconic Bloodline"]),
            ("Wizard", &["Evocation", "Divination", "Abjuration"]),
            ("Fighter", &["Champion", "Battle Master", "Eldritch Knight"]),
            ("Rogue", &["Thief", "Assassin", "Arcane Trickster"]),
            ("Cleric", &["Life Domain", "Light Domain", "War Domain"]),
            (
                "Paladin",
                &["Oath of Devotion", "Oath of Vengeance", "Oath of Ancients"],
            ),
        ]),
        currency_rates: BTreeMap::from([
            ("gp".to_string(), 1.0),
            ("sp".to_string(), 0.1),
            ("cp".to_string(), 0.01),
        ]),
        stack_caps: HashMap::from([
            ("gp".to_string(), 100),
            ("sp".to_string(), 50),
            ("cp".to_string(), 200),
        ]),
        money_pools: vec![0, 5, 10, 15, 25, 50, 75, 100],
        background_money: HashMap::from([
            ("Noble".to_string(), 100),
            ("Guild Artisan".to_string(), 75),
            ("Shipwright".to_string(), 50),
            ("Urchin".to_string(), -10),
            ("Hermit".to_string(), -5),
        ]),
    }
}

fn equipment() -> Vec<EquipmentEntry> {
    let mut items = Vec::new();

    // Pre-assembled kits; the selector includes at most one per character.
    items.push(EquipmentEntry {
        kind: EquipmentKind::Bundle,
        contents: Some(vec![
            "Backpack".to_string(),
            "Bedroll".to_string(),
            "Mess Kit".to_string(),
            "Tinderbox".to_string(),
            "10 Torches".to_string(),
            "10 Days of Rations".to_string(),
            "Waterskin".to_string(),
            "50 ft of Hempen Rope".to_string(),
        ]),
        ..EquipmentEntry::single("Explorer's Pack")
    });
    items.push(EquipmentEntry {
        kind: EquipmentKind::Bundle,
        contents: Some(vec![
            "Backpack".to_string(),
            "Crowbar".to_string(),
            "Hammer".to_string(),
            "10 Pitons".to_string(),
            "10 Torches".to_string(),
            "Tinderbox".to_string(),
            "10 Days of Rations".to_string(),
            "Waterskin".to_string(),
        ]),
        ..EquipmentEntry::single("Dungeoneer's Pack")
    });

    for name in [
        "Light Crossbow",
        "Longsword",
        "Shortsword",
        "Shield",
        "Spellbook",
        "Holy Symbol",
        "Thieves' Tools",
        "Crowbar",
        "Traveler's Clothes",
    ] {
        items.push(EquipmentEntry::single(name));
    }
    items.push(EquipmentEntry {
        notes: Some("50 ft".to_string()),
        ..EquipmentEntry::single("Rope (50 ft)")
    });

    items.push(EquipmentEntry {
        kind: EquipmentKind::Ammo,
        min_qty: Some(10),
        max_qty: Some(40),
        allow_duplicate: true,
        ..EquipmentEntry::single("Crossbow Bolts")
    });
    items.push(EquipmentEntry {
        kind: EquipmentKind::Stackable,
        min_qty: Some(2),
        max_qty: Some(10),
        ..EquipmentEntry::single("Torch")
    });
    items.push(EquipmentEntry {
        kind: EquipmentKind::Consumable,
        min_qty: Some(1),
        max_qty: Some(8),
        ..EquipmentEntry::single("Rations (1 day)")
    });
    items.push(EquipmentEntry {
        kind: EquipmentKind::Consumable,
        min_qty: Some(1),
        max_qty: Some(3),
        notes: Some("Restores 2d4+2 hit points".to_string()),
        ..EquipmentEntry::single("Potion of Healing")
    });

    // Coin display names, resolved by denomination tag.
    items.push(EquipmentEntry {
        currency: Some("gp".to_string()),
        ..EquipmentEntry::single("Gold Piece (coin)")
    });
    items.push(EquipmentEntry {
        currency: Some("sp".to_string()),
        ..EquipmentEntry::single("Silver Piece (coin)")
    });
    items.push(EquipmentEntry {
        currency: Some("cp".to_string()),
        ..EquipmentEntry::single("Copper Piece (coin)")
    });

    items
}

fn pairs<V: Copy>(entries: &[(&str, V)]) -> HashMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn string_lists(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), strings(v)))
        .collect()
}
