//! Normalized creature records and the normalization boundary

use std::collections::HashSet;

use anyhow::Result;
use dexa_typing::Type;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::{CreaturePayload, StatEntry};

/// Default cap on picker search results
pub const SEARCH_LIMIT: usize = 20;

/// Errors produced while normalizing a payload into a [`Creature`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("creature {name} has no recognized types")]
    NoKnownTypes { name: String },

    #[error("creature {name} carries {count} type slots (expected 1 or 2)")]
    TooManyTypes { name: String, count: usize },
}

/// Base stat identifiers, named as the catalog API names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All six base stats, in the API's order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Parse from an API stat name
    pub fn from_api_name(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Atk",
            Stat::SpecialDefense => "Sp. Def",
            Stat::Speed => "Speed",
        }
    }
}

/// A creature's six base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl BaseStats {
    /// Get a stat's value
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpecialAttack => self.spa,
            Stat::SpecialDefense => self.spd,
            Stat::Speed => self.spe,
        }
    }

    /// Set a stat's value
    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.atk = value,
            Stat::Defense => self.def = value,
            Stat::SpecialAttack => self.spa = value,
            Stat::SpecialDefense => self.spd = value,
            Stat::Speed => self.spe = value,
        }
    }

    /// Base stat total, used to pick a comparison winner
    pub fn total(&self) -> u32 {
        self.hp + self.atk + self.def + self.spa + self.spd + self.spe
    }

    /// Fold raw stat entries into a stat block (unknown stat names ignored)
    pub fn from_entries(entries: &[StatEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            if let Some(stat) = Stat::from_api_name(&entry.stat.name) {
                stats.set(stat, entry.base_stat);
            }
        }
        stats
    }
}

/// A normalized catalog record: the strict shape the engine consumes
///
/// Past this point, `types` always holds one or two distinct [`Type`] tags in
/// slot order; free-form tag strings do not survive normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Catalog id
    pub id: u32,

    /// Lowercase creature name
    pub name: String,

    /// Types in slot order (1 or 2, distinct)
    pub types: Vec<Type>,

    /// Display sprite URL
    #[serde(default)]
    pub sprite: String,

    /// Base stats
    #[serde(default)]
    pub stats: BaseStats,

    /// Ability names
    #[serde(default)]
    pub abilities: Vec<String>,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
}

impl Creature {
    /// Create a minimal record from id, name and types
    pub fn new(id: u32, name: impl Into<String>, types: Vec<Type>) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            sprite: String::new(),
            stats: BaseStats::default(),
            abilities: Vec::new(),
            height: 0,
            weight: 0,
        }
    }

    /// Normalize a raw payload into a strict record
    ///
    /// Tags outside the closed 18-type enumeration are dropped here; a
    /// dropped slot's absence contributes a neutral factor to every later
    /// matchup, so stray tags can never fault the engine. A record left with
    /// zero recognized types, or carrying more than two slots, is rejected.
    pub fn from_payload(payload: &CreaturePayload) -> Result<Self, CatalogError> {
        if payload.types.len() > 2 {
            return Err(CatalogError::TooManyTypes {
                name: payload.name.clone(),
                count: payload.types.len(),
            });
        }

        let mut entries: Vec<_> = payload.types.iter().collect();
        entries.sort_by_key(|e| e.slot);

        let mut types = Vec::with_capacity(2);
        for entry in entries {
            if let Some(t) = Type::from_tag(&entry.reference.name) {
                if !types.contains(&t) {
                    types.push(t);
                }
            }
        }
        if types.is_empty() {
            return Err(CatalogError::NoKnownTypes {
                name: payload.name.clone(),
            });
        }

        Ok(Self {
            id: payload.id,
            name: payload.name.clone(),
            types,
            sprite: payload.sprite_url(),
            stats: BaseStats::from_entries(&payload.stats),
            abilities: payload
                .abilities
                .iter()
                .map(|a| a.ability.name.clone())
                .collect(),
            height: payload.height,
            weight: payload.weight,
        })
    }
}

/// Decode and normalize a creature record from a JSON string
pub fn parse_creature(json: &str) -> Result<Creature> {
    let payload: CreaturePayload = serde_json::from_str(json)?;
    Ok(Creature::from_payload(&payload)?)
}

/// Case-insensitive name search over the catalog
///
/// Substring match on the creature name, minus excluded ids (creatures
/// already picked), capped at `limit` results. Catalog order is preserved.
pub fn search<'a>(
    catalog: &'a [Creature],
    query: &str,
    exclude: &HashSet<u32>,
    limit: usize,
) -> Vec<&'a Creature> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .filter(|c| !exclude.contains(&c.id))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> CreaturePayload {
        CreaturePayload::parse(&value).unwrap()
    }

    #[test]
    fn test_from_payload_orders_types_by_slot() {
        let p = payload(json!({
            "id": 6,
            "name": "charizard",
            "types": [
                { "slot": 2, "type": { "name": "flying" } },
                { "slot": 1, "type": { "name": "fire" } }
            ]
        }));
        let creature = Creature::from_payload(&p).unwrap();
        assert_eq!(creature.types, vec![Type::Fire, Type::Flying]);
    }

    #[test]
    fn test_from_payload_drops_unknown_tags() {
        let p = payload(json!({
            "id": 999,
            "name": "glitchmon",
            "types": [
                { "slot": 1, "type": { "name": "shadow" } },
                { "slot": 2, "type": { "name": "water" } }
            ]
        }));
        let creature = Creature::from_payload(&p).unwrap();
        assert_eq!(creature.types, vec![Type::Water]);
    }

    #[test]
    fn test_from_payload_rejects_no_known_types() {
        let p = payload(json!({
            "id": 999,
            "name": "glitchmon",
            "types": [{ "slot": 1, "type": { "name": "shadow" } }]
        }));
        assert_eq!(
            Creature::from_payload(&p),
            Err(CatalogError::NoKnownTypes {
                name: "glitchmon".into()
            })
        );
    }

    #[test]
    fn test_from_payload_rejects_extra_slots() {
        let p = payload(json!({
            "id": 999,
            "name": "glitchmon",
            "types": [
                { "slot": 1, "type": { "name": "fire" } },
                { "slot": 2, "type": { "name": "water" } },
                { "slot": 3, "type": { "name": "grass" } }
            ]
        }));
        assert_eq!(
            Creature::from_payload(&p),
            Err(CatalogError::TooManyTypes {
                name: "glitchmon".into(),
                count: 3
            })
        );
    }

    #[test]
    fn test_from_payload_dedupes_repeated_tag() {
        let p = payload(json!({
            "id": 7,
            "name": "squirtle",
            "types": [
                { "slot": 1, "type": { "name": "water" } },
                { "slot": 2, "type": { "name": "Water" } }
            ]
        }));
        let creature = Creature::from_payload(&p).unwrap();
        assert_eq!(creature.types, vec![Type::Water]);
    }

    #[test]
    fn test_from_payload_carries_stats_and_abilities() {
        let p = payload(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [{ "slot": 1, "type": { "name": "electric" } }],
            "abilities": [
                { "ability": { "name": "static" } },
                { "ability": { "name": "lightning-rod" }, "is_hidden": true }
            ],
            "stats": [
                { "base_stat": 35, "stat": { "name": "hp" } },
                { "base_stat": 55, "stat": { "name": "attack" } },
                { "base_stat": 90, "stat": { "name": "speed" } },
                { "base_stat": 1, "stat": { "name": "not-a-stat" } }
            ]
        }));
        let creature = Creature::from_payload(&p).unwrap();
        assert_eq!(creature.stats.hp, 35);
        assert_eq!(creature.stats.atk, 55);
        assert_eq!(creature.stats.spe, 90);
        assert_eq!(creature.stats.total(), 35 + 55 + 90);
        assert_eq!(creature.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(creature.height, 4);
        assert_eq!(creature.weight, 60);
    }

    #[test]
    fn test_parse_creature_from_string() {
        let creature = parse_creature(
            r#"{ "id": 1, "name": "bulbasaur", "types": [
                { "slot": 1, "type": { "name": "grass" } },
                { "slot": 2, "type": { "name": "poison" } }
            ]}"#,
        )
        .unwrap();
        assert_eq!(creature.types, vec![Type::Grass, Type::Poison]);
    }

    #[test]
    fn test_parse_creature_invalid_json() {
        assert!(parse_creature("not json").is_err());
    }

    #[test]
    fn test_stat_api_names_and_labels() {
        assert_eq!(Stat::from_api_name("special-attack"), Some(Stat::SpecialAttack));
        assert_eq!(Stat::from_api_name("hp"), Some(Stat::Hp));
        assert_eq!(Stat::from_api_name("crit"), None);
        assert_eq!(Stat::SpecialAttack.label(), "Sp. Atk");
        assert_eq!(Stat::Hp.label(), "HP");
    }

    #[test]
    fn test_base_stats_get_set() {
        let mut stats = BaseStats::default();
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            stats.set(stat, i as u32 + 1);
        }
        assert_eq!(stats.get(Stat::Hp), 1);
        assert_eq!(stats.get(Stat::Speed), 6);
        assert_eq!(stats.total(), 21);
    }

    #[test]
    fn test_search_filters_and_caps() {
        let catalog: Vec<Creature> = (1..=30)
            .map(|i| {
                let name = if i % 2 == 0 {
                    format!("saurmon-{i}")
                } else {
                    format!("birdmon-{i}")
                };
                Creature::new(i, name, vec![Type::Normal])
            })
            .collect();

        let none = HashSet::new();
        let hits = search(&catalog, "SAUR", &none, SEARCH_LIMIT);
        assert_eq!(hits.len(), 15);
        assert!(hits.iter().all(|c| c.name.contains("saurmon")));

        // Excluded ids are dropped
        let exclude: HashSet<u32> = [2, 4].into_iter().collect();
        let hits = search(&catalog, "saur", &exclude, SEARCH_LIMIT);
        assert_eq!(hits.len(), 13);
        assert!(hits.iter().all(|c| !exclude.contains(&c.id)));

        // The cap applies after filtering, preserving catalog order
        let hits = search(&catalog, "", &none, 5);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0].id, 1);
    }
}
