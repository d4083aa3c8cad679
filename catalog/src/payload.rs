//! Catalog payload types
//!
//! These types represent the JSON structure of creature records as the
//! remote catalog API serves them, prior to normalization.

use serde::Deserialize;

/// Base URL for the canonical per-id sprite fallback
pub const SPRITE_FALLBACK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// A raw creature record from the catalog API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreaturePayload {
    /// Catalog id
    pub id: u32,

    /// Lowercase creature name
    pub name: String,

    /// Type entries, one per slot
    #[serde(default)]
    pub types: Vec<TypeEntry>,

    /// Sprite URLs at various sizes
    #[serde(default)]
    pub sprites: SpriteSet,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    /// Ability entries
    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,

    /// Base stat entries
    #[serde(default)]
    pub stats: Vec<StatEntry>,

    /// Learnable move entries
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

/// Cap on level-up moves returned for the detail view
pub const MOVE_LIMIT: usize = 20;

impl CreaturePayload {
    /// Parse a payload from JSON
    pub fn parse(json: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(json.clone()).ok()
    }

    /// Pick the display sprite
    ///
    /// Official artwork first, then the plain default sprite, then the
    /// canonical per-id sprite URL so a record never renders without an image.
    pub fn sprite_url(&self) -> String {
        self.sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .or_else(|| self.sprites.front_default.clone())
            .unwrap_or_else(|| format!("{SPRITE_FALLBACK_BASE}/{}.png", self.id))
    }

    /// Moves learned by leveling, ordered by learn level
    ///
    /// Entries without a level-up learn method are skipped; the list is capped
    /// at [`MOVE_LIMIT`] for the detail view.
    pub fn level_up_moves(&self) -> Vec<LevelUpMove> {
        let mut moves: Vec<LevelUpMove> = self
            .moves
            .iter()
            .filter_map(|entry| {
                let detail = entry
                    .version_group_details
                    .iter()
                    .find(|d| d.move_learn_method.name == "level-up")?;
                Some(LevelUpMove {
                    name: entry.reference.name.clone(),
                    level: detail.level_learned_at,
                })
            })
            .collect();
        moves.sort_by_key(|m| m.level);
        moves.truncate(MOVE_LIMIT);
        moves
    }
}

/// A learnable move entry on a creature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveEntry {
    /// The referenced move
    #[serde(rename = "move")]
    pub reference: NamedRef,

    /// Per-version learn details
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// How a move is learned in one game version
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionGroupDetail {
    /// Level the move is learned at (0 when not level-based)
    #[serde(default)]
    pub level_learned_at: u32,

    /// Learn method (level-up, machine, tutor, ...)
    pub move_learn_method: NamedRef,
}

/// A move learned by leveling, reduced for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpMove {
    /// Move name
    pub name: String,

    /// Learn level
    pub level: u32,
}

/// One type slot on a creature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeEntry {
    /// Slot number (1-based; slot 1 is the primary type)
    #[serde(default)]
    pub slot: u8,

    /// The referenced type
    #[serde(rename = "type")]
    pub reference: NamedRef,
}

/// A name/url pair referencing another API resource
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NamedRef {
    /// Resource name (lowercase)
    pub name: String,

    /// Resource URL
    #[serde(default)]
    pub url: String,
}

/// An ability slot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityEntry {
    /// The referenced ability
    pub ability: NamedRef,

    /// Whether this is a hidden ability
    #[serde(default)]
    pub is_hidden: bool,
}

/// One base stat entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    /// The stat's base value
    pub base_stat: u32,

    /// The referenced stat
    pub stat: NamedRef,
}

/// Sprite URLs for a creature
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SpriteSet {
    /// Plain front sprite
    #[serde(default)]
    pub front_default: Option<String>,

    /// Shiny front sprite
    #[serde(default)]
    pub front_shiny: Option<String>,

    /// Alternate sprite sets
    #[serde(default)]
    pub other: OtherSprites,
}

/// Alternate sprite sets nested under `other`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OtherSprites {
    /// High-resolution official artwork
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

/// Official artwork sprite URLs
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Artwork {
    /// Default artwork
    #[serde(default)]
    pub front_default: Option<String>,

    /// Shiny artwork
    #[serde(default)]
    pub front_shiny: Option<String>,
}
