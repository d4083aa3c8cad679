//! Catalog boundary: payload models and normalization.
//!
//! The remote catalog API serves loosely-shaped JSON records; everything past
//! this crate works on the strict [`Creature`] model instead. Normalization
//! enforces the closed 18-tag type enumeration here, at the parsing boundary,
//! so the engine crates never see free-form tag strings.
//!
//! ```text
//! remote API JSON ──> CreaturePayload ──> Creature (strict, typed)
//!                      (wire shape)        (consumed by team/compare)
//! ```
//!
//! Fetching itself is owned by the embedding application; this crate only
//! decodes and normalizes payloads it is handed.

pub mod creature;
pub mod display;
pub mod payload;

pub use creature::{
    BaseStats, CatalogError, Creature, SEARCH_LIMIT, Stat, parse_creature, search,
};
pub use payload::{
    AbilityEntry, CreaturePayload, LevelUpMove, MOVE_LIMIT, MoveEntry, NamedRef, SpriteSet,
    StatEntry, TypeEntry,
};
