//! Matchup queries over defender typings
//!
//! This module provides the lookups the catalog UI builds its displays from:
//! a creature's defensive profile, and the best of an attacker's own types
//! against a given opponent.

mod matchup;

pub use matchup::{
    // Attack selection
    best_attack,
    BestAttack,
    Effectiveness,
    // Defensive profile queries
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};
