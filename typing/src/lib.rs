//! Type system and effectiveness chart for creature catalogs.
//!
//! This crate is the computational core shared by the higher-level components:
//! the 18-type closed enumeration, the per-type incoming-damage chart, and the
//! matchup queries built on top of them.
//!
//! # Overview
//!
//! `dexa-typing` sits below the catalog boundary and its consumers:
//!
//! ```text
//! dexa-typing (type tags + chart + queries) ← THIS CRATE
//!        │
//!        ▼
//! dexa-catalog (payload normalization)
//!        │
//!        ├─> dexa-team (coverage analysis, recommendations)
//!        └─> dexa-compare (side-by-side comparison)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 elemental type tags, with matchup math
//! - [`TypeRelation`] - One type's incoming-damage profile
//! - [`TYPE_CHART`] - The static relation table, one entry per type
//!
//! # Example Usage
//!
//! ```
//! use dexa_typing::{Type, best_attack, verify_chart};
//!
//! // Validate the hand-authored chart once at startup.
//! verify_chart().expect("chart data is consistent");
//!
//! // Water vs a Fire/Rock defender stacks to 4x.
//! assert_eq!(Type::Water.effectiveness_multi(&[Type::Fire, Type::Rock]), 4.0);
//!
//! // Which of a Fire/Flying attacker's own types hits Grass hardest?
//! let best = best_attack(&[Type::Fire, Type::Flying], &[Type::Grass]).unwrap();
//! assert_eq!(best.attack_type, Type::Fire);
//! ```
//!
//! Every operation here is a pure function over static data: no I/O, no
//! mutable state, safe to call from any thread without locking.

pub mod chart;
pub mod query;
pub mod tag;

pub use chart::{ChartError, TypeRelation, TYPE_CHART, verify_chart};
pub use query::{
    BestAttack, Effectiveness, best_attack, immunities, is_immune_to, is_weak_to_any, resistances,
    resists_all, weaknesses,
};
pub use tag::Type;
