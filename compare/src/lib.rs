//! Side-by-side creature comparison.
//!
//! A [`Comparison`] holds two or three catalog creatures. Once at least two
//! are selected it yields a [`ComparisonResult`]: the stat-total winner plus,
//! for every ordered pair, which of the attacker's own types lines up best
//! against the defender's typing.
//!
//! # Example Usage
//!
//! ```
//! use dexa_catalog::Creature;
//! use dexa_compare::Comparison;
//! use dexa_typing::Type;
//!
//! let mut comparison = Comparison::new();
//! comparison.add(Creature::new(6, "charizard", vec![Type::Fire, Type::Flying]))?;
//! comparison.add(Creature::new(3, "venusaur", vec![Type::Grass, Type::Poison]))?;
//!
//! let result = comparison.result().expect("two creatures selected");
//! for matchup in &result.matchups {
//!     println!(
//!         "#{} hits #{} with {} ({}x, {})",
//!         matchup.attacker,
//!         matchup.defender,
//!         matchup.best.attack_type,
//!         matchup.best.multiplier,
//!         matchup.effectiveness,
//!     );
//! }
//! # Ok::<(), dexa_compare::CompareError>(())
//! ```

pub mod comparison;

pub use comparison::{
    CompareError, Comparison, ComparisonResult, MAX_COMPARED, MIN_COMPARED, PairMatchup,
};
