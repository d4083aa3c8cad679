//! Team building and defensive coverage analysis.
//!
//! A [`Team`] holds up to six catalog creatures in fixed slots. On every
//! change the embedding UI re-derives a fresh [`CoverageReport`] — the
//! classification of all 18 attacking types into team-wide weaknesses,
//! resistances and immunities — and can ask for candidates that patch the
//! worst gaps.
//!
//! # Example Usage
//!
//! ```
//! use dexa_catalog::Creature;
//! use dexa_team::{Team, analyze_coverage};
//! use dexa_typing::Type;
//!
//! let mut team = Team::new();
//! team.fill(Creature::new(1, "bulbasaur", vec![Type::Grass, Type::Poison]))?;
//! team.fill(Creature::new(4, "charmander", vec![Type::Fire]))?;
//!
//! let report = analyze_coverage(&team).expect("team is non-empty");
//! for (attack, multiplier) in report.weaknesses_desc() {
//!     println!("weak to {attack} ({multiplier}x)");
//! }
//! # Ok::<(), dexa_team::TeamError>(())
//! ```
//!
//! Reports are built fresh from the immutable type chart on demand and never
//! persisted; an empty team produces no report.

pub mod coverage;
pub mod recommend;
pub mod slots;

pub use coverage::{CRITICAL_WEAKNESS, CoverageReport, analyze_coverage};
pub use recommend::{MAX_RECOMMENDATIONS, Recommendation, recommend};
pub use slots::{TEAM_SIZE, Team, TeamError};
