//! Type matchup helpers for profile and comparison displays

use crate::tag::Type;

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    attacking_types
        .iter()
        .any(|t| t.effectiveness_multi(defender_types) > 1.0)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(defender_types: &[Type], attacking_types: &[Type]) -> bool {
    if attacking_types.is_empty() {
        return false;
    }
    attacking_types
        .iter()
        .all(|t| t.effectiveness_multi(defender_types) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(defender_types: &[Type], attacking_type: Type) -> bool {
    attacking_type.effectiveness_multi(defender_types) == 0.0
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) > 1.0)
        .collect()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = t.effectiveness_multi(defender_types);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all types that the defender is immune to
pub fn immunities(defender_types: &[Type]) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| t.effectiveness_multi(defender_types) == 0.0)
        .collect()
}

/// The most effective of an attacker's own types against a defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestAttack {
    /// The attacking type that achieves the maximum multiplier
    pub attack_type: Type,

    /// The multiplier it achieves against the defender's typing
    pub multiplier: f32,
}

/// Pick which of the attacker's own types hits the defender hardest
///
/// Ties go to the earlier type in the attacker's own slot order, so the
/// result is deterministic. Returns `None` for an empty attacker typing.
pub fn best_attack(attacker_types: &[Type], defender_types: &[Type]) -> Option<BestAttack> {
    let mut best: Option<BestAttack> = None;
    for &attack_type in attacker_types {
        let multiplier = attack_type.effectiveness_multi(defender_types);
        if best.is_none_or(|b| multiplier > b.multiplier) {
            best = Some(BestAttack {
                attack_type,
                multiplier,
            });
        }
    }
    best
}

/// Classification of a single damage multiplier for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Effectiveness {
    NoEffect,
    NotVeryEffective,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    /// Classify a combined multiplier
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::NoEffect
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else {
            Effectiveness::Neutral
        }
    }

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::NoEffect => "no effect",
            Effectiveness::NotVeryEffective => "not very effective",
            Effectiveness::Neutral => "neutral",
            Effectiveness::SuperEffective => "super effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
