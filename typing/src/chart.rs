//! Static incoming-damage chart, one relation per defending type

use thiserror::Error;

use crate::tag::Type;

/// One defending type's incoming-damage profile
///
/// `double_from`, `half_from` and `zero_from` are the attacking types that
/// deal 2x, 0.5x and 0x damage to a defender of this type; the three sets are
/// pairwise disjoint. `strong_against` is informational offensive data kept
/// for display (encyclopedia tables, badges) and is never read by the
/// matchup, coverage or recommendation math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRelation {
    pub double_from: &'static [Type],
    pub half_from: &'static [Type],
    pub zero_from: &'static [Type],
    pub strong_against: &'static [Type],
}

impl Type {
    /// This type's incoming-damage relations
    pub fn relation(&self) -> &'static TypeRelation {
        &TYPE_CHART[*self as usize]
    }
}

/// Incoming-damage relations for all 18 types, indexed by `Type as usize`
///
/// Loaded once as process-constant data and never mutated. Hand-authored, so
/// [`verify_chart`] should be run once at startup to catch editing mistakes.
pub static TYPE_CHART: [TypeRelation; 18] = {
    use Type::*;
    [
        // Normal
        TypeRelation {
            double_from: &[Fighting],
            half_from: &[],
            zero_from: &[Ghost],
            strong_against: &[],
        },
        // Fire
        TypeRelation {
            double_from: &[Water, Ground, Rock],
            half_from: &[Fire, Grass, Ice, Bug, Steel, Fairy],
            zero_from: &[],
            strong_against: &[Grass, Ice, Bug, Steel],
        },
        // Water
        TypeRelation {
            double_from: &[Electric, Grass],
            half_from: &[Fire, Water, Ice, Steel],
            zero_from: &[],
            strong_against: &[Fire, Ground, Rock],
        },
        // Electric
        TypeRelation {
            double_from: &[Ground],
            half_from: &[Electric, Flying, Steel],
            zero_from: &[],
            strong_against: &[Water, Flying],
        },
        // Grass
        TypeRelation {
            double_from: &[Fire, Ice, Poison, Flying, Bug],
            half_from: &[Water, Electric, Grass, Ground],
            zero_from: &[],
            strong_against: &[Water, Ground, Rock],
        },
        // Ice
        TypeRelation {
            double_from: &[Fire, Fighting, Rock, Steel],
            half_from: &[Ice],
            zero_from: &[],
            strong_against: &[Grass, Ground, Flying, Dragon],
        },
        // Fighting
        TypeRelation {
            double_from: &[Flying, Psychic, Fairy],
            half_from: &[Bug, Rock, Dark],
            zero_from: &[],
            strong_against: &[Normal, Ice, Rock, Dark, Steel],
        },
        // Poison
        TypeRelation {
            double_from: &[Ground, Psychic],
            half_from: &[Grass, Fighting, Poison, Bug, Fairy],
            zero_from: &[],
            strong_against: &[Grass, Fairy],
        },
        // Ground
        TypeRelation {
            double_from: &[Water, Grass, Ice],
            half_from: &[Poison, Rock],
            zero_from: &[Electric],
            strong_against: &[Fire, Electric, Poison, Rock, Steel],
        },
        // Flying
        TypeRelation {
            double_from: &[Electric, Ice, Rock],
            half_from: &[Grass, Fighting, Bug],
            zero_from: &[Ground],
            strong_against: &[Grass, Fighting, Bug],
        },
        // Psychic
        TypeRelation {
            double_from: &[Bug, Ghost, Dark],
            half_from: &[Fighting, Psychic],
            zero_from: &[],
            strong_against: &[Fighting, Poison],
        },
        // Bug
        TypeRelation {
            double_from: &[Fire, Flying, Rock],
            half_from: &[Grass, Fighting, Ground],
            zero_from: &[],
            strong_against: &[Grass, Psychic, Dark],
        },
        // Rock
        TypeRelation {
            double_from: &[Water, Grass, Fighting, Ground, Steel],
            half_from: &[Normal, Fire, Poison, Flying],
            zero_from: &[],
            strong_against: &[Fire, Ice, Flying, Bug],
        },
        // Ghost
        TypeRelation {
            double_from: &[Ghost, Dark],
            half_from: &[Poison, Bug],
            zero_from: &[Normal, Fighting],
            strong_against: &[Psychic, Ghost],
        },
        // Dragon
        TypeRelation {
            double_from: &[Ice, Dragon, Fairy],
            half_from: &[Fire, Water, Electric, Grass],
            zero_from: &[],
            strong_against: &[Dragon],
        },
        // Dark
        TypeRelation {
            double_from: &[Fighting, Bug, Fairy],
            half_from: &[Ghost, Dark],
            zero_from: &[Psychic],
            strong_against: &[Psychic, Ghost],
        },
        // Steel
        TypeRelation {
            double_from: &[Fire, Fighting, Ground],
            half_from: &[Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy],
            zero_from: &[Poison],
            strong_against: &[Ice, Rock, Fairy],
        },
        // Fairy
        TypeRelation {
            double_from: &[Poison, Steel],
            half_from: &[Fighting, Bug, Dark],
            zero_from: &[Dragon],
            strong_against: &[Fighting, Dragon, Dark],
        },
    ]
};

/// Chart consistency violations reported by [`verify_chart`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("{attacker} appears in more than one relation for {defender}")]
    OverlappingRelation { defender: Type, attacker: Type },

    #[error("{defender} takes double from {attacker} but {attacker} does not list it as strong against")]
    MissingStrongAgainst { defender: Type, attacker: Type },

    #[error("{attacker} lists {defender} as strong against but {defender} does not take double from it")]
    UnbackedStrongAgainst { defender: Type, attacker: Type },
}

/// Validate the hand-authored chart data
///
/// Checks every defender's three relation sets for pairwise disjointness, and
/// the two-way agreement between `strong_against` edges and the `double_from`
/// entries they mirror. Intended to run once at startup; the algorithms
/// themselves never re-check the data.
pub fn verify_chart() -> Result<(), ChartError> {
    for &defender in Type::all() {
        let relation = defender.relation();

        for &attacker in relation.double_from {
            if relation.half_from.contains(&attacker) || relation.zero_from.contains(&attacker) {
                return Err(ChartError::OverlappingRelation { defender, attacker });
            }
        }
        for &attacker in relation.half_from {
            if relation.zero_from.contains(&attacker) {
                return Err(ChartError::OverlappingRelation { defender, attacker });
            }
        }

        for &attacker in relation.double_from {
            if !attacker.relation().strong_against.contains(&defender) {
                return Err(ChartError::MissingStrongAgainst { defender, attacker });
            }
        }
        for &defended in relation.strong_against {
            if !defended.relation().double_from.contains(&defender) {
                return Err(ChartError::UnbackedStrongAgainst {
                    defender: defended,
                    attacker: defender,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_passes_verification() {
        assert_eq!(verify_chart(), Ok(()));
    }

    #[test]
    fn test_relation_lookup_matches_chart_index() {
        for &t in Type::all() {
            assert_eq!(t.relation(), &TYPE_CHART[t as usize]);
        }
    }

    #[test]
    fn test_relations_are_pairwise_disjoint() {
        for &defender in Type::all() {
            let r = defender.relation();
            for &a in r.double_from {
                assert!(!r.half_from.contains(&a), "{defender}: {a} in double and half");
                assert!(!r.zero_from.contains(&a), "{defender}: {a} in double and zero");
            }
            for &a in r.half_from {
                assert!(!r.zero_from.contains(&a), "{defender}: {a} in half and zero");
            }
        }
    }

    #[test]
    fn test_known_relations() {
        // Spot checks against the canonical table
        let steel = Type::Steel.relation();
        assert_eq!(steel.double_from, &[Type::Fire, Type::Fighting, Type::Ground]);
        assert_eq!(steel.zero_from, &[Type::Poison]);
        assert_eq!(steel.half_from.len(), 10);

        let normal = Type::Normal.relation();
        assert!(normal.half_from.is_empty());
        assert_eq!(normal.zero_from, &[Type::Ghost]);
        assert!(normal.strong_against.is_empty());
    }

    #[test]
    fn test_self_relations_exist_where_canonical() {
        // Some types interact with themselves: these are intentional entries.
        assert!(Type::Ghost.relation().double_from.contains(&Type::Ghost));
        assert!(Type::Dragon.relation().double_from.contains(&Type::Dragon));
        assert!(Type::Water.relation().half_from.contains(&Type::Water));
        assert!(Type::Fire.relation().half_from.contains(&Type::Fire));
    }

    #[test]
    fn test_strong_against_is_display_only_but_consistent() {
        // Every advertised strong_against edge is backed by the defender's
        // double_from entry, and vice versa.
        for &attacker in Type::all() {
            for &defender in attacker.relation().strong_against {
                assert!(
                    defender.relation().double_from.contains(&attacker),
                    "{attacker} strong against {defender} but not mirrored"
                );
            }
        }
        for &defender in Type::all() {
            for &attacker in defender.relation().double_from {
                assert!(
                    attacker.relation().strong_against.contains(&defender),
                    "{defender} weak to {attacker} but not advertised"
                );
            }
        }
    }
}
