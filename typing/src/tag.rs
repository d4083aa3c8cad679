//! The closed enumeration of type tags and matchup math

/// Elemental creature types (18 canonical tags)
///
/// The enumeration is closed: catalog payloads carry free-form tag strings,
/// and the normalization boundary maps them into this enum (or drops them).
/// Nothing downstream ever sees an unregistered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Damage multiplier of an attack of this type against a single defending type
    ///
    /// Looks up the defender's incoming-damage relations: zero beats double
    /// beats half, anything unlisted is neutral. Result is one of
    /// {0.0, 0.5, 1.0, 2.0}.
    pub fn effectiveness(&self, defender: Type) -> f32 {
        let relation = defender.relation();
        if relation.zero_from.contains(self) {
            0.0
        } else if relation.double_from.contains(self) {
            2.0
        } else if relation.half_from.contains(self) {
            0.5
        } else {
            1.0
        }
    }

    /// Damage multiplier against a dual-typed defender (factors multiplied)
    ///
    /// Each defending slot contributes its own factor, so a 2x on both slots
    /// stacks to 4x and a zero on either slot forces the whole result to 0.
    /// An empty slice yields the neutral 1.0.
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders.iter().map(|t| self.effectiveness(*t)).product()
    }

    /// Parse from a catalog tag string (case-insensitive)
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Canonical lowercase tag, as the catalog wire format spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effectiveness_super_effective() {
        assert_eq!(Type::Water.effectiveness(Type::Fire), 2.0);
        assert_eq!(Type::Fire.effectiveness(Type::Grass), 2.0);
        assert_eq!(Type::Electric.effectiveness(Type::Water), 2.0);
        assert_eq!(Type::Fighting.effectiveness(Type::Normal), 2.0);
    }

    #[test]
    fn test_effectiveness_not_very_effective() {
        assert_eq!(Type::Fire.effectiveness(Type::Water), 0.5);
        assert_eq!(Type::Grass.effectiveness(Type::Fire), 0.5);
        assert_eq!(Type::Electric.effectiveness(Type::Grass), 0.5);
    }

    #[test]
    fn test_effectiveness_immune() {
        assert_eq!(Type::Normal.effectiveness(Type::Ghost), 0.0);
        assert_eq!(Type::Ghost.effectiveness(Type::Normal), 0.0);
        assert_eq!(Type::Electric.effectiveness(Type::Ground), 0.0);
        assert_eq!(Type::Ground.effectiveness(Type::Flying), 0.0);
        assert_eq!(Type::Psychic.effectiveness(Type::Dark), 0.0);
        assert_eq!(Type::Dragon.effectiveness(Type::Fairy), 0.0);
    }

    #[test]
    fn test_effectiveness_single_always_in_domain() {
        for &attack in Type::all() {
            for &defend in Type::all() {
                let eff = attack.effectiveness(defend);
                assert!(
                    eff == 0.0 || eff == 0.5 || eff == 1.0 || eff == 2.0,
                    "{attack} vs {defend} gave {eff}"
                );
            }
        }
    }

    #[test]
    fn test_effectiveness_multi() {
        // Water vs Fire/Rock = 4x
        assert_eq!(Type::Water.effectiveness_multi(&[Type::Fire, Type::Rock]), 4.0);
        // Fire vs Water/Rock = 0.25x
        assert_eq!(Type::Fire.effectiveness_multi(&[Type::Water, Type::Rock]), 0.25);
        // Electric vs Water/Flying = 4x
        assert_eq!(Type::Electric.effectiveness_multi(&[Type::Water, Type::Flying]), 4.0);
        // Ground vs Flying/Steel = 0x (immune)
        assert_eq!(Type::Ground.effectiveness_multi(&[Type::Flying, Type::Steel]), 0.0);
    }

    #[test]
    fn test_effectiveness_multi_is_product_of_singles() {
        for &a in Type::all() {
            for &b in Type::all() {
                for &c in Type::all() {
                    assert_eq!(
                        a.effectiveness_multi(&[b, c]),
                        a.effectiveness(b) * a.effectiveness(c),
                        "{a} vs [{b}, {c}]"
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_absorbs_second_slot() {
        for &a in Type::all() {
            for &b in Type::all() {
                if a.effectiveness(b) != 0.0 {
                    continue;
                }
                for &c in Type::all() {
                    assert_eq!(a.effectiveness_multi(&[b, c]), 0.0, "{a} vs [{b}, {c}]");
                }
            }
        }
    }

    #[test]
    fn test_effectiveness_multi_empty_is_neutral() {
        assert_eq!(Type::Fire.effectiveness_multi(&[]), 1.0);
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Type::from_tag("fire"), Some(Type::Fire));
        assert_eq!(Type::from_tag("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_tag("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_tag("psychic"), Some(Type::Psychic));
        assert_eq!(Type::from_tag("shadow"), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for &t in Type::all() {
            assert_eq!(Type::from_tag(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase_tags() {
        let json = serde_json::to_string(&Type::Fire).unwrap();
        assert_eq!(json, "\"fire\"");
        let back: Type = serde_json::from_str("\"dragon\"").unwrap();
        assert_eq!(back, Type::Dragon);
    }
}
