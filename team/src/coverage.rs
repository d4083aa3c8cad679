//! Team-wide defensive coverage analysis

use std::collections::{BTreeMap, BTreeSet};

use dexa_typing::Type;
use serde::Serialize;

use crate::slots::Team;

/// Average incoming multiplier at or above which a weakness counts as critical
pub const CRITICAL_WEAKNESS: f32 = 2.0;

/// Classification of all 18 attacking types against one team
///
/// Keys are attacking types, values the team's average incoming multiplier.
/// A type averaging exactly 1.0 is true neutral and appears in none of the
/// three buckets. Built fresh on every team change, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoverageReport {
    /// Attacking types averaging above 1x
    pub weaknesses: BTreeMap<Type, f32>,

    /// Attacking types averaging below 1x but above zero
    pub resistances: BTreeMap<Type, f32>,

    /// Attacking types no member takes damage from
    pub immunities: BTreeSet<Type>,
}

impl CoverageReport {
    /// Weaknesses ordered worst-first, for display
    pub fn weaknesses_desc(&self) -> Vec<(Type, f32)> {
        let mut entries: Vec<_> = self.weaknesses.iter().map(|(&t, &m)| (t, m)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    /// Resistances ordered strongest-first, for display
    pub fn resistances_asc(&self) -> Vec<(Type, f32)> {
        let mut entries: Vec<_> = self.resistances.iter().map(|(&t, &m)| (t, m)).collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        entries
    }

    /// Weaknesses at or above the critical threshold
    pub fn critical_weaknesses(&self) -> Vec<Type> {
        self.weaknesses
            .iter()
            .filter(|&(_, &m)| m >= CRITICAL_WEAKNESS)
            .map(|(&t, _)| t)
            .collect()
    }
}

/// Analyze a team's defensive coverage across all 18 attacking types
///
/// Returns `None` for a team with no filled slots. For each attacking type,
/// every member's incoming multiplier is averaged over the number of filled
/// slots (exactly sum/len, stored unrounded) and classified: 0 is a team
/// immunity, above 1 a weakness, below 1 a resistance, exactly 1 omitted.
pub fn analyze_coverage(team: &Team) -> Option<CoverageReport> {
    let members: Vec<_> = team.members().collect();
    if members.is_empty() {
        return None;
    }

    let mut report = CoverageReport::default();
    for &attack in Type::all() {
        let total: f32 = members
            .iter()
            .map(|m| attack.effectiveness_multi(&m.types))
            .sum();
        let average = total / members.len() as f32;

        if average == 0.0 {
            report.immunities.insert(attack);
        } else if average > 1.0 {
            report.weaknesses.insert(attack, average);
        } else if average < 1.0 {
            report.resistances.insert(attack, average);
        }
    }
    Some(report)
}
