//! Candidate scoring against a team's critical weaknesses

use std::collections::HashSet;

use dexa_catalog::Creature;

use crate::coverage::CoverageReport;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Points per critical weakness a candidate type is immune to
const IMMUNE_SCORE: u32 = 3;

/// Points per critical weakness a candidate type resists
const RESIST_SCORE: u32 = 2;

/// A scored candidate for the team's next slot
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub creature: &'a Creature,
    pub score: u32,
}

/// Rank catalog candidates by how well they patch the team's worst gaps
///
/// Only critical weaknesses (team average at or above 2x) count. A candidate
/// earns points for every (own type, critical weakness) pair where that type
/// takes zero (+3) or half (+2) damage from the attacking type the team is
/// weak to; contributions sum across pairs. Candidates already on the team
/// and candidates scoring zero are dropped, ties keep catalog order, and the
/// top three are returned. A team with no critical weaknesses gets no
/// recommendations.
pub fn recommend<'a>(
    report: &CoverageReport,
    candidates: &'a [Creature],
    exclude: &HashSet<u32>,
) -> Vec<Recommendation<'a>> {
    let critical = report.critical_weaknesses();
    if critical.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Recommendation<'a>> = candidates
        .iter()
        .filter(|c| !exclude.contains(&c.id))
        .filter_map(|creature| {
            let mut score = 0;
            for &own in &creature.types {
                for &weakness in &critical {
                    let incoming = weakness.effectiveness(own);
                    if incoming == 0.0 {
                        score += IMMUNE_SCORE;
                    } else if incoming == 0.5 {
                        score += RESIST_SCORE;
                    }
                }
            }
            (score > 0).then_some(Recommendation { creature, score })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}
