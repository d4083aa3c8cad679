//! Comparison selection and pairwise matchup summaries

use dexa_catalog::Creature;
use dexa_typing::{BestAttack, Effectiveness, best_attack};
use thiserror::Error;

/// Maximum creatures in one comparison
pub const MAX_COMPARED: usize = 3;

/// Minimum creatures before a result can be computed
pub const MIN_COMPARED: usize = 2;

/// Errors from comparison selection
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison already holds {MAX_COMPARED} creatures")]
    Full,

    #[error("creature {0} is already selected")]
    AlreadySelected(u32),
}

/// A comparison picker holding up to three distinct creatures
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    selected: Vec<Creature>,
}

impl Comparison {
    /// Create an empty comparison
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a creature to the comparison
    pub fn add(&mut self, creature: Creature) -> Result<(), CompareError> {
        if self.selected.len() >= MAX_COMPARED {
            return Err(CompareError::Full);
        }
        if self.selected.iter().any(|c| c.id == creature.id) {
            return Err(CompareError::AlreadySelected(creature.id));
        }
        self.selected.push(creature);
        Ok(())
    }

    /// Remove a creature by id, returning it
    pub fn remove(&mut self, id: u32) -> Option<Creature> {
        let index = self.selected.iter().position(|c| c.id == id)?;
        Some(self.selected.remove(index))
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.selected.clear();
    }

    /// The selected creatures in pick order
    pub fn selected(&self) -> &[Creature] {
        &self.selected
    }

    /// Number of selected creatures
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether no more creatures can be added
    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_COMPARED
    }

    /// Compute the comparison outcome
    ///
    /// `None` until at least two creatures are selected. The stat winner is
    /// the highest base stat total, earliest pick winning ties; matchups
    /// cover every ordered (attacker, defender) pair.
    pub fn result(&self) -> Option<ComparisonResult> {
        if self.selected.len() < MIN_COMPARED {
            return None;
        }

        let winner = self
            .selected
            .iter()
            .reduce(|prev, current| {
                if current.stats.total() > prev.stats.total() {
                    current
                } else {
                    prev
                }
            })?;

        let mut matchups = Vec::new();
        for attacker in &self.selected {
            for defender in &self.selected {
                if attacker.id == defender.id {
                    continue;
                }
                if let Some(best) = best_attack(&attacker.types, &defender.types) {
                    matchups.push(PairMatchup {
                        attacker: attacker.id,
                        defender: defender.id,
                        effectiveness: Effectiveness::from_multiplier(best.multiplier),
                        best,
                    });
                }
            }
        }

        Some(ComparisonResult {
            winner: winner.id,
            winner_total: winner.stats.total(),
            matchups,
        })
    }
}

/// Outcome of comparing the selected creatures
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// Id of the creature with the highest base stat total
    pub winner: u32,

    /// The winner's stat total
    pub winner_total: u32,

    /// Best-attack summaries for every ordered pair
    pub matchups: Vec<PairMatchup>,
}

impl ComparisonResult {
    /// The matchup for one ordered (attacker, defender) pair
    pub fn matchup(&self, attacker: u32, defender: u32) -> Option<&PairMatchup> {
        self.matchups
            .iter()
            .find(|m| m.attacker == attacker && m.defender == defender)
    }
}

/// How one selected creature's own types line up against another's
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatchup {
    /// Attacking creature id
    pub attacker: u32,

    /// Defending creature id
    pub defender: u32,

    /// The attacker's most effective own type and its multiplier
    pub best: BestAttack,

    /// Display class of the best multiplier
    pub effectiveness: Effectiveness,
}
