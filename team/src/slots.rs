//! Fixed-slot team container

use std::collections::HashSet;

use dexa_catalog::Creature;
use thiserror::Error;

/// Number of slots on a team
pub const TEAM_SIZE: usize = 6;

/// Errors from team slot operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TeamError {
    #[error("slot {0} is out of range")]
    SlotOutOfRange(usize),

    #[error("slot {0} is already filled")]
    SlotOccupied(usize),

    #[error("creature {0} is already on the team")]
    AlreadyOnTeam(u32),

    #[error("all {TEAM_SIZE} slots are filled")]
    TeamFull,
}

/// A team of up to six creatures in fixed, individually addressable slots
///
/// Slots keep their position when neighbors empty out, matching how the
/// builder UI renders them; aggregate computations skip empty slots.
#[derive(Debug, Clone, Default)]
pub struct Team {
    slots: [Option<Creature>; TEAM_SIZE],
}

impl Team {
    /// Create an empty team
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a creature into a specific slot
    ///
    /// Fails if the slot is out of range or occupied, or if the creature is
    /// already on the team in another slot.
    pub fn insert(&mut self, slot: usize, creature: Creature) -> Result<(), TeamError> {
        if slot >= TEAM_SIZE {
            return Err(TeamError::SlotOutOfRange(slot));
        }
        if self.slots[slot].is_some() {
            return Err(TeamError::SlotOccupied(slot));
        }
        if self.contains(creature.id) {
            return Err(TeamError::AlreadyOnTeam(creature.id));
        }
        self.slots[slot] = Some(creature);
        Ok(())
    }

    /// Put a creature into the first empty slot, returning its index
    pub fn fill(&mut self, creature: Creature) -> Result<usize, TeamError> {
        let slot = self.first_empty_slot().ok_or(TeamError::TeamFull)?;
        self.insert(slot, creature)?;
        Ok(slot)
    }

    /// Empty a slot, returning the creature that occupied it
    pub fn remove(&mut self, slot: usize) -> Option<Creature> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// Empty every slot
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }

    /// Get the creature in a slot
    pub fn get(&self, slot: usize) -> Option<&Creature> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    /// All six slots in order, for rendering
    pub fn slots(&self) -> &[Option<Creature>; TEAM_SIZE] {
        &self.slots
    }

    /// Iterate over filled slots in slot order
    pub fn members(&self) -> impl Iterator<Item = &Creature> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Ids of everyone on the team, for picker exclusion
    pub fn member_ids(&self) -> HashSet<u32> {
        self.members().map(|c| c.id).collect()
    }

    /// The first empty slot, if any
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Check whether a creature is on the team
    pub fn contains(&self, id: u32) -> bool {
        self.members().any(|c| c.id == id)
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.members().count()
    }

    /// Whether no slot is filled
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Whether every slot is filled
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }
}
