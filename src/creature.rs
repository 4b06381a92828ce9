use crate::errors::CreatureError;
use schema::Species;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

// Ids are unique within a process run, not stable across runs.
static NEXT_CREATURE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u64);

/// A concrete creature instance: a species plus level-derived stats and
/// current HP. Stats are fixed at creation; only `hp` changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub species: Species,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub attack: u16,
}

impl Creature {
    /// Create a creature at full HP with stats derived from the species
    /// catalog. Levels start at 1.
    pub fn new(species: Species, level: u8) -> Result<Self, CreatureError> {
        if level == 0 {
            return Err(CreatureError::InvalidLevel(level));
        }

        let base = &species.data().base_stats;
        let max_hp = base.hp as u16 + level as u16 * 2;
        let attack = base.attack as u16 + (level as u16 * 3) / 2;

        Ok(Creature {
            id: CreatureId(NEXT_CREATURE_ID.fetch_add(1, Ordering::Relaxed)),
            species,
            level,
            hp: max_hp,
            max_hp,
            attack,
        })
    }

    /// Display name from the species catalog.
    pub fn name(&self) -> &'static str {
        self.species.name()
    }

    /// Apply damage, flooring HP at 0.
    pub fn take_damage(&mut self, amount: u16) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restore HP, capped at `max_hp`. Works on fainted creatures too.
    pub fn heal(&mut self, amount: u16) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Reset HP to full.
    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Remaining HP as a fraction of max, in `[0.0, 1.0]`.
    pub fn hp_fraction(&self) -> f32 {
        self.hp as f32 / self.max_hp as f32
    }
}
