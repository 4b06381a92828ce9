use crate::CreatureType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Every species the engine knows about. Encounter generation iterates this
/// enum, so adding a variant is enough to put a species into the wild pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Species {
    Pikachu,
    Charmander,
    Squirtle,
    Bulbasaur,
    Rattata,
    Pidgey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesData {
    pub name: &'static str,
    pub creature_type: CreatureType,
    pub base_stats: BaseStats,
    pub sprite: &'static str,
}

impl Species {
    /// Static catalog entry for this species.
    pub fn data(self) -> &'static SpeciesData {
        match self {
            Species::Pikachu => &PIKACHU,
            Species::Charmander => &CHARMANDER,
            Species::Squirtle => &SQUIRTLE,
            Species::Bulbasaur => &BULBASAUR,
            Species::Rattata => &RATTATA,
            Species::Pidgey => &PIDGEY,
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

static PIKACHU: SpeciesData = SpeciesData {
    name: "Pikachu",
    creature_type: CreatureType::Electric,
    base_stats: BaseStats { hp: 35, attack: 55 },
    sprite: "⚡",
};

static CHARMANDER: SpeciesData = SpeciesData {
    name: "Charmander",
    creature_type: CreatureType::Fire,
    base_stats: BaseStats { hp: 39, attack: 52 },
    sprite: "🔥",
};

static SQUIRTLE: SpeciesData = SpeciesData {
    name: "Squirtle",
    creature_type: CreatureType::Water,
    base_stats: BaseStats { hp: 44, attack: 48 },
    sprite: "💧",
};

static BULBASAUR: SpeciesData = SpeciesData {
    name: "Bulbasaur",
    creature_type: CreatureType::Grass,
    base_stats: BaseStats { hp: 45, attack: 49 },
    sprite: "🌱",
};

static RATTATA: SpeciesData = SpeciesData {
    name: "Rattata",
    creature_type: CreatureType::Normal,
    base_stats: BaseStats { hp: 30, attack: 56 },
    sprite: "🐭",
};

static PIDGEY: SpeciesData = SpeciesData {
    name: "Pidgey",
    creature_type: CreatureType::Flying,
    base_stats: BaseStats { hp: 40, attack: 45 },
    sprite: "🐦",
};
