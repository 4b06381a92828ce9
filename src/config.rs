use crate::errors::{ConfigError, ConfigResult};
use crate::map::{Position, GRID_HEIGHT, GRID_WIDTH};
use schema::Species;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session tuning knobs, loadable from RON. Every field has a default, so a
/// config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starter_species: Species,
    pub starter_level: u8,
    pub start_position: Position,
    pub starting_money: u32,
    pub starting_pokeballs: u32,
    pub starting_potions: u32,
    /// Percent chance that a completed move rolls a wild encounter.
    pub encounter_rate: u8,
    pub wild_level_min: u8,
    pub wild_level_max: u8,
    pub potion_heal: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starter_species: Species::Pikachu,
            starter_level: 5,
            start_position: Position::new(5, 5),
            starting_money: 1000,
            starting_pokeballs: 5,
            starting_potions: 2,
            encounter_rate: 20,
            wild_level_min: 3,
            wild_level_max: 5,
            potion_heal: 20,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: GameConfig =
            ron::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_ron_str(&text)
    }

    /// Reject configs the engine cannot honor.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.starter_level == 0 {
            return Err(ConfigError::Invalid(
                "starter_level must be at least 1".to_string(),
            ));
        }
        if self.wild_level_min == 0 {
            return Err(ConfigError::Invalid(
                "wild_level_min must be at least 1".to_string(),
            ));
        }
        if self.wild_level_min > self.wild_level_max {
            return Err(ConfigError::Invalid(format!(
                "wild level range {}..={} is empty",
                self.wild_level_min, self.wild_level_max
            )));
        }
        if self.encounter_rate > 100 {
            return Err(ConfigError::Invalid(format!(
                "encounter_rate {} is not a percentage",
                self.encounter_rate
            )));
        }
        if self.start_position.x >= GRID_WIDTH || self.start_position.y >= GRID_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "start_position ({}, {}) is off the grid",
                self.start_position.x, self.start_position.y
            )));
        }
        Ok(())
    }
}
