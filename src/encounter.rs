use crate::config::GameConfig;
use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::rng::GameRng;
use schema::Species;
use strum::IntoEnumIterator;

/// Roll for a wild encounter after a movement attempt. `moved == false`
/// (a move clamped at a wall) never draws from the RNG at all.
///
/// Draw order on a completed move: encounter percent, then species, then
/// level. Scripted tests rely on that order.
pub fn roll_encounter(
    moved: bool,
    config: &GameConfig,
    rng: &mut GameRng,
) -> EngineResult<Option<Creature>> {
    if !moved {
        return Ok(None);
    }
    if rng.percent("encounter check") > config.encounter_rate as u32 {
        return Ok(None);
    }

    let species = random_species(rng);
    let level = rng.roll(
        config.wild_level_min as u32,
        config.wild_level_max as u32,
        "wild level",
    ) as u8;
    let creature = Creature::new(species, level)?;
    Ok(Some(creature))
}

fn random_species(rng: &mut GameRng) -> Species {
    let pool: Vec<Species> = Species::iter().collect();
    let index = rng.roll(0, pool.len() as u32 - 1, "wild species") as usize;
    pool[index]
}
