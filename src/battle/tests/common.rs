use crate::config::GameConfig;
use crate::rng::GameRng;
use crate::session::GameSession;
use schema::Species;
use strum::IntoEnumIterator;

/// Percent roll at the default encounter rate boundary; at or under hits.
pub const ENCOUNTER_HIT: u32 = 20;
/// Percent roll safely above the default encounter rate.
pub const ENCOUNTER_MISS: u32 = 50;

/// Map generation consumes one terrain roll per non-shop tile. A 50 keeps
/// every tile plain.
pub fn map_rolls() -> Vec<u32> {
    vec![50; 99]
}

/// Creates a session over a fixed outcome script. The map rolls are
/// prepended so test scripts start at the first gameplay draw.
pub fn scripted_session(outcomes: Vec<u32>) -> GameSession {
    scripted_session_with_config(GameConfig::default(), outcomes)
}

pub fn scripted_session_with_config(config: GameConfig, outcomes: Vec<u32>) -> GameSession {
    let mut script = map_rolls();
    script.extend(outcomes);
    match GameSession::new(config, GameRng::scripted(script)) {
        Ok(session) => session,
        Err(err) => panic!("Failed to build test session: {}", err),
    }
}

/// Index of `species` in the wild pool, as the encounter roll expects it.
pub fn species_roll(species: Species) -> u32 {
    match Species::iter().position(|candidate| candidate == species) {
        Some(index) => index as u32,
        None => panic!("{:?} is not in the species pool", species),
    }
}

/// Creates a session and walks one step east into a scripted encounter with
/// the given wild creature. `battle_rolls` feed the battle that follows.
pub fn scripted_battle(wild: Species, level: u8, battle_rolls: Vec<u32>) -> GameSession {
    scripted_battle_with_config(GameConfig::default(), wild, level, battle_rolls)
}

pub fn scripted_battle_with_config(
    config: GameConfig,
    wild: Species,
    level: u8,
    battle_rolls: Vec<u32>,
) -> GameSession {
    let mut outcomes = vec![ENCOUNTER_HIT, species_roll(wild), level as u32];
    outcomes.extend(battle_rolls);
    let mut session = scripted_session_with_config(config, outcomes);
    let outcome = match session.move_player(1, 0) {
        Ok(outcome) => outcome,
        Err(err) => panic!("Opening move failed: {}", err),
    };
    assert!(outcome.encounter_started, "scripted encounter did not start");
    session
}

/// The live battle log, panicking when no battle is running.
pub fn battle_log(session: &GameSession) -> Vec<String> {
    match session.battle_log() {
        Some(lines) => lines,
        None => panic!("Expected a battle to be in progress"),
    }
}
