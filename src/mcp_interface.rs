//! Display and command handling for frontends driving a GameSession.
//!
//! This module contains the text rendering and command parsing shared by the
//! demo binary and the MCP server, so both stay thin wrappers around the
//! session API.

use crate::battle::engine::BattleAction;
use crate::battle::state::BattlePhase;
use crate::creature::Creature;
use crate::map::{Position, Tile, GRID_HEIGHT, GRID_WIDTH};
use crate::session::{GameMode, GameSession};
use schema::ItemKind;
use strum::IntoEnumIterator;

/// One-line summary of a creature: sprite, name, level, HP.
fn creature_line(creature: &Creature) -> String {
    format!(
        "{} {}  Lv.{}  HP {}/{}",
        creature.species.data().sprite,
        creature.name(),
        creature.level,
        creature.hp,
        creature.max_hp
    )
}

/// Renders the overworld grid with the player drawn over their tile.
pub fn display_map(session: &GameSession) -> String {
    let mut output = String::from("--- Tallgrass ---\n");
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let position = Position::new(x, y);
            let glyph = if session.position() == position {
                "🧑"
            } else {
                match session.map().tile(position) {
                    Tile::Shop => "🏪",
                    Tile::Grass => "🌿",
                    Tile::Plain => "・",
                }
            };
            output.push_str(glyph);
        }
        output.push('\n');
    }
    output
}

/// Displays the party roster with active and fainted markers.
pub fn display_party(session: &GameSession) -> String {
    let mut output = String::from("--- Your Party ---\n");
    let party = session.party();
    for (i, member) in party.members().iter().enumerate() {
        let active_marker = if i == party.active_index() {
            " (Active)"
        } else {
            ""
        };
        let fainted_marker = if member.is_fainted() { " (Fainted)" } else { "" };
        output.push_str(&format!(
            " {}. {}{}{}\n",
            i + 1,
            creature_line(member),
            active_marker,
            fainted_marker
        ));
    }
    output
}

/// Displays money and item counts.
pub fn display_inventory(session: &GameSession) -> String {
    let inventory = session.inventory();
    let mut output = String::from("--- Your Bag ---\n");
    output.push_str(&format!("💰 Money: ${}\n", inventory.money));
    output.push_str(&format!(
        "{} Pokeballs: {}\n",
        ItemKind::Pokeball.data().sprite,
        inventory.pokeballs
    ));
    output.push_str(&format!(
        "{} Potions: {}\n",
        ItemKind::Potion.data().sprite,
        inventory.potions
    ));
    output
}

/// Displays the shop catalog and the player's money.
pub fn display_shop(session: &GameSession) -> String {
    let mut output = String::from("--- Poke Mart ---\n");
    for (i, kind) in ItemKind::iter().enumerate() {
        let item = kind.data();
        output.push_str(&format!(
            "  {}. {} {} - ${} - {}\n",
            i + 1,
            item.sprite,
            item.name,
            item.price,
            item.description
        ));
    }
    output.push_str(&format!("\n💰 You have ${}.\n", session.inventory().money));
    output
}

/// Displays the running battle: combatants, log, and a prompt for the
/// current phase.
pub fn display_battle(session: &GameSession) -> String {
    let Some(encounter) = session.encounter() else {
        return "No battle in progress.".to_string();
    };

    let mut output = String::from("⚔️ --- Wild Encounter --- ⚔️\n");
    output.push_str(&format!("Wild: {}\n", creature_line(&encounter.wild)));
    output.push_str(&format!(
        "You:  {}\n",
        creature_line(session.party().active())
    ));

    output.push_str("\n--- Battle Log ---\n");
    for line in encounter.log_lines() {
        output.push_str(&line);
        output.push('\n');
    }

    output.push('\n');
    output.push_str(match encounter.phase {
        BattlePhase::PlayerTurn => "What will you do? (attack, catch, flee, switch <n>)\n",
        BattlePhase::WildTurn => "The wild creature is about to act...\n",
        BattlePhase::ResolvingCapture => "The Pokeball rocks back and forth...\n",
        _ => "Returning to the overworld...\n",
    });
    output
}

/// Gets the current session state as a formatted string, picked by mode.
pub fn get_session_summary(session: &GameSession) -> String {
    match session.mode() {
        GameMode::Overworld => {
            let mut output = display_map(session);
            let position = session.position();
            output.push_str(&format!("\nYou are at ({}, {}).\n", position.x, position.y));
            output
        }
        GameMode::Battle => display_battle(session),
        GameMode::Shop => display_shop(session),
        GameMode::Menu => {
            let mut output = display_party(session);
            output.push('\n');
            output.push_str(&display_inventory(session));
            output
        }
    }
}

/// Parses a compass or arrow direction into a movement delta.
pub fn parse_direction(name: &str) -> Option<(i32, i32)> {
    match name.trim().to_lowercase().as_str() {
        "north" | "up" => Some((0, -1)),
        "south" | "down" => Some((0, 1)),
        "west" | "left" => Some((-1, 0)),
        "east" | "right" => Some((1, 0)),
        _ => None,
    }
}

/// Parses a battle action name. Switching has its own command.
pub fn parse_battle_action(name: &str) -> Option<BattleAction> {
    match name.trim().to_lowercase().as_str() {
        "attack" | "fight" => Some(BattleAction::Attack),
        "catch" | "throw" | "pokeball" => Some(BattleAction::ThrowPokeball),
        "flee" | "run" => Some(BattleAction::Flee),
        _ => None,
    }
}

/// Parses a shop item name.
pub fn parse_item(name: &str) -> Option<ItemKind> {
    match name.trim().to_lowercase().as_str() {
        "pokeball" | "ball" => Some(ItemKind::Pokeball),
        "potion" => Some(ItemKind::Potion),
        _ => None,
    }
}

/// Executes one movement step and returns the resulting view.
pub fn execute_move(session: &mut GameSession, direction: &str) -> Result<String, String> {
    let (dx, dy) = parse_direction(direction)
        .ok_or_else(|| format!("Unknown direction '{}'. Use north, south, east, or west.", direction))?;

    let outcome = session
        .move_player(dx, dy)
        .map_err(|err| err.to_string())?;

    if outcome.encounter_started {
        Ok(display_battle(session))
    } else {
        Ok(get_session_summary(session))
    }
}

/// Executes a named battle action and returns the updated battle view.
pub fn execute_battle_action(session: &mut GameSession, action_name: &str) -> Result<String, String> {
    let action = parse_battle_action(action_name).ok_or_else(|| {
        format!(
            "Unknown battle action '{}'. Use attack, catch, or flee.",
            action_name
        )
    })?;

    session
        .submit_battle_action(action)
        .map_err(|err| err.to_string())?;
    Ok(display_battle(session))
}

/// Executes a switch to party member `number` (1-based).
pub fn execute_switch(session: &mut GameSession, number: usize) -> Result<String, String> {
    let party_size = session.party().members().len();
    if number == 0 || number > party_size {
        return Err(format!("Invalid party number. Use 1-{}.", party_size));
    }

    session
        .switch_active(number - 1)
        .map_err(|err| err.to_string())?;

    if session.mode() == GameMode::Battle {
        Ok(display_battle(session))
    } else {
        Ok(display_party(session))
    }
}

/// Executes a shop purchase by item name.
pub fn execute_buy(session: &mut GameSession, item_name: &str) -> Result<String, String> {
    let kind = parse_item(item_name)
        .ok_or_else(|| format!("Unknown item '{}'. Use pokeball or potion.", item_name))?;

    session.buy(kind).map_err(|err| err.to_string())?;
    Ok(format!(
        "You bought a {}!\n\n{}",
        kind.name(),
        display_inventory(session)
    ))
}

/// Executes using a potion on party member `number` (1-based).
pub fn execute_use_potion(session: &mut GameSession, number: usize) -> Result<String, String> {
    let party_size = session.party().members().len();
    if number == 0 || number > party_size {
        return Err(format!("Invalid party number. Use 1-{}.", party_size));
    }

    session
        .use_potion(number - 1)
        .map_err(|err| err.to_string())?;
    Ok(format!("Used a Potion!\n\n{}", display_party(session)))
}

pub fn execute_enter_shop(session: &mut GameSession) -> Result<String, String> {
    session.enter_shop().map_err(|err| err.to_string())?;
    Ok(display_shop(session))
}

pub fn execute_enter_menu(session: &mut GameSession) -> Result<String, String> {
    session.enter_menu().map_err(|err| err.to_string())?;
    Ok(get_session_summary(session))
}

pub fn execute_leave(session: &mut GameSession) -> Result<String, String> {
    session
        .return_to_overworld()
        .map_err(|err| err.to_string())?;
    Ok(get_session_summary(session))
}

/// Advances the session clock, firing due timers, and returns the view.
pub fn execute_wait(session: &mut GameSession, elapsed_ms: u64) -> String {
    session.advance(elapsed_ms);
    get_session_summary(session)
}
