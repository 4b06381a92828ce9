use std::path::Path;

use tallgrass::mcp_interface::{display_inventory, display_map, display_party, display_shop};
use tallgrass::{
    BattleAction, BattlePhase, GameConfig, GameMode, GameRng, GameSession, ItemKind,
};

fn main() {
    // An optional RON config path on the command line overrides the defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                println!("Error loading config: {}", e);
                return;
            }
        },
        None => GameConfig::default(),
    };

    // A fixed seed keeps the demo reproducible.
    let mut session = match GameSession::new(config, GameRng::seeded(42)) {
        Ok(session) => session,
        Err(e) => {
            println!("Error starting session: {}", e);
            return;
        }
    };

    println!("🌱 Welcome to Tallgrass! 🌱");
    println!();
    println!("Go {}!", session.party().active().name());
    println!();
    println!("{}", display_map(&session));

    // Stock up before heading into the grass
    println!("=== Poke Mart ===");
    if let Err(e) = session.enter_shop() {
        println!("Error entering shop: {}", e);
        return;
    }
    println!("{}", display_shop(&session));
    match session.buy(ItemKind::Pokeball) {
        Ok(()) => println!("Bought a Pokeball."),
        Err(e) => println!("Could not buy a Pokeball: {}", e),
    }
    if let Err(e) = session.return_to_overworld() {
        println!("Error leaving shop: {}", e);
        return;
    }
    println!();

    // Wander until something jumps out
    println!("=== Into the tall grass ===");
    let mut encountered = false;
    for step in 0..40 {
        // Pace east and west across the row
        let dx = if (step / 8) % 2 == 0 { 1 } else { -1 };
        match session.move_player(dx, 0) {
            Ok(outcome) => {
                if outcome.encounter_started {
                    encountered = true;
                    break;
                }
            }
            Err(e) => {
                println!("Error moving: {}", e);
                return;
            }
        }
    }
    if !encountered {
        println!("No wild creatures today. The demo ends here.");
        return;
    }

    run_battle_demo(&mut session);

    println!();
    println!("=== Back on the overworld ===");
    println!("{}", display_party(&session));
    println!("{}", display_inventory(&session));

    // Patch up whoever is hurt before signing off
    heal_party(&mut session);
}

/// Plays the encounter out: throw a ball when the wild creature is weak,
/// attack otherwise, and advance the clock whenever the battle is waiting
/// on a delayed beat.
fn run_battle_demo(session: &mut GameSession) {
    let mut printed_lines = 0;
    let mut iterations = 0;

    while session.mode() == GameMode::Battle {
        // Safety check to prevent infinite loops
        iterations += 1;
        if iterations > 50 {
            println!("Battle reached iteration limit - ending demo");
            return;
        }

        let Some(encounter) = session.encounter() else {
            return;
        };

        match encounter.phase {
            BattlePhase::PlayerTurn => {
                let weakened = encounter.wild.hp_fraction() < 0.5;
                let has_balls = session.inventory().pokeballs > 0;
                let action = if weakened && has_balls {
                    BattleAction::ThrowPokeball
                } else {
                    BattleAction::Attack
                };
                if let Err(e) = session.submit_battle_action(action) {
                    println!("Error acting in battle: {}", e);
                    return;
                }
            }
            _ => {
                // Waiting on a timer: jump straight to the next deadline
                let wait = session
                    .next_deadline_ms()
                    .map(|deadline| deadline.saturating_sub(session.clock_ms()))
                    .unwrap_or(500);
                session.advance(wait.max(1));
            }
        }

        print_new_log_lines(session, &mut printed_lines);
    }
}

fn print_new_log_lines(session: &GameSession, printed: &mut usize) {
    if let Some(lines) = session.battle_log() {
        for line in &lines[*printed..] {
            println!("  {}", line);
        }
        *printed = lines.len();
    }
}

fn heal_party(session: &mut GameSession) {
    let hurt: Vec<usize> = session
        .party()
        .members()
        .iter()
        .enumerate()
        .filter(|(_, member)| member.hp < member.max_hp)
        .map(|(i, _)| i)
        .collect();
    if hurt.is_empty() {
        return;
    }

    println!();
    println!("=== Party menu ===");
    if let Err(e) = session.enter_menu() {
        println!("Error opening menu: {}", e);
        return;
    }
    for index in hurt {
        match session.use_potion(index) {
            Ok(()) => println!(
                "Used a Potion on {}.",
                session.party().members()[index].name()
            ),
            Err(e) => println!("Could not use a Potion: {}", e),
        }
    }
    if let Err(e) = session.return_to_overworld() {
        println!("Error leaving menu: {}", e);
        return;
    }
    println!();
    println!("{}", display_party(session));
}
