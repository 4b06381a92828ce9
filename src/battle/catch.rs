use crate::battle::calculators::{capture_chance, capture_payout, roll_capture};
use crate::battle::commands::BattleCommand;
use crate::battle::engine::{
    CAPTURE_REVEAL_DELAY_MS, RETURN_AFTER_CAPTURE_MS, WILD_ACTION_DELAY_MS,
};
use crate::battle::state::{BattleEvent, BattlePhase, Encounter};
use crate::errors::ActionError;
use crate::inventory::Inventory;
use crate::rng::GameRng;
use crate::timers::DelayedEffect;

/// Validate that a capture attempt may start at all.
pub fn can_attempt_catch(inventory: &Inventory) -> Result<(), ActionError> {
    if inventory.pokeballs == 0 {
        return Err(ActionError::NoPokeballs);
    }
    Ok(())
}

/// Commands for throwing a pokeball. The ball is spent up front and the
/// success roll happens here, at throw time, against the wild creature's
/// current HP. The scheduled reveal only reports the outcome.
pub fn calculate_catch_commands(encounter: &Encounter, rng: &mut GameRng) -> Vec<BattleCommand> {
    let wild = &encounter.wild;
    let chance = capture_chance(wild.hp, wild.max_hp);
    let caught = roll_capture(chance, rng);

    vec![
        BattleCommand::SpendPokeball,
        BattleCommand::EmitEvent(BattleEvent::PokeballThrown),
        BattleCommand::EmitEvent(BattleEvent::CaptureAttempted {
            species: wild.species,
            chance_percent: (chance * 100.0).round() as u32,
        }),
        BattleCommand::SetPhase(BattlePhase::ResolvingCapture),
        BattleCommand::Schedule {
            delay_ms: CAPTURE_REVEAL_DELAY_MS,
            effect: DelayedEffect::RevealCapture { caught },
        },
    ]
}

/// Commands for the reveal timer: the wild creature either joins the party
/// or breaks free and takes the turn.
pub fn capture_reveal_commands(
    caught: bool,
    encounter: &Encounter,
    rng: &mut GameRng,
) -> Vec<BattleCommand> {
    let species = encounter.wild.species;

    if caught {
        let payout = capture_payout(rng);
        vec![
            BattleCommand::EmitEvent(BattleEvent::CaptureSucceeded { species }),
            BattleCommand::AwardMoney { amount: payout },
            BattleCommand::EmitEvent(BattleEvent::MoneyEarned { amount: payout }),
            BattleCommand::CaptureWild,
            BattleCommand::SetPhase(BattlePhase::Captured),
            BattleCommand::Schedule {
                delay_ms: RETURN_AFTER_CAPTURE_MS,
                effect: DelayedEffect::ReturnToOverworld,
            },
        ]
    } else {
        vec![
            BattleCommand::EmitEvent(BattleEvent::CaptureFailed { species }),
            BattleCommand::SetPhase(BattlePhase::WildTurn),
            BattleCommand::Schedule {
                delay_ms: WILD_ACTION_DELAY_MS,
                effect: DelayedEffect::WildAction,
            },
        ]
    }
}
