use crate::battle::calculators::{attack_damage, victory_payout, wild_attack_damage};
use crate::battle::catch::{calculate_catch_commands, can_attempt_catch};
use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, BattlePhase, Combatant, Encounter};
use crate::errors::{ActionError, EngineError, PartyError};
use crate::inventory::Inventory;
use crate::party::Party;
use crate::rng::GameRng;
use crate::timers::DelayedEffect;
use serde::{Deserialize, Serialize};

// Suspense delays, in session-clock milliseconds.
pub const WILD_ACTION_DELAY_MS: u64 = 1500;
pub const CAPTURE_REVEAL_DELAY_MS: u64 = 1000;
pub const RETURN_AFTER_VICTORY_MS: u64 = 3000;
pub const RETURN_AFTER_CAPTURE_MS: u64 = 3000;
pub const RETURN_AFTER_FLEE_MS: u64 = 1000;
pub const RETURN_AFTER_LOSS_MS: u64 = 2000;

/// What the player wants to do with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    ThrowPokeball,
    Flee,
    Switch { index: usize },
}

/// Resolve a player action into commands. Pure over its inputs: state changes
/// only happen when the session executes the returned commands, so an `Err`
/// here always means nothing moved.
pub fn player_action_commands(
    action: BattleAction,
    encounter: &Encounter,
    party: &Party,
    inventory: &Inventory,
    rng: &mut GameRng,
) -> Result<Vec<BattleCommand>, EngineError> {
    if encounter.phase != BattlePhase::PlayerTurn {
        return Err(ActionError::NotPlayerTurn(encounter.phase).into());
    }

    match action {
        BattleAction::Attack => attack_commands(encounter, party, rng),
        BattleAction::ThrowPokeball => {
            can_attempt_catch(inventory)?;
            Ok(calculate_catch_commands(encounter, rng))
        }
        BattleAction::Flee => Ok(flee_commands()),
        BattleAction::Switch { index } => switch_commands(party, index),
    }
}

fn attack_commands(
    encounter: &Encounter,
    party: &Party,
    rng: &mut GameRng,
) -> Result<Vec<BattleCommand>, EngineError> {
    let active = party.active();
    if active.is_fainted() {
        return Err(ActionError::ActiveCreatureFainted.into());
    }

    let damage = attack_damage(active.attack, rng);
    let remaining_hp = encounter.wild.hp.saturating_sub(damage);

    let mut commands = vec![
        BattleCommand::DealDamage {
            target: Combatant::Wild,
            amount: damage,
        },
        BattleCommand::EmitEvent(BattleEvent::DamageDealt {
            attacker: Combatant::Player,
            species: active.species,
            damage,
            remaining_hp,
        }),
    ];

    if remaining_hp == 0 {
        let payout = victory_payout(rng);
        commands.push(BattleCommand::EmitEvent(BattleEvent::WildFainted {
            species: encounter.wild.species,
        }));
        commands.push(BattleCommand::AwardMoney { amount: payout });
        commands.push(BattleCommand::EmitEvent(BattleEvent::MoneyEarned {
            amount: payout,
        }));
        commands.push(BattleCommand::SetPhase(BattlePhase::Won));
        commands.push(BattleCommand::Schedule {
            delay_ms: RETURN_AFTER_VICTORY_MS,
            effect: DelayedEffect::ReturnToOverworld,
        });
    } else {
        commands.push(BattleCommand::SetPhase(BattlePhase::WildTurn));
        commands.push(BattleCommand::Schedule {
            delay_ms: WILD_ACTION_DELAY_MS,
            effect: DelayedEffect::WildAction,
        });
    }

    Ok(commands)
}

fn flee_commands() -> Vec<BattleCommand> {
    vec![
        BattleCommand::EmitEvent(BattleEvent::PlayerFled),
        BattleCommand::SetPhase(BattlePhase::Fled),
        BattleCommand::Schedule {
            delay_ms: RETURN_AFTER_FLEE_MS,
            effect: DelayedEffect::ReturnToOverworld,
        },
    ]
}

/// An in-battle switch keeps the turn: the phase stays `PlayerTurn`.
/// Switching to the slot that is already active is a quiet no-op.
fn switch_commands(party: &Party, index: usize) -> Result<Vec<BattleCommand>, EngineError> {
    let target = party.member(index)?;
    if target.is_fainted() {
        return Err(PartyError::TargetFainted(index).into());
    }
    if index == party.active_index() {
        return Ok(Vec::new());
    }

    Ok(vec![
        BattleCommand::SwitchActive { index },
        BattleCommand::EmitEvent(BattleEvent::CreatureSentOut {
            species: target.species,
        }),
    ])
}

/// Commands for the wild creature's scheduled action. The timer guard has
/// already validated the phase and encounter identity. An active creature
/// that is somehow fainted already goes straight to faint recovery instead
/// of stalling the battle.
pub fn wild_action_commands(
    encounter: &Encounter,
    party: &Party,
    rng: &mut GameRng,
) -> Vec<BattleCommand> {
    let active = party.active();
    if active.is_fainted() {
        return faint_recovery_commands(party);
    }

    let damage = wild_attack_damage(encounter.wild.attack, rng);
    let remaining_hp = active.hp.saturating_sub(damage);

    let mut commands = vec![
        BattleCommand::DealDamage {
            target: Combatant::Player,
            amount: damage,
        },
        BattleCommand::EmitEvent(BattleEvent::DamageDealt {
            attacker: Combatant::Wild,
            species: encounter.wild.species,
            damage,
            remaining_hp,
        }),
    ];

    if remaining_hp == 0 {
        commands.push(BattleCommand::EmitEvent(BattleEvent::CreatureFainted {
            species: active.species,
        }));
        commands.extend(faint_recovery_commands(party));
    } else {
        commands.push(BattleCommand::SetPhase(BattlePhase::PlayerTurn));
    }

    commands
}

/// Auto-switch to the first conscious teammate, or end the battle as a loss
/// with the party (and its HP) left exactly as it fell.
fn faint_recovery_commands(party: &Party) -> Vec<BattleCommand> {
    match party.first_healthy_other(party.active_index()) {
        Some(index) => vec![
            BattleCommand::SwitchActive { index },
            BattleCommand::EmitEvent(BattleEvent::CreatureSentOut {
                species: party.members()[index].species,
            }),
            BattleCommand::SetPhase(BattlePhase::PlayerTurn),
        ],
        None => vec![
            BattleCommand::EmitEvent(BattleEvent::PartyWiped),
            BattleCommand::SetPhase(BattlePhase::Lost),
            BattleCommand::Schedule {
                delay_ms: RETURN_AFTER_LOSS_MS,
                effect: DelayedEffect::ReturnToOverworld,
            },
        ],
    }
}
