use crate::battle::commands::BattleCommand;
use crate::battle::engine::{self, BattleAction};
use crate::battle::state::{BattlePhase, Combatant, Encounter, EncounterId};
use crate::battle::catch;
use crate::config::GameConfig;
use crate::creature::Creature;
use crate::encounter::roll_encounter;
use crate::errors::{ActionError, EngineResult};
use crate::inventory::Inventory;
use crate::map::{OverworldMap, Position};
use crate::party::Party;
use crate::rng::GameRng;
use crate::timers::{DelayedEffect, Timer, TimerQueue};
use schema::ItemKind;
use serde::{Deserialize, Serialize};

/// Which screen owns the player's input right now.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Overworld,
    Battle,
    Menu,
    Shop,
}

/// Result of a movement attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub position: Position,
    pub encounter_started: bool,
}

/// The whole game in one aggregate: overworld, party, bag, the live
/// encounter, and the timer queue that drives delayed battle beats. All
/// mutation flows through `&mut self` methods, each gated on the current
/// mode, and every rejection leaves the state untouched.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    mode: GameMode,
    position: Position,
    map: OverworldMap,
    party: Party,
    inventory: Inventory,
    encounter: Option<Encounter>,
    timers: TimerQueue,
    clock_ms: u64,
    next_encounter_id: u64,
}

impl GameSession {
    pub fn new(config: GameConfig, mut rng: GameRng) -> EngineResult<Self> {
        config.validate()?;
        let starter = Creature::new(config.starter_species, config.starter_level)?;
        let map = OverworldMap::generate(&mut rng);

        Ok(GameSession {
            position: config.start_position,
            party: Party::new(starter),
            inventory: Inventory::new(
                config.starting_money,
                config.starting_pokeballs,
                config.starting_potions,
            ),
            mode: GameMode::Overworld,
            encounter: None,
            timers: TimerQueue::new(),
            clock_ms: 0,
            next_encounter_id: 0,
            map,
            rng,
            config,
        })
    }

    // --- Overworld ---

    /// Walk one step. Positions clamp to the grid; a completed step rolls
    /// for a wild encounter and flips the session into battle on a hit.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> EngineResult<MoveOutcome> {
        self.require_mode(GameMode::Overworld)?;

        let next = self.position.step(dx, dy);
        let moved = next != self.position;
        self.position = next;

        let wild = roll_encounter(moved, &self.config, &mut self.rng)?;
        let encounter_started = wild.is_some();
        if let Some(wild) = wild {
            self.start_encounter(wild);
        }

        Ok(MoveOutcome {
            position: self.position,
            encounter_started,
        })
    }

    pub fn enter_shop(&mut self) -> EngineResult<()> {
        self.require_mode(GameMode::Overworld)?;
        self.mode = GameMode::Shop;
        Ok(())
    }

    pub fn enter_menu(&mut self) -> EngineResult<()> {
        self.require_mode(GameMode::Overworld)?;
        self.mode = GameMode::Menu;
        Ok(())
    }

    /// Leave the shop or menu. A battle can only end through the engine, and
    /// leaving the overworld for itself is a quiet no-op.
    pub fn return_to_overworld(&mut self) -> EngineResult<()> {
        match self.mode {
            GameMode::Shop | GameMode::Menu | GameMode::Overworld => {
                self.mode = GameMode::Overworld;
                Ok(())
            }
            GameMode::Battle => Err(ActionError::BattleInProgress.into()),
        }
    }

    // --- Battle ---

    pub fn submit_battle_action(&mut self, action: BattleAction) -> EngineResult<()> {
        self.require_mode(GameMode::Battle)?;
        let Some(encounter) = self.encounter.as_ref() else {
            return Err(ActionError::NoActiveBattle.into());
        };

        let commands = engine::player_action_commands(
            action,
            encounter,
            &self.party,
            &self.inventory,
            &mut self.rng,
        )?;
        self.execute_all(commands);
        Ok(())
    }

    // --- Shop and menu ---

    pub fn buy(&mut self, kind: ItemKind) -> EngineResult<()> {
        self.require_mode(GameMode::Shop)?;
        self.inventory.purchase(kind)?;
        Ok(())
    }

    pub fn use_potion(&mut self, index: usize) -> EngineResult<()> {
        self.require_mode(GameMode::Menu)?;
        let target = self.party.member_mut(index)?;
        self.inventory.use_potion(target, self.config.potion_heal)?;
        Ok(())
    }

    /// Change the active creature. From the menu this is a plain roster
    /// operation; during a battle it routes through the engine so the
    /// phase rules apply (and the switch is logged).
    pub fn switch_active(&mut self, index: usize) -> EngineResult<()> {
        match self.mode {
            GameMode::Menu => {
                self.party.set_active(index)?;
                Ok(())
            }
            GameMode::Battle => self.submit_battle_action(BattleAction::Switch { index }),
            current => Err(ActionError::WrongMode {
                required: GameMode::Menu,
                current,
            }
            .into()),
        }
    }

    // --- Clock ---

    /// Advance the session clock and fire every timer that came due, in
    /// deadline order. Returns how many timers actually applied their
    /// effect; stale ones are discarded silently.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.clock_ms += elapsed_ms;
        let mut applied = 0;
        while let Some(timer) = self.timers.pop_due(self.clock_ms) {
            if self.apply_timer(timer) {
                applied += 1;
            }
        }
        applied
    }

    // --- Queries ---

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    pub fn map(&self) -> &OverworldMap {
        &self.map
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next scheduled beat, for callers that want to sleep
    /// exactly long enough.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// The live battle log, if a battle is running.
    pub fn battle_log(&self) -> Option<Vec<String>> {
        self.encounter.as_ref().map(|encounter| encounter.log_lines())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            position: self.position,
            map: self.map.clone(),
            party: self.party.members().to_vec(),
            active_index: self.party.active_index(),
            inventory: self.inventory.clone(),
            encounter: self.encounter.as_ref().map(|encounter| EncounterSnapshot {
                wild: encounter.wild.clone(),
                phase: encounter.phase,
                log: encounter.log_lines(),
            }),
        }
    }

    // --- Internals ---

    fn require_mode(&self, required: GameMode) -> Result<(), ActionError> {
        if self.mode != required {
            return Err(ActionError::WrongMode {
                required,
                current: self.mode,
            });
        }
        Ok(())
    }

    fn start_encounter(&mut self, wild: Creature) {
        self.next_encounter_id += 1;
        let id = EncounterId(self.next_encounter_id);
        self.encounter = Some(Encounter::new(id, wild));
        self.mode = GameMode::Battle;
    }

    /// Fire one timer. Every effect re-checks encounter identity and phase;
    /// a mismatch means the world moved on and the timer is dropped.
    fn apply_timer(&mut self, timer: Timer) -> bool {
        let Some(encounter) = self.encounter.as_ref() else {
            return false;
        };
        if encounter.id != timer.encounter {
            return false;
        }

        match timer.effect {
            DelayedEffect::WildAction if encounter.phase == BattlePhase::WildTurn => {
                let commands = engine::wild_action_commands(encounter, &self.party, &mut self.rng);
                self.execute_all(commands);
                true
            }
            DelayedEffect::RevealCapture { caught }
                if encounter.phase == BattlePhase::ResolvingCapture =>
            {
                let commands = catch::capture_reveal_commands(caught, encounter, &mut self.rng);
                self.execute_all(commands);
                true
            }
            DelayedEffect::ReturnToOverworld if encounter.phase.is_terminal() => {
                self.encounter = None;
                self.mode = GameMode::Overworld;
                true
            }
            _ => false,
        }
    }

    fn execute_all(&mut self, commands: Vec<BattleCommand>) {
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: BattleCommand) {
        match command {
            BattleCommand::DealDamage { target, amount } => match target {
                Combatant::Wild => {
                    if let Some(encounter) = self.encounter.as_mut() {
                        encounter.wild.take_damage(amount);
                    }
                }
                Combatant::Player => self.party.active_mut().take_damage(amount),
            },
            BattleCommand::SpendPokeball => self.inventory.spend_pokeball(),
            BattleCommand::AwardMoney { amount } => self.inventory.earn(amount),
            BattleCommand::CaptureWild => {
                if let Some(encounter) = self.encounter.as_ref() {
                    let wild = encounter.wild.clone();
                    self.party.add_captured(wild);
                }
            }
            BattleCommand::SwitchActive { index } => {
                // Calculators only emit validated switches.
                let _ = self.party.set_active(index);
            }
            BattleCommand::SetPhase(phase) => {
                if let Some(encounter) = self.encounter.as_mut() {
                    encounter.phase = phase;
                }
            }
            BattleCommand::EmitEvent(event) => {
                if let Some(encounter) = self.encounter.as_mut() {
                    encounter.events.push(event);
                }
            }
            BattleCommand::Schedule { delay_ms, effect } => {
                if let Some(encounter) = self.encounter.as_ref() {
                    self.timers.schedule(Timer {
                        fire_at_ms: self.clock_ms + delay_ms,
                        encounter: encounter.id,
                        effect,
                    });
                }
            }
        }
    }
}

/// Serializable view of the whole session, built fresh on request.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub position: Position,
    pub map: OverworldMap,
    pub party: Vec<Creature>,
    pub active_index: usize,
    pub inventory: Inventory,
    pub encounter: Option<EncounterSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EncounterSnapshot {
    pub wild: Creature,
    pub phase: BattlePhase,
    pub log: Vec<String>,
}
