use crate::creature::Creature;
use schema::Species;
use serde::{Deserialize, Serialize};

/// Identity of one wild encounter. Timers carry the id they were scheduled
/// under, so an effect can never land on a later encounter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncounterId(pub u64);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// Waiting for the player to pick an action.
    PlayerTurn,
    /// A thrown pokeball is wobbling; the outcome is rolled but not revealed.
    ResolvingCapture,
    /// The wild creature acts when its timer fires.
    WildTurn,
    Won,
    Lost,
    Fled,
    Captured,
}

impl BattlePhase {
    /// Terminal phases only wait for the return-to-overworld timer.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BattlePhase::Won | BattlePhase::Lost | BattlePhase::Fled | BattlePhase::Captured
        )
    }
}

/// Which side of the encounter an event refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combatant {
    Player,
    Wild,
}

/// Typed record of everything noteworthy that happens in an encounter.
/// `format` renders the player-facing log line; `None` marks bookkeeping
/// events that never reach the log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    WildAppeared {
        species: Species,
        level: u8,
    },
    DamageDealt {
        attacker: Combatant,
        species: Species,
        damage: u16,
        remaining_hp: u16,
    },
    WildFainted {
        species: Species,
    },
    MoneyEarned {
        amount: u32,
    },
    PokeballThrown,
    /// Records the rolled odds; silent because the reveal happens later.
    CaptureAttempted {
        species: Species,
        chance_percent: u32,
    },
    CaptureSucceeded {
        species: Species,
    },
    CaptureFailed {
        species: Species,
    },
    PlayerFled,
    CreatureFainted {
        species: Species,
    },
    PartyWiped,
    CreatureSentOut {
        species: Species,
    },
}

impl BattleEvent {
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::WildAppeared { species, .. } => {
                Some(format!("A wild {} appeared!", species.name()))
            }
            BattleEvent::DamageDealt {
                attacker: Combatant::Player,
                species,
                damage,
                ..
            } => Some(format!("{} dealt {} damage!", species.name(), damage)),
            BattleEvent::DamageDealt {
                attacker: Combatant::Wild,
                species,
                damage,
                ..
            } => Some(format!("Wild {} dealt {} damage!", species.name(), damage)),
            BattleEvent::WildFainted { species } => {
                Some(format!("Wild {} fainted!", species.name()))
            }
            BattleEvent::MoneyEarned { amount } => Some(format!("You earned ${}!", amount)),
            BattleEvent::PokeballThrown => Some("You threw a Pokeball!".to_string()),
            BattleEvent::CaptureAttempted { .. } => None,
            BattleEvent::CaptureSucceeded { species } => {
                Some(format!("{} was caught!", species.name()))
            }
            BattleEvent::CaptureFailed { species } => {
                Some(format!("{} broke free!", species.name()))
            }
            BattleEvent::PlayerFled => Some("You ran away safely!".to_string()),
            BattleEvent::CreatureFainted { species } => {
                Some(format!("{} fainted!", species.name()))
            }
            BattleEvent::PartyWiped => {
                Some("All your Pokemon have fainted! You ran away!".to_string())
            }
            BattleEvent::CreatureSentOut { species } => Some(format!("Go {}!", species.name())),
        }
    }
}

/// Ordered collection of the events one encounter has produced. The command
/// executor pushes into it; displays read the formatted lines back out.
#[derive(Debug, Clone)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The player-facing battle log: formatted lines of every loud event,
    /// in emission order.
    pub fn formatted_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(|event| event.format()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// One live wild encounter: the opponent, the phase machine, and the log.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub id: EncounterId,
    pub wild: Creature,
    pub phase: BattlePhase,
    pub events: EventBus,
}

impl Encounter {
    /// Open an encounter in `PlayerTurn`, with the appearance line already
    /// in the log.
    pub fn new(id: EncounterId, wild: Creature) -> Self {
        let mut events = EventBus::new();
        events.push(BattleEvent::WildAppeared {
            species: wild.species,
            level: wild.level,
        });
        Encounter {
            id,
            wild,
            phase: BattlePhase::PlayerTurn,
            events,
        }
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.events.formatted_lines()
    }
}
