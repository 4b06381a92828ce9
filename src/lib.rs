// In: src/lib.rs

//! Tallgrass Game Engine
//!
//! A creature-collecting game core: a 10x10 overworld with random wild
//! encounters, timer-paced battles, capture mechanics, and a small economy.
//! The engine is a pure state machine; frontends drive it by calling
//! operations and advancing the clock.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod config;
pub mod creature;
pub mod encounter;
pub mod errors;
pub mod inventory;
pub mod map;
pub mod mcp_interface;
pub mod party;
pub mod rng;
pub mod session;
pub mod timers;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `tallgrass` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{BaseStats, CreatureType, ItemData, ItemKind, Species, SpeciesData};

// --- From this crate's modules (`src/`) ---

// The session aggregate and the operations a frontend drives it with.
pub use session::{EncounterSnapshot, GameMode, GameSession, MoveOutcome, SessionSnapshot};

// Core battle types.
pub use battle::engine::BattleAction;
pub use battle::state::{BattleEvent, BattlePhase, Encounter, EncounterId, EventBus};

// Core runtime types for a session.
pub use config::GameConfig;
pub use creature::{Creature, CreatureId};
pub use inventory::Inventory;
pub use map::{OverworldMap, Position, Tile};
pub use party::Party;
pub use rng::GameRng;

// Crate-specific error and result types.
pub use errors::{
    ActionError, ConfigError, ConfigResult, CreatureError, EngineError, EngineResult, ItemError,
    PartyError, ShopError,
};
