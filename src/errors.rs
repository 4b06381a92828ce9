use crate::battle::state::BattlePhase;
use crate::session::GameMode;
use std::fmt;

/// Main error type for the Tallgrass engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Error related to creature construction
    Creature(CreatureError),
    /// Error related to invalid player actions
    Action(ActionError),
    /// Error related to shop purchases
    Shop(ShopError),
    /// Error related to item usage
    Item(ItemError),
    /// Error related to party management
    Party(PartyError),
    /// Error related to configuration loading
    Config(ConfigError),
}

/// Errors related to creature construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureError {
    /// Levels start at 1; 0 is never a valid creature level
    InvalidLevel(u8),
}

/// Errors related to player actions being rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The operation is not available in the current game mode
    WrongMode {
        required: GameMode,
        current: GameMode,
    },
    /// A battle action arrived while the battle was not waiting for one
    NotPlayerTurn(BattlePhase),
    /// A battle action arrived with no encounter in progress
    NoActiveBattle,
    /// Battles end through the battle flow, never by walking out
    BattleInProgress,
    /// Attacking requires a conscious active creature
    ActiveCreatureFainted,
    /// Throwing a pokeball requires at least one in the bag
    NoPokeballs,
}

/// Errors related to shop purchases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    /// The item costs more than the player has
    InsufficientFunds { price: u32, money: u32 },
}

/// Errors related to item usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemError {
    /// Using a potion requires at least one in the bag
    NoPotions,
    /// The target creature is already at full HP
    AlreadyFullHp,
}

/// Errors related to party management
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyError {
    /// Party index is out of bounds
    InvalidIndex(usize),
    /// The switch target has no HP left
    TargetFainted(usize),
}

/// Errors related to configuration loading and validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The config file could not be read
    Io(String),
    /// The config file is not valid RON
    Parse(String),
    /// The config parsed but its values are unusable
    Invalid(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Creature(err) => write!(f, "Creature error: {}", err),
            EngineError::Action(err) => write!(f, "Action error: {}", err),
            EngineError::Shop(err) => write!(f, "Shop error: {}", err),
            EngineError::Item(err) => write!(f, "Item error: {}", err),
            EngineError::Party(err) => write!(f, "Party error: {}", err),
            EngineError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl fmt::Display for CreatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureError::InvalidLevel(level) => write!(f, "Invalid level: {}", level),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::WrongMode { required, current } => {
                write!(f, "Requires {:?} mode, currently in {:?}", required, current)
            }
            ActionError::NotPlayerTurn(phase) => {
                write!(f, "Not waiting for a player action (phase: {:?})", phase)
            }
            ActionError::NoActiveBattle => write!(f, "No battle in progress"),
            ActionError::BattleInProgress => write!(f, "Cannot leave during a battle"),
            ActionError::ActiveCreatureFainted => write!(f, "Active creature has fainted"),
            ActionError::NoPokeballs => write!(f, "No Pokeballs left"),
        }
    }
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::InsufficientFunds { price, money } => {
                write!(f, "Not enough money: need ${}, have ${}", price, money)
            }
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::NoPotions => write!(f, "No Potions left"),
            ItemError::AlreadyFullHp => write!(f, "Already at full HP"),
        }
    }
}

impl fmt::Display for PartyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyError::InvalidIndex(index) => write!(f, "Invalid party index: {}", index),
            PartyError::TargetFainted(index) => {
                write!(f, "Party member {} has fainted", index)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Failed to read config: {}", details),
            ConfigError::Parse(details) => write!(f, "Malformed config: {}", details),
            ConfigError::Invalid(details) => write!(f, "Invalid config: {}", details),
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for CreatureError {}
impl std::error::Error for ActionError {}
impl std::error::Error for ShopError {}
impl std::error::Error for ItemError {}
impl std::error::Error for PartyError {}
impl std::error::Error for ConfigError {}

impl From<CreatureError> for EngineError {
    fn from(err: CreatureError) -> Self {
        EngineError::Creature(err)
    }
}

impl From<ActionError> for EngineError {
    fn from(err: ActionError) -> Self {
        EngineError::Action(err)
    }
}

impl From<ShopError> for EngineError {
    fn from(err: ShopError) -> Self {
        EngineError::Shop(err)
    }
}

impl From<ItemError> for EngineError {
    fn from(err: ItemError) -> Self {
        EngineError::Item(err)
    }
}

impl From<PartyError> for EngineError {
    fn from(err: PartyError) -> Self {
        EngineError::Party(err)
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
