use crate::battle::state::{BattleEvent, BattlePhase, Combatant};
use crate::timers::DelayedEffect;

/// Atomic state changes produced by the pure calculators and applied by the
/// session executor. A command never validates; everything it needs was
/// checked when it was calculated.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    /// Clamped damage to one side's creature.
    DealDamage { target: Combatant, amount: u16 },
    /// Consume one pokeball from the bag.
    SpendPokeball,
    /// Add prize money.
    AwardMoney { amount: u32 },
    /// Move the wild creature into the party, restored to full HP.
    CaptureWild,
    /// Change the active party slot.
    SwitchActive { index: usize },
    SetPhase(BattlePhase),
    EmitEvent(BattleEvent),
    /// Queue a delayed effect against the current encounter.
    Schedule { delay_ms: u64, effect: DelayedEffect },
}
