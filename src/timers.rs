use crate::battle::state::EncounterId;

/// Work a battle schedules for its own future. Every effect re-validates the
/// encounter id and phase when it fires, so firing late is always safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayedEffect {
    /// The wild creature takes its turn.
    WildAction,
    /// The pokeball stops wobbling; `caught` was rolled at throw time.
    RevealCapture { caught: bool },
    /// Tear the resolved encounter down and go back to the overworld.
    ReturnToOverworld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub fire_at_ms: u64,
    pub encounter: EncounterId,
    pub effect: DelayedEffect,
}

/// One-shot timers ordered by deadline. Timers are never cancelled; stale
/// ones are discarded by the guards at fire time instead.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    pub fn schedule(&mut self, timer: Timer) {
        self.timers.push(timer);
    }

    /// Remove and return the next due timer, earliest deadline first.
    /// Equal deadlines fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Timer> {
        let mut due_index: Option<usize> = None;
        for (index, timer) in self.timers.iter().enumerate() {
            if timer.fire_at_ms > now_ms {
                continue;
            }
            match due_index {
                Some(best) if self.timers[best].fire_at_ms <= timer.fire_at_ms => {}
                _ => due_index = Some(index),
            }
        }
        due_index.map(|index| self.timers.remove(index))
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Deadline of the soonest pending timer, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.iter().map(|timer| timer.fire_at_ms).min()
    }
}
