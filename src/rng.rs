use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injectable randomness for the whole engine.
///
/// Every draw goes through `roll`, which takes a human-readable reason so
/// scripted tests can document exactly which decision each value feeds.
/// Scripted values are the final domain quantities (a damage roll, a percent
/// roll), not raw entropy, which keeps test scripts legible.
#[derive(Debug, Clone)]
pub struct GameRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Std(StdRng),
    Scripted { outcomes: Vec<u32>, index: usize },
}

impl GameRng {
    /// OS-seeded generator for normal play.
    pub fn new_random() -> Self {
        Self {
            source: RngSource::Std(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator; the same seed replays the same session.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Std(StdRng::seed_from_u64(seed)),
        }
    }

    /// Fixed outcome script, consumed in order. Panics on exhaustion or when
    /// a value falls outside the range the engine asked for, so a drifted
    /// test script fails loudly instead of silently bending the math.
    pub fn scripted(outcomes: Vec<u32>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Draw a value in `[lo, hi]`, both ends inclusive.
    pub fn roll(&mut self, lo: u32, hi: u32, reason: &str) -> u32 {
        let outcome = match &mut self.source {
            RngSource::Std(rng) => rng.random_range(lo..=hi),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "GameRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                if outcome < lo || outcome > hi {
                    panic!(
                        "Scripted value {} for '{}' is outside {}..={}",
                        outcome, reason, lo, hi
                    );
                }
                outcome
            }
        };

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {} ({}..={})", outcome, reason, lo, hi);

        outcome
    }

    /// Uniform percent roll in `1..=100`.
    pub fn percent(&mut self, reason: &str) -> u32 {
        self.roll(1, 100, reason)
    }

    /// True with the given probability, resolved on the percent scale.
    pub fn chance(&mut self, probability: f32, reason: &str) -> bool {
        let threshold = (probability * 100.0).round() as u32;
        self.percent(reason) <= threshold
    }
}
