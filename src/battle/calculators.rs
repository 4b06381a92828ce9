use crate::rng::GameRng;

// Player attacks roll a flat floor plus one point per attack stat.
const PLAYER_DAMAGE_BASE: u32 = 10;
// Wild attacks are weaker, with a lower floor.
const WILD_DAMAGE_BASE: u32 = 5;

const VICTORY_PAYOUT_MIN: u32 = 50;
const VICTORY_PAYOUT_MAX: u32 = 149;
const CAPTURE_PAYOUT_MIN: u32 = 25;
const CAPTURE_PAYOUT_MAX: u32 = 74;

// Even a full-health wild can be caught; the rest scales with missing HP.
const CAPTURE_CHANCE_FLOOR: f32 = 0.3;
const CAPTURE_CHANCE_HP_WEIGHT: f32 = 0.7;

/// Damage of a player attack: uniform in `[10, attack + 9]`.
pub fn attack_damage(attack: u16, rng: &mut GameRng) -> u16 {
    rng.roll(
        PLAYER_DAMAGE_BASE,
        attack as u32 + PLAYER_DAMAGE_BASE - 1,
        "player attack damage",
    ) as u16
}

/// Damage of a wild attack: uniform in `[5, attack + 4]`.
pub fn wild_attack_damage(attack: u16, rng: &mut GameRng) -> u16 {
    rng.roll(
        WILD_DAMAGE_BASE,
        attack as u32 + WILD_DAMAGE_BASE - 1,
        "wild attack damage",
    ) as u16
}

/// Prize money for knocking out a wild creature: uniform in `[50, 149]`.
pub fn victory_payout(rng: &mut GameRng) -> u32 {
    rng.roll(VICTORY_PAYOUT_MIN, VICTORY_PAYOUT_MAX, "victory payout")
}

/// Prize money for a successful capture: uniform in `[25, 74]`.
pub fn capture_payout(rng: &mut GameRng) -> u32 {
    rng.roll(CAPTURE_PAYOUT_MIN, CAPTURE_PAYOUT_MAX, "capture payout")
}

/// Capture odds from the wild creature's remaining HP:
/// `(1 - hp/max_hp) * 0.7 + 0.3`, so 0.3 at full health and 1.0 at zero.
pub fn capture_chance(hp: u16, max_hp: u16) -> f32 {
    let hp_fraction = hp as f32 / max_hp as f32;
    ((1.0 - hp_fraction) * CAPTURE_CHANCE_HP_WEIGHT + CAPTURE_CHANCE_FLOOR)
        .clamp(CAPTURE_CHANCE_FLOOR, 1.0)
}

/// Resolve a capture attempt against the rolled odds.
pub fn roll_capture(chance: f32, rng: &mut GameRng) -> bool {
    rng.chance(chance, "capture roll")
}
