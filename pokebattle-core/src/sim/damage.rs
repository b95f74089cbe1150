//! Damage math for a single exchange.
//!
//! The formula chain is `(effective_attack - effective_defense / 2) * power
//! / 40`, truncated, then scaled by the type multiplier, the crit
//! multiplier, and a random variance factor. Both stages floor at 1.

/// Chance of a critical hit.
pub const CRIT_CHANCE: f64 = 0.1;
/// Damage scale applied on a crit.
pub const CRIT_MULTIPLIER: f64 = 2.0;
/// Lower bound of the per-hit variance factor.
pub const VARIANCE_MIN: f64 = 0.85;
/// Upper bound of the per-hit variance factor.
pub const VARIANCE_MAX: f64 = 1.0;

const DAMAGE_SCALE: f64 = 40.0;

/// Attack stat as it enters the formula: halved (truncating) while burned.
pub fn effective_attack(attack: u32, burned: bool) -> u32 {
    if burned {
        attack / 2
    } else {
        attack
    }
}

/// Pre-modifier damage. Defense is floored at 1 to avoid a zero divisor.
pub fn base_damage(attack: u32, defense: u32, power: u32) -> u32 {
    let defense = defense.max(1) as f64;
    let raw = (attack as f64 - defense / 2.0) * power as f64 / DAMAGE_SCALE;
    clamp_min_one(raw)
}

/// Base damage scaled by type effectiveness, crit, and variance.
///
/// Truncates toward zero and never drops below 1, including at type
/// multiplier 0, where the "no effect" message still accompanies a 1 HP
/// deduction.
pub fn final_damage(base: u32, type_multiplier: f64, crit: f64, variance: f64) -> u32 {
    clamp_min_one(base as f64 * type_multiplier * crit * variance)
}

fn clamp_min_one(value: f64) -> u32 {
    (value as i64).max(1) as u32
}
