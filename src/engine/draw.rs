//! Dice and effect draws.
//!
//! Pure draw logic for domain activation: the duration die, the unique
//! effect draw, the bonus effects granted by jackpot options 8 and 9, and
//! the luck roll used by the punishment resolver. Every function either
//! takes a forced roll (testable without randomness) or a [`GameRng`].

use smallvec::SmallVec;

use crate::catalog::registry::jackpot;
use crate::catalog::OptionId;
use crate::core::rng::GameRng;

/// Drawn effects per activation: three base plus up to two bonus.
pub type DrawnEffects = SmallVec<[OptionId; 5]>;

/// Number of base effects drawn on a domain activation.
pub const BASE_EFFECT_COUNT: usize = 3;

/// Map a d6 roll to a domain duration in turns.
///
/// The mapping is deliberately non-uniform: durations 1 and 3 are twice
/// as likely as 2 and 4.
#[must_use]
pub const fn duration_from_roll(roll: u8) -> u8 {
    match roll {
        0..=2 => 1,
        3 => 2,
        4 | 5 => 3,
        _ => 4,
    }
}

/// Roll the duration die. Returns `(roll, turns)`.
pub fn draw_domain_duration(rng: &mut GameRng) -> (u8, u8) {
    let roll = rng.roll_d6();
    (roll, duration_from_roll(roll))
}

/// Draw `count` unique effects from `pool` minus `exclude`.
///
/// Panics if the remaining pool holds fewer than `count` effects; that is
/// a catalog misconfiguration, not a runtime condition.
pub fn draw_domain_effects(
    pool: &[OptionId],
    exclude: &[OptionId],
    count: usize,
    rng: &mut GameRng,
) -> DrawnEffects {
    let mut available: Vec<OptionId> = pool
        .iter()
        .copied()
        .filter(|id| !exclude.contains(id))
        .collect();
    assert!(
        available.len() >= count,
        "effect pool exhausted: {} available, {} requested",
        available.len(),
        count
    );

    let mut drawn = DrawnEffects::new();
    for _ in 0..count {
        let idx = rng.gen_range_usize(0..available.len());
        drawn.push(available.swap_remove(idx));
    }
    drawn
}

/// Append the bonus effects granted by options 8 and 9.
///
/// Option 8 grants one extra effect that is not option 9; option 9 grants
/// one extra effect that is not option 8. `drawn` is the running
/// accumulator, so a bonus can never duplicate an effect already held.
/// Second-chance draws never contain 8 or 9, so this is a no-op for them.
pub fn apply_bonus_effects(
    drawn: &mut DrawnEffects,
    pool: &[OptionId],
    is_second_chance: bool,
    rng: &mut GameRng,
) {
    if is_second_chance {
        return;
    }
    let has_8 = drawn.contains(&jackpot::REWRITE_OF_FATE);
    let has_9 = drawn.contains(&jackpot::FULL_CHANCE);

    if has_8 {
        if let Some(bonus) = draw_one_excluding(pool, drawn, jackpot::FULL_CHANCE, rng) {
            drawn.push(bonus);
        }
    }
    if has_9 {
        if let Some(bonus) = draw_one_excluding(pool, drawn, jackpot::REWRITE_OF_FATE, rng) {
            drawn.push(bonus);
        }
    }
}

fn draw_one_excluding(
    pool: &[OptionId],
    drawn: &[OptionId],
    barred: OptionId,
    rng: &mut GameRng,
) -> Option<OptionId> {
    let available: Vec<OptionId> = pool
        .iter()
        .copied()
        .filter(|id| *id != barred && !drawn.contains(id))
        .collect();
    rng.choose(&available).copied()
}

/// Whether a forced d100 roll succeeds against a success percentage.
#[must_use]
pub const fn luck_from_roll(roll: u8, percentage: u8) -> bool {
    roll <= percentage
}

/// Roll the luck die. Returns `(roll, success)`.
///
/// A 100% chance short-circuits without consuming randomness, so replays
/// with guaranteed luck do not perturb later rolls.
pub fn draw_luck(rng: &mut GameRng, percentage: u8) -> (Option<u8>, bool) {
    if percentage >= 100 {
        return (None, true);
    }
    let roll = rng.roll_d100();
    (Some(roll), luck_from_roll(roll, percentage))
}
