//! Property tests for the draw engine and the jackpot flag invariants.

use proptest::prelude::*;

use larien_engine::catalog::registry::skills;
use larien_engine::catalog::OptionId;
use larien_engine::core::{GameAction, GameConfig, GameRng, Player};
use larien_engine::engine::draw::{
    apply_bonus_effects, draw_domain_duration, draw_domain_effects, duration_from_roll,
    luck_from_roll, DrawnEffects,
};
use larien_engine::engine::Engine;

fn jackpot_pool() -> Vec<OptionId> {
    (1..=9).map(OptionId::new).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Duration frequencies follow the d6 mapping 2:1:2:1 over {1,2,3,4}.
    #[test]
    fn duration_distribution_matches_die_mapping(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut counts = [0u32; 5];
        let samples = 6_000;
        for _ in 0..samples {
            let (roll, turns) = draw_domain_duration(&mut rng);
            prop_assert_eq!(turns, duration_from_roll(roll));
            prop_assert!((1..=4).contains(&turns));
            counts[turns as usize] += 1;
        }
        // Expected shares: 2/6, 1/6, 2/6, 1/6. Allow generous slack.
        prop_assert!((counts[1] as f64 / samples as f64 - 2.0 / 6.0).abs() < 0.05);
        prop_assert!((counts[2] as f64 / samples as f64 - 1.0 / 6.0).abs() < 0.05);
        prop_assert!((counts[3] as f64 / samples as f64 - 2.0 / 6.0).abs() < 0.05);
        prop_assert!((counts[4] as f64 / samples as f64 - 1.0 / 6.0).abs() < 0.05);
    }

    // Draws are unique and never contain excluded ids.
    #[test]
    fn draws_are_unique_and_respect_exclusions(
        seed in any::<u64>(),
        exclude_8 in any::<bool>(),
        exclude_9 in any::<bool>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut exclude = Vec::new();
        if exclude_8 { exclude.push(OptionId::new(8)); }
        if exclude_9 { exclude.push(OptionId::new(9)); }

        let drawn = draw_domain_effects(&jackpot_pool(), &exclude, 3, &mut rng);

        prop_assert_eq!(drawn.len(), 3);
        for i in 0..drawn.len() {
            for j in (i + 1)..drawn.len() {
                prop_assert_ne!(drawn[i], drawn[j]);
            }
            prop_assert!(!exclude.contains(&drawn[i]));
        }
    }

    // Without 8 or 9 in the base draw, bonus processing changes nothing.
    #[test]
    fn bonus_rules_are_idempotent_without_triggers(
        seed in any::<u64>(),
        base in proptest::sample::subsequence(vec![1u8, 2, 3, 4, 5, 6, 7], 3),
    ) {
        let mut rng = GameRng::new(seed);
        let mut drawn: DrawnEffects = base.iter().copied().map(OptionId::new).collect();
        let before = drawn.clone();

        apply_bonus_effects(&mut drawn, &jackpot_pool(), false, &mut rng);

        prop_assert_eq!(drawn, before);
    }

    // Bonus draws never duplicate and never smuggle in the barred id.
    #[test]
    fn bonus_draws_stay_unique(seed in any::<u64>(), with_8 in any::<bool>(), with_9 in any::<bool>()) {
        prop_assume!(with_8 || with_9);
        let mut rng = GameRng::new(seed);
        let mut drawn = DrawnEffects::new();
        drawn.push(OptionId::new(1));
        if with_8 { drawn.push(OptionId::new(8)); }
        if with_9 { drawn.push(OptionId::new(9)); }
        let base_len = drawn.len();

        apply_bonus_effects(&mut drawn, &jackpot_pool(), false, &mut rng);

        let bonuses = (with_8 as usize) + (with_9 as usize);
        prop_assert_eq!(drawn.len(), base_len + bonuses);
        let mut seen: Vec<OptionId> = drawn.to_vec();
        seen.sort_by_key(|id| id.raw());
        seen.dedup();
        prop_assert_eq!(seen.len(), drawn.len());
        if with_8 && !with_9 {
            prop_assert!(!drawn.contains(&OptionId::new(9)));
        }
        if with_9 && !with_8 {
            prop_assert!(!drawn.contains(&OptionId::new(8)));
        }
    }

    // Luck roll boundary: success iff roll <= percentage; 100 always wins.
    #[test]
    fn luck_roll_boundary(roll in 1u8..=100) {
        prop_assert_eq!(luck_from_roll(roll, 25), roll <= 25);
        prop_assert!(luck_from_roll(roll, 100));
        prop_assert!(!luck_from_roll(roll, 0));
    }

    // Overflowing luck is set iff a non-second-chance activation draws
    // both 8 and 9.
    #[test]
    fn overflowing_luck_invariant(seed in any::<u64>()) {
        let engine = Engine::with_builtin();
        let mut state = engine.new_game(GameConfig {
            starting_life: 20,
            starting_player: Player::One,
            seed,
        });
        engine.apply(&mut state, &GameAction::AssignSkill {
            player: Player::One,
            skill: skills::JACKPOT,
        });
        engine.apply(&mut state, &GameAction::SetLife { player: Player::One, value: 10 });

        engine.apply(&mut state, &GameAction::ActivateSkill {
            player: Player::One,
            option: None,
            input: None,
        });

        let domain = state.domains[Player::One].front().expect("domain committed");
        let has_8 = domain.effects.contains(&OptionId::new(8));
        let has_9 = domain.effects.contains(&OptionId::new(9));
        let fx = state.jackpot[Player::One];

        prop_assert_eq!(fx.has_effect_8, has_8);
        prop_assert_eq!(fx.has_effect_9, has_9);
        prop_assert_eq!(fx.overflowing_luck, has_8 && has_9);
    }
}

#[test]
fn boundary_rolls_exact() {
    assert!(luck_from_roll(25, 25));
    assert!(!luck_from_roll(26, 25));
}
