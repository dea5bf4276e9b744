//! Property tests for the per-frame rules (native, no wasm needed)

use glam::Vec2;
use proptest::prelude::*;

use kite_cut::Tuning;
use kite_cut::sim::{Enemy, GameState, Outcome, TickInput, tick};

const VIEW: Vec2 = Vec2::new(1200.0, 900.0);

/// No falling, no swaying, no spawning: enemies stay where they are put
fn still_state() -> GameState {
    let tuning = Tuning {
        enemy_speed: 0.0,
        sway_amplitude: 0.0,
        spawn_interval: u64::MAX,
        ..Tuning::default()
    };
    GameState::new(99, VIEW, tuning)
}

fn enemy_at(pos: Vec2) -> Enemy {
    Enemy {
        pos,
        hue: 30.0,
        phase: 0.0,
    }
}

proptest! {
    #[test]
    fn stamina_follows_drain_and_regen(
        start in 0.0f32..=100.0,
        boosts in proptest::collection::vec(any::<bool>(), 1..200),
    ) {
        let mut state = still_state();
        state.hero.stamina = start;
        for boost in boosts {
            let before = state.hero.stamina;
            let input = TickInput { pointer: None, boost };
            tick(&mut state, &input);
            let after = state.hero.stamina;

            prop_assert!((0.0..=100.0).contains(&after));
            if boost && before > 0.0 {
                prop_assert!(state.hero.boosting);
                prop_assert_eq!(after, (before - 1.5).max(0.0));
            } else {
                prop_assert!(!state.hero.boosting);
                prop_assert_eq!(after, (before + 0.5).min(100.0));
            }
        }
    }

    #[test]
    fn hero_moves_tenth_of_the_way(
        hx in -2000.0f32..2000.0, hy in -2000.0f32..2000.0,
        tx in -2000.0f32..2000.0, ty in -2000.0f32..2000.0,
    ) {
        let mut state = still_state();
        let prev = Vec2::new(hx, hy);
        let target = Vec2::new(tx, ty);
        state.hero.pos = prev;
        tick(&mut state, &TickInput { pointer: Some(target), boost: false });

        prop_assert_eq!(state.hero.pos.x, hx + (tx - hx) * 0.1);
        prop_assert_eq!(state.hero.pos.y, hy + (ty - hy) * 0.1);
    }

    #[test]
    fn spawner_respects_cap(seed in any::<u64>(), frames in 1usize..400) {
        let tuning = Tuning { spawn_interval: 1, ..Tuning::default() };
        let mut state = GameState::new(seed, VIEW, tuning);
        let input = TickInput::default();
        for _ in 0..frames {
            tick(&mut state, &input);
            prop_assert!(state.enemies.len() <= 4);
        }
    }

    #[test]
    fn boosted_contact_cuts_exactly_one(dist in 0.0f32..59.9, angle in 0.0f32..std::f32::consts::TAU) {
        let mut state = still_state();
        let hero = state.hero.pos;
        state.enemies.push(enemy_at(hero + Vec2::from_angle(angle) * dist));
        let stamina = state.hero.stamina;
        tick(&mut state, &TickInput { pointer: Some(hero), boost: true });

        prop_assert_eq!(state.cuts, 1);
        prop_assert!(state.enemies.is_empty());
        prop_assert_eq!(state.hero.stamina, stamina - 1.5);
        prop_assert!(state.outcome.is_none());
    }

    #[test]
    fn unboosted_contact_loses_immediately(
        dist in 0.0f32..59.9,
        angle in 0.0f32..std::f32::consts::TAU,
        bystanders in 0usize..3,
    ) {
        let mut state = still_state();
        let hero = state.hero.pos;
        state.enemies.push(enemy_at(hero + Vec2::from_angle(angle) * dist));
        for i in 0..bystanders {
            state.enemies.push(enemy_at(Vec2::new(50.0 + i as f32 * 100.0, 50.0)));
        }
        tick(&mut state, &TickInput { pointer: Some(hero), boost: false });

        prop_assert_eq!(state.outcome, Some(Outcome::Loss));
        prop_assert_eq!(state.cuts, 0);
    }
}

#[test]
fn fifth_cut_wins_and_halts() {
    let mut state = still_state();
    let hero = state.hero.pos;
    for _ in 0..5 {
        state.enemies.push(enemy_at(hero + Vec2::new(20.0, 0.0)));
        tick(&mut state, &TickInput { pointer: Some(hero), boost: true });
    }
    assert_eq!(state.cuts, 5);
    assert_eq!(state.outcome, Some(Outcome::Win));

    let frame = state.frame;
    state.enemies.push(enemy_at(hero));
    tick(&mut state, &TickInput { pointer: Some(hero), boost: false });
    assert_eq!(state.frame, frame);
    assert_eq!(state.outcome, Some(Outcome::Win));
}

#[test]
fn radius_boundary() {
    let mut near = still_state();
    let hero = near.hero.pos;
    near.enemies.push(enemy_at(hero + Vec2::new(59.0, 0.0)));
    tick(&mut near, &TickInput { pointer: Some(hero), boost: true });
    assert_eq!(near.cuts, 1);

    let mut far = still_state();
    far.enemies.push(enemy_at(hero + Vec2::new(61.0, 0.0)));
    tick(&mut far, &TickInput { pointer: Some(hero), boost: true });
    assert_eq!(far.cuts, 0);
    assert_eq!(far.enemies.len(), 1);
}
