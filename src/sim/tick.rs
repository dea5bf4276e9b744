//! Per-frame simulation step
//!
//! One call advances the game by exactly one display frame.

use glam::Vec2;

use super::state::{GameEvent, GameState, Outcome};
use crate::palette;

/// Input snapshot for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Pointer position in canvas coordinates (None until the first pointer event)
    pub pointer: Option<Vec2>,
    /// Boost button/mouse held
    pub boost: bool,
}

/// What happened when an enemy came within reach of the hero
#[derive(Debug, Clone, Copy, PartialEq)]
enum Contact {
    Cut,
    Crash,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Frozen once decided
    if state.is_over() {
        return;
    }

    state.frame += 1;

    // Hero tracks the pointer
    if let Some(pointer) = input.pointer {
        state.hero.target = pointer;
    }
    let (lerp, lean) = (state.tuning.lerp, state.tuning.lean);
    state.hero.track(lerp, lean);

    // Boost economy
    let tuning = state.tuning.clone();
    state.hero.update_stamina(input.boost, &tuning);

    // Spawner
    if state.enemies.len() < tuning.max_enemies
        && state.frame.is_multiple_of(tuning.spawn_interval)
    {
        state.spawn_enemy();
    }

    update_enemies(state);
    age_effects(state);
}

/// Move enemies and resolve contacts, newest first.
///
/// Removal is deferred to a single retain pass so indices stay valid during the scan.
fn update_enemies(state: &mut GameState) {
    let tuning = &state.tuning;
    let frame = state.frame;
    let bottom = state.viewport.y + tuning.enemy_margin;
    let mut keep = vec![true; state.enemies.len()];
    let mut contacts: Vec<(Contact, Vec2)> = Vec::new();

    for idx in (0..state.enemies.len()).rev() {
        let enemy = &mut state.enemies[idx];
        enemy.advance(frame, tuning);

        if enemy.pos.distance(state.hero.pos) < tuning.hit_radius {
            if state.hero.boosting {
                keep[idx] = false;
                contacts.push((Contact::Cut, enemy.pos));
                let cuts = state.cuts + contacts.len() as u32;
                if cuts >= tuning.win_cuts {
                    break;
                }
            } else {
                contacts.push((Contact::Crash, state.hero.pos));
                break;
            }
        } else if enemy.pos.y > bottom {
            keep[idx] = false;
        }
    }

    let mut keep = keep.into_iter();
    state.enemies.retain(|_| keep.next().unwrap_or(true));

    for (contact, pos) in contacts {
        match contact {
            Contact::Cut => resolve_cut(state, pos),
            Contact::Crash => resolve_crash(state, pos),
        }
    }
}

fn resolve_cut(state: &mut GameState, pos: Vec2) {
    state.events.push(GameEvent::Shake);
    state.spawn_sparks(pos, palette::GOLD);
    state.spawn_popup(pos);
    state.cuts += 1;
    state.events.push(GameEvent::Cut {
        pos,
        cuts: state.cuts,
    });
    log::debug!("Cut #{} at ({:.0}, {:.0})", state.cuts, pos.x, pos.y);

    if state.cuts >= state.tuning.win_cuts {
        end_game(state, Outcome::Win);
    }
}

fn resolve_crash(state: &mut GameState, pos: Vec2) {
    state.events.push(GameEvent::Shake);
    state.spawn_sparks(pos, palette::CRASH);
    state.events.push(GameEvent::Crash { pos });
    end_game(state, Outcome::Loss);
}

fn end_game(state: &mut GameState, outcome: Outcome) {
    if state.outcome.is_some() {
        return;
    }
    state.outcome = Some(outcome);
    state.events.push(GameEvent::Ended(outcome));
    log::info!(
        "Run over: {} with {} cuts on frame {}",
        outcome.as_str(),
        state.cuts,
        state.frame
    );
}

/// Move and expire sparks and popups
fn age_effects(state: &mut GameState) {
    for spark in state.sparks.iter_mut() {
        spark.pos += spark.vel;
        spark.life = spark.life.saturating_sub(1);
    }
    state.sparks.retain(|s| s.life > 0);

    let rise = state.tuning.popup_rise;
    for popup in state.popups.iter_mut() {
        popup.pos.y -= rise;
        popup.life = popup.life.saturating_sub(1);
    }
    state.popups.retain(|p| p.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Enemy;
    use crate::tuning::Tuning;

    const VIEW: Vec2 = Vec2::new(1000.0, 800.0);

    fn state() -> GameState {
        GameState::new(12345, VIEW, Tuning::default())
    }

    /// Tuning with no sway and no fall so enemies stay where tests put them
    fn still_state() -> GameState {
        let tuning = Tuning {
            enemy_speed: 0.0,
            sway_amplitude: 0.0,
            spawn_interval: 1_000_000,
            ..Tuning::default()
        };
        GameState::new(12345, VIEW, tuning)
    }

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy {
            pos,
            hue: 0.0,
            phase: 0.0,
        }
    }

    /// Pointer pinned on the hero so it doesn't move
    fn hold(state: &GameState, boost: bool) -> TickInput {
        TickInput {
            pointer: Some(state.hero.pos),
            boost,
        }
    }

    #[test]
    fn test_hero_smoothing_example() {
        let mut s = still_state();
        s.hero.pos = Vec2::new(500.0, 500.0);
        let input = TickInput {
            pointer: Some(Vec2::new(600.0, 500.0)),
            boost: false,
        };
        tick(&mut s, &input);
        assert!((s.hero.pos.x - 510.0).abs() < 1e-4);
        assert_eq!(s.hero.pos.y, 500.0);
        assert_eq!(s.hero.target, Vec2::new(600.0, 500.0));
        // Lean from remaining error: (600 - 510) * 0.05
        assert!((s.hero.angle - 4.5).abs() < 1e-3);
    }

    #[test]
    fn test_no_pointer_keeps_target() {
        let mut s = still_state();
        let start = s.hero.pos;
        tick(&mut s, &TickInput::default());
        assert_eq!(s.hero.pos, start);
        assert_eq!(s.hero.angle, 0.0);
    }

    #[test]
    fn test_boost_ten_frames() {
        let mut s = still_state();
        for _ in 0..10 {
            let input = hold(&s, true);
            tick(&mut s, &input);
        }
        assert_eq!(s.hero.stamina, 85.0);
        assert!(s.hero.boosting);
    }

    #[test]
    fn test_regen_caps_at_max() {
        let mut s = still_state();
        s.hero.stamina = 99.0;
        for _ in 0..5 {
            let input = hold(&s, false);
            tick(&mut s, &input);
        }
        assert_eq!(s.hero.stamina, 100.0);
    }

    #[test]
    fn test_spawner_cadence_and_cap() {
        let mut s = state();
        let input = TickInput::default();
        for _ in 0..49 {
            tick(&mut s, &input);
        }
        assert!(s.enemies.is_empty());
        tick(&mut s, &input);
        assert_eq!(s.frame, 50);
        assert_eq!(s.enemies.len(), 1);

        // Fill to the cap; kites far from the hero never leave in time
        let mut s = still_state();
        s.tuning.spawn_interval = 1;
        for _ in 0..20 {
            tick(&mut s, &input);
            assert!(s.enemies.len() <= 4);
        }
        assert_eq!(s.enemies.len(), 4);
    }

    #[test]
    fn test_enemy_motion() {
        let mut s = state();
        s.enemies.push(enemy_at(Vec2::new(100.0, 0.0)));
        tick(&mut s, &TickInput::default());
        let e = &s.enemies[0];
        assert_eq!(e.pos.y, 3.5);
        let expected_x = 100.0 + (1.0f32 * 0.05).sin() * 2.0;
        assert!((e.pos.x - expected_x).abs() < 1e-4);
    }

    #[test]
    fn test_cut_inside_radius() {
        let mut s = still_state();
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(59.0, 0.0)));
        let input = hold(&s, true);
        tick(&mut s, &input);

        assert!(s.enemies.is_empty());
        assert_eq!(s.cuts, 1);
        assert_eq!(s.hero.stamina, 98.5);
        assert_eq!(s.popups.len(), 1);
        // Sparks already aged one frame
        assert_eq!(s.sparks.len(), 20);
        assert!(s.sparks.iter().all(|p| p.color == palette::GOLD && p.life == 39));
        let events = s.drain_events();
        assert_eq!(events[0], GameEvent::Shake);
        assert!(matches!(events[1], GameEvent::Cut { cuts: 1, .. }));
        assert!(s.outcome.is_none());
    }

    #[test]
    fn test_no_contact_outside_radius() {
        let mut s = still_state();
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(61.0, 0.0)));
        let input = hold(&s, true);
        tick(&mut s, &input);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.cuts, 0);
        assert!(s.events.is_empty());
    }

    #[test]
    fn test_touch_without_boost_loses() {
        let mut s = still_state();
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(0.0, 30.0)));
        s.enemies.push(enemy_at(Vec2::new(5.0, 5.0)));
        let input = hold(&s, false);
        tick(&mut s, &input);

        assert_eq!(s.outcome, Some(Outcome::Loss));
        assert_eq!(s.cuts, 0);
        assert!(s.sparks.iter().all(|p| p.color == palette::CRASH));
        assert!(s.events.contains(&GameEvent::Ended(Outcome::Loss)));
        // Crash sparks burst from the hero, not the enemy
        assert!(matches!(s.events[1], GameEvent::Crash { pos } if pos == hero));
    }

    #[test]
    fn test_fifth_cut_wins_and_freezes() {
        let mut s = still_state();
        s.cuts = 4;
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(10.0, 0.0)));
        let input = hold(&s, true);
        tick(&mut s, &input);
        assert_eq!(s.cuts, 5);
        assert_eq!(s.outcome, Some(Outcome::Win));

        let frame = s.frame;
        let stamina = s.hero.stamina;
        let sparks = s.sparks.len();
        tick(&mut s, &input);
        assert_eq!(s.frame, frame);
        assert_eq!(s.hero.stamina, stamina);
        assert_eq!(s.sparks.len(), sparks);
    }

    #[test]
    fn test_simultaneous_contacts_newest_first() {
        let mut s = still_state();
        s.cuts = 4;
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(10.0, 0.0)));
        s.enemies.push(enemy_at(hero + Vec2::new(-10.0, 0.0)));
        let input = hold(&s, true);
        tick(&mut s, &input);

        // Newest (last pushed) is cut, winning the game; the older one is untouched
        assert_eq!(s.cuts, 5);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.enemies[0].pos, hero + Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_double_cut_same_frame() {
        let mut s = still_state();
        let hero = s.hero.pos;
        s.enemies.push(enemy_at(hero + Vec2::new(10.0, 0.0)));
        s.enemies.push(enemy_at(hero + Vec2::new(-10.0, 0.0)));
        s.enemies.push(enemy_at(Vec2::new(0.0, 0.0)));
        let input = hold(&s, true);
        tick(&mut s, &input);
        assert_eq!(s.cuts, 2);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.popups.len(), 2);
    }

    #[test]
    fn test_enemy_leaves_bottom() {
        let mut s = state();
        s.enemies.push(enemy_at(Vec2::new(50.0, 898.0)));
        tick(&mut s, &TickInput::default());
        assert!(s.enemies.is_empty());
        assert_eq!(s.cuts, 0);
        assert!(s.outcome.is_none());
    }

    #[test]
    fn test_effects_age_out() {
        let mut s = still_state();
        s.spawn_sparks(Vec2::ZERO, palette::GOLD);
        s.spawn_popup(Vec2::new(0.0, 100.0));
        let input = TickInput::default();

        tick(&mut s, &input);
        assert_eq!(s.popups[0].pos.y, 98.0);
        assert_eq!(s.popups[0].life, 59);

        for _ in 0..39 {
            tick(&mut s, &input);
        }
        assert!(s.sparks.is_empty());
        assert_eq!(s.popups.len(), 1);

        for _ in 0..20 {
            tick(&mut s, &input);
        }
        assert!(s.popups.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut s1 = state();
        let mut s2 = state();
        let inputs = [
            TickInput {
                pointer: Some(Vec2::new(300.0, 200.0)),
                boost: false,
            },
            TickInput {
                pointer: Some(Vec2::new(700.0, 100.0)),
                boost: true,
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut s1, input);
                tick(&mut s2, input);
            }
        }

        assert_eq!(s1.frame, s2.frame);
        assert_eq!(s1.enemies.len(), s2.enemies.len());
        assert_eq!(s1.hero.pos, s2.hero.pos);
    }
}
