//! Demo/idle mode - the game plays itself
//!
//! Chases the nearest enemy kite and boosts only when it is about to make
//! contact, so stamina lasts between cuts.

use glam::Vec2;

use super::state::{GameState, hero_start};
use super::tick::TickInput;

/// Stamina (percent of the pool) below which the autopilot stops boosting early
pub const LOW_STAMINA_PERCENT: f32 = 20.0;

/// Boost when the target is within this multiple of the hit radius
const BOOST_REACH: f32 = 1.5;

/// Produce the input a reasonable player would give this frame
pub fn steer(state: &GameState) -> TickInput {
    let hero = &state.hero;
    let nearest = state
        .enemies
        .iter()
        .filter(|e| e.pos.y > 0.0)
        .min_by(|a, b| {
            a.pos
                .distance_squared(hero.pos)
                .partial_cmp(&b.pos.distance_squared(hero.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(enemy) = nearest else {
        return TickInput {
            pointer: Some(hero_start(state.viewport, &state.tuning)),
            boost: false,
        };
    };

    // Lead the target by the distance it falls while the hero closes in
    let lead = Vec2::new(0.0, state.tuning.enemy_speed * 4.0);
    let distance = enemy.pos.distance(hero.pos);
    let in_reach = distance < state.tuning.hit_radius * BOOST_REACH;
    let stamina_percent = hero.stamina_fraction(state.tuning.max_stamina) * 100.0;
    // Once in reach, keep boosting while any stamina is left; contact without it loses
    let boost = in_reach && (stamina_percent > LOW_STAMINA_PERCENT || hero.boosting);

    TickInput {
        pointer: Some(enemy.pos + lead),
        boost,
    }
}
