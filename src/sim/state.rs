//! Game state and core simulation types
//!
//! Everything the step mutates and the renderer reads lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tuning;
use crate::{CUT_CALL, palette};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reached the cut target
    Win,
    /// Touched an enemy kite without boosting
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }
}

/// Side effects recorded during a step, drained by the loop driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Shake the play area
    Shake,
    /// An enemy kite was cut at `pos`; `cuts` is the new total
    Cut { pos: Vec2, cuts: u32 },
    /// The hero was cut at `pos`
    Crash { pos: Vec2 },
    /// The run is over
    Ended(Outcome),
}

/// The player's kite
#[derive(Debug, Clone)]
pub struct Hero {
    pub pos: Vec2,
    /// Latest input position
    pub target: Vec2,
    /// Lean in degrees, from horizontal tracking error
    pub angle: f32,
    pub boosting: bool,
    pub stamina: f32,
}

impl Hero {
    pub fn new(pos: Vec2, stamina: f32) -> Self {
        Self {
            pos,
            target: pos,
            angle: 0.0,
            boosting: false,
            stamina,
        }
    }

    /// Move a fixed fraction of the remaining distance toward the target
    pub fn track(&mut self, lerp: f32, lean: f32) {
        self.pos += (self.target - self.pos) * lerp;
        self.angle = (self.target.x - self.pos.x) * lean;
    }

    /// Resolve the boost flag and spend or recover stamina
    pub fn update_stamina(&mut self, boost_held: bool, tuning: &Tuning) {
        self.boosting = boost_held && self.stamina > 0.0;
        self.stamina = if self.boosting {
            (self.stamina - tuning.stamina_drain).max(0.0)
        } else {
            (self.stamina + tuning.stamina_regen).min(tuning.max_stamina)
        };
    }

    /// Stamina as a 0-1 fraction of the pool
    pub fn stamina_fraction(&self, max_stamina: f32) -> f32 {
        if max_stamina <= 0.0 {
            0.0
        } else {
            (self.stamina / max_stamina).clamp(0.0, 1.0)
        }
    }
}

/// An enemy kite drifting down the screen
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Hue in degrees
    pub hue: f32,
    /// Horizontal sway phase offset
    pub phase: f32,
}

impl Enemy {
    /// Fall one frame and sway sideways
    pub fn advance(&mut self, frame: u64, tuning: &Tuning) {
        self.pos.y += tuning.enemy_speed;
        self.pos.x += (frame as f32 * tuning.sway_rate + self.phase).sin() * tuning.sway_amplitude;
    }

    /// CSS color for the kite body
    pub fn color(&self) -> String {
        format!("hsl({:.0}, 80%, 60%)", self.hue)
    }
}

/// A spark particle
#[derive(Debug, Clone)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: u32,
    pub size: f32,
    pub color: &'static str,
}

/// Floating text over a cut
#[derive(Debug, Clone)]
pub struct Popup {
    pub pos: Vec2,
    pub text: &'static str,
    /// Frames remaining
    pub life: u32,
    pub color: &'static str,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed
    pub seed: u64,
    /// Balance knobs for this run
    pub tuning: Tuning,
    /// Canvas size
    pub viewport: Vec2,
    /// Frame counter (incremented at the start of every step)
    pub frame: u64,
    pub hero: Hero,
    /// Enemy kites in spawn order
    pub enemies: Vec<Enemy>,
    pub sparks: Vec<Spark>,
    pub popups: Vec<Popup>,
    /// Enemies cut this run
    pub cuts: u32,
    /// Set once the run is decided
    pub outcome: Option<Outcome>,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new run with the hero centered near the bottom of the viewport
    pub fn new(seed: u64, viewport: Vec2, tuning: Tuning) -> Self {
        let hero = Hero::new(hero_start(viewport, &tuning), tuning.max_stamina);
        Self {
            seed,
            tuning,
            viewport,
            frame: 0,
            hero,
            enemies: Vec::new(),
            sparks: Vec::new(),
            popups: Vec::new(),
            cuts: 0,
            outcome: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Update the viewport after a canvas resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Whether the run has been decided
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Fixed point the hero's string is tied to (bottom center)
    pub fn string_anchor(&self) -> Vec2 {
        Vec2::new(self.viewport.x / 2.0, self.viewport.y)
    }

    /// Spawn an enemy above the visible area at a random column
    pub fn spawn_enemy(&mut self) {
        let x = self.rng.random::<f32>() * self.viewport.x;
        let enemy = Enemy {
            pos: Vec2::new(x, -self.tuning.enemy_margin),
            hue: self.rng.random::<f32>() * 360.0,
            phase: self.rng.random::<f32>() * 100.0,
        };
        log::trace!("Spawned enemy at x={:.0} (frame {})", x, self.frame);
        self.enemies.push(enemy);
    }

    /// Spawn a burst of sparks at `pos`
    pub fn spawn_sparks(&mut self, pos: Vec2, color: &'static str) {
        let speed = self.tuning.spark_speed;
        for _ in 0..self.tuning.spark_count {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * speed,
                (self.rng.random::<f32>() - 0.5) * speed,
            );
            self.sparks.push(Spark {
                pos,
                vel,
                life: self.tuning.spark_life,
                size: 4.0 + self.rng.random::<f32>() * 4.0,
                color,
            });
        }
    }

    /// Spawn the cut call-out at `pos`
    pub fn spawn_popup(&mut self, pos: Vec2) {
        self.popups.push(Popup {
            pos,
            text: CUT_CALL,
            life: self.tuning.popup_life,
            color: palette::GOLD,
        });
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Where the hero starts for a given viewport
pub fn hero_start(viewport: Vec2, tuning: &Tuning) -> Vec2 {
    Vec2::new(viewport.x / 2.0, viewport.y - tuning.hero_start_offset)
}
