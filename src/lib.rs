//! Kite Cut - a festival kite-fighting arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (hero tracking, stamina, spawner, collisions, effects)
//! - `renderer`: 2D canvas rendering behind a small `Canvas` trait
//! - `input`: Pointer/touch/boost input tracker
//! - `game_loop`: Idle/running/stopped driver tying simulation and rendering together
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation and accessibility preferences
//! - `share`: Result sharing payload

pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod share;
pub mod sim;
pub mod tuning;

pub use game_loop::{FrameReport, GameLoop, LoopPhase};
pub use input::InputTracker;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game balance defaults (one frame = one display refresh)
pub mod consts {
    /// Fraction of the remaining distance the hero covers each frame
    pub const HERO_LERP: f32 = 0.1;
    /// Lean (degrees) per unit of horizontal tracking error
    pub const HERO_LEAN: f32 = 0.05;
    /// Hero spawns this far above the bottom edge
    pub const HERO_START_OFFSET: f32 = 150.0;

    /// Stamina pool
    pub const MAX_STAMINA: f32 = 100.0;
    /// Stamina spent per boosted frame
    pub const STAMINA_DRAIN: f32 = 1.5;
    /// Stamina recovered per unboosted frame
    pub const STAMINA_REGEN: f32 = 0.5;

    /// Enemy fall speed (units/frame)
    pub const ENEMY_SPEED: f32 = 3.5;
    pub const ENEMY_SWAY_AMPLITUDE: f32 = 2.0;
    pub const ENEMY_SWAY_RATE: f32 = 0.05;
    /// Enemies spawn this far above the top edge and despawn this far below the bottom
    pub const ENEMY_MARGIN: f32 = 100.0;
    /// Frames between spawn attempts
    pub const SPAWN_INTERVAL: u64 = 50;
    /// Population cap checked by the spawner
    pub const MAX_ENEMIES: usize = 4;

    /// Hero/enemy contact distance
    pub const HIT_RADIUS: f32 = 60.0;
    /// Cuts needed to win
    pub const WIN_CUTS: u32 = 5;

    /// Sparks per burst
    pub const SPARK_COUNT: usize = 20;
    /// Spark lifetime in frames
    pub const SPARK_LIFE: u32 = 40;
    /// Spark velocity spread (each axis in [-SPEED/2, SPEED/2))
    pub const SPARK_SPEED: f32 = 15.0;
    /// Popup lifetime in frames
    pub const POPUP_LIFE: u32 = 60;
    /// Popup upward drift per frame
    pub const POPUP_RISE: f32 = 2.0;

    /// Delay between game end and the result view (ms)
    pub const RESULT_DELAY_MS: u32 = 800;
}

/// Colors shared by the simulation (effects) and the renderer
pub mod palette {
    pub const GOLD: &str = "#FFD700";
    pub const CRASH: &str = "#FF4500";
    pub const HERO: &str = "#FF6D00";
    pub const SKY_TOP: &str = "#2980b9";
    pub const SKY_BOTTOM: &str = "#6dd5fa";
    pub const SKYLINE: &str = "#2c3e50";
}

/// Text shown over a cut kite
pub const CUT_CALL: &str = "KAI PO CHE!";
