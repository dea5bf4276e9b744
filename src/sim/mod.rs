//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One step per display frame
//! - Seeded RNG only
//! - Enemies resolved newest first, removed in a retain pass

pub mod autopilot;
pub mod state;
pub mod tick;

pub use state::{Enemy, GameEvent, GameState, Hero, Outcome, Popup, Spark, hero_start};
pub use tick::{TickInput, tick};
