//! Data-driven game balance
//!
//! Every field defaults to the values in [`crate::consts`]. The browser shell
//! may override any subset from a JSON blob on the canvas element.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game balance knobs read by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Hero ===
    pub lerp: f32,
    pub lean: f32,
    pub hero_start_offset: f32,

    // === Stamina ===
    pub max_stamina: f32,
    pub stamina_drain: f32,
    pub stamina_regen: f32,

    // === Enemies ===
    pub enemy_speed: f32,
    pub sway_amplitude: f32,
    pub sway_rate: f32,
    pub enemy_margin: f32,
    pub spawn_interval: u64,
    pub max_enemies: usize,

    // === Scoring ===
    pub hit_radius: f32,
    pub win_cuts: u32,

    // === Effects ===
    pub spark_count: usize,
    pub spark_life: u32,
    pub spark_speed: f32,
    pub popup_life: u32,
    pub popup_rise: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lerp: HERO_LERP,
            lean: HERO_LEAN,
            hero_start_offset: HERO_START_OFFSET,

            max_stamina: MAX_STAMINA,
            stamina_drain: STAMINA_DRAIN,
            stamina_regen: STAMINA_REGEN,

            enemy_speed: ENEMY_SPEED,
            sway_amplitude: ENEMY_SWAY_AMPLITUDE,
            sway_rate: ENEMY_SWAY_RATE,
            enemy_margin: ENEMY_MARGIN,
            spawn_interval: SPAWN_INTERVAL,
            max_enemies: MAX_ENEMIES,

            hit_radius: HIT_RADIUS,
            win_cuts: WIN_CUTS,

            spark_count: SPARK_COUNT,
            spark_life: SPARK_LIFE,
            spark_speed: SPARK_SPEED,
            popup_life: POPUP_LIFE,
            popup_rise: POPUP_RISE,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Self = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Like [`Tuning::from_json`] but falls back to defaults on bad input.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid tuning overrides: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Clamp values that would break the loop (zero spawn interval divides by zero).
    fn sanitize(&mut self) {
        self.spawn_interval = self.spawn_interval.max(1);
        self.win_cuts = self.win_cuts.max(1);
        self.max_stamina = self.max_stamina.max(0.0);
        self.lerp = self.lerp.clamp(0.0, 1.0);
    }
}
