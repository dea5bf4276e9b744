//! Presentation and accessibility preferences
//!
//! Read from the page URL query string at startup. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::consts::RESULT_DELAY_MS;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shake the play area on cuts and crashes
    pub screen_shake: bool,
    /// Draw spark bursts
    pub particles: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
    /// Delay before the result view appears (ms)
    pub result_delay_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            particles: true,
            reduced_motion: false,
            result_delay_ms: RESULT_DELAY_MS,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Parse settings from a URL query string (`?a=1&b=off`).
    ///
    /// Unknown keys and unparsable values are skipped.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
            match key {
                "shake" | "screen_shake" => {
                    if let Some(v) = parse_flag(value) {
                        settings.screen_shake = v;
                    }
                }
                "particles" => {
                    if let Some(v) = parse_flag(value) {
                        settings.particles = v;
                    }
                }
                "reduced_motion" => {
                    if let Some(v) = parse_flag(value) {
                        settings.reduced_motion = v;
                    }
                }
                "result_delay" => {
                    if let Ok(ms) = value.parse() {
                        settings.result_delay_ms = ms;
                    }
                }
                _ => log::debug!("Unknown setting '{}'", key),
            }
        }

        settings
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
