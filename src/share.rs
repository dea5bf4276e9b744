//! Result sharing payload
//!
//! Built here so the text is testable; the browser shell hands it to the
//! platform share sheet or the clipboard.

use crate::sim::Outcome;

/// Data handed to `navigator.share`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(cuts: u32, outcome: Option<Outcome>, url: &str) -> Self {
        let boast = match outcome {
            Some(Outcome::Win) => format!("I ruled the sky with {} cuts", cuts),
            _ => format!("I scored {} cuts", cuts),
        };
        Self {
            title: "Happy Makar Sankranti! ☀️🪁".to_string(),
            text: format!(
                "☀️ Happy Makar Sankranti! 🪁\n\n{} in the Sankranti kite challenge!\n\nCan you beat my score?",
                boast
            ),
            url: url.to_string(),
        }
    }

    /// Fallback text when no share sheet is available
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}", self.text, self.url)
    }
}

/// Headline and body for the result view
pub fn result_lines(cuts: u32, outcome: Option<Outcome>) -> (&'static str, String) {
    match outcome {
        Some(Outcome::Win) => ("Victory!", format!("You ruled the sky with {} cuts!", cuts)),
        _ => ("Well Played!", format!("Score: {} cuts.", cuts)),
    }
}
