//! Pointer/touch/boost input tracking
//!
//! Event handlers only store values here; the loop reads one snapshot per
//! frame. Fields are `Cell`s so handlers can share the tracker through an
//! `Rc` without borrowing the game.

use std::cell::Cell;

use glam::Vec2;

use crate::sim::TickInput;

/// Latest device input
#[derive(Debug, Default)]
pub struct InputTracker {
    pointer: Cell<Option<Vec2>>,
    boost: Cell<bool>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer/touch moved (canvas-local coordinates, unclamped)
    pub fn on_pointer_move(&self, x: f32, y: f32) {
        self.pointer.set(Some(Vec2::new(x, y)));
    }

    /// Mouse or boost button pressed
    pub fn on_press(&self) {
        self.boost.set(true);
    }

    /// Mouse or boost button released
    pub fn on_release(&self) {
        self.boost.set(false);
    }

    pub fn boost_held(&self) -> bool {
        self.boost.get()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.get()
    }

    /// Input for the next simulation step
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            pointer: self.pointer.get(),
            boost: self.boost.get(),
        }
    }

    /// Drop a held boost (used on restart so a stale press doesn't carry over)
    pub fn clear_boost(&self) {
        self.boost.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let input = InputTracker::new();
        assert_eq!(input.snapshot(), TickInput::default());
    }

    #[test]
    fn test_tracks_latest_values() {
        let input = InputTracker::new();
        input.on_pointer_move(10.0, 20.0);
        input.on_pointer_move(-5.0, 3000.0);
        input.on_press();
        let snap = input.snapshot();
        assert_eq!(snap.pointer, Some(Vec2::new(-5.0, 3000.0)));
        assert!(snap.boost);

        input.on_release();
        assert!(!input.snapshot().boost);
        assert_eq!(input.pointer(), Some(Vec2::new(-5.0, 3000.0)));
    }

    #[test]
    fn test_clear_boost() {
        let input = InputTracker::new();
        input.on_press();
        input.clear_boost();
        assert!(!input.boost_held());
    }
}
