//! Game loop driver
//!
//! idle → start → running → (win/loss) → stopped → start → running ...
//!
//! The platform calls [`GameLoop::frame`] on every display refresh; while
//! running it steps the simulation once and renders once. Any other phase
//! makes the call a no-op, so a stale scheduled frame after the game ends
//! does nothing.

use glam::Vec2;

use crate::renderer::{Canvas, render};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Outcome, TickInput, tick};
use crate::tuning::Tuning;

/// Driver phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Nothing started yet (menu)
    Idle,
    /// Stepping and rendering every frame
    Running,
    /// Outcome decided, final frame drawn
    Stopped,
}

/// What a frame produced, for the platform shell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Events recorded by this frame's step
    pub events: Vec<GameEvent>,
    /// Set on the frame the run ended
    pub ended: Option<Outcome>,
}

impl FrameReport {
    /// Whether the play area should shake this frame
    pub fn wants_shake(&self) -> bool {
        self.events.contains(&GameEvent::Shake)
    }
}

/// Owns the game state and decides when it advances
#[derive(Debug)]
pub struct GameLoop {
    phase: LoopPhase,
    state: GameState,
    tuning: Tuning,
    settings: Settings,
    viewport: Vec2,
}

impl GameLoop {
    pub fn new(tuning: Tuning, settings: Settings, viewport: Vec2) -> Self {
        Self {
            phase: LoopPhase::Idle,
            state: GameState::new(0, viewport, tuning.clone()),
            tuning,
            settings,
            viewport,
        }
    }

    /// Start (or restart) a run; all collections, stamina and score reset
    pub fn start(&mut self, seed: u64) {
        self.state = GameState::new(seed, self.viewport, self.tuning.clone());
        self.phase = LoopPhase::Running;
        log::info!(
            "Run started with seed {} ({}x{})",
            seed,
            self.viewport.x,
            self.viewport.y
        );
    }

    /// Canvas resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.state.resize(width, height);
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Step once and render once, if running
    pub fn frame(&mut self, input: &TickInput, canvas: &mut impl Canvas) -> FrameReport {
        if !self.is_running() {
            return FrameReport::default();
        }

        tick(&mut self.state, input);
        render(&self.state, &self.settings, canvas);

        let report = FrameReport {
            events: self.state.drain_events(),
            ended: self.state.outcome,
        };
        if report.ended.is_some() {
            self.phase = LoopPhase::Stopped;
        }
        report
    }

    /// Redraw the current state without stepping (e.g. after a resize cleared the canvas)
    pub fn redraw(&self, canvas: &mut impl Canvas) {
        if self.phase != LoopPhase::Idle {
            render(&self.state, &self.settings, canvas);
        }
    }
}
