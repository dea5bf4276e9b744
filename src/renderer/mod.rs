//! 2D canvas rendering
//!
//! [`render`] is a pure function of game state: it clears and redraws the
//! whole frame through the [`Canvas`] trait and never mutates the state.
//! The browser backend lives in `canvas2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod shapes;

use glam::Vec2;

use crate::palette;
use crate::settings::Settings;
use crate::sim::GameState;

/// One path-building command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic curve: (control, end)
    QuadTo(Vec2, Vec2),
    Close,
}

/// A vector path in the current transform's coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.ops.push(PathOp::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.ops.push(PathOp::LineTo(p));
        self
    }

    pub fn quad_to(mut self, control: Vec2, end: Vec2) -> Self {
        self.ops.push(PathOp::QuadTo(control, end));
        self
    }

    pub fn close(mut self) -> Self {
        self.ops.push(PathOp::Close);
        self
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }
}

/// Fill style
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(String),
    /// Linear gradient between two points with (offset, color) stops
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<(f32, String)>,
    },
}

impl Paint {
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }
}

/// Outlined text style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub fill: &'static str,
    pub outline: &'static str,
    pub outline_width: f32,
}

/// The subset of a 2D canvas context the game draws with
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);
    /// Push transform, alpha and shadow state
    fn save(&mut self);
    /// Pop to the last `save`
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);
    fn set_alpha(&mut self, alpha: f32);
    /// Shadow glow for subsequent draws (blur 0 disables)
    fn set_shadow(&mut self, blur: f32, color: &str);
    fn fill_path(&mut self, path: &Path, paint: &Paint);
    fn stroke_path(&mut self, path: &Path, color: &str, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Stroke then fill `text` centered at its baseline origin
    fn outlined_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
}

const TETHER_COLOR: &str = "rgba(255,255,255,0.5)";
const MARKER_COLOR: &str = "rgba(255, 0, 0, 0.5)";
const MARKER_RADIUS: f32 = 10.0;
const SPINE_COLOR: &str = "rgba(0,0,0,0.3)";
const HERO_SCALE: f32 = 1.3;
const GLOW_BLUR: f32 = 20.0;

const POPUP_STYLE: TextStyle = TextStyle {
    font: "900 40px sans-serif",
    fill: palette::GOLD,
    outline: "black",
    outline_width: 4.0,
};

/// How a single kite is drawn
#[derive(Debug, Clone)]
pub struct KiteStyle {
    pub color: String,
    /// Gradient end color
    pub accent: &'static str,
    pub scale: f32,
    /// Lean in degrees
    pub lean: f32,
    /// Gold outline glow
    pub glow: bool,
}

/// Draw one full frame
pub fn render(state: &GameState, settings: &Settings, canvas: &mut impl Canvas) {
    let viewport = state.viewport;
    canvas.clear(viewport.x, viewport.y);

    draw_sky(canvas, viewport);

    // Enemy tethers and markers
    for enemy in &state.enemies {
        canvas.stroke_path(&shapes::tether(enemy.pos), TETHER_COLOR, 1.0);
        canvas.fill_circle(enemy.pos, MARKER_RADIUS, MARKER_COLOR);
    }

    // Hero string
    let hero = &state.hero;
    let (string_color, string_width) = if hero.boosting {
        (palette::CRASH, 4.0)
    } else {
        ("white", 2.0)
    };
    canvas.stroke_path(
        &shapes::hero_string(hero.pos, state.string_anchor()),
        string_color,
        string_width,
    );

    // Kites
    let sway = shapes::tail_sway(state.frame);
    for enemy in &state.enemies {
        let style = KiteStyle {
            color: enemy.color(),
            accent: "#FFF",
            scale: 1.0,
            lean: 0.0,
            glow: false,
        };
        draw_kite(canvas, enemy.pos, &style, sway);
    }
    let hero_style = KiteStyle {
        color: palette::HERO.to_string(),
        accent: palette::GOLD,
        scale: HERO_SCALE,
        lean: hero.angle,
        glow: hero.boosting,
    };
    draw_kite(canvas, hero.pos, &hero_style, sway);

    if settings.particles {
        let full_life = state.tuning.spark_life.max(1) as f32;
        for spark in &state.sparks {
            canvas.set_alpha(spark.life as f32 / full_life);
            canvas.fill_circle(spark.pos, spark.size, spark.color);
        }
        canvas.set_alpha(1.0);
    }

    for popup in &state.popups {
        let style = TextStyle {
            fill: popup.color,
            ..POPUP_STYLE
        };
        canvas.outlined_text(popup.text, popup.pos, &style);
    }
}

fn draw_sky(canvas: &mut impl Canvas, viewport: Vec2) {
    let sky = Paint::Linear {
        from: Vec2::ZERO,
        to: Vec2::new(0.0, viewport.y),
        stops: vec![
            (0.0, palette::SKY_TOP.to_string()),
            (1.0, palette::SKY_BOTTOM.to_string()),
        ],
    };
    canvas.fill_path(&shapes::rect(Vec2::ZERO, viewport), &sky);
    canvas.fill_path(&shapes::skyline(viewport), &Paint::solid(palette::SKYLINE));
}

/// Draw a kite centered at `pos`
pub fn draw_kite(canvas: &mut impl Canvas, pos: Vec2, style: &KiteStyle, sway: f32) {
    canvas.save();
    canvas.translate(pos);
    canvas.rotate(style.lean.to_radians());
    canvas.scale(style.scale);

    canvas.fill_path(&shapes::kite_tail(sway), &Paint::Solid(style.color.clone()));

    let (from, to) = shapes::kite_gradient_axis();
    let body_paint = Paint::Linear {
        from,
        to,
        stops: vec![(0.0, style.color.clone()), (1.0, style.accent.to_string())],
    };
    let body = shapes::kite_body();
    canvas.fill_path(&body, &body_paint);

    canvas.stroke_path(&shapes::kite_spine(), SPINE_COLOR, 2.0);
    canvas.stroke_path(&shapes::kite_spar(), SPINE_COLOR, 2.0);

    if style.glow {
        canvas.set_shadow(GLOW_BLUR, palette::GOLD);
        canvas.stroke_path(&body, palette::GOLD, 2.0);
        canvas.set_shadow(0.0, palette::GOLD);
    }

    canvas.restore();
}
