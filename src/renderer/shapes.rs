//! Path generation for kites and scenery
//!
//! Kite geometry is in kite-local units: origin at the kite center, +y down.

use glam::Vec2;

use super::Path;

/// Half-height of the kite diamond
pub const KITE_HALF_HEIGHT: f32 = 50.0;
/// Half-width of the kite diamond
pub const KITE_HALF_WIDTH: f32 = 35.0;
/// Tail attaches this far below the center
const TAIL_ROOT: f32 = 40.0;
/// Tail tips hang this far below the center
const TAIL_TIP: f32 = 70.0;
const TAIL_HALF_WIDTH: f32 = 10.0;
/// Height of the skyline silhouette along the bottom edge
pub const SKYLINE_HEIGHT: f32 = 180.0;

/// Skyline outline as (x, y) fractions of the silhouette strip
const SKYLINE_PROFILE: [(f32, f32); 13] = [
    (0.0, 1.0),
    (0.0, 0.4),
    (0.1, 0.2),
    (0.2, 0.6),
    (0.3, 0.4),
    (0.4, 0.5),
    (0.5, 0.3),
    (0.6, 0.5),
    (0.7, 0.4),
    (0.8, 0.2),
    (0.9, 0.6),
    (1.0, 0.4),
    (1.0, 1.0),
];

/// Horizontal tail sway shared by every kite on a given frame
pub fn tail_sway(frame: u64) -> f32 {
    (frame as f32 * 0.2).sin() * 10.0
}

/// Diamond body
pub fn kite_body() -> Path {
    Path::new()
        .move_to(Vec2::new(0.0, -KITE_HALF_HEIGHT))
        .line_to(Vec2::new(KITE_HALF_WIDTH, 0.0))
        .line_to(Vec2::new(0.0, KITE_HALF_HEIGHT))
        .line_to(Vec2::new(-KITE_HALF_WIDTH, 0.0))
        .close()
}

/// Corners of the body gradient (top-left to bottom-right of the bounding box)
pub fn kite_gradient_axis() -> (Vec2, Vec2) {
    (
        Vec2::new(-KITE_HALF_WIDTH, -KITE_HALF_HEIGHT),
        Vec2::new(KITE_HALF_WIDTH, KITE_HALF_HEIGHT),
    )
}

/// Triangular tail, tips shifted by half the sway
pub fn kite_tail(sway: f32) -> Path {
    let shift = sway / 2.0;
    Path::new()
        .move_to(Vec2::new(0.0, TAIL_ROOT))
        .line_to(Vec2::new(-TAIL_HALF_WIDTH + shift, TAIL_TIP))
        .line_to(Vec2::new(TAIL_HALF_WIDTH + shift, TAIL_TIP))
        .close()
}

/// Vertical spine
pub fn kite_spine() -> Path {
    Path::new()
        .move_to(Vec2::new(0.0, -KITE_HALF_HEIGHT))
        .line_to(Vec2::new(0.0, KITE_HALF_HEIGHT))
}

/// Bowed cross spar
pub fn kite_spar() -> Path {
    Path::new()
        .move_to(Vec2::new(-KITE_HALF_WIDTH, 0.0))
        .quad_to(Vec2::new(0.0, -15.0), Vec2::new(KITE_HALF_WIDTH, 0.0))
}

/// Hero string: from just under the kite to the anchor, bowing toward the anchor
pub fn hero_string(hero: Vec2, anchor: Vec2) -> Path {
    Path::new()
        .move_to(hero + Vec2::new(0.0, TAIL_ROOT))
        .quad_to(anchor, anchor)
}

/// Enemy tether running straight up off screen
pub fn tether(enemy: Vec2) -> Path {
    Path::new()
        .move_to(enemy)
        .line_to(enemy - Vec2::new(0.0, 1000.0))
}

/// Full-viewport rectangle
pub fn rect(origin: Vec2, size: Vec2) -> Path {
    Path::new()
        .move_to(origin)
        .line_to(Vec2::new(origin.x + size.x, origin.y))
        .line_to(origin + size)
        .line_to(Vec2::new(origin.x, origin.y + size.y))
        .close()
}

/// City skyline along the bottom edge
pub fn skyline(viewport: Vec2) -> Path {
    let height = SKYLINE_HEIGHT.min(viewport.y);
    let top = viewport.y - height;
    let mut path = Path::new();
    for (i, &(fx, fy)) in SKYLINE_PROFILE.iter().enumerate() {
        let point = Vec2::new(fx * viewport.x, top + fy * height);
        path = if i == 0 {
            path.move_to(point)
        } else {
            path.line_to(point)
        };
    }
    path.close()
}
