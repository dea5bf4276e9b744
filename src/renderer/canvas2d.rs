//! `Canvas` backend for the browser's 2D context

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Paint, Path, PathOp, TextStyle};

fn trace(ctx: &CanvasRenderingContext2d, path: &Path) {
    ctx.begin_path();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathOp::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathOp::QuadTo(c, p) => {
                ctx.quadratic_curve_to(c.x as f64, c.y as f64, p.x as f64, p.y as f64)
            }
            PathOp::Close => ctx.close_path(),
        }
    }
}

fn apply_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) {
    match paint {
        Paint::Solid(color) => ctx.set_fill_style_str(color),
        Paint::Linear { from, to, stops } => {
            let gradient =
                ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
            for (offset, color) in stops {
                if let Err(e) = gradient.add_color_stop(*offset, color) {
                    log::warn!("Bad gradient stop {}: {:?}", color, e);
                }
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
}

impl Canvas for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, offset: Vec2) {
        CanvasRenderingContext2d::translate(self, offset.x as f64, offset.y as f64).ok();
    }

    fn rotate(&mut self, radians: f32) {
        CanvasRenderingContext2d::rotate(self, radians as f64).ok();
    }

    fn scale(&mut self, factor: f32) {
        CanvasRenderingContext2d::scale(self, factor as f64, factor as f64).ok();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.set_global_alpha(alpha as f64);
    }

    fn set_shadow(&mut self, blur: f32, color: &str) {
        self.set_shadow_blur(blur as f64);
        self.set_shadow_color(color);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        trace(self, path);
        apply_fill(self, paint);
        self.fill();
    }

    fn stroke_path(&mut self, path: &Path, color: &str, width: f32) {
        trace(self, path);
        self.set_stroke_style_str(color);
        self.set_line_width(width as f64);
        self.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.begin_path();
        self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .ok();
        self.set_fill_style_str(color);
        self.fill();
    }

    fn outlined_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.set_font(style.font);
        self.set_stroke_style_str(style.outline);
        self.set_line_width(style.outline_width as f64);
        self.stroke_text(text, pos.x as f64, pos.y as f64).ok();
        self.set_fill_style_str(style.fill);
        self.fill_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
