//! Canvas 2D surface for the browser build

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::color::Color;

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, fill_alpha: f32, stroke: Color) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if let Err(e) = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }

        // Alpha applies to the fill only
        ctx.save();
        ctx.set_global_alpha(fill_alpha as f64);
        ctx.set_fill_style_str(&fill.to_hex());
        ctx.fill();
        ctx.restore();

        ctx.set_stroke_style_str(&stroke.to_hex());
        ctx.stroke();
        ctx.close_path();
    }
}
