//! Rendering module
//!
//! The simulation draws through [`Surface`]. The browser build implements it
//! over a 2D canvas context; tests and the native runner record commands.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::color::Color;

/// Immediate-mode drawing target
pub trait Surface {
    /// Wipe the region `(0, 0)..(width, height)`
    fn clear(&mut self, width: f32, height: f32);

    /// Filled circle at `fill_alpha` opacity with an opaque outline
    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, fill_alpha: f32, stroke: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
        fill_alpha: f32,
        stroke: Color,
    },
}

/// Surface that keeps the draw calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Circles drawn since the last clear
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // A clear wipes everything drawn before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, fill: Color, fill_alpha: f32, stroke: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
            fill_alpha,
            stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut surface = RecordingSurface::default();
        surface.draw_circle(Vec2::ONE, 3.0, PALETTE[0], 0.3, PALETTE[0]);
        surface.draw_circle(Vec2::ONE, 4.0, PALETTE[1], 0.3, PALETTE[1]);
        assert_eq!(surface.circle_count(), 2);

        surface.clear(100.0, 50.0);
        assert_eq!(surface.circle_count(), 0);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Clear {
                width: 100.0,
                height: 50.0
            }]
        );
    }

    #[test]
    fn test_surface_is_object_safe() {
        let mut recording = RecordingSurface::default();
        let surface: &mut dyn Surface = &mut recording;
        surface.clear(10.0, 10.0);
        surface.draw_circle(Vec2::new(5.0, 5.0), 2.0, PALETTE[4], 0.5, PALETTE[4]);
        assert_eq!(recording.circle_count(), 1);
    }
}
