//! Particle entity and its per-frame steps
//!
//! The frame order (draw, collide, walls, pointer, integrate) is driven from
//! `tick`; this module holds the individual steps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Pointer, Viewport};
use super::vector::distance;
use crate::color::Color;
use crate::renderer::Surface;
use crate::settings::OverlapRule;

/// A circular body. Mass is the radius, so it is derived rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius
    }

    /// Center distance at which `self` considers `other` touching
    #[inline]
    pub fn contact_distance(&self, other: &Particle, rule: OverlapRule) -> f32 {
        match rule {
            OverlapRule::LeadingRadius => 2.0 * self.radius,
            OverlapRule::RadiusSum => self.radius + other.radius,
        }
    }

    /// Frame-time overlap test (strict)
    pub fn overlaps(&self, other: &Particle, rule: OverlapRule) -> bool {
        distance(self.pos, other.pos) - self.contact_distance(other, rule) < 0.0
    }

    /// Spawn-time test: exact contact also counts as a clash
    pub fn clashes_with(&self, other: &Particle, rule: OverlapRule) -> bool {
        distance(self.pos, other.pos) - self.contact_distance(other, rule) <= 0.0
    }

    /// Translucent fill plus opaque outline, both in the particle's color
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, fill_alpha: f32) {
        surface.draw_circle(self.pos, self.radius, self.color, fill_alpha, self.color);
    }

    /// Flip velocity components that would carry the body through a wall.
    ///
    /// The far walls test the next position, the near walls the current one.
    /// No position correction, so fast bodies can tunnel.
    pub fn bounce_walls(&mut self, viewport: &Viewport) -> bool {
        let (width, height) = (viewport.width_f32(), viewport.height_f32());
        let mut bounced = false;

        if self.pos.y + self.vel.y + self.radius >= height || self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        if self.pos.x + self.vel.x + self.radius >= width || self.pos.x - self.radius <= 0.0 {
            self.vel.x = -self.vel.x;
            bounced = true;
        }

        bounced
    }

    /// Push away from the pointer if it is within reach.
    ///
    /// Each axis is nudged independently, and only if the particle is not
    /// already within `radius * margin_factor` of the wall it would be pushed
    /// toward.
    pub fn repel_from(
        &mut self,
        pointer: &Pointer,
        viewport: &Viewport,
        impulse: f32,
        margin_factor: f32,
    ) -> bool {
        let Some(at) = pointer.position else {
            return false;
        };
        if distance(at, self.pos) >= self.radius + pointer.radius {
            return false;
        }

        let (width, height) = (viewport.width_f32(), viewport.height_f32());
        let margin = self.radius * margin_factor;
        let before = self.vel;

        if at.x < self.pos.x && self.pos.x < width - margin {
            self.vel.x += impulse;
        }
        if at.x > self.pos.x && self.pos.x > margin {
            self.vel.x -= impulse;
        }
        if at.y < self.pos.y && self.pos.y < height - margin {
            self.vel.y += impulse;
        }
        if at.y > self.pos.y && self.pos.y > margin {
            self.vel.y -= impulse;
        }

        self.vel != before
    }

    /// One Euler step; a frame is one unit of time
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use crate::consts::{REPEL_IMPULSE, REPEL_MARGIN_FACTOR};
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn particle(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, PALETTE[0])
    }

    fn viewport() -> Viewport {
        Viewport::new(200, 200).unwrap()
    }

    #[test]
    fn test_mass_tracks_radius() {
        let mut p = particle(0.0, 0.0, 0.0, 0.0, 7.0);
        assert_eq!(p.mass(), 7.0);
        p.radius = 9.0;
        assert_eq!(p.mass(), 9.0);
    }

    #[test]
    fn test_overlap_uses_leading_radius() {
        let small = particle(0.0, 0.0, 0.0, 0.0, 5.0);
        let big = particle(15.0, 0.0, 0.0, 0.0, 10.0);

        // 15 < 2 * 10 but not < 2 * 5
        assert!(big.overlaps(&small, OverlapRule::LeadingRadius));
        assert!(!small.overlaps(&big, OverlapRule::LeadingRadius));
        // Symmetric rule: 15 < 5 + 10 is false
        assert!(!big.overlaps(&small, OverlapRule::RadiusSum));
        assert!(!small.overlaps(&big, OverlapRule::RadiusSum));
    }

    #[test]
    fn test_exact_contact_clashes_only_at_spawn() {
        let a = particle(0.0, 0.0, 0.0, 0.0, 5.0);
        let b = particle(10.0, 0.0, 0.0, 0.0, 5.0);
        assert!(!a.overlaps(&b, OverlapRule::LeadingRadius));
        assert!(a.clashes_with(&b, OverlapRule::LeadingRadius));
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut p = particle(100.0, 0.0, 2.0, -3.0, 5.0);
        assert!(p.bounce_walls(&viewport()));
        assert_eq!(p.vel, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_wall_bounce_uses_next_position_on_far_walls() {
        // 190 + 6 + 5 >= 200 even though the body is not yet touching
        let mut p = particle(190.0, 100.0, 6.0, 0.0, 4.0);
        assert!(p.bounce_walls(&viewport()));
        assert_eq!(p.vel.x, -6.0);
    }

    #[test]
    fn test_interior_particle_keeps_velocity() {
        let mut p = particle(100.0, 100.0, 3.0, -2.0, 5.0);
        assert!(!p.bounce_walls(&viewport()));
        assert_eq!(p.vel, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_absent_pointer_never_repels() {
        let pointer = Pointer::new(&viewport());
        for (x, y) in [(0.0, 0.0), (100.0, 100.0), (5.0, 195.0)] {
            let mut p = particle(x, y, 1.0, 1.0, 5.0);
            assert!(!p.repel_from(&pointer, &viewport(), REPEL_IMPULSE, REPEL_MARGIN_FACTOR));
            assert_eq!(p.vel, Vec2::new(1.0, 1.0));
        }
    }

    #[test]
    fn test_pointer_pushes_away() {
        let vp = viewport();
        let mut pointer = Pointer::new(&vp);
        assert_eq!(pointer.radius, 4.0);
        pointer.position = Some(Vec2::new(95.0, 100.0));

        let mut p = particle(100.0, 100.0, 1.0, 1.0, 5.0);
        assert!(p.repel_from(&pointer, &vp, REPEL_IMPULSE, REPEL_MARGIN_FACTOR));
        // Pointer level on y, so only x is nudged
        assert_eq!(p.vel, Vec2::new(31.0, 1.0));
    }

    #[test]
    fn test_pointer_out_of_reach() {
        let vp = viewport();
        let mut pointer = Pointer::new(&vp);
        pointer.position = Some(Vec2::new(90.0, 100.0));

        // 10 >= 5 + 4
        let mut p = particle(100.0, 100.0, 1.0, 1.0, 5.0);
        assert!(!p.repel_from(&pointer, &vp, REPEL_IMPULSE, REPEL_MARGIN_FACTOR));
    }

    #[test]
    fn test_pointer_margin_blocks_push_into_wall() {
        let vp = viewport();
        let mut pointer = Pointer::new(&vp);
        pointer.position = Some(Vec2::new(158.0, 100.0));

        // x = 160 is not < 200 - 50, so no rightward push
        let mut p = particle(160.0, 100.0, 0.0, 0.0, 5.0);
        assert!(!p.repel_from(&pointer, &vp, REPEL_IMPULSE, REPEL_MARGIN_FACTOR));
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_and_draw() {
        let mut p = particle(10.0, 20.0, 1.5, -2.0, 5.0);
        p.integrate();
        assert_eq!(p.pos, Vec2::new(11.5, 18.0));

        let mut surface = RecordingSurface::default();
        p.draw(&mut surface, 0.3);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::Circle {
                center: Vec2::new(11.5, 18.0),
                radius: 5.0,
                fill: PALETTE[0],
                fill_alpha: 0.3,
                stroke: PALETTE[0],
            }]
        );
    }
}
