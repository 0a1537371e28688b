//! Elastic collision response between two particles
//!
//! Both velocities are rotated into a frame where the line of centers is the
//! x-axis, the 1D exchange is applied on x, and the result is rotated back.
//! The perpendicular (y) components pass through untouched.

use glam::Vec2;

use super::particle::Particle;
use super::vector::rotate;
use crate::settings::ImpactModel;

/// Post-impact axial velocities `(v1, v2)` for axial velocities `u1`, `u2`
pub fn exchange(u1: f32, u2: f32, m1: f32, m2: f32, model: ImpactModel) -> (f32, f32) {
    let total = m1 + m2;
    let v1 = u1 * (m1 - m2) / total + u2 * 2.0 * m2 / total;
    let v2 = match model {
        ImpactModel::Momentum => u2 * (m2 - m1) / total + u1 * 2.0 * m1 / total,
        ImpactModel::Mirrored => u2 * (m1 - m2) / total + u1 * 2.0 * m2 / total,
    };
    (v1, v2)
}

/// Resolve a collision between two touching particles.
///
/// Returns false without touching anything when the pair is already moving
/// apart, which keeps one overlap from being resolved on consecutive frames.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle, model: ImpactModel) -> bool {
    let vel_diff = a.vel - b.vel;
    let offset = b.pos - a.pos;

    if vel_diff.dot(offset) < 0.0 {
        return false;
    }

    let angle = -offset.y.atan2(offset.x);

    let u1 = rotate(a.vel, angle);
    let u2 = rotate(b.vel, angle);

    let (v1x, v2x) = exchange(u1.x, u2.x, a.mass(), b.mass(), model);

    a.vel = rotate(Vec2::new(v1x, u1.y), -angle);
    b.vel = rotate(Vec2::new(v2x, u2.y), -angle);
    true
}
