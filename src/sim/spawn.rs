//! Randomized, non-overlapping population placement

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::particle::Particle;
use super::state::Viewport;
use crate::error::SimError;
use crate::settings::Settings;

/// Uniform integer in `[ceil(min), floor(max)]`, returned as a float.
///
/// Collapses to `ceil(min)` when the range is empty, so a viewport narrower
/// than `min_radius * radius_divisor` still spawns minimum-size particles.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return lo as f32;
    }
    rng.random_range(lo..=hi) as f32
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, radius: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        random_int(rng, radius, viewport.width_f32() - radius),
        random_int(rng, radius, viewport.height_f32() - radius),
    )
}

/// Build a full population for `viewport`
pub fn populate<R: Rng + ?Sized>(
    settings: &Settings,
    viewport: &Viewport,
    rng: &mut R,
) -> Result<Vec<Particle>, SimError> {
    let mut particles = Vec::with_capacity(settings.particle_count);
    for index in 0..settings.particle_count {
        let particle = spawn_particle(index, &particles, settings, viewport, rng)?;
        particles.push(particle);
    }
    Ok(particles)
}

/// Roll one particle, re-rolling its position until it clears every body in
/// `placed` or the attempt budget runs out.
fn spawn_particle<R: Rng + ?Sized>(
    index: usize,
    placed: &[Particle],
    settings: &Settings,
    viewport: &Viewport,
    rng: &mut R,
) -> Result<Particle, SimError> {
    let radius = random_int(
        rng,
        settings.min_radius,
        viewport.width_f32() / settings.radius_divisor,
    );
    let color = *settings
        .palette
        .choose(rng)
        .ok_or_else(|| SimError::InvalidSettings("palette is empty".to_string()))?;

    let mut candidate = Particle::new(random_position(rng, radius, viewport), Vec2::ZERO, radius, color);
    let mut attempts = 1;
    while placed
        .iter()
        .any(|other| candidate.clashes_with(other, settings.overlap_rule))
    {
        if attempts >= settings.max_placement_attempts {
            return Err(SimError::Placement {
                index,
                radius,
                attempts,
            });
        }
        candidate.pos = random_position(rng, radius, viewport);
        attempts += 1;
    }

    let top = settings.max_initial_speed;
    candidate.vel = Vec2::new(random_int(rng, 0.0, top), random_int(rng, 0.0, top));
    Ok(candidate)
}
