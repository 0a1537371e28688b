//! Per-frame simulation step
//!
//! One call to [`tick`] per animation frame. There is no delta time: a frame
//! is one unit of simulated time, so speed follows the display refresh rate.

use serde::Serialize;

use super::collision::resolve_collision;
use super::particle::Particle;
use super::state::{Pointer, SimPhase, SimState, Viewport};
use crate::error::SimError;
use crate::renderer::Surface;
use crate::settings::Settings;

/// Counters gathered during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Pair resolutions that changed velocities
    pub collisions: u32,
    /// Particles that had a velocity component flipped by a wall
    pub wall_bounces: u32,
    /// Particles nudged by the pointer
    pub repulsions: u32,
}

impl std::ops::AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        self.collisions += rhs.collisions;
        self.wall_bounces += rhs.wall_bounces;
        self.repulsions += rhs.repulsions;
    }
}

/// Clear the surface, then update and draw every particle in slot order
pub fn tick<S: Surface + ?Sized>(state: &mut SimState, surface: &mut S) -> Result<FrameStats, SimError> {
    if state.phase != SimPhase::Running {
        return Err(SimError::NotInitialized);
    }

    surface.clear(state.viewport.width_f32(), state.viewport.height_f32());

    let mut stats = FrameStats::default();
    for index in 0..state.particles.len() {
        update_particle(
            index,
            &mut state.particles,
            &state.viewport,
            &state.pointer,
            &state.settings,
            &mut *surface,
            &mut stats,
        );
    }

    state.frame += 1;
    Ok(stats)
}

/// Full frame update for the particle in slot `index`.
///
/// Later slots see the velocities earlier slots already changed this frame.
pub fn update_particle<S: Surface + ?Sized>(
    index: usize,
    particles: &mut [Particle],
    viewport: &Viewport,
    pointer: &Pointer,
    settings: &Settings,
    surface: &mut S,
    stats: &mut FrameStats,
) {
    particles[index].draw(surface, settings.fill_alpha);

    for other in 0..particles.len() {
        if other == index {
            continue;
        }
        if particles[index].overlaps(&particles[other], settings.overlap_rule) {
            let (this, that) = pair_mut(particles, index, other);
            if resolve_collision(this, that, settings.impact_model) {
                stats.collisions += 1;
            }
        }
    }

    let this = &mut particles[index];
    if this.bounce_walls(viewport) {
        stats.wall_bounces += 1;
    }
    if this.repel_from(
        pointer,
        viewport,
        settings.repel_impulse,
        settings.repel_margin_factor,
    ) {
        stats.repulsions += 1;
    }
    this.integrate();
}

/// Two distinct mutable slots, in argument order
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
