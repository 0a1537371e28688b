//! Simulation state
//!
//! Everything a frame touches lives in [`SimState`]: population, viewport,
//! pointer, settings and the RNG used for (re)population.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use super::spawn::populate;
use crate::consts::POINTER_RADIUS_SCALE;
use crate::error::SimError;
use crate::settings::Settings;

/// Lifecycle of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// No population yet; ticking is an error
    Uninitialized,
    /// Population built, frames may run
    Running,
}

/// Bounded drawing area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

/// Pointer that repels nearby particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    /// Last known position; `None` while the pointer is away
    pub position: Option<Vec2>,
    /// Reach of the repulsion, added to each particle's radius
    pub radius: f32,
}

impl Pointer {
    /// Absent pointer with its reach scaled to the viewport
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            position: None,
            radius: Self::radius_for(viewport),
        }
    }

    pub fn radius_for(viewport: &Viewport) -> f32 {
        (viewport.height_f32() / POINTER_RADIUS_SCALE) * (viewport.width_f32() / POINTER_RADIUS_SCALE)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG started from
    pub seed: u64,
    pub settings: Settings,
    pub viewport: Viewport,
    pub pointer: Pointer,
    /// Population, updated in slot order every frame
    pub particles: Vec<Particle>,
    pub phase: SimPhase,
    /// Frames run since the last (re)initialization
    pub frame: u64,
    /// Number of successful (re)initializations
    pub generation: u32,
    rng: Pcg32,
}

impl SimState {
    /// Create an uninitialized simulation; call [`SimState::initialize`] before ticking
    pub fn new(settings: Settings, viewport: Viewport, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;
        Ok(Self {
            seed,
            settings,
            pointer: Pointer::new(&viewport),
            viewport,
            particles: Vec::new(),
            phase: SimPhase::Uninitialized,
            frame: 0,
            generation: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// (Re)build the population for the current viewport.
    ///
    /// On failure the previous population and phase are kept.
    pub fn initialize(&mut self) -> Result<(), SimError> {
        self.rebuild(self.viewport)
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Adopt a new viewport size and repopulate.
    ///
    /// The viewport, pointer and population change together or not at all.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SimError> {
        let viewport = Viewport::new(width, height)?;
        log::debug!("Viewport resize to {}x{} requested", width, height);
        self.rebuild(viewport)?;
        if self.settings.pointer_follows_resize {
            self.pointer.radius = Pointer::radius_for(&self.viewport);
        }
        Ok(())
    }

    /// Populate `viewport` and adopt it only if placement succeeds
    fn rebuild(&mut self, viewport: Viewport) -> Result<(), SimError> {
        let particles = match populate(&self.settings, &viewport, &mut self.rng) {
            Ok(particles) => particles,
            Err(e) => {
                log::warn!("Population rebuild failed: {}", e);
                return Err(e);
            }
        };

        self.viewport = viewport;
        self.particles = particles;
        self.phase = SimPhase::Running;
        self.frame = 0;
        self.generation += 1;

        log::info!(
            "Populated {} particles in {}x{} (generation {}, overlap {}, impact {})",
            self.particles.len(),
            self.viewport.width,
            self.viewport.height,
            self.generation,
            self.settings.overlap_rule.as_str(),
            self.settings.impact_model.as_str()
        );
        Ok(())
    }

    pub fn set_pointer(&mut self, at: Vec2) {
        self.pointer.position = Some(at);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.position = None;
    }
}
