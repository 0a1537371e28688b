//! Particle Field - bouncing, colliding particles on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation (collisions, walls, pointer repulsion, placement)
//! - `renderer`: Drawing surface abstraction and its implementations
//! - `settings`: Data-driven simulation tunables
//! - `color`: Palette colors
//! - `error`: Error type shared by all fallible operations

pub mod color;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::SimError;
pub use settings::{ImpactModel, OverlapRule, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Population size rebuilt on every (re)initialization
    pub const NUMBER_OF_PARTICLES: usize = 100;

    /// Smallest spawn radius
    pub const MIN_RADIUS: f32 = 5.0;
    /// Largest spawn radius is viewport width divided by this
    pub const RADIUS_DIVISOR: f32 = 50.0;
    /// Initial velocity components are drawn from [0, MAX_INITIAL_SPEED]
    pub const MAX_INITIAL_SPEED: f32 = 10.0;

    /// Fill opacity of particle bodies (stroke is always opaque)
    pub const FILL_ALPHA: f32 = 0.3;

    /// Velocity added per axis when the pointer pushes a particle
    pub const REPEL_IMPULSE: f32 = 30.0;
    /// Repulsion is suppressed within this many radii of the far wall
    pub const REPEL_MARGIN_FACTOR: f32 = 10.0;
    /// Pointer radius = (height / SCALE) * (width / SCALE)
    pub const POINTER_RADIUS_SCALE: f32 = 100.0;

    /// Re-rolls allowed per particle before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// `KeyboardEvent.code` that repopulates the field
    pub const RESET_KEY: &str = "Space";
}
