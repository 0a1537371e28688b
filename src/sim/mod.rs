//! Simulation module
//!
//! All physics lives here. The module never talks to the host directly:
//! - Drawing goes through the `renderer::Surface` trait
//! - Input arrives as `InputEvent`s between frames
//! - Randomness comes from the state's seeded RNG only

pub mod collision;
pub mod input;
pub mod particle;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{exchange, resolve_collision};
pub use input::InputEvent;
pub use particle::Particle;
pub use spawn::{populate, random_int};
pub use state::{Pointer, SimPhase, SimState, Viewport};
pub use tick::{FrameStats, tick, update_particle};
pub use vector::{distance, rotate};
