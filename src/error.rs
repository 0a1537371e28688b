//! Error types for the simulation
//!
//! Everything fallible in the crate returns [`SimError`]. Physics itself never
//! fails; errors come from placement, configuration and lifecycle misuse.

use std::fmt;

/// Errors produced by the simulation and its configuration
#[derive(Debug)]
pub enum SimError {
    /// A particle could not be placed without overlapping within the retry budget.
    Placement {
        /// Slot index of the particle being placed
        index: usize,
        /// Radius of the particle being placed
        radius: f32,
        /// Number of positions tried
        attempts: u32,
    },
    /// `tick` was called before the population was built.
    NotInitialized,
    /// Viewport with a zero dimension.
    InvalidViewport { width: u32, height: u32 },
    /// Settings failed validation.
    InvalidSettings(String),
    /// Palette entry is not a `#rrggbb` string.
    InvalidColor(String),
    /// Settings JSON could not be parsed.
    SettingsParse(serde_json::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Placement {
                index,
                radius,
                attempts,
            } => write!(
                f,
                "Cannot place particle {} (radius {}) after {} attempts; viewport too small for the population",
                index, radius, attempts
            ),
            SimError::NotInitialized => write!(f, "Simulation has not been initialized"),
            SimError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport {}x{}: both sides must be non-zero", width, height)
            }
            SimError::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            SimError::InvalidColor(s) => write!(f, "Invalid color {:?}: expected #rrggbb", s),
            SimError::SettingsParse(e) => write!(f, "Failed to parse settings: {}", e),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::SettingsParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::SettingsParse(e)
    }
}
