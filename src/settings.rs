//! Simulation settings
//!
//! Defaults reproduce the classic behaviour except for the collision
//! exchange (see [`ImpactModel`]). Hosts may load overrides from
//! JSON; every field is optional in the file.

use serde::{Deserialize, Serialize};

use crate::color::{Color, PALETTE};
use crate::consts::*;
use crate::error::SimError;

/// How close two particles must be before they count as touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapRule {
    /// Contact when centers are within twice the radius of the particle
    /// doing the check. Asymmetric for unequal radii.
    #[default]
    LeadingRadius,
    /// Contact when centers are within the sum of both radii
    RadiusSum,
}

impl OverlapRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapRule::LeadingRadius => "leading_radius",
            OverlapRule::RadiusSum => "radius_sum",
        }
    }
}

/// Which 1D exchange formula the collision resolver applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImpactModel {
    /// Textbook elastic exchange; conserves momentum for any masses.
    /// Departs from the classic canvas demo whenever radii differ.
    #[default]
    Momentum,
    /// The classic canvas demo's exchange: both bodies use the first
    /// body's mass terms. Select this to reproduce that demo exactly.
    /// Matches `Momentum` for equal masses only.
    Mirrored,
}

impl ImpactModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactModel::Momentum => "momentum",
            ImpactModel::Mirrored => "mirrored",
        }
    }
}

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Population ===
    /// Particles created on every (re)initialization
    pub particle_count: usize,
    /// Smallest spawn radius
    pub min_radius: f32,
    /// Largest spawn radius is `viewport width / radius_divisor`
    pub radius_divisor: f32,
    /// Upper bound of each initial velocity component
    pub max_initial_speed: f32,
    /// Colors picked uniformly at spawn
    pub palette: Vec<Color>,
    /// Position re-rolls allowed per particle before giving up
    pub max_placement_attempts: u32,

    // === Physics ===
    pub overlap_rule: OverlapRule,
    pub impact_model: ImpactModel,

    // === Pointer ===
    /// Per-axis velocity nudge away from the pointer
    pub repel_impulse: f32,
    /// No nudge when it would push within `radius * factor` of the far wall
    pub repel_margin_factor: f32,
    /// Recompute the pointer radius whenever the viewport is resized
    pub pointer_follows_resize: bool,

    // === Rendering ===
    /// Opacity of the particle fill
    pub fill_alpha: f32,

    // === Input ===
    /// `KeyboardEvent.code` that repopulates the field
    pub reset_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: NUMBER_OF_PARTICLES,
            min_radius: MIN_RADIUS,
            radius_divisor: RADIUS_DIVISOR,
            max_initial_speed: MAX_INITIAL_SPEED,
            palette: PALETTE.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            overlap_rule: OverlapRule::default(),
            impact_model: ImpactModel::default(),

            repel_impulse: REPEL_IMPULSE,
            repel_margin_factor: REPEL_MARGIN_FACTOR,
            pointer_follows_resize: false,

            fill_alpha: FILL_ALPHA,

            reset_key: RESET_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.min_radius > 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "min_radius must be positive, got {}",
                self.min_radius
            )));
        }
        if !(self.radius_divisor > 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "radius_divisor must be positive, got {}",
                self.radius_divisor
            )));
        }
        if !(self.max_initial_speed >= 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "max_initial_speed must be non-negative, got {}",
                self.max_initial_speed
            )));
        }
        if self.palette.is_empty() {
            return Err(SimError::InvalidSettings("palette is empty".to_string()));
        }
        if self.max_placement_attempts == 0 {
            return Err(SimError::InvalidSettings(
                "max_placement_attempts must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(SimError::InvalidSettings(format!(
                "fill_alpha must be within [0, 1], got {}",
                self.fill_alpha
            )));
        }
        Ok(())
    }
}
