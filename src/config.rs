//! Configuration constants and the immutable [`SimulationConfig`] handed to the simulator.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::types::{Bounds, WallMode};
use crate::error::ConfigError;
use crate::utils::math::volume_mass;

/// Maximum number of live bodies, and the upper limit accepted for `capacity`.
pub const MAX_CIRCLES: usize = 1000;

/// Radius shared by every body.
pub const DEFAULT_RADIUS: u32 = 10;

/// Restitution applied per body on contacts and wall bounces.
pub const DEFAULT_ELASTICITY: f32 = 0.9;

/// Substeps performed per visible frame.
pub const DEFAULT_SUBSTEPS: u32 = 8;

/// Nominal frame delta (in seconds). Not measured; the solver is tick-rate coupled.
pub const DEFAULT_FRAME_DELTA: f32 = 0.016;

pub const SCREEN_WIDTH: f32 = 2560.0;
pub const SCREEN_HEIGHT: f32 = 1300.0;

/// Whether bodies leaving along X re-enter on the opposite edge instead of bouncing.
pub const CONTINUOUS_X: bool = false;

/// Velocity removed from `v.y` every substep while gravity is on.
pub const DEFAULT_GRAVITY: f32 = 10.0;

/// Magnitude limit of the wind input.
pub const MAX_WIND_SPEED: f32 = 10.0;

/// Where ambient bodies enter the box.
pub const AMBIENT_ORIGIN: [f32; 2] = [1200.0, 100.0];

/// Launch velocity used for both ambient and pointer spawns.
pub const SPAWN_VELOCITY: [f32; 2] = [2000.0, 0.0];

/// Ambient mass is `AMBIENT_MASS_FACTOR * R`.
pub const AMBIENT_MASS_FACTOR: f32 = 10.0;

/// User mass is `USER_MASS_FACTOR * R^3`, roughly a solid sphere's volume.
pub const USER_MASS_FACTOR: f32 = 4.2;

/// Squared distances below this are treated as concentric.
pub const NEAR_CONTACT_EPSILON: f32 = 1e-4;

/// Added to the squared distance of concentric pairs.
pub const NEAR_CONTACT_FLOOR: f32 = 0.1;

/// Parameters of the scripted per-frame spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientSpawn {
    pub origin: Vec2,
    pub velocity: Vec2,
    /// Subtracted from `origin.y` when the current body count is odd.
    pub parity_offset: f32,
}

impl Default for AmbientSpawn {
    fn default() -> Self {
        Self {
            origin: Vec2::from_array(AMBIENT_ORIGIN),
            velocity: Vec2::from_array(SPAWN_VELOCITY),
            parity_offset: 20.0 * DEFAULT_RADIUS as f32,
        }
    }
}

/// Immutable simulation settings. Defaults reproduce the reference scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub capacity: usize,
    pub radius: u32,
    pub elasticity: f32,
    pub substeps: u32,
    pub frame_delta: f32,
    pub bounds: Bounds,
    pub wall_mode: WallMode,
    pub gravity: f32,
    pub max_wind_speed: f32,
    pub ambient: AmbientSpawn,
    /// Frames slower than this (in milliseconds) are reported through `log::warn!`.
    pub step_budget_ms: Option<f32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_CIRCLES,
            radius: DEFAULT_RADIUS,
            elasticity: DEFAULT_ELASTICITY,
            substeps: DEFAULT_SUBSTEPS,
            frame_delta: DEFAULT_FRAME_DELTA,
            bounds: Bounds::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            wall_mode: if CONTINUOUS_X {
                WallMode::Wrap
            } else {
                WallMode::Reflect
            },
            gravity: DEFAULT_GRAVITY,
            max_wind_speed: MAX_WIND_SPEED,
            ambient: AmbientSpawn::default(),
            step_budget_ms: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    pub fn with_wall_mode(mut self, wall_mode: WallMode) -> Self {
        self.wall_mode = wall_mode;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_step_budget_ms(mut self, budget_ms: f32) -> Self {
        self.step_budget_ms = Some(budget_ms);
        self
    }

    /// Duration of one substep.
    pub fn substep_delta(&self) -> f32 {
        self.frame_delta / self.substeps.max(1) as f32
    }

    pub fn radius_f32(&self) -> f32 {
        self.radius as f32
    }

    pub fn ambient_mass(&self) -> f32 {
        AMBIENT_MASS_FACTOR * self.radius_f32()
    }

    pub fn user_mass(&self) -> f32 {
        volume_mass(USER_MASS_FACTOR, self.radius_f32())
    }

    /// Checks every field the solver relies on being positive or finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CIRCLES {
            return Err(ConfigError::CapacityTooLarge {
                requested: self.capacity,
                max: MAX_CIRCLES,
            });
        }
        if self.radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if !(self.elasticity > 0.0 && self.elasticity <= 1.0) {
            return Err(ConfigError::ElasticityOutOfRange(self.elasticity));
        }
        if self.substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        if !(self.frame_delta.is_finite() && self.frame_delta > 0.0) {
            return Err(ConfigError::InvalidFrameDelta(self.frame_delta));
        }
        let diameter = 2.0 * self.radius_f32();
        if !(self.bounds.width.is_finite() && self.bounds.height.is_finite())
            || self.bounds.width <= diameter
            || self.bounds.height <= diameter
        {
            return Err(ConfigError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.max_wind_speed.is_finite() && self.max_wind_speed >= 0.0) {
            return Err(ConfigError::InvalidWindLimit(self.max_wind_speed));
        }
        Ok(())
    }
}
