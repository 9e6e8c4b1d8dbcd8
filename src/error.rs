//! Error types for simulator construction.
//!
//! Stepping and spawning never fail; only a malformed
//! [`SimulationConfig`](crate::config::SimulationConfig) is rejected, and it is
//! rejected up front.

use std::fmt;

/// Reasons a configuration cannot drive a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Capacity must allow at least one body.
    ZeroCapacity,
    /// Capacity is above the supported maximum.
    CapacityTooLarge { requested: usize, max: usize },
    /// Bodies need a positive radius.
    ZeroRadius,
    /// Elasticity must lie in `(0, 1]`.
    ElasticityOutOfRange(f32),
    /// At least one substep is required per frame.
    ZeroSubsteps,
    /// Frame delta must be finite and positive.
    InvalidFrameDelta(f32),
    /// The box must be finite and wider and taller than one body.
    InvalidBounds { width: f32, height: f32 },
    InvalidGravity(f32),
    /// Wind limit must be finite and non-negative.
    InvalidWindLimit(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::CapacityTooLarge { requested, max } => {
                write!(f, "capacity {requested} exceeds the maximum of {max}")
            }
            Self::ZeroRadius => write!(f, "radius must be positive"),
            Self::ElasticityOutOfRange(e) => write!(f, "elasticity {e} is outside (0, 1]"),
            Self::ZeroSubsteps => write!(f, "substep count must be at least 1"),
            Self::InvalidFrameDelta(dt) => {
                write!(f, "frame delta {dt} must be finite and positive")
            }
            Self::InvalidBounds { width, height } => {
                write!(f, "bounds {width}x{height} cannot contain a body")
            }
            Self::InvalidGravity(g) => write!(f, "gravity {g} is not finite"),
            Self::InvalidWindLimit(w) => {
                write!(f, "wind limit {w} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenient result alias for fallible construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
