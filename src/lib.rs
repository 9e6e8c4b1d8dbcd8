//! Particle Box – a substepped 2D solver for elastic circles.
//!
//! The crate keeps a bounded set of equally sized circular bodies inside a
//! rectangular box. Every visible frame is split into a fixed number of
//! substeps; each substep resolves all pairwise overlaps with an elastic
//! impulse and then applies gravity and wind, corrects bodies that reached a
//! wall, and advances positions.
//!
//! Window management, drawing, and input polling are left to the caller, which
//! feeds a [`FrameInput`] per frame and reads back [`Simulator::bodies`],
//! [`Simulator::sprites`], and [`Simulator::metrics`].

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{CircleContact, CollisionPass, ContactResponse, NarrowPhase};
pub use config::{AmbientSpawn, SimulationConfig};
pub use core::{
    body::{Body, BodyId, BodyKind},
    types::{Bounds, WallMode},
};
pub use dynamics::{
    boundary::BoundaryPolicy,
    forces::{Environment, ForceGenerator, GravityForce, WindForce},
    integrator::Integrator,
};
pub use error::ConfigError;
pub use utils::profiling::StepProfile;
pub use world::{CircleSprite, FrameInput, SimulationMetrics, Simulator, SpawnRequest};
