//! Simulation dynamics: global forces, wall handling, and integration.

pub mod boundary;
pub mod forces;
pub mod integrator;

pub use boundary::BoundaryPolicy;
pub use forces::{Environment, ForceGenerator, GravityForce, WindForce};
pub use integrator::Integrator;
