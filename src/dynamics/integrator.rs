use glam::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    core::body::Body,
    dynamics::{
        boundary::BoundaryPolicy,
        forces::{Environment, ForceGenerator},
    },
};

/// Per-substep force accumulation, wall correction, and explicit position advance.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub dt: f32,
    pub boundary: BoundaryPolicy,
    parallel: bool,
}

impl Integrator {
    pub fn new(dt: f32, boundary: BoundaryPolicy) -> Self {
        Self {
            dt,
            boundary,
            parallel: false,
        }
    }

    /// Only takes effect when the crate is built with the `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Walls are checked against the pre-move position, so a body pushed out
    /// by this substep's move is corrected at the start of the next one.
    pub fn integrate(&self, body: &mut Body, environment: &Environment) {
        environment.apply(body);
        self.boundary.apply(body);
        // Screen Y grows downward, velocity Y is "up positive".
        body.position += Vec2::new(body.velocity.x, -body.velocity.y) * self.dt;
    }

    pub fn step(&self, bodies: &mut [Body], environment: &Environment) {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                bodies
                    .par_iter_mut()
                    .for_each(|body| self.integrate(body, environment));
                return;
            }
        }

        for body in bodies.iter_mut() {
            self.integrate(body, environment);
        }
    }
}
