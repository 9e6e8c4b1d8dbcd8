use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::{AmbientSpawn, SimulationConfig},
    core::body::{Body, BodyKind},
};

/// A body the shell asks for this frame, typically under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}

impl SpawnRequest {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// Heavy user body at `position` with the standard launch velocity.
    pub fn at_pointer(position: Vec2, config: &SimulationConfig) -> Self {
        Self::new(position, config.ambient.velocity, config.user_mass())
    }

    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.mass.is_finite()
            && self.mass > 0.0
    }
}

/// Builds new bodies with the shared radius and elasticity.
#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    ambient: AmbientSpawn,
    radius: f32,
    elasticity: f32,
    ambient_mass: f32,
}

impl Spawner {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            ambient: config.ambient,
            radius: config.radius_f32(),
            elasticity: config.elasticity,
            ambient_mass: config.ambient_mass(),
        }
    }

    /// Ambient spawn point for the `count`-th body; odd counts are raised by the parity offset.
    pub fn ambient_position(&self, count: usize) -> Vec2 {
        let offset = if count % 2 == 1 {
            self.ambient.parity_offset
        } else {
            0.0
        };
        Vec2::new(self.ambient.origin.x, self.ambient.origin.y - offset)
    }

    pub fn ambient_body(&self, count: usize) -> Body {
        Body::new(
            BodyKind::Ambient,
            self.ambient_position(count),
            self.ambient.velocity,
            self.radius,
            self.ambient_mass,
            self.elasticity,
        )
    }

    pub fn user_body(&self, request: &SpawnRequest) -> Body {
        Body::new(
            BodyKind::User,
            request.position,
            request.velocity,
            self.radius,
            request.mass,
            self.elasticity,
        )
    }
}
