use crate::core::{
    body::Body,
    types::{Bounds, WallMode},
};

/// Keeps bodies inside the box.
///
/// Only bodies at or beyond a wall are corrected; a body whose center is within
/// one radius of a wall but still inside is left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPolicy {
    pub bounds: Bounds,
    pub wall_mode: WallMode,
}

impl BoundaryPolicy {
    pub fn new(bounds: Bounds, wall_mode: WallMode) -> Self {
        Self { bounds, wall_mode }
    }

    pub fn apply(&self, body: &mut Body) {
        let radius = body.radius;
        let elasticity = body.elasticity;
        let width = self.bounds.width;
        let height = self.bounds.height;

        if body.position.x >= width {
            match self.wall_mode {
                WallMode::Wrap => body.position.x = radius,
                WallMode::Reflect => {
                    body.position.x = width - radius;
                    body.velocity.x *= -elasticity;
                }
            }
        } else if body.position.x <= 0.0 {
            match self.wall_mode {
                WallMode::Wrap => body.position.x = width - radius,
                WallMode::Reflect => {
                    body.position.x = radius;
                    body.velocity.x *= -elasticity;
                }
            }
        }

        if body.position.y >= height {
            body.position.y = height - radius;
            body.velocity.y *= -elasticity;
        } else if body.position.y <= 0.0 {
            body.position.y = radius;
            body.velocity.y *= -elasticity;
        }
    }

    pub fn apply_all(&self, bodies: &mut [Body]) {
        for body in bodies.iter_mut() {
            self.apply(body);
        }
    }
}
