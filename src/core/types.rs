use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the X walls treat a body that reaches them. The Y walls always reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallMode {
    /// Clamp inside the wall and bounce with elasticity.
    #[default]
    Reflect,
    /// Teleport to the opposite wall, inset by the radius, keeping velocity.
    Wrap,
}

/// Axis-aligned simulation box spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Inclusive containment test used by the wall invariant.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}
