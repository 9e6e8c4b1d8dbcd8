use serde::{Deserialize, Serialize};

use crate::{core::body::Body, utils::math::to_pixel};

/// Aggregate figures shown on the HUD.
///
/// Averages divide by the configured capacity rather than the live count, so
/// they grow as the box fills up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    pub body_count: usize,
    pub avg_speed: f32,
    pub avg_momentum: f32,
}

impl SimulationMetrics {
    pub fn from_bodies(bodies: &[Body], capacity: usize) -> Self {
        let (speed_sum, momentum_sum) = bodies
            .iter()
            .fold((0.0f32, 0.0f32), |(speed, momentum), body| {
                (speed + body.speed(), momentum + body.momentum())
            });
        let divisor = capacity.max(1) as f32;

        Self {
            body_count: bodies.len(),
            avg_speed: speed_sum / divisor,
            avg_momentum: momentum_sum / divisor,
        }
    }
}

/// Drawable circle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSprite {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl From<&Body> for CircleSprite {
    fn from(body: &Body) -> Self {
        let pixel = to_pixel(body.position);
        Self {
            x: pixel.x,
            y: pixel.y,
            radius: body.radius.round().max(0.0) as u32,
        }
    }
}
