use glam::Vec2;

use crate::core::body::Body;

/// Geometry of an overlapping circle pair, measured from `b` towards `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleContact {
    /// `a.position - b.position`.
    pub offset: Vec2,
    /// `|offset|^2`, before any near-contact floor is applied.
    pub distance_sq: f32,
}

/// Exact circle/circle overlap test.
pub struct NarrowPhase;

impl NarrowPhase {
    /// Strict overlap: touching circles do not collide.
    pub fn circle_circle(a: &Body, b: &Body) -> Option<CircleContact> {
        let offset = a.position - b.position;
        let distance_sq = offset.length_squared();
        let reach = a.radius + b.radius;

        if distance_sq < reach * reach {
            Some(CircleContact {
                offset,
                distance_sq,
            })
        } else {
            None
        }
    }
}
