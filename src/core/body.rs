use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable slot of a body in the simulator. Bodies are never removed, so the index never goes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(usize);

impl BodyId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Population class a body was spawned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Scripted once-per-frame spawn.
    Ambient,
    /// Spawned on request from the shell, e.g. under the pointer.
    User,
}

/// Circular particle with its kinematic state and fixed material properties.
///
/// Screen Y grows downward while `velocity.y` is "up positive"; the integrator
/// handles the sign flip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub elasticity: f32,
    pub kind: BodyKind,
}

impl Body {
    pub fn new(
        kind: BodyKind,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        mass: f32,
        elasticity: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
            elasticity,
            kind,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Scalar momentum `|v| * m`.
    pub fn momentum(&self) -> f32 {
        self.speed() * self.mass
    }

    /// Vector momentum `v * m`.
    pub fn linear_momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

/// Splits two distinct slots out of a body slice for pairwise mutation, preserving argument order.
pub(crate) fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> Option<(&mut Body, &mut Body)> {
    if a == b || a.max(b) >= bodies.len() {
        return None;
    }

    let (first, second, flipped) = if a < b { (a, b, false) } else { (b, a, true) };
    let (left, right) = bodies.split_at_mut(second);
    let first_slot = &mut left[first];
    let second_slot = &mut right[0];

    if flipped {
        Some((second_slot, first_slot))
    } else {
        Some((first_slot, second_slot))
    }
}
