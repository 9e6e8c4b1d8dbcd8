use crate::{
    collision::narrowphase::CircleContact,
    config::{NEAR_CONTACT_EPSILON, NEAR_CONTACT_FLOOR},
    core::body::Body,
};

/// Elastic impulse applied to one overlapping pair.
///
/// The velocity change follows the two-body elastic collision law projected on
/// the line of centers, scaled by the product of both elasticities. The pair is
/// also nudged apart by `offset * dt`, a soft de-penetration rather than an exact one.
#[derive(Debug, Clone, Copy)]
pub struct ContactResponse {
    pub dt: f32,
}

impl ContactResponse {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn resolve(&self, a: &mut Body, b: &mut Body, contact: &CircleContact) {
        let offset = contact.offset;
        // Closing speed along the line of centers; identical from either body's frame.
        let approach = (a.velocity - b.velocity).dot(offset);
        let distance_sq = if contact.distance_sq < NEAR_CONTACT_EPSILON {
            contact.distance_sq + NEAR_CONTACT_FLOOR
        } else {
            contact.distance_sq
        };

        let total_mass = a.mass + b.mass;
        let factor_a = 2.0 * b.mass / total_mass;
        let factor_b = 2.0 * a.mass / total_mass;
        let restitution = a.elasticity * b.elasticity;

        a.position += offset * self.dt;
        b.position -= offset * self.dt;

        let projection = approach / distance_sq * restitution;
        a.velocity -= offset * (factor_a * projection);
        b.velocity += offset * (factor_b * projection);
    }
}
