//! Collision detection and response: exact circle overlap tests and the all-pairs substep pass.

pub mod contact;
pub mod narrowphase;

pub use contact::ContactResponse;
pub use narrowphase::{CircleContact, NarrowPhase};

use crate::core::body::{pair_mut, Body};

/// Detects and resolves every overlapping pair for one substep.
///
/// Pairs are visited in ascending `(i, j)` order and resolved immediately, so a
/// body hit by several partners sees the result of earlier resolutions within
/// the same pass. Cost is O(n^2).
#[derive(Debug, Clone, Copy)]
pub struct CollisionPass {
    response: ContactResponse,
}

impl CollisionPass {
    pub fn new(dt: f32) -> Self {
        Self {
            response: ContactResponse::new(dt),
        }
    }

    /// Runs the pass and returns the number of resolved contacts.
    pub fn run(&self, bodies: &mut [Body]) -> usize {
        let mut resolved = 0;
        let count = bodies.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let contact = match NarrowPhase::circle_circle(&bodies[i], &bodies[j]) {
                    Some(contact) => contact,
                    None => continue,
                };
                if let Some((a, b)) = pair_mut(bodies, i, j) {
                    self.response.resolve(a, b, &contact);
                    resolved += 1;
                }
            }
        }

        resolved
    }
}
