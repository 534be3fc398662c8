//! Force / acceleration contributors for the gravity model
//!
//! Defines the acceleration trait and the direct-sum Newtonian gravity
//! term. Terms answer point queries (field at an arbitrary position for a
//! given body) because the rk4 stages evaluate the field at perturbed
//! positions, not just at the body's committed state.

use crate::simulation::states::{NVec3, System};

/// Collection of acceleration terms (gravity today, extensible to drag etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per query
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration felt by `sys.bodies[body]` if it sat at `pos`,
    /// summed over all registered terms
    pub fn accel_at(&self, sys: &System, body: usize, pos: &NVec3) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| {
                acc + term.acceleration_at(sys, body, pos)
            })
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations return the field at `pos` for the body at `body`,
/// excluding that body's own contribution
pub trait Acceleration {
    fn acceleration_at(&self, sys: &System, body: usize, pos: &NVec3) -> NVec3;
}

/// Newtonian gravity by direct pairwise summation, O(n) per query and
/// O(n^2) per full step across n bodies.
///
/// A source at zero separation from the query point contributes nothing:
/// that is the engine's divide-by-zero policy for coincident bodies, not a
/// detected error.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration_at(&self, sys: &System, body: usize, pos: &NVec3) -> NVec3 {
        let mut acc = NVec3::zeros();

        for (j, other) in sys.bodies.iter().enumerate() {
            if j == body {
                continue;
            }

            // r points from the query position toward the source
            let r = other.x - pos;
            let dist = r.norm();
            if dist == 0.0 {
                continue;
            }

            // a += G m_j r_hat / |r|^2  ==  G m_j r / |r|^3
            acc += self.G * other.m * r / (dist * dist * dist);
        }

        acc
    }
}
