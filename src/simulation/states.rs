//! Core state types for the interception simulation.
//!
//! Defines the body/system structs shared by the whole engine:
//! - `Body` with its variant tag `BodyKind` (planet, asteroid, dart)
//! - `System` holding the live body list and the current time `t`
//! - `Frame`, one deep snapshot of the body list per step
//!
//! Positions are meters, velocities m/s, masses kg. The model is planar,
//! so z is held at 0 throughout.

use nalgebra::{Vector3, Vector6};
use serde::Serialize;

pub type NVec3 = Vector3<f64>;
pub type NState = Vector6<f64>; // (position, velocity) stacked for rk4

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.674e-11;

/// Variant-specific state carried by a [`Body`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum BodyKind {
    Planet,
    Asteroid {
        intercepted: bool, // set once a dart has hit this asteroid, never cleared
        will_be_intercepted: bool, // Bernoulli draw at construction, fixed for the run
    },
    Dart,
}

/// What a body's collision hook asks the model to do after an impulse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionOutcome {
    Nothing,
    /// A dart registered a hit on its collision partner
    DartHit,
    /// An asteroid struck Earth and must leave the live set
    EarthStrike { was_intercepted: bool },
}

#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub label: String, // identifying tag ("sun", "earth", "asteroid-3", ...)
    pub x: NVec3,      // position (m)
    pub v: NVec3,      // velocity (m/s)
    pub m: f64,        // mass (kg)
    pub radius: f64,   // radius (m), collision overlap only
    pub kind: BodyKind,
}

impl Body {
    pub fn planet(label: &str, x: NVec3, v: NVec3, m: f64, radius: f64) -> Self {
        Self {
            label: label.to_string(),
            x,
            v,
            m,
            radius,
            kind: BodyKind::Planet,
        }
    }

    /// Euclidean distance between body centers
    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }

    /// Two bodies are collided iff their centers are closer than the sum of
    /// their radii (strict)
    pub fn is_collided(&self, other: &Body) -> bool {
        self.distance_to(other) < self.radius + other.radius
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self.kind, BodyKind::Asteroid { .. })
    }

    /// Variant-specific collision hook, invoked after the impulse has been
    /// applied to both partners. The default (planet) does nothing; darts
    /// report a hit; asteroids mark themselves intercepted on dart contact
    /// and report an Earth strike on Earth contact.
    pub fn update_collision_data(&mut self, other: &Body) -> CollisionOutcome {
        match &mut self.kind {
            BodyKind::Planet => CollisionOutcome::Nothing,
            BodyKind::Dart => CollisionOutcome::DartHit,
            BodyKind::Asteroid { intercepted, .. } => {
                if matches!(other.kind, BodyKind::Dart) {
                    *intercepted = true;
                    CollisionOutcome::Nothing
                } else if other.label == crate::simulation::data::EARTH_LABEL {
                    CollisionOutcome::EarthStrike {
                        was_intercepted: *intercepted,
                    }
                } else {
                    CollisionOutcome::Nothing
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct System {
    pub bodies: Vec<Body>, // live body set
    pub t: f64,            // time (s)
}

impl System {
    /// Index of the first body with the given label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.label == label)
    }

    /// Total mechanical energy: sum of kinetic terms plus the pairwise
    /// potential -G m_i m_j / r. Coincident pairs contribute no potential.
    pub fn total_energy(&self, g: f64) -> f64 {
        let mut kinetic = 0.0;
        for b in &self.bodies {
            kinetic += 0.5 * b.m * b.v.norm_squared();
        }

        let mut potential = 0.0;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let dist = self.bodies[i].distance_to(&self.bodies[j]);
                if dist == 0.0 {
                    continue;
                }
                potential -= g * self.bodies[i].m * self.bodies[j].m / dist;
            }
        }

        kinetic + potential
    }

    /// Total linear momentum of the system
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.m * b.v)
    }
}

/// One recorded snapshot of the body list after a step
pub type Frame = Vec<Body>;

/// First body in a frame whose label matches exactly (case-sensitive).
/// `None` signals "not found" to the caller; there is no fallback body.
pub fn find_by_label<'a>(bodies: &'a [Body], label: &str) -> Option<&'a Body> {
    bodies.iter().find(|b| b.label == label)
}
