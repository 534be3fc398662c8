//! Simulation driver: owns the body set and runs the per-step pipeline
//!
//! One step, in order:
//! 1. advance every live body by rk4 against a frozen pre-step snapshot,
//! 2. evaluate the dart launch policy and force any resulting
//!    dart-asteroid collision in the same step,
//! 3. all-pairs collision sweep with outcome hooks (asteroids that struck
//!    Earth leave the live set),
//! 4. append a deep snapshot of the body list to the history.
//!
//! The four run counters live on the model instance so independent runs
//! (parameter sweeps) never interfere.

use serde::Serialize;

use crate::simulation::collision;
use crate::simulation::data::EARTH_LABEL;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, CollisionOutcome, Frame, NVec3, System};

/// Keeps the forced dart spawn numerically inside contact so the
/// resolution cannot round out of overlap
const DART_CONTACT_INSET: f64 = 1.0e-9;

pub struct Model {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub num_asteroids: usize,
    pub num_intercepted: usize,
    pub num_asteroids_collided: usize,
    pub num_intercepted_collided: usize,
    history: Vec<Frame>,
}

impl Model {
    /// Build a model over an initial body set. Gravity is wired from the
    /// parameters; counters start at zero and the asteroid total is fixed
    /// by the initial population.
    pub fn new(parameters: Parameters, bodies: Vec<Body>) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });
        let num_asteroids = bodies.iter().filter(|b| b.is_asteroid()).count();

        Self {
            parameters,
            system: System { bodies, t: 0.0 },
            forces,
            num_asteroids,
            num_intercepted: 0,
            num_asteroids_collided: 0,
            num_intercepted_collided: 0,
            history: Vec::new(),
        }
    }

    /// Run `ceil(duration / dt)` steps and return the recorded history
    pub fn run(&mut self) -> &[Frame] {
        let steps = (self.parameters.duration / self.parameters.dt).ceil() as usize;
        for _ in 0..steps {
            self.step();
        }
        &self.history
    }

    /// Advance the simulation by one step (see module docs for the order)
    pub fn step(&mut self) {
        self.integrate();
        self.launch_darts();
        self.collision_sweep();
        self.history.push(self.system.bodies.clone());
    }

    pub fn history(&self) -> &[Frame] {
        &self.history
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            num_asteroids: self.num_asteroids,
            num_intercepted: self.num_intercepted,
            num_asteroids_collided: self.num_asteroids_collided,
            num_intercepted_collided: self.num_intercepted_collided,
        }
    }

    /// rk4 for every body against the same pre-step snapshot, committed
    /// together so no body sees another's updated state mid-step
    fn integrate(&mut self) {
        let dt = self.parameters.dt;
        let frozen = self.system.clone();

        let updates: Vec<(NVec3, NVec3)> = (0..frozen.bodies.len())
            .map(|i| rk4_step(&frozen, &self.forces, i, dt))
            .collect();

        for (body, (x, v)) in self.system.bodies.iter_mut().zip(updates) {
            body.x = x;
            body.v = v;
        }
        self.system.t += dt;
    }

    /// Launch policy: every live asteroid marked for interception, not yet
    /// intercepted, and within `dart_distance` of Earth gets a dart this
    /// step. Without an Earth in the body set no launches happen.
    fn launch_darts(&mut self) {
        let Some(earth_idx) = self.system.index_of(EARTH_LABEL) else {
            return;
        };
        let earth = self.system.bodies[earth_idx].clone();
        let range = self.parameters.dart_distance;

        let targets: Vec<usize> = self
            .system
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                matches!(
                    b.kind,
                    BodyKind::Asteroid {
                        intercepted: false,
                        will_be_intercepted: true,
                    }
                ) && b.distance_to(&earth) < range
            })
            .map(|(i, _)| i)
            .collect();

        for target in targets {
            self.launch_dart(target, &earth);
        }
    }

    /// Spawn a dart at the contact point on the Earth-facing side of the
    /// asteroid, flying outward from Earth at `dart_speed`, and force the
    /// collision immediately. The dart is a local value and never enters
    /// the live body set, so no frame can contain one.
    fn launch_dart(&mut self, target: usize, earth: &Body) {
        let p = &self.parameters;
        let asteroid = &self.system.bodies[target];

        let separation = asteroid.distance_to(earth);
        if separation == 0.0 {
            return; // degenerate geometry, skip the launch
        }
        let dir = (asteroid.x - earth.x) / separation;

        let offset = (asteroid.radius + p.dart_radius) * (1.0 - DART_CONTACT_INSET);
        let mut dart = Body {
            label: "dart".to_string(),
            x: asteroid.x - dir * offset,
            v: dir * p.dart_speed,
            m: p.dart_mass,
            radius: p.dart_radius,
            kind: BodyKind::Dart,
        };

        let elasticity = p.collision_elasticity;
        let asteroid = &mut self.system.bodies[target];
        if !collision::apply_impulse(asteroid, &mut dart, elasticity) {
            return; // target already outrunning the dart along the normal
        }
        // Hook order matches the sweep: struck body first, then partner.
        // The asteroid marks itself intercepted; the dart reports the hit.
        let _ = asteroid.update_collision_data(&dart);
        let outcome = dart.update_collision_data(asteroid);
        if outcome == CollisionOutcome::DartHit {
            self.num_intercepted += 1;
        }
    }

    /// All-pairs sweep over the live set on post-integration positions.
    /// Outcome hooks run for both partners of every resolved contact;
    /// asteroids that struck Earth are pruned afterwards.
    fn collision_sweep(&mut self) {
        let elasticity = self.parameters.collision_elasticity;
        let n = self.system.bodies.len();
        let mut removed = vec![false; n];

        for i in 0..n {
            if removed[i] {
                continue;
            }
            for j in (i + 1)..n {
                if removed[i] {
                    break;
                }
                if removed[j] {
                    continue;
                }

                let (left, right) = self.system.bodies.split_at_mut(j);
                let (a, b) = (&mut left[i], &mut right[0]);
                if !a.is_collided(b) || !collision::apply_impulse(a, b, elasticity) {
                    continue;
                }
                let outcome_a = a.update_collision_data(b);
                let outcome_b = b.update_collision_data(a);

                self.apply_outcome(outcome_a, i, &mut removed);
                self.apply_outcome(outcome_b, j, &mut removed);
            }
        }

        if removed.iter().any(|&r| r) {
            let mut keep = removed.iter().map(|&r| !r);
            self.system.bodies.retain(|_| keep.next().unwrap());
        }
    }

    fn apply_outcome(&mut self, outcome: CollisionOutcome, index: usize, removed: &mut [bool]) {
        match outcome {
            CollisionOutcome::Nothing => {}
            CollisionOutcome::DartHit => self.num_intercepted += 1,
            CollisionOutcome::EarthStrike { was_intercepted } => {
                removed[index] = true;
                self.num_asteroids_collided += 1;
                if was_intercepted {
                    self.num_intercepted_collided += 1;
                }
            }
        }
    }
}

/// The four run counters, plus the rate calculations downstream analysis
/// derives from them. All rates are percentages; an empty population
/// yields 0 everywhere.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub num_asteroids: usize,
    pub num_intercepted: usize,
    pub num_asteroids_collided: usize,
    pub num_intercepted_collided: usize,
}

impl RunSummary {
    /// Fraction of asteroids hit by a dart
    pub fn interception_rate(&self) -> f64 {
        self.rate(self.num_intercepted)
    }

    /// Fraction of asteroids that were intercepted yet still struck Earth
    pub fn failed_interception_rate(&self) -> f64 {
        self.rate(self.num_intercepted_collided)
    }

    /// Fraction of asteroids that never struck Earth
    pub fn protection_rate(&self) -> f64 {
        self.rate(self.num_asteroids.saturating_sub(self.num_asteroids_collided))
    }

    fn rate(&self, count: usize) -> f64 {
        if self.num_asteroids == 0 {
            return 0.0;
        }
        count as f64 / self.num_asteroids as f64 * 100.0
    }
}
