use std::time::Instant;

use crate::simulation::engine::Model;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec3, System, G};

/// Deterministic body cloud for timing runs, no rand needed
fn test_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e9,
            (i_f * 0.13).cos() * 5.0e9,
            0.0,
        );

        bodies.push(Body {
            label: format!("body-{i}"),
            x,
            v: NVec3::zeros(),
            m: 1.0e20,
            radius: 1.0e4,
            kind: BodyKind::Planet,
        });
    }

    System { bodies, t: 0.0 }
}

fn bench_params() -> Parameters {
    Parameters {
        dt: 60.0,
        duration: 3600.0,
        collision_elasticity: 1.0,
        dart_mass: 600.0,
        dart_speed: 6000.0,
        dart_radius: 1.0,
        dart_distance: 0.0, // no launches during timing runs
        G,
        seed: 42,
    }
}

/// Time one full direct-sum field evaluation across population sizes
pub fn bench_gravity() {
    let ns = [10, 20, 40, 80, 160, 320];

    for n in ns {
        let sys = test_system(n);
        let forces = AccelSet::new().with(NewtonianGravity { G });

        let start = Instant::now();
        let mut acc = NVec3::zeros();
        for i in 0..n {
            acc += forces.accel_at(&sys, i, &sys.bodies[i].x);
        }
        let elapsed = start.elapsed();

        // acc printed so the summation cannot be optimized away
        println!("gravity n={n:>4}  {elapsed:?}  (checksum {:.3e})", acc.norm());
    }
}

/// Time full model steps (integrate + sweep) across population sizes
pub fn bench_step() {
    let ns = [10, 20, 40, 80];
    let steps = 100;

    for n in ns {
        let sys = test_system(n);
        let mut model = Model::new(bench_params(), sys.bodies);

        let start = Instant::now();
        for _ in 0..steps {
            model.step();
        }
        let elapsed = start.elapsed();

        println!("step n={n:>4}  {steps} steps  {elapsed:?}");
    }
}
