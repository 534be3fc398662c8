//! Build a fully-initialized model from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime [`Model`]:
//! - planets from the fixed ephemeris (`data::solar_system`),
//! - the threat asteroid population sampled per size class,
//! - numerical parameters and the gravity force set.
//!
//! Configuration problems are surfaced here with `anyhow` and abort only
//! this scenario build; they never take down a batch of independent runs.

use std::f64::consts::TAU;

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::configuration::config::{AsteroidClassConfig, ScenarioConfig};
use crate::simulation::data::{self, EARTH_LABEL};
use crate::simulation::engine::Model;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec3};

/// Build a runtime model from a scenario configuration
pub fn build_scenario(cfg: ScenarioConfig) -> Result<Model> {
    validate(&cfg)?;

    let p_cfg = &cfg.parameters;
    let parameters = Parameters {
        dt: p_cfg.dt,
        duration: p_cfg.duration,
        collision_elasticity: p_cfg.collision_elasticity,
        dart_mass: cfg.dart.mass,
        dart_speed: cfg.dart.speed,
        dart_radius: cfg.dart.radius,
        dart_distance: cfg.dart.range,
        G: p_cfg.G,
        seed: p_cfg.seed,
    };

    // Seed 0 = unseeded (non-reproducible); anything else replays exactly
    let mut rng = if parameters.seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(parameters.seed)
    };

    let mut bodies = data::solar_system();
    let earth = crate::simulation::states::find_by_label(&bodies, EARTH_LABEL)
        .context("ephemeris data has no earth")?
        .clone();

    let pop = &cfg.population;
    let distance = Normal::new(pop.distance_mean, pop.distance_sd)?;
    let speed = Normal::new(pop.speed_mean, pop.speed_sd)?;

    let mut next_id = 0usize;
    for class in [&pop.small, &pop.medium, &pop.large] {
        for _ in 0..class.count {
            bodies.push(sample_asteroid(
                &mut rng, &earth, class, &distance, &speed, next_id,
            ));
            next_id += 1;
        }
    }

    Ok(Model::new(parameters, bodies))
}

/// Sample one asteroid: radial distance and approach speed from the
/// configured normals, uniform in-plane bearing around Earth, velocity
/// aimed at Earth on top of Earth's own motion. The interception stamp is
/// a single Bernoulli draw at the class's detection probability and never
/// changes afterwards.
fn sample_asteroid(
    rng: &mut StdRng,
    earth: &Body,
    class: &AsteroidClassConfig,
    distance: &Normal<f64>,
    speed: &Normal<f64>,
    id: usize,
) -> Body {
    let dist = distance.sample(rng).abs();
    let bearing = rng.gen_range(0.0..TAU);
    let dir = NVec3::new(bearing.cos(), bearing.sin(), 0.0);

    Body {
        label: format!("asteroid-{id}"),
        x: earth.x + dist * dir,
        v: earth.v - speed.sample(rng) * dir,
        m: class.mass,
        radius: class.radius,
        kind: BodyKind::Asteroid {
            intercepted: false,
            will_be_intercepted: rng.gen_bool(class.detect_probability),
        },
    }
}

fn validate(cfg: &ScenarioConfig) -> Result<()> {
    let p = &cfg.parameters;
    ensure!(p.dt > 0.0, "dt must be positive, got {}", p.dt);
    ensure!(p.duration > 0.0, "duration must be positive, got {}", p.duration);
    ensure!(
        (0.0..=1.0).contains(&p.collision_elasticity),
        "collision_elasticity must be in [0, 1], got {}",
        p.collision_elasticity
    );

    ensure!(cfg.dart.mass > 0.0, "dart mass must be positive");
    ensure!(cfg.dart.radius > 0.0, "dart radius must be positive");
    ensure!(cfg.dart.speed >= 0.0, "dart speed must be nonnegative");
    ensure!(cfg.dart.range >= 0.0, "dart range must be nonnegative");

    let pop = &cfg.population;
    ensure!(pop.distance_sd >= 0.0, "distance sd must be nonnegative");
    ensure!(pop.speed_sd >= 0.0, "speed sd must be nonnegative");
    for (name, class) in [
        ("small", &pop.small),
        ("medium", &pop.medium),
        ("large", &pop.large),
    ] {
        ensure!(class.mass > 0.0, "{name} class mass must be positive");
        ensure!(class.radius > 0.0, "{name} class radius must be positive");
        ensure!(
            (0.0..=1.0).contains(&class.detect_probability),
            "{name} class detect_probability must be in [0, 1], got {}",
            class.detect_probability
        );
    }

    Ok(())
}
