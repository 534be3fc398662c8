//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, duration, elasticity, seed
//! - [`DartConfig`]       – kinetic impactor parameters
//! - [`PopulationConfig`] – threat asteroid population per size class
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 60.0                  # seconds per step
//!   duration: 86400.0         # total simulated seconds
//!   collision_elasticity: 1.0 # [0, 1], 1.0 = perfectly elastic
//!   seed: 42                  # 0 = unseeded, nonzero = deterministic
//!
//! dart:
//!   mass: 610.0               # kg
//!   speed: 6000.0             # m/s
//!   radius: 1.2               # m
//!   range: 1.0e9              # launch when an eligible asteroid is this close to Earth (m)
//!
//! population:
//!   distance_mean: 5.0e8      # radial distance from Earth (m)
//!   distance_sd: 1.0e8
//!   speed_mean: 2000.0        # approach speed toward Earth (m/s)
//!   speed_sd: 500.0
//!   small:  { count: 4, radius: 5.0e4,  mass: 1.0e10, detect_probability: 0.55 }
//!   medium: { count: 3, radius: 1.5e5,  mass: 5.0e11, detect_probability: 0.8 }
//!   large:  { count: 2, radius: 5.0e5,  mass: 1.0e13, detect_probability: 0.95 }
//! ```
//!
//! The engine maps this configuration into its internal runtime types
//! (`Parameters`, `Body`, `Model`) when building the scenario.

use serde::Deserialize;

use crate::simulation::states;

/// Numerical parameters and physical constants for a run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,                   // step size (s)
    pub duration: f64,             // total simulated time (s)
    pub collision_elasticity: f64, // [0, 1] range
    #[serde(default)]
    pub seed: u64, // 0 = unseeded
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant, defaults to 6.674e-11
}

fn default_g() -> f64 {
    states::G
}

/// Kinetic impactor parameters
#[derive(Deserialize, Debug, Clone)]
pub struct DartConfig {
    pub mass: f64,   // kg
    pub speed: f64,  // m/s
    pub radius: f64, // m
    pub range: f64,  // detection range from Earth that triggers a launch (m)
}

/// One asteroid size class: fixed radius/mass and the probability that an
/// asteroid of this class is detected (marked for interception) at creation
#[derive(Deserialize, Debug, Clone)]
pub struct AsteroidClassConfig {
    pub count: usize,
    pub radius: f64, // m
    pub mass: f64,   // kg
    pub detect_probability: f64, // [0, 1]
}

/// Threat population: shared distance/speed distributions plus the three
/// size classes
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub distance_mean: f64, // radial distance from Earth (m)
    pub distance_sd: f64,
    pub speed_mean: f64, // approach speed toward Earth (m/s)
    pub speed_sd: f64,
    pub small: AsteroidClassConfig,
    pub medium: AsteroidClassConfig,
    pub large: AsteroidClassConfig,
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub dart: DartConfig,
    pub population: PopulationConfig,
}
