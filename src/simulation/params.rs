//! Numerical and physical parameters for one simulation run
//!
//! `Parameters` holds runtime settings:
//! - integration step size and run duration,
//! - collision elasticity,
//! - dart launch parameters (mass, speed, radius, detection range),
//! - gravitational constant and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,                   // step size (s)
    pub duration: f64,             // total simulated time (s)
    pub collision_elasticity: f64, // [0, 1], 1.0 = perfectly elastic
    pub dart_mass: f64,            // kg
    pub dart_speed: f64,           // m/s
    pub dart_radius: f64,          // m
    pub dart_distance: f64,        // detection range from Earth triggering a launch (m)
    pub G: f64,                    // gravitational constant
    pub seed: u64,                 // 0 = unseeded, nonzero = deterministic
}
