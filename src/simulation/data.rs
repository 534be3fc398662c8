//! Fixed planetary ephemeris used to seed every scenario.
//!
//! Source: NASA JPL Solar System Dynamics physical parameters and
//! approximate heliocentric state vectors as of 2025-12-27
//! (https://ssd.jpl.nasa.gov/planets/phys_par.html).
//!
//! Positions are stored in km and scaled to meters on construction;
//! velocities likewise km/s -> m/s. The Sun is near the origin. All bodies
//! lie in the z = 0 plane.

use crate::simulation::states::{Body, NVec3};

/// Label distinguishing the protection target inside the body set
pub const EARTH_LABEL: &str = "earth";

const KM: f64 = 1.0e3;

fn planet(label: &str, x: [f64; 2], v: [f64; 2], m: f64, radius: f64) -> Body {
    Body::planet(
        label,
        NVec3::new(x[0] * KM, x[1] * KM, 0.0),
        NVec3::new(v[0] * KM, v[1] * KM, 0.0),
        m,
        radius,
    )
}

/// Sun plus the eight planets at the reference epoch
pub fn solar_system() -> Vec<Body> {
    vec![
        planet(
            "sun",
            [-4.912509968506466e5, -8.279409221788045e5],
            [1.256877255382410e-2, -1.875201878732409e-4],
            1.98841e30,
            695_700_000.0,
        ),
        planet(
            "mercury",
            [-3.127905203130432e7, 3.707015264084680e7],
            [-4.764788163702398e1, -2.879379513298748e1],
            3.302e23,
            2_439_400.0,
        ),
        planet(
            "venus",
            [-7.100525604293682e7, -8.298028263639985e7],
            [2.634000410811250e1, -2.297367049642995e1],
            4.8685e24,
            6_051_840.0,
        ),
        planet(
            EARTH_LABEL,
            [5.069379549453425e7, 1.375054744509470e8],
            [-2.840196971889024e1, 1.021414113586683e1],
            5.97219e24,
            6_371_010.0,
        ),
        planet(
            "mars",
            [-1.423802149405333e7, -2.192041434103926e8],
            [2.511067074504107e1, 5.611375252231812e-1],
            6.4171e23,
            3_389_920.0,
        ),
        planet(
            "jupiter",
            [-2.212310300393372e8, 7.452555485526739e8],
            [-1.268030476659128e1, -3.098540562049134e0],
            1.89819e27,
            69_911_000.0,
        ),
        planet(
            "saturn",
            [1.423645667959634e9, 1.274995759213873e7],
            [-6.194387066563424e-1, 9.637222604990116e0],
            5.6834e26,
            58_232_000.0,
        ),
        planet(
            "uranus",
            [1.492933220128212e9, 2.504247387219565e9],
            [-5.899749274100404e0, 3.169770118761888e0],
            8.6813e25,
            25_362_000.0,
        ),
        planet(
            "neptune",
            [4.468725763116714e9, 5.932802468104235e7],
            [-7.242931897850e-2, 5.448511042886e0],
            1.02409e26,
            24_622_000.0,
        ),
    ]
}
