//! Fixed-step rk4 time integration for a single body
//!
//! Classical 4th-order Runge-Kutta on the 6-component state
//! (position, velocity) of one body. All four stages evaluate the gravity
//! field at the stage-perturbed position of that body, while every other
//! body stays frozen at its pre-step state in `sys`.
//!
//! The per-body freeze is a deliberate first-order approximation in the
//! coupling: bodies are not jointly integrated through each other's
//! stages. Callers advance each body against the same pre-step snapshot
//! and commit all results together.

use super::forces::AccelSet;
use super::states::{NState, NVec3, System};

/// Derivative of the stacked state: d(pos, vel)/dt = (vel, accel).
/// Velocity is taken directly from the input state; acceleration comes
/// from the force set at the state's position.
fn state_deriv(sys: &System, forces: &AccelSet, body: usize, state: &NState) -> NState {
    let pos = NVec3::new(state[0], state[1], state[2]);
    let acc = forces.accel_at(sys, body, &pos);
    NState::new(state[3], state[4], state[5], acc[0], acc[1], acc[2])
}

/// Advance `sys.bodies[body]` by one rk4 step of size `dt` and return its
/// next (position, velocity). `sys` is not mutated; the caller commits.
pub fn rk4_step(sys: &System, forces: &AccelSet, body: usize, dt: f64) -> (NVec3, NVec3) {
    let b = &sys.bodies[body];
    let y0 = NState::new(b.x[0], b.x[1], b.x[2], b.v[0], b.v[1], b.v[2]);

    // Four stage slopes: t, t + dt/2 via k1, t + dt/2 via k2, t + dt via k3
    let k1 = state_deriv(sys, forces, body, &y0);
    let k2 = state_deriv(sys, forces, body, &(y0 + (dt / 2.0) * k1));
    let k3 = state_deriv(sys, forces, body, &(y0 + (dt / 2.0) * k2));
    let k4 = state_deriv(sys, forces, body, &(y0 + dt * k3));

    // Weighted average (1, 2, 2, 1) / 6, scaled by dt
    let y1 = y0 + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

    (
        NVec3::new(y1[0], y1[1], y1[2]),
        NVec3::new(y1[3], y1[4], y1[5]),
    )
}
