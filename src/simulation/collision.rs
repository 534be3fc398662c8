//! Pairwise collision resolution along the contact normal
//!
//! Impulse-based elastic/inelastic response with positional correction.
//! The resolver only touches velocities and positions; variant-specific
//! effects (interception counters, Earth strikes) happen in each body's
//! `update_collision_data` hook, invoked by the model after the impulse.
//!
//! Both partners must carry positive mass; scenario validation enforces
//! that before any body can collide.

use crate::simulation::states::Body;

/// Resolve one contact between `a` and `b`. Returns true iff an impulse
/// was applied (callers only run the outcome hooks in that case).
///
/// No-ops, in order:
/// - zero separation or separation beyond the radius sum (degenerate
///   geometry, absorbed silently),
/// - relative velocity along the normal >= 0 (already separating; stops
///   the same pair re-colliding every step while they overlap).
pub fn apply_impulse(a: &mut Body, b: &mut Body, elasticity: f64) -> bool {
    let dist = a.distance_to(b);
    let radius_sum = a.radius + b.radius;
    if dist == 0.0 || dist > radius_sum {
        return false;
    }

    // Unit normal pointing from a to b
    let contact_normal = (b.x - a.x) / dist;

    // Relative velocity along the normal; >= 0 means separating
    let v_rel = (b.v - a.v).dot(&contact_normal);
    if v_rel >= 0.0 {
        return false;
    }

    let impulse = -(1.0 + elasticity) * v_rel / (1.0 / a.m + 1.0 / b.m) * contact_normal;
    a.v -= impulse / a.m;
    b.v += impulse / b.m;

    // Push the pair apart by half the overlap each so residual overlap does
    // not re-trigger detection on the next step
    let overlap = radius_sum - dist;
    if overlap > 0.0 {
        let correction = 0.5 * overlap * contact_normal;
        a.x -= correction;
        b.x += correction;
    }

    true
}
