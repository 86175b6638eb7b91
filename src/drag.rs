//! Static drag model.
//!
//! A single drag coefficient is used for the whole flight; the penalty is
//! evaluated from a fixed speed component rather than the running velocity.

use std::f64::consts::PI;

/// Frontal area of a round projectile (m²)
#[inline]
pub fn cross_sectional_area(diameter_m: f64) -> f64 {
    PI * (diameter_m / 2.0).powi(2)
}

/// Per-axis drag penalty subtracted from a velocity component.
///
/// `0.5 * Cd * rho * A * |v|² / m`. A zero drag force yields a zero penalty
/// regardless of mass; a non-zero force over a zero mass is left to IEEE-754
/// (±inf) and propagates into the trajectory.
pub fn drag_penalty(
    speed_component_mps: f64,
    drag_coefficient: f64,
    air_density: f64,
    area_m2: f64,
    mass_kg: f64,
) -> f64 {
    let force = 0.5 * drag_coefficient * air_density * area_m2 * speed_component_mps.abs().powi(2);
    if force == 0.0 {
        return 0.0;
    }
    force / mass_kg
}
