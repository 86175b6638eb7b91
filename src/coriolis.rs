//! Coriolis deflection from Earth's rotation.
//!
//! Each axis is driven by the other axis' raw velocity component:
//! `x += 2Ωt·vy·sin(lat)`, `y += 2Ωt·vx·sin(lat)`.

use nalgebra::Vector2;

use crate::constants::EARTH_ROTATION_RAD_S;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coriolis {
    pub enabled: bool,
    pub latitude_rad: f64,
}

impl Coriolis {
    pub fn new(enabled: bool, latitude_rad: f64) -> Self {
        Self { enabled, latitude_rad }
    }

    /// Contribution to the displacement rate at `elapsed_s` for raw velocity `velocity`.
    ///
    /// Exactly zero when disabled.
    pub fn effect(&self, velocity: &Vector2<f64>, elapsed_s: f64) -> Vector2<f64> {
        if !self.enabled {
            return Vector2::zeros();
        }

        let factor = 2.0 * EARTH_ROTATION_RAD_S * elapsed_s * self.latitude_rad.sin();
        Vector2::new(factor * velocity.y, factor * velocity.x)
    }
}
