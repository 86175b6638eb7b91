use nalgebra::Vector2;

/// Constant wind in the firing plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed_mps: f64,
    /// Radians; 0 blows along +x (downrange), PI/2 along +y (up)
    pub angle_rad: f64,
}

impl Wind {
    pub fn new(speed_mps: f64, angle_rad: f64) -> Self {
        Wind { speed_mps, angle_rad }
    }

    /// Unit-time wind vector `(speed * cos, speed * sin)`
    pub fn vector(&self) -> Vector2<f64> {
        Vector2::new(
            self.speed_mps * self.angle_rad.cos(),
            self.speed_mps * self.angle_rad.sin(),
        )
    }

    /// Wind contribution to the displacement rate after `elapsed_s` of flight.
    ///
    /// Grows linearly with time; the caller multiplies by time again when
    /// forming the position.
    pub fn effect_at(&self, elapsed_s: f64) -> Vector2<f64> {
        self.vector() * elapsed_s
    }
}
