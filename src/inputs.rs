//! Shot inputs and the parameter resolution step.
//!
//! Inputs are expressed in the caller's units (grams, millimeters, degrees,
//! Celsius). [`ResolvedParameters::resolve`] merges overrides over the
//! weapon/context fields once and converts everything to SI units and
//! radians, so the integration loop never looks up a default.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BALLISTIC_COEFFICIENT, DEFAULT_DRAG_COEFFICIENT, DEFAULT_HUMIDITY_PERCENT,
    DEFAULT_LAUNCH_ANGLE_DEG, DEFAULT_TEMPERATURE_C, GRAMS_TO_KG, MM_TO_M,
};

/// Firearm and ammunition description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponProfile {
    pub initial_speed: f64,         // m/s
    pub drag_coefficient: f64,      // dimensionless
    #[serde(alias = "bullet_weight")]
    pub bullet_weight_g: f64,       // grams
    #[serde(alias = "bullet_diameter")]
    pub bullet_diameter_mm: f64,    // millimeters
    pub ballistic_coefficient: f64, // accepted, not used by the model
    pub altitude: f64,              // meters
    pub default_angle: f64,         // degrees
}

impl Default for WeaponProfile {
    fn default() -> Self {
        Self {
            initial_speed: 0.0,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            bullet_weight_g: 0.0,
            bullet_diameter_mm: 0.0,
            ballistic_coefficient: DEFAULT_BALLISTIC_COEFFICIENT,
            altitude: 0.0,
            default_angle: DEFAULT_LAUNCH_ANGLE_DEG,
        }
    }
}

/// Situational inputs for one shot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotContext {
    pub wind_speed: f64, // m/s
    pub wind_angle: f64, // degrees
}

/// Named overrides; every `Some` replaces the same-named weapon/context value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideOptions {
    pub altitude: Option<f64>,        // meters
    pub temperature: Option<f64>,     // Celsius
    pub humidity: Option<f64>,        // percent (0-100)
    pub wind_speed: Option<f64>,      // m/s
    pub wind_angle: Option<f64>,      // degrees
    pub angle: Option<f64>,           // degrees
    pub spin_drift: Option<bool>,
    pub coriolis_effect: Option<bool>,
    pub latitude: Option<f64>,        // degrees
}

impl OverrideOptions {
    pub fn altitude(mut self, meters: f64) -> Self {
        self.altitude = Some(meters);
        self
    }

    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    pub fn humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    pub fn wind(mut self, speed_mps: f64, angle_deg: f64) -> Self {
        self.wind_speed = Some(speed_mps);
        self.wind_angle = Some(angle_deg);
        self
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = Some(degrees);
        self
    }

    pub fn spin_drift(mut self, enabled: bool) -> Self {
        self.spin_drift = Some(enabled);
        self
    }

    pub fn coriolis_effect(mut self, enabled: bool) -> Self {
        self.coriolis_effect = Some(enabled);
        self
    }

    pub fn latitude(mut self, degrees: f64) -> Self {
        self.latitude = Some(degrees);
        self
    }
}

/// Effective parameters of one shot, in SI units and radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub initial_speed: f64,         // m/s
    pub drag_coefficient: f64,
    pub bullet_mass_kg: f64,
    pub bullet_diameter_m: f64,
    pub ballistic_coefficient: f64,
    pub altitude: f64,              // meters
    pub temperature: f64,           // Celsius
    pub humidity: f64,              // percent
    pub wind_speed: f64,            // m/s
    pub wind_angle_rad: f64,
    pub launch_angle_rad: f64,
    pub latitude_rad: f64,
    pub spin_drift: bool,
    pub coriolis_effect: bool,
}

impl ResolvedParameters {
    /// Override, else weapon/context field, else documented default.
    ///
    /// Nothing is validated: zero or negative masses and diameters pass
    /// straight through to the arithmetic.
    pub fn resolve(
        weapon: &WeaponProfile,
        context: &ShotContext,
        overrides: &OverrideOptions,
    ) -> Self {
        let wind_angle_deg = overrides.wind_angle.unwrap_or(context.wind_angle);
        let launch_angle_deg = overrides.angle.unwrap_or(weapon.default_angle);
        let latitude_deg = overrides.latitude.unwrap_or(0.0);

        Self {
            initial_speed: weapon.initial_speed,
            drag_coefficient: weapon.drag_coefficient,
            bullet_mass_kg: weapon.bullet_weight_g * GRAMS_TO_KG,
            bullet_diameter_m: weapon.bullet_diameter_mm * MM_TO_M,
            ballistic_coefficient: weapon.ballistic_coefficient,
            altitude: overrides.altitude.unwrap_or(weapon.altitude),
            temperature: overrides.temperature.unwrap_or(DEFAULT_TEMPERATURE_C),
            humidity: overrides.humidity.unwrap_or(DEFAULT_HUMIDITY_PERCENT),
            wind_speed: overrides.wind_speed.unwrap_or(context.wind_speed),
            wind_angle_rad: wind_angle_deg.to_radians(),
            launch_angle_rad: launch_angle_deg.to_radians(),
            latitude_rad: latitude_deg.to_radians(),
            spin_drift: overrides.spin_drift.unwrap_or(true),
            coriolis_effect: overrides.coriolis_effect.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_defaults_without_overrides() {
        let params = ResolvedParameters::resolve(
            &WeaponProfile::default(),
            &ShotContext::default(),
            &OverrideOptions::default(),
        );

        assert_eq!(params.drag_coefficient, 0.47);
        assert_eq!(params.ballistic_coefficient, 1.0);
        assert_eq!(params.temperature, 15.0);
        assert_eq!(params.humidity, 50.0);
        assert_eq!(params.altitude, 0.0);
        assert_eq!(params.latitude_rad, 0.0);
        assert!((params.launch_angle_rad - FRAC_PI_4).abs() < 1e-12);
        assert!(params.spin_drift);
        assert!(params.coriolis_effect);
    }

    #[test]
    fn test_unit_conversions() {
        let weapon = WeaponProfile {
            bullet_weight_g: 10.0,
            bullet_diameter_mm: 7.62,
            ..Default::default()
        };
        let params = ResolvedParameters::resolve(
            &weapon,
            &ShotContext::default(),
            &OverrideOptions::default(),
        );

        assert!((params.bullet_mass_kg - 0.01).abs() < 1e-12);
        assert!((params.bullet_diameter_m - 0.00762).abs() < 1e-12);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let weapon = WeaponProfile {
            altitude: 500.0,
            default_angle: 30.0,
            ..Default::default()
        };
        let context = ShotContext {
            wind_speed: 3.0,
            wind_angle: 90.0,
        };
        let overrides = OverrideOptions::default()
            .altitude(1500.0)
            .wind(8.0, 180.0)
            .angle(10.0)
            .spin_drift(false)
            .latitude(45.0);

        let params = ResolvedParameters::resolve(&weapon, &context, &overrides);

        assert_eq!(params.altitude, 1500.0);
        assert_eq!(params.wind_speed, 8.0);
        assert!((params.wind_angle_rad - std::f64::consts::PI).abs() < 1e-12);
        assert!((params.launch_angle_rad - 10.0_f64.to_radians()).abs() < 1e-12);
        assert!((params.latitude_rad - FRAC_PI_4).abs() < 1e-12);
        assert!(!params.spin_drift);
        assert!(params.coriolis_effect);
    }

    #[test]
    fn test_weapon_and_context_fallbacks() {
        let weapon = WeaponProfile {
            altitude: 500.0,
            default_angle: 30.0,
            ..Default::default()
        };
        let context = ShotContext {
            wind_speed: 3.0,
            wind_angle: 90.0,
        };

        let params = ResolvedParameters::resolve(&weapon, &context, &OverrideOptions::default());

        assert_eq!(params.altitude, 500.0);
        assert_eq!(params.wind_speed, 3.0);
        assert!((params.wind_angle_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((params.launch_angle_rad - 30.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_uses_defaults_and_ignores_unknown_keys() {
        let weapon: WeaponProfile = serde_json::from_str(
            r#"{"initial_speed": 800.0, "bullet_weight_g": 10.0, "muzzle_brake": true}"#,
        )
        .unwrap();
        assert_eq!(weapon.initial_speed, 800.0);
        assert_eq!(weapon.drag_coefficient, 0.47);
        assert_eq!(weapon.default_angle, 45.0);

        let overrides: OverrideOptions =
            serde_json::from_str(r#"{"latitude": 52.0, "color": "red"}"#).unwrap();
        assert_eq!(overrides.latitude, Some(52.0));
        assert_eq!(overrides.temperature, None);
    }

    #[test]
    fn test_weapon_json_accepts_unsuffixed_bullet_keys() {
        let weapon: WeaponProfile = serde_json::from_str(
            r#"{"initial_speed": 800, "drag_coefficient": 0.3, "bullet_weight": 10, "bullet_diameter": 7.62}"#,
        )
        .unwrap();
        assert_eq!(weapon.bullet_weight_g, 10.0);
        assert_eq!(weapon.bullet_diameter_mm, 7.62);

        let params = ResolvedParameters::resolve(
            &weapon,
            &ShotContext::default(),
            &OverrideOptions::default(),
        );
        assert!((params.bullet_mass_kg - 0.01).abs() < 1e-12);
        assert!((params.bullet_diameter_m - 0.00762).abs() < 1e-12);

        // Serialization keeps the unit-suffixed names
        let json = serde_json::to_value(&weapon).unwrap();
        assert_eq!(json["bullet_weight_g"], 10.0);
        assert!(json.get("bullet_weight").is_none());
    }
}
