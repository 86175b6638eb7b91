//! Air density and muzzle-speed adjustment for local conditions.
//!
//! Density follows the tropospheric barometric formula scaled by a linear
//! humidity term. The muzzle speed is scaled by the density ratio to sea
//! level and by the square root of the absolute temperature ratio.

use crate::constants::{
    BAROMETRIC_EXPONENT, CELSIUS_TO_KELVIN, HUMIDITY_DENSITY_FACTOR, LAPSE_RATE_K_PER_M,
    MUZZLE_REFERENCE_TEMPERATURE_K, SEA_LEVEL_TEMPERATURE_K, STANDARD_AIR_DENSITY,
};

/// Air density at altitude with a humidity correction.
///
/// # Arguments
/// * `altitude_m` - Altitude in meters
/// * `humidity_percent` - Relative humidity (0-100, not clamped)
///
/// # Returns
/// Air density in kg/m³
pub fn calculate_air_density(altitude_m: f64, humidity_percent: f64) -> f64 {
    let pressure_ratio = 1.0 - LAPSE_RATE_K_PER_M * altitude_m / SEA_LEVEL_TEMPERATURE_K;
    let humidity_ratio = 1.0 - (humidity_percent / 100.0) * HUMIDITY_DENSITY_FACTOR;

    STANDARD_AIR_DENSITY * pressure_ratio.powf(BAROMETRIC_EXPONENT) * humidity_ratio
}

/// Scale a muzzle speed for local air density and temperature.
///
/// # Arguments
/// * `initial_speed_mps` - Muzzle speed under reference conditions
/// * `air_density` - Local air density (kg/m³)
/// * `temperature_c` - Air temperature in Celsius
pub fn adjust_muzzle_speed(initial_speed_mps: f64, air_density: f64, temperature_c: f64) -> f64 {
    let density_ratio = air_density / STANDARD_AIR_DENSITY;
    let temperature_ratio = (CELSIUS_TO_KELVIN + temperature_c) / MUZZLE_REFERENCE_TEMPERATURE_K;

    initial_speed_mps * density_ratio * temperature_ratio.powf(0.5)
}
