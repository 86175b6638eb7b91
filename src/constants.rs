//! Physical constants and fixed numerics used by the trajectory integrator

/// Gravitational acceleration in m/s²
pub const GRAVITY_MPS2: f64 = 9.81;

/// Standard air density at sea level (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Earth's sidereal rotation rate (rad/s)
pub const EARTH_ROTATION_RAD_S: f64 = 7.2921e-5;

/// Fixed integration time step (seconds)
pub const TIME_STEP_S: f64 = 0.01;

// Barometric formula (troposphere)

/// Sea-level standard temperature in Kelvin (15°C)
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

/// Tropospheric temperature lapse rate (K/m)
pub const LAPSE_RATE_K_PER_M: f64 = 0.0065;

/// Exponent of the barometric density ratio
pub const BAROMETRIC_EXPONENT: f64 = 5.2561;

/// Fractional density reduction per unit of relative humidity (0..1)
pub const HUMIDITY_DENSITY_FACTOR: f64 = 0.00367;

// Muzzle-speed temperature correction

/// Celsius to Kelvin offset
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Reference temperature of the muzzle-speed correction in Kelvin (20°C)
///
/// Note: the density reference is 15°C while this one is 20°C, so at 15°C
/// the correction factor is sqrt(288.15 / 293.15) ≈ 0.9914, not 1.
pub const MUZZLE_REFERENCE_TEMPERATURE_K: f64 = 293.15;

/// Spin-drift rate applied along x (m/s per second of flight)
pub const SPIN_DRIFT_RATE: f64 = 0.0001;

// Unit conversions

/// Conversion factor: grams to kilograms
pub const GRAMS_TO_KG: f64 = 0.001;

/// Conversion factor: millimeters to meters
pub const MM_TO_M: f64 = 0.001;

// Input defaults

/// Drag coefficient of a sphere, used when a profile gives none
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.47;

/// Default ballistic coefficient (accepted, not used by the model)
pub const DEFAULT_BALLISTIC_COEFFICIENT: f64 = 1.0;

/// Default launch angle (degrees)
pub const DEFAULT_LAUNCH_ANGLE_DEG: f64 = 45.0;

/// Default air temperature (°C)
pub const DEFAULT_TEMPERATURE_C: f64 = 15.0;

/// Default relative humidity (%)
pub const DEFAULT_HUMIDITY_PERCENT: f64 = 50.0;
