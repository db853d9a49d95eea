// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const AIR_DENSITY: f64 = 1.2; // kg/m³

// Estimator Constants
pub const DRAG_COEFFICIENT: f64 = 0.75; // fixed for typical sport rockets
pub const SAFE_ROD_EXIT_VELOCITY: f64 = 10.0; // m/s
pub const DEFAULT_LAUNCH_ROD_LENGTH: f64 = 1.0; // m

// Center-of-Pressure Constants (Barrowman method)
pub const NOSE_NORMAL_FORCE_COEFFICIENT: f64 = 2.0; // same for any nose shape
pub const NOSE_PRESSURE_FACTOR_CONE: f64 = 0.666;
pub const NOSE_PRESSURE_FACTOR_OGIVE: f64 = 0.466;

// Motor Defaults
pub const DEFAULT_PEAK_THRUST_TIME: f64 = 0.1; // s

// Flight Computer Constants
pub const ACCEL_COUNTS_PER_G: f64 = 256.0; // accelerometer scale factor
pub const PRESSURE_COUNTS_PER_PA: f64 = 4.0;
pub const PASCALS_PER_HPA: f64 = 100.0;
pub const BARO_ALTITUDE_SCALE: f64 = 44330.0; // m, troposphere approximation
pub const BARO_ALTITUDE_EXPONENT: f64 = 0.1903;
pub const G_TO_MS2: f64 = 9.81; // m/s² per g, flight-computer convention
