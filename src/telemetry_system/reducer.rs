use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{BARO_ALTITUDE_EXPONENT, BARO_ALTITUDE_SCALE, G_TO_MS2};
use crate::errors::RocketryError;
use crate::telemetry_system::sample::FlightTelemetrySample;

/// Flight metrics reduced from a full flight-computer recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightActuals {
    pub max_altitude: f64,
    pub max_g_force: f64,
    pub max_velocity: f64,
    pub boost_altitude_gain: f64,
    pub coast_altitude_gain: f64,
    pub apogee_time_ms: i64,
    pub boost_time_ms: i64,
    pub coast_time_ms: i64,
}

/// One reconstructed point of the flight path, in engineering units.
/// The chart layer consumes these directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub time_ms: i64,
    pub time_s: f64,
    pub altitude_m: f64,
    pub accel_x_g: f64,
    pub accel_y_g: f64,
    pub accel_z_g: f64,
    pub velocity_ms: f64,
}

/// Reduces a raw flight-computer CSV dump to its headline metrics.
pub fn reduce(csv_text: &str) -> Result<FlightActuals, RocketryError> {
    let track = derive_track(csv_text)?;
    Ok(summarize(&track))
}

/// Reconstructs the flight path from raw CSV text.
///
/// The first line is a header and is discarded. The first data row is the
/// calibration row: the rocket is assumed at rest and vertical, so its
/// vertical-axis reading is the local gravity bias and its pressure is
/// the pad-level reference. Structurally bad rows after the calibration
/// row are skipped with a warning; a bad calibration row fails the whole
/// reduction because every later altitude and velocity depends on it.
pub fn derive_track(csv_text: &str) -> Result<Vec<TrackPoint>, RocketryError> {
    let lines: Vec<&str> = csv_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(RocketryError::MalformedTelemetry(
            "need a header line and at least one data row".to_string(),
        ));
    }

    let mut samples = Vec::with_capacity(lines.len() - 1);
    for (index, line) in lines[1..].iter().enumerate() {
        match FlightTelemetrySample::parse_line(index + 2, line) {
            Ok(sample) => samples.push(sample),
            Err(err) if index == 0 => return Err(err),
            Err(err) => warn!("skipping telemetry row: {}", err),
        }
    }

    let gravity_g = samples[0].accel_z_g();
    let base_pressure_hpa = samples[0].pressure_hpa();

    let mut track = Vec::with_capacity(samples.len());
    let mut velocity_ms = 0.0;
    let mut last_time_s = 0.0;
    for sample in &samples {
        let altitude_m = BARO_ALTITUDE_SCALE
            * (1.0 - (sample.pressure_hpa() / base_pressure_hpa).powf(BARO_ALTITUDE_EXPONENT));

        // Remove the static gravity bias, then forward-Euler integrate.
        // Duplicate or out-of-order timestamps contribute a zero step.
        let flight_accel_ms2 = (sample.accel_z_g() - gravity_g) * G_TO_MS2;
        let time_s = sample.time_s();
        if time_s > last_time_s {
            velocity_ms += flight_accel_ms2 * (time_s - last_time_s);
            last_time_s = time_s;
        }

        track.push(TrackPoint {
            time_ms: sample.time_ms,
            time_s,
            altitude_m,
            accel_x_g: sample.accel_x_g(),
            accel_y_g: sample.accel_y_g(),
            accel_z_g: sample.accel_z_g(),
            velocity_ms,
        });
    }

    Ok(track)
}

/// Splits the flight into boost and coast and pulls out the extremes.
///
/// Boost end is the global velocity argmax. Accelerometer noise can put a
/// spurious velocity peak before true burnout and this makes no attempt
/// to detect that. Likewise, if sensor noise places apogee before the
/// velocity peak, the coast figures come out negative and are reported
/// as-is.
fn summarize(track: &[TrackPoint]) -> FlightActuals {
    let mut boost_index = 0;
    let mut apogee_index = 0;
    let mut max_g_force: f64 = 0.0;
    for (index, point) in track.iter().enumerate() {
        if point.velocity_ms > track[boost_index].velocity_ms {
            boost_index = index;
        }
        if point.altitude_m > track[apogee_index].altitude_m {
            apogee_index = index;
        }
        max_g_force = max_g_force.max(point.accel_z_g.abs());
    }

    let boost_end = &track[boost_index];
    let apogee = &track[apogee_index];

    FlightActuals {
        max_altitude: apogee.altitude_m,
        max_g_force,
        max_velocity: boost_end.velocity_ms,
        boost_altitude_gain: boost_end.altitude_m,
        coast_altitude_gain: apogee.altitude_m - boost_end.altitude_m,
        apogee_time_ms: apogee.time_ms,
        boost_time_ms: boost_end.time_ms,
        coast_time_ms: apogee.time_ms - boost_end.time_ms,
    }
}
