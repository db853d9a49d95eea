use crate::constants::{ACCEL_COUNTS_PER_G, PASCALS_PER_HPA, PRESSURE_COUNTS_PER_PA};
use crate::errors::RocketryError;

/// One row of flight-computer output: raw integer sensor counts.
///
/// Wire format is comma-separated with six fields,
/// `time_ms,pressure,(unused),accel_x,accel_y,accel_z`; the third field
/// is a channel this firmware does not populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTelemetrySample {
    pub time_ms: i64,
    pub pressure_raw: i64,
    pub accel_x_raw: i64,
    pub accel_y_raw: i64,
    pub accel_z_raw: i64,
}

impl FlightTelemetrySample {
    /// Decodes one CSV data row. `line_number` is 1-based over the pasted
    /// text and only used for error messages.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Self, RocketryError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 6 {
            return Err(RocketryError::MalformedTelemetry(format!(
                "line {}: expected 6 fields, found {}",
                line_number,
                fields.len()
            )));
        }

        let parse = |index: usize| -> Result<i64, RocketryError> {
            fields[index].trim().parse::<i64>().map_err(|_| {
                RocketryError::MalformedTelemetry(format!(
                    "line {}: field {} is not an integer: `{}`",
                    line_number,
                    index + 1,
                    fields[index].trim()
                ))
            })
        };

        Ok(FlightTelemetrySample {
            time_ms: parse(0)?,
            pressure_raw: parse(1)?,
            accel_x_raw: parse(3)?,
            accel_y_raw: parse(4)?,
            accel_z_raw: parse(5)?,
        })
    }

    pub fn time_s(&self) -> f64 {
        self.time_ms as f64 / 1000.0
    }

    pub fn pressure_hpa(&self) -> f64 {
        self.pressure_raw as f64 / PRESSURE_COUNTS_PER_PA / PASCALS_PER_HPA
    }

    pub fn accel_x_g(&self) -> f64 {
        self.accel_x_raw as f64 / ACCEL_COUNTS_PER_G
    }

    pub fn accel_y_g(&self) -> f64 {
        self.accel_y_raw as f64 / ACCEL_COUNTS_PER_G
    }

    /// Vertical (boost) axis.
    pub fn accel_z_g(&self) -> f64 {
        self.accel_z_raw as f64 / ACCEL_COUNTS_PER_G
    }
}
