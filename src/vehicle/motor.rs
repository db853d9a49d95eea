use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PEAK_THRUST_TIME;
use crate::errors::RocketryError;

/// A motor as entered by the user: decimal strings in grams, newtons and
/// seconds. Peak thrust and time-to-peak are optional on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorRecord {
    pub id: String,
    pub name: String,
    pub initial_mass_g: String,
    pub propellant_mass_g: String,
    pub avg_thrust_n: String,
    #[serde(default)]
    pub peak_thrust_n: Option<String>,
    #[serde(default)]
    pub peak_time_s: Option<String>,
    pub burn_time_s: String,
}

/// Validated motor figures in SI units, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorSpec {
    pub initial_mass: f64,
    pub propellant_mass: f64,
    pub avg_thrust: f64,
    pub peak_thrust: f64,
    pub peak_thrust_time: f64,
    pub burn_time: f64,
    pub impulse: f64,
}

fn parse_figure(field: &str, value: &str) -> Result<f64, RocketryError> {
    value.trim().parse::<f64>().map_err(|_| {
        RocketryError::InvalidMotor(format!(
            "field `{}` is not a number: `{}`",
            field,
            value.trim()
        ))
    })
}

impl MotorSpec {
    pub fn try_from_record(record: &MotorRecord) -> Result<Self, RocketryError> {
        let initial_mass = parse_figure("initial_mass_g", &record.initial_mass_g)? / 1000.0;
        let propellant_mass =
            parse_figure("propellant_mass_g", &record.propellant_mass_g)? / 1000.0;
        let avg_thrust = parse_figure("avg_thrust_n", &record.avg_thrust_n)?;
        let burn_time = parse_figure("burn_time_s", &record.burn_time_s)?;

        // Unspecified peak thrust means a flat thrust curve.
        let peak_thrust = match &record.peak_thrust_n {
            Some(value) if !value.trim().is_empty() => parse_figure("peak_thrust_n", value)?,
            _ => avg_thrust,
        };
        let peak_thrust_time = match &record.peak_time_s {
            Some(value) if !value.trim().is_empty() => parse_figure("peak_time_s", value)?,
            _ => DEFAULT_PEAK_THRUST_TIME,
        };

        Ok(MotorSpec {
            initial_mass,
            propellant_mass,
            avg_thrust,
            peak_thrust,
            peak_thrust_time,
            burn_time,
            impulse: avg_thrust * burn_time,
        })
    }
}
