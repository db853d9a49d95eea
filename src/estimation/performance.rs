use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AIR_DENSITY, DEFAULT_LAUNCH_ROD_LENGTH, DRAG_COEFFICIENT, SAFE_ROD_EXIT_VELOCITY,
    STANDARD_GRAVITY,
};
use crate::vehicle::motor::MotorSpec;
use crate::vehicle::rocket::RocketGeometry;

/// Pre-flight performance figures from the 1-D point-mass model:
/// constant average thrust during the burn, quadratic drag throughout,
/// ballistic coast to apogee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub total_altitude: f64,
    pub max_velocity: f64,
    pub stability_margin_calibers: f64,
    pub launch_rod_exit_velocity: f64,
    pub min_thrust_needed: f64,
    pub thrust_to_weight_ratio: f64,
    pub loaded_mass: f64,
}

/// Outcome of a pre-flight estimate. A motor that cannot lift the rocket
/// is an engineering answer, not a failure, so it gets its own variant
/// instead of a `RocketryError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimate {
    Feasible(PerformanceEstimate),
    InfeasibleThrust { avg_thrust: f64, weight: f64 },
}

impl Estimate {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Estimate::Feasible(_))
    }

    pub fn as_feasible(&self) -> Option<&PerformanceEstimate> {
        match self {
            Estimate::Feasible(estimate) => Some(estimate),
            Estimate::InfeasibleThrust { .. } => None,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Feasible(estimate) => write!(
                f,
                "altitude {:.2} m, max velocity {:.2} m/s, stability {:.2} cal",
                estimate.total_altitude, estimate.max_velocity, estimate.stability_margin_calibers
            ),
            Estimate::InfeasibleThrust { .. } => write!(f, "Thrust is less than weight."),
        }
    }
}

/// Runs the pre-flight estimate for a rocket/motor pairing on a launch
/// rod of the given length (meters). A non-positive or non-finite rod
/// length falls back to the 1 m default, matching the pre-flight form.
pub fn estimate(geometry: &RocketGeometry, motor: &MotorSpec, launch_rod_length: f64) -> Estimate {
    let rod_length = if launch_rod_length.is_finite() && launch_rod_length > 0.0 {
        launch_rod_length
    } else {
        DEFAULT_LAUNCH_ROD_LENGTH
    };

    let loaded_mass = geometry.dry_mass + motor.initial_mass;
    let weight = loaded_mass * STANDARD_GRAVITY;
    let thrust = motor.avg_thrust;

    if thrust <= weight {
        debug!(
            "infeasible pairing: {:.2} N avg thrust against {:.2} N weight",
            thrust, weight
        );
        return Estimate::InfeasibleThrust {
            avg_thrust: thrust,
            weight,
        };
    }

    let thrust_to_weight_ratio = thrust / weight;

    // Thrust required to leave the rod at the 10 m/s safety velocity.
    let min_thrust_needed =
        loaded_mass * (SAFE_ROD_EXIT_VELOCITY.powi(2) / (2.0 * rod_length) + STANDARD_GRAVITY);

    // Early in the burn the motor is near peak thrust, so the rod-exit
    // velocity uses peak rather than average.
    let launch_rod_exit_velocity =
        (2.0 * ((motor.peak_thrust - weight) / loaded_mass) * rod_length).sqrt();

    // Closed-form 1-D burn under constant thrust and quadratic drag.
    let area = std::f64::consts::PI * geometry.radius.powi(2);
    let drag_parameter = 0.5 * AIR_DENSITY * DRAG_COEFFICIENT * area;
    let thrust_margin = thrust - weight;
    let q = (thrust_margin / drag_parameter).sqrt();
    let x = 2.0 * drag_parameter * q / loaded_mass;
    let decay = (-x * motor.burn_time).exp();
    let max_velocity = q * (1.0 - decay) / (1.0 + decay);

    // Burnout altitude; the log argument degenerates when drag eats the
    // entire thrust margin, in which case the burn gains no altitude.
    let burnout_numerator = thrust_margin - drag_parameter * max_velocity.powi(2);
    let burnout_altitude = if burnout_numerator <= 0.0 {
        0.0
    } else {
        (-loaded_mass / (2.0 * drag_parameter)) * (burnout_numerator / thrust_margin).ln()
    };

    // Ballistic coast from burnout velocity to apogee.
    let coast_altitude = (loaded_mass / (2.0 * drag_parameter))
        * ((weight + drag_parameter * max_velocity.powi(2)) / weight).ln();

    let stability_margin_calibers =
        (geometry.center_of_pressure() - geometry.center_of_gravity) / geometry.diameter;

    Estimate::Feasible(PerformanceEstimate {
        total_altitude: burnout_altitude + coast_altitude,
        max_velocity,
        stability_margin_calibers,
        launch_rod_exit_velocity,
        min_thrust_needed,
        thrust_to_weight_ratio,
        loaded_mass,
    })
}
