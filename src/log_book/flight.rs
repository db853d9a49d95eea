use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::RocketryError;
use crate::estimation::performance::{estimate, Estimate};
use crate::log_book::weather::WeatherReport;
use crate::telemetry_system::reducer::{reduce, FlightActuals};
use crate::vehicle::motor::{MotorRecord, MotorSpec};
use crate::vehicle::rocket::{RocketGeometry, RocketRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    Pending,
    Success,
    Failure,
}

/// One entry in the flight log. Identity and timestamps come from the
/// caller; the core only fills in estimates and actuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub id: String,
    pub flight_date: String,
    pub rocket_id: String,
    pub motor_id: String,
    pub rocket_name: String,
    pub motor_name: String,
    pub launch_rod_length: f64,
    pub status: FlightStatus,
    pub estimates: Option<Estimate>,
    pub actuals: Option<FlightActuals>,
    pub notes: String,
    pub raw_data: String,
    pub weather: Option<WeatherReport>,
}

impl FlightRecord {
    /// Records the post-flight outcome once the flight has been flown.
    pub fn close_out(&mut self, status: FlightStatus, notes: &str) {
        self.status = status;
        self.notes = notes.to_string();
    }
}

/// Builds a pending flight record for a rocket/motor pairing, running the
/// pre-flight estimate in the process. The estimate is stored on the
/// record even when the pairing is infeasible, so the log shows why the
/// flight never left the pad.
pub fn plan_flight(
    id: &str,
    flight_date: &str,
    rocket: &RocketRecord,
    motor: &MotorRecord,
    launch_rod_length: f64,
) -> Result<FlightRecord, RocketryError> {
    let geometry = RocketGeometry::try_from_record(rocket)?;
    let motor_spec = MotorSpec::try_from_record(motor)?;
    let estimates = estimate(&geometry, &motor_spec, launch_rod_length);
    info!(
        "planned flight {} ({} / {}): {}",
        id, rocket.name, motor.name, estimates
    );

    Ok(FlightRecord {
        id: id.to_string(),
        flight_date: flight_date.to_string(),
        rocket_id: rocket.id.clone(),
        motor_id: motor.id.clone(),
        rocket_name: rocket.name.clone(),
        motor_name: motor.name.clone(),
        launch_rod_length,
        status: FlightStatus::Pending,
        estimates: Some(estimates),
        actuals: None,
        notes: String::new(),
        raw_data: String::new(),
        weather: None,
    })
}

/// Re-runs the estimate after the rocket, motor or rod length changed on
/// a still-pending flight.
pub fn update_flight_plan(
    record: &mut FlightRecord,
    rocket: &RocketRecord,
    motor: &MotorRecord,
    launch_rod_length: f64,
) -> Result<(), RocketryError> {
    let geometry = RocketGeometry::try_from_record(rocket)?;
    let motor_spec = MotorSpec::try_from_record(motor)?;

    record.rocket_id = rocket.id.clone();
    record.motor_id = motor.id.clone();
    record.rocket_name = rocket.name.clone();
    record.motor_name = motor.name.clone();
    record.launch_rod_length = launch_rod_length;
    record.estimates = Some(estimate(&geometry, &motor_spec, launch_rod_length));
    Ok(())
}

/// Reduces pasted flight-computer CSV and attaches the result (and the
/// raw text, for later chart rendering) to the record.
pub fn analyze_flight(
    record: &mut FlightRecord,
    csv_text: &str,
) -> Result<FlightActuals, RocketryError> {
    let actuals = reduce(csv_text)?;
    record.raw_data = csv_text.to_string();
    record.actuals = Some(actuals.clone());
    Ok(actuals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::rocket::NoseConeType;
    use approx::assert_relative_eq;

    fn test_rocket() -> RocketRecord {
        RocketRecord {
            id: "r1".to_string(),
            name: "Alpha III".to_string(),
            dry_mass_g: "200".to_string(),
            length_cm: "60".to_string(),
            diameter_cm: "5".to_string(),
            nose_cone_type: NoseConeType::Ogive,
            nose_cone_length_cm: "15".to_string(),
            cog_cm: "35".to_string(),
            num_fins: "3".to_string(),
            fin_root_chord_cm: "8".to_string(),
            fin_tip_chord_cm: "4".to_string(),
            fin_semi_span_cm: "6".to_string(),
            fin_sweep_dist_cm: "2".to_string(),
            nose_to_fin_dist_cm: "40".to_string(),
        }
    }

    fn test_motor() -> MotorRecord {
        MotorRecord {
            id: "m1".to_string(),
            name: "D20".to_string(),
            initial_mass_g: "60".to_string(),
            propellant_mass_g: "25".to_string(),
            avg_thrust_n: "20".to_string(),
            peak_thrust_n: Some("25".to_string()),
            peak_time_s: None,
            burn_time_s: "1.2".to_string(),
        }
    }

    #[test]
    fn test_plan_flight_attaches_estimate() {
        let record = plan_flight("f1", "2024-06-01T10:00:00Z", &test_rocket(), &test_motor(), 1.0)
            .unwrap();

        assert_eq!(record.status, FlightStatus::Pending);
        assert!(record.actuals.is_none());
        let estimates = record.estimates.as_ref().unwrap();
        assert!(estimates.is_feasible());
        assert!(estimates.as_feasible().unwrap().total_altitude > 0.0);
    }

    #[test]
    fn test_plan_flight_records_infeasible_pairing() {
        let mut weak_motor = test_motor();
        weak_motor.avg_thrust_n = "1".to_string();

        let record =
            plan_flight("f2", "2024-06-01T10:00:00Z", &test_rocket(), &weak_motor, 1.0).unwrap();

        let estimates = record.estimates.as_ref().unwrap();
        assert!(!estimates.is_feasible());
        assert_eq!(estimates.to_string(), "Thrust is less than weight.");
    }

    #[test]
    fn test_plan_flight_rejects_bad_rocket() {
        let mut rocket = test_rocket();
        rocket.dry_mass_g = "heavy".to_string();

        let err =
            plan_flight("f3", "2024-06-01T10:00:00Z", &rocket, &test_motor(), 1.0).unwrap_err();
        assert!(matches!(err, RocketryError::InvalidGeometry(_)));
    }

    #[test]
    fn test_update_flight_plan_replaces_estimate() {
        let mut record =
            plan_flight("f4", "2024-06-01T10:00:00Z", &test_rocket(), &test_motor(), 1.0).unwrap();
        let first_altitude = record
            .estimates
            .as_ref()
            .unwrap()
            .as_feasible()
            .unwrap()
            .total_altitude;

        let mut stronger = test_motor();
        stronger.avg_thrust_n = "40".to_string();
        update_flight_plan(&mut record, &test_rocket(), &stronger, 1.5).unwrap();

        assert_relative_eq!(record.launch_rod_length, 1.5, epsilon = 1e-12);
        let second_altitude = record
            .estimates
            .as_ref()
            .unwrap()
            .as_feasible()
            .unwrap()
            .total_altitude;
        assert!(second_altitude > first_altitude);
    }

    #[test]
    fn test_analyze_flight_attaches_actuals_and_raw_data() {
        let mut record =
            plan_flight("f5", "2024-06-01T10:00:00Z", &test_rocket(), &test_motor(), 1.0).unwrap();
        let csv = "time,pressure,reserved,ax,ay,az\n0,405300,0,0,0,256\n500,404000,0,0,0,512";

        let actuals = analyze_flight(&mut record, csv).unwrap();

        assert!(actuals.max_altitude > 0.0);
        assert_eq!(record.actuals.as_ref().unwrap(), &actuals);
        assert_eq!(record.raw_data, csv);
    }

    #[test]
    fn test_close_out() {
        let mut record =
            plan_flight("f6", "2024-06-01T10:00:00Z", &test_rocket(), &test_motor(), 1.0).unwrap();
        record.close_out(FlightStatus::Success, "Straight boost, soft landing.");

        assert_eq!(record.status, FlightStatus::Success);
        assert_eq!(record.notes, "Straight boost, soft landing.");
    }

    #[test]
    fn test_flight_record_round_trips_through_json() {
        let mut record =
            plan_flight("f7", "2024-06-01T10:00:00Z", &test_rocket(), &test_motor(), 1.0).unwrap();
        let csv = "time,pressure,reserved,ax,ay,az\n0,405300,0,0,0,256\n500,404000,0,0,0,512";
        analyze_flight(&mut record, csv).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let restored: FlightRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
