pub mod constants;
pub mod errors;
pub mod estimation;
pub mod log_book;
pub mod store;
pub mod telemetry_system;
pub mod vehicle;

pub use constants::*;
pub use errors::RocketryError;

// Re-export commonly used items from vehicle
pub use vehicle::motor::{MotorRecord, MotorSpec};
pub use vehicle::rocket::{NoseConeType, RocketGeometry, RocketRecord};

// Re-export commonly used items from estimation
pub use estimation::performance::{estimate, Estimate, PerformanceEstimate};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::reducer::{derive_track, reduce, FlightActuals, TrackPoint};
pub use telemetry_system::sample::FlightTelemetrySample;

// Re-export the flight log and storage seam
pub use log_book::flight::{
    analyze_flight, plan_flight, update_flight_plan, FlightRecord, FlightStatus,
};
pub use log_book::weather::WeatherReport;
pub use store::{
    Collection, Identified, KeyValueStore, MemoryStore, FLIGHTS_COLLECTION, MOTORS_COLLECTION,
    ROCKETS_COLLECTION,
};
