use thiserror::Error;

#[derive(Debug, Error)]
pub enum RocketryError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid motor: {0}")]
    InvalidMotor(String),

    #[error("Malformed telemetry: {0}")]
    MalformedTelemetry(String),

    #[error("Malformed weather payload: {0}")]
    MalformedWeather(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
