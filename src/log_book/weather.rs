use serde::{Deserialize, Serialize};

use crate::errors::RocketryError;

/// Launch-site conditions attached to a flight record. The HTTP lookup
/// lives outside the core; this type only decodes the payload the weather
/// service returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub description: String,
    pub wind_speed: f64,
    pub visibility: f64,
}

#[derive(Deserialize)]
struct ApiPayload {
    main: ApiMain,
    weather: Vec<ApiCondition>,
    wind: ApiWind,
    visibility: f64,
}

#[derive(Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Deserialize)]
struct ApiWind {
    speed: f64,
}

impl WeatherReport {
    /// Decodes the JSON body of a weather-service response.
    pub fn from_api_json(body: &str) -> Result<Self, RocketryError> {
        let payload: ApiPayload = serde_json::from_str(body)
            .map_err(|err| RocketryError::MalformedWeather(err.to_string()))?;
        let condition = payload.weather.into_iter().next().ok_or_else(|| {
            RocketryError::MalformedWeather("empty `weather` array".to_string())
        })?;

        Ok(WeatherReport {
            temperature: payload.main.temp,
            feels_like: payload.main.feels_like,
            humidity: payload.main.humidity,
            description: condition.description,
            wind_speed: payload.wind.speed,
            visibility: payload.visibility,
        })
    }
}
