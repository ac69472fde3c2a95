//! OpenWeatherMap wire models
//!
//! Mirrors the subset of the current-weather response the application
//! consumes, plus the provider's error body.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Successful `/weather` response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    /// City name as resolved by the provider
    pub name: String,
    /// Country and sunrise/sunset block
    #[serde(default)]
    pub sys: SysSection,
    /// Temperature and humidity block
    pub main: MainSection,
    /// Condition list; the first entry is the primary condition
    #[serde(default)]
    pub weather: Vec<ConditionSection>,
    /// Wind block
    #[serde(default)]
    pub wind: WindSection,
    /// Shift in seconds from UTC for the queried location
    pub timezone: i32,
    /// Observation time, unix seconds UTC
    pub dt: i64,
}

/// `sys` block of the response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysSection {
    /// ISO 3166 country code
    #[serde(default)]
    pub country: Option<String>,
}

/// `main` block of the response
#[derive(Debug, Clone, Deserialize)]
pub struct MainSection {
    /// Temperature in the requested units
    pub temp: f64,
    /// Relative humidity percentage
    pub humidity: u8,
}

/// One entry of the `weather` list
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSection {
    /// Group name (Rain, Snow, Clouds, ...)
    #[serde(default)]
    pub main: String,
    /// Condition text within the group, lowercase
    #[serde(default)]
    pub description: String,
}

/// `wind` block of the response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindSection {
    /// Wind speed in the requested units (m/s for metric)
    #[serde(default)]
    pub speed: f64,
}

/// Error body returned for non-2xx responses
///
/// The provider serializes `cod` inconsistently: a number on success, a
/// string on errors. Accept both.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Status code, as number or string
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
    /// Human-readable error message ("city not found", ...)
    #[serde(default)]
    pub message: Option<String>,
}

/// Flattened observation extracted from a successful response
#[derive(Debug, Clone)]
pub struct Observation {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code
    pub country: Option<String>,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Primary condition description, lowercase
    pub description: String,
    /// Relative humidity percentage (raw, may need clamping)
    pub humidity: u8,
    /// Wind speed
    pub wind_speed: f64,
    /// Offset from UTC in seconds
    pub timezone_offset_secs: i32,
    /// Observation time
    pub observed_at: DateTime<Utc>,
}

impl From<CurrentWeatherResponse> for Observation {
    fn from(response: CurrentWeatherResponse) -> Self {
        let description = response
            .weather
            .into_iter()
            .next()
            .map_or_else(String::new, |condition| {
                if condition.description.is_empty() {
                    condition.main.to_lowercase()
                } else {
                    condition.description
                }
            });

        Self {
            city: response.name,
            country: response.sys.country,
            temperature: response.main.temp,
            description,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
            timezone_offset_secs: response.timezone,
            observed_at: DateTime::from_timestamp(response.dt, 0).unwrap_or_default(),
        }
    }
}
