//! Weather report entity
//!
//! A snapshot of the current conditions for a looked-up city, together with
//! the city's UTC offset that drives the local clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CityName, Humidity, Temperature, UtcOffset, WindSpeed};

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name as resolved by the provider
    city: CityName,
    /// ISO country code, when the provider reports one
    country: Option<String>,
    /// Current temperature
    temperature: Temperature,
    /// Free-text condition description from the provider (lowercase)
    condition: String,
    /// Relative humidity
    humidity: Humidity,
    /// Wind speed
    wind_speed: WindSpeed,
    /// The city's offset from UTC
    utc_offset: UtcOffset,
    /// When the provider observed these conditions
    observed_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Create a new weather report
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        city: CityName,
        country: Option<String>,
        temperature: Temperature,
        condition: String,
        humidity: Humidity,
        wind_speed: WindSpeed,
        utc_offset: UtcOffset,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            city,
            country,
            temperature,
            condition,
            humidity,
            wind_speed,
            utc_offset,
            observed_at,
        }
    }

    /// Get the city name
    #[must_use]
    pub const fn city(&self) -> &CityName {
        &self.city
    }

    /// Get the ISO country code, if known
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Get the current temperature
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Get the raw condition description
    #[must_use]
    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Condition description with the first letter capitalised, for display
    #[must_use]
    pub fn condition_display(&self) -> String {
        let mut chars = self.condition.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    }

    /// Get the relative humidity
    #[must_use]
    pub const fn humidity(&self) -> Humidity {
        self.humidity
    }

    /// Get the wind speed
    #[must_use]
    pub const fn wind_speed(&self) -> WindSpeed {
        self.wind_speed
    }

    /// Get the city's UTC offset
    #[must_use]
    pub const fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// Get the provider's observation timestamp
    #[must_use]
    pub const fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> WeatherReport {
        WeatherReport::new(
            CityName::new("London").expect("valid city"),
            Some("GB".to_string()),
            Temperature::celsius(11.6),
            "light rain".to_string(),
            Humidity::clamped(82),
            WindSpeed::clamped(4.12),
            UtcOffset::from_seconds(3600),
            Utc::now(),
        )
    }

    #[test]
    fn test_report_accessors() {
        let report = sample_report();
        assert_eq!(report.city().as_str(), "London");
        assert_eq!(report.country(), Some("GB"));
        assert_eq!(report.temperature().rounded(), 12);
        assert_eq!(report.humidity().value(), 82);
        assert_eq!(report.utc_offset().as_seconds(), 3600);
    }

    #[test]
    fn test_condition_display_is_capitalised() {
        let report = sample_report();
        assert_eq!(report.condition(), "light rain");
        assert_eq!(report.condition_display(), "Light rain");
    }

    #[test]
    fn test_condition_display_empty() {
        let report = WeatherReport::new(
            CityName::new("X").expect("valid city"),
            None,
            Temperature::default(),
            String::new(),
            Humidity::clamped(50),
            WindSpeed::default(),
            UtcOffset::UTC,
            Utc::now(),
        );
        assert_eq!(report.condition_display(), "");
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).expect("serialize");
        let back: WeatherReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.city().as_str(), "London");
        assert_eq!(back.utc_offset(), report.utc_offset());
    }
}
