//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current-weather API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiErrorBody, CurrentWeatherResponse, Observation};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API key was rejected by the provider
    #[error("Invalid API key")]
    InvalidApiKey,

    /// No API key was configured
    #[error("No API key configured")]
    MissingApiKey,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// OpenWeatherMap API base URL
    /// (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (`appid` query parameter)
    #[serde(default)]
    pub api_key: String,

    /// Unit system for temperature and wind speed (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Connection timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get the current weather for a city query
    async fn current_by_city(&self, city: &str) -> Result<Observation, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The `/weather` endpoint URL
    fn weather_endpoint(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a non-success status and its body to a client error
    fn error_for_status(status: StatusCode, body: &str) -> WeatherError {
        // The provider puts a short message in the error body; fall back to
        // the HTTP status when the body is not parseable.
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        if status == StatusCode::NOT_FOUND {
            return WeatherError::CityNotFound(message);
        }
        if status == StatusCode::UNAUTHORIZED {
            return WeatherError::InvalidApiKey;
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return WeatherError::RateLimitExceeded;
        }
        if status.is_server_error() {
            return WeatherError::ServiceUnavailable(message);
        }
        WeatherError::RequestFailed(message)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_by_city(&self, city: &str) -> Result<Observation, WeatherError> {
        let url = self.weather_endpoint();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body));
        }

        let payload: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(Observation::from(payload))
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight reachability probe against a city that always resolves
        self.current_by_city("London").await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> WeatherApiConfig {
        WeatherApiConfig {
            api_key: "test-key".to_string(),
            ..WeatherApiConfig::default()
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherApiConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.units, "metric");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let config: WeatherApiConfig =
            serde_json::from_str(r#"{"api_key": "abc"}"#).expect("deserialize");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.units, "metric");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = OpenWeatherClient::new(WeatherApiConfig::default());
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));

        let blank = WeatherApiConfig {
            api_key: "   ".to_string(),
            ..WeatherApiConfig::default()
        };
        assert!(matches!(
            OpenWeatherClient::new(blank),
            Err(WeatherError::MissingApiKey)
        ));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherClient::new(config_with_key()).is_ok());
    }

    #[test]
    fn test_weather_endpoint_handles_trailing_slash() {
        let mut config = config_with_key();
        config.base_url = "http://localhost:8080/".to_string();
        let client = OpenWeatherClient::new(config).expect("client creation should succeed");
        assert_eq!(client.weather_endpoint(), "http://localhost:8080/weather");
    }

    #[test]
    fn test_error_for_status_city_not_found() {
        let err = OpenWeatherClient::error_for_status(
            StatusCode::NOT_FOUND,
            r#"{"cod": "404", "message": "city not found"}"#,
        );
        match err {
            WeatherError::CityNotFound(message) => assert_eq!(message, "city not found"),
            other => panic!("expected CityNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_error_for_status_unauthorized() {
        let err = OpenWeatherClient::error_for_status(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, WeatherError::InvalidApiKey));
    }

    #[test]
    fn test_error_for_status_rate_limited() {
        let err = OpenWeatherClient::error_for_status(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(err, WeatherError::RateLimitExceeded));
    }

    #[test]
    fn test_error_for_status_server_error_without_body() {
        let err = OpenWeatherClient::error_for_status(StatusCode::BAD_GATEWAY, "not json");
        match err {
            WeatherError::ServiceUnavailable(message) => {
                assert!(message.contains("502"));
            }
            other => panic!("expected ServiceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_weather_error_display() {
        assert_eq!(
            WeatherError::CityNotFound("city not found".into()).to_string(),
            "City not found: city not found"
        );
        assert!(
            WeatherError::RateLimitExceeded
                .to_string()
                .contains("Rate limit")
        );
        assert_eq!(WeatherError::MissingApiKey.to_string(), "No API key configured");
    }
}
