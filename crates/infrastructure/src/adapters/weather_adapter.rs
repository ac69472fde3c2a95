//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::WeatherReport;
use domain::value_objects::{CityName, Humidity, Temperature, UtcOffset, WindSpeed};
use integration_weather::{
    Observation, OpenWeatherClient, WeatherApiConfig, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the OpenWeatherMap API
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create an adapter with the given provider configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set, or an internal
    /// error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(|e| match e {
            WeatherError::MissingApiKey => ApplicationError::Configuration(e.to_string()),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            WeatherError::InvalidApiKey | WeatherError::MissingApiKey => {
                ApplicationError::Configuration(err.to_string())
            }
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert a wire observation into a domain weather report
    ///
    /// Out-of-range provider readings are clamped rather than rejected; the
    /// UTC offset is passed through as-is, since the clock takes it at face
    /// value.
    fn to_report(observation: Observation) -> Result<WeatherReport, ApplicationError> {
        let city = CityName::new(&observation.city)
            .map_err(|_| ApplicationError::Internal("provider returned an empty city name".into()))?;

        Ok(WeatherReport::new(
            city,
            observation.country,
            Temperature::celsius(observation.temperature),
            observation.description,
            Humidity::clamped(observation.humidity),
            WindSpeed::clamped(observation.wind_speed),
            UtcOffset::from_seconds(observation.timezone_offset_secs),
            observation.observed_at,
        ))
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn report_for_city(&self, city: &CityName) -> Result<WeatherReport, ApplicationError> {
        let result = self
            .client
            .current_by_city(city.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(observation) => {
                debug!(
                    resolved_city = %observation.city,
                    offset = observation.timezone_offset_secs,
                    "Retrieved current weather"
                );
            }
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            }
        }

        result.and_then(Self::to_report)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
