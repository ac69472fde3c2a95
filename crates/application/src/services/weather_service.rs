//! Weather lookup service

use std::sync::Arc;

use domain::{entities::WeatherReport, value_objects::CityName};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Orchestrates a city weather lookup through the weather port
#[derive(Clone)]
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Look up the current weather for a raw city query
    ///
    /// The query is validated and trimmed before any request is made; an
    /// empty query never reaches the provider.
    #[instrument(skip(self))]
    pub async fn lookup(&self, raw_city: &str) -> Result<WeatherReport, ApplicationError> {
        let city = CityName::new(raw_city)?;
        let report = self.weather.report_for_city(&city).await?;

        debug!(
            city = %report.city(),
            offset = report.utc_offset().as_seconds(),
            "weather retrieved"
        );
        Ok(report)
    }

    /// Check if the weather provider is reachable
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }
}
