//! Weather lookup port
//!
//! Defines the interface for retrieving current weather by city name.

use async_trait::async_trait;
use domain::{entities::WeatherReport, value_objects::CityName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookup operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current weather report for a city
    ///
    /// The report carries the city's UTC offset, which feeds the local
    /// clock.
    async fn report_for_city(&self, city: &CityName) -> Result<WeatherReport, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}
