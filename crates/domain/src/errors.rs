//! Domain-level errors

use thiserror::Error;

/// Errors raised by domain validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// City name was empty or whitespace-only
    #[error("city name must not be empty")]
    EmptyCityName,

    /// Humidity percentage outside 0-100
    #[error("invalid humidity: {0}% is out of range (must be 0-100)")]
    InvalidHumidity(u8),

    /// Wind speed was negative or not a finite number
    #[error("invalid wind speed: {0} m/s")]
    InvalidWindSpeed(f64),

    /// Theme mode string was neither "light" nor "dark"
    #[error("invalid theme mode: {0:?} (expected \"light\" or \"dark\")")]
    InvalidThemeMode(String),
}
