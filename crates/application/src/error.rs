//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider does not know the requested city
    #[error("city not found: {0}")]
    CityNotFound(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::ExternalService("timeout".into()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!ApplicationError::CityNotFound("Atlantis".into()).is_retryable());
        assert!(!ApplicationError::Configuration("missing api key".into()).is_retryable());
        assert!(!ApplicationError::Domain(DomainError::EmptyCityName).is_retryable());
    }

    #[test]
    fn city_not_found_message() {
        let err = ApplicationError::CityNotFound("Atlantis".into());
        assert_eq!(err.to_string(), "city not found: Atlantis");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::EmptyCityName.into();
        assert_eq!(err.to_string(), "city name must not be empty");
    }
}
