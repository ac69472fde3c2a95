//! City name value object

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty, trimmed city query string
///
/// Leading and trailing whitespace is stripped on construction; a value that
/// is empty after trimming is rejected before any lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityName(String);

impl CityName {
    /// Create a validated city name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCityName`] if the input is empty or
    /// whitespace-only.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CityName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::str::FromStr for CityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Custom deserialization that applies the same validation as `new`
impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
