//! Wind speed value object

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wind speed in metres per second, non-negative and finite
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Default)]
pub struct WindSpeed(f64);

impl WindSpeed {
    /// Create a validated wind speed
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidWindSpeed`] for negative or non-finite
    /// values.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidWindSpeed(value));
        }
        Ok(Self(value))
    }

    /// Create a wind speed, clamping negative or non-finite readings to zero
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self(0.0)
        }
    }

    /// Get the speed in metres per second
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m/s", self.0)
    }
}

/// Custom deserialization that applies the same validation as `new`
impl<'de> Deserialize<'de> for WindSpeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
