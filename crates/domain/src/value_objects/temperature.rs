//! Temperature value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A temperature reading in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a temperature from a Celsius reading
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw Celsius value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Reading rounded to the nearest whole degree, as shown on the card
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(self) -> i32 {
        self.0.round() as i32
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
