//! UTC offset value object
//!
//! A flat offset in whole seconds between a locale's wall-clock time and
//! UTC. The offset is taken at face value from the weather provider: it is
//! never resolved against a timezone database, and it is deliberately not
//! range-checked, since the clock must cope with whatever the provider
//! reports.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed UTC offset in seconds (east of UTC is positive)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset
    pub const UTC: Self = Self(0);

    /// Create an offset from a number of seconds
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self(seconds)
    }

    /// Get the offset in seconds
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.0
    }

    /// Wall-clock time-of-day at `instant` in the locale this offset
    /// describes
    ///
    /// The result is fully determined by the pair (instant, offset):
    /// the time-of-day component of `instant + offset` seconds.
    #[must_use]
    pub fn wall_time_at(self, instant: DateTime<Utc>) -> NaiveTime {
        (instant + Duration::seconds(i64::from(self.0))).time()
    }
}

impl From<i32> for UtcOffset {
    fn from(seconds: i32) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let total = self.0.unsigned_abs();
        write!(f, "UTC{sign}{:02}:{:02}", total / 3600, (total % 3600) / 60)
    }
}
