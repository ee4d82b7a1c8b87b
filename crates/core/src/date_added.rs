//! Second-precision timestamp recorded on every playlist entry
//!
//! ## Precision
//!
//! The wire format stores the time an entry was added as whole seconds since
//! the Unix epoch (1970-01-01 00:00:00 UTC) in a `u64`. No timezone is kept;
//! the value is an absolute instant.
//!
//! ## Usage
//!
//! ```
//! use blister_core::DateAdded;
//!
//! let now = DateAdded::now();
//! let fixed = DateAdded::from_secs(1_600_000_000);
//! assert!(now > fixed);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds since Unix epoch at which a beatmap was added to a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateAdded(u64);

impl DateAdded {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: DateAdded = DateAdded(0);

    /// The current wall-clock time, truncated to whole seconds
    ///
    /// Returns epoch if the system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        DateAdded(duration.as_secs())
    }

    /// Create from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        DateAdded(secs)
    }

    /// Seconds since Unix epoch
    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Convert to a UTC `DateTime`
    ///
    /// Returns `None` for values outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0).ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}

impl Default for DateAdded {
    fn default() -> Self {
        DateAdded::EPOCH
    }
}

impl std::fmt::Display for DateAdded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}s", self.0),
        }
    }
}

impl From<u64> for DateAdded {
    fn from(secs: u64) -> Self {
        DateAdded::from_secs(secs)
    }
}

impl From<DateAdded> for u64 {
    fn from(date: DateAdded) -> Self {
        date.0
    }
}

impl From<Duration> for DateAdded {
    /// Create from duration since epoch (sub-second part is dropped)
    fn from(duration: Duration) -> Self {
        DateAdded(duration.as_secs())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateAdded {
    /// Instants before epoch clamp to epoch
    fn from(dt: DateTime<Tz>) -> Self {
        DateAdded(u64::try_from(dt.timestamp()).unwrap_or(0))
    }
}
