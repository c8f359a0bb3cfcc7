//! Date values backed by a millisecond timestamp.

use std::fmt;

use chrono::{DateTime, Utc};

/// A date value.
///
/// The representation is a millisecond offset from the Unix epoch
/// (January 1, 1970 00:00:00 UTC), stored as an `f64`. A NaN time value
/// marks an invalid date. Fractional milliseconds are truncated on
/// construction.
///
/// # Examples
///
/// ```
/// use core_types::DateValue;
///
/// let epoch = DateValue::from_millis(0.0);
/// assert!(epoch.is_valid());
/// assert_eq!(epoch.time_value(), 0.0);
///
/// assert!(!DateValue::from_millis(f64::NAN).is_valid());
/// assert!(!DateValue::from_millis(f64::INFINITY).is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateValue {
    /// Milliseconds since the Unix epoch; NaN represents an invalid date.
    time_value: f64,
}

impl DateValue {
    /// Create a date from milliseconds since the epoch.
    ///
    /// NaN or infinite input produces the invalid date.
    pub fn from_millis(ms: f64) -> Self {
        let time_value = if ms.is_nan() || ms.is_infinite() {
            f64::NAN
        } else {
            ms.trunc()
        };
        DateValue { time_value }
    }

    /// Create a date holding the current time.
    pub fn now() -> Self {
        DateValue {
            time_value: Utc::now().timestamp_millis() as f64,
        }
    }

    /// Create the invalid date (NaN time value).
    pub fn invalid() -> Self {
        DateValue {
            time_value: f64::NAN,
        }
    }

    /// The internal time value in milliseconds since the epoch.
    pub fn time_value(&self) -> f64 {
        self.time_value
    }

    /// Whether this date holds a real point in time.
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }

    /// Convert to a chrono UTC datetime, if valid and in chrono's range.
    pub fn to_utc_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        let ms = self.time_value as i64;
        let secs = ms.div_euclid(1000);
        let nsecs = (ms.rem_euclid(1000) as u32) * 1_000_000;
        DateTime::from_timestamp(secs, nsecs)
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        // Two invalid dates compare equal; valid dates compare by timestamp.
        (self.time_value.is_nan() && other.time_value.is_nan())
            || self.time_value == other.time_value
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%a %b %d %Y %H:%M:%S GMT+0000")),
            None => write!(f, "Invalid Date"),
        }
    }
}
