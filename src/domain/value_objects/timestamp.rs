//! # Timestamp Value Object
//!
//! UTC instant recorded on every acquisition.
//!
//! # Examples
//!
//! ```
//! use investment_wallet::domain::value_objects::timestamp::Timestamp;
//!
//! let earlier = Timestamp::from_secs(1_704_067_200).unwrap();
//! let now = Timestamp::now();
//!
//! assert!(now.is_after(&earlier));
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp with nanosecond precision.
///
/// Serializes transparently as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use investment_wallet::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_millis(1_704_067_200_000).unwrap();
    /// assert_eq!(ts.timestamp_millis(), 1_704_067_200_000);
    /// ```
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the Unix timestamp in milliseconds.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns true if this timestamp is before another.
    #[inline]
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns true if this timestamp is after another.
    #[inline]
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Formats the timestamp as RFC 3339 / ISO 8601.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Returns the underlying DateTime.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn now_is_between_clock_reads() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.0 >= before);
        assert!(ts.0 <= after);
    }

    #[test]
    fn from_secs_and_millis_agree() {
        let secs = Timestamp::from_secs(1_704_067_200).unwrap();
        let millis = Timestamp::from_millis(1_704_067_200_000).unwrap();
        assert_eq!(secs, millis);
    }

    #[test]
    fn ordering_helpers() {
        let ts1 = Timestamp::from_secs(1000).unwrap();
        let ts2 = Timestamp::from_secs(2000).unwrap();
        assert!(ts1.is_before(&ts2));
        assert!(ts2.is_after(&ts1));
        assert!(!ts1.is_after(&ts2));
        assert!(ts1 < ts2);
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_secs(1_704_067_200).unwrap();
        assert_eq!(ts.to_string(), ts.to_iso8601());
        assert!(ts.to_string().starts_with("2024-01-01T00:00:00"));
    }

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::from_millis(1_704_067_200_123).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024"));
        let deserialized: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, deserialized);
    }

    #[test]
    fn datetime_conversions() {
        let dt = Utc::now();
        let ts: Timestamp = dt.into();
        assert_eq!(ts.as_datetime(), &dt);
        let back: DateTime<Utc> = ts.into();
        assert_eq!(back, dt);
    }
}
