//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type with seconds precision.
//!
//! ## Design Decision
//!
//! Events and their series are scheduled across venues in different local
//! time zones. To keep lifecycle triggers and window comparisons
//! unambiguous, every timestamp in the stack is UTC; local time conversion
//! is a presentation concern handled at the form/API layer. Sub-second
//! components are truncated at construction so that two reads of the same
//! wall-clock second compare equal regardless of source.
//!
//! ## Construction
//!
//! - [`Timestamp::now()`] — current UTC time, truncated (called only by
//!   `SystemClock`; scheduling logic receives time through the `Clock`
//!   trait).
//! - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating.
//! - [`Timestamp::parse()`] — strict: RFC 3339 with `Z` suffix only.
//! - [`Timestamp::parse_lenient()`] — accepts any RFC 3339 offset and
//!   normalizes to UTC; this is the parser for form fields and CSV rows.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GalaError;

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted —
    /// explicit offsets like `+00:00` or `+05:30` are rejected even when
    /// semantically equivalent, so that stored representations stay
    /// byte-identical across writers.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, GalaError> {
        if !s.ends_with('Z') {
            return Err(GalaError::SchemaValidation(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            GalaError::SchemaValidation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// This is the lenient parser for ingesting external data — form
    /// submissions and batch-upload rows arrive with whatever offset the
    /// browser or spreadsheet produced. The result is always UTC with
    /// seconds precision.
    pub fn parse_lenient(s: &str) -> Result<Self, GalaError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            GalaError::SchemaValidation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, GalaError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            GalaError::SchemaValidation(format!("invalid Unix timestamp: {secs}"))
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// The timestamp shifted forward by `delta`.
    pub fn plus(&self, delta: Duration) -> Self {
        Self(truncate_to_seconds(self.0 + delta))
    }

    /// The timestamp shifted backward by `delta`.
    pub fn minus(&self, delta: Duration) -> Self {
        Self(truncate_to_seconds(self.0 - delta))
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-06-15T18:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting then strict-parsing is lossless for any in-range instant.
        #[test]
        fn iso8601_roundtrip(secs in 0i64..4_102_444_800i64) {
            let ts = Timestamp::from_epoch_secs(secs).unwrap();
            let back = Timestamp::parse(&ts.to_iso8601()).unwrap();
            prop_assert_eq!(ts, back);
        }

        /// Ordering of timestamps matches ordering of their epoch seconds.
        #[test]
        fn ordering_matches_epoch(a in 0i64..4_102_444_800i64, b in 0i64..4_102_444_800i64) {
            let ta = Timestamp::from_epoch_secs(a).unwrap();
            let tb = Timestamp::from_epoch_secs(b).unwrap();
            prop_assert_eq!(a.cmp(&b), ta.cmp(&tb));
        }
    }
}
