//! Millisecond-precision timestamps.
//!
//! Timestamps are written as milliseconds since the Unix epoch, which is how
//! existing stored payloads carry dates. On read both epoch milliseconds and
//! RFC 3339 strings are accepted. Anything finer than a millisecond is
//! dropped when a [`Timestamp`] is built, so a value always equals what it
//! reads back as after a round trip.

use chrono::{DateTime, Timelike, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Point in time carried by effectivity windows and dated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time, truncated to the millisecond.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Milliseconds since the Unix epoch, or `None` if out of range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Parses the textual wire form: RFC 3339, or epoch milliseconds
    /// written as digits.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(millis) = text.parse::<i64>() {
            return Self::from_millis(millis);
        }
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|ts| Self::from(ts.with_timezone(&Utc)))
    }

    #[must_use]
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Truncates to the millisecond. A leap second reads as the last
    /// millisecond of the preceding second.
    fn from(at: DateTime<Utc>) -> Self {
        let nanos = at.nanosecond().min(999_999_999);
        let millis_only = nanos - nanos % NANOS_PER_MILLI;
        Self(at.with_nanosecond(millis_only).unwrap_or(at))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(at: Timestamp) -> Self {
        at.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WireTimestamp::deserialize(deserializer)? {
            WireTimestamp::Millis(millis) => Self::from_millis(millis)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
            WireTimestamp::Text(text) => Self::parse(&text)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {text:?}"))),
        }
    }
}
