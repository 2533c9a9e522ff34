use chrono::{DateTime, SecondsFormat, Utc};

use crate::{TrolixError, TrolixResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Formats a timestamp as a fixed-width ISO-8601 string.
///
/// The width never varies, so stored timestamps sort lexicographically in
/// chronological order.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a timestamp previously written by [`format_timestamp`].
pub fn parse_timestamp(value: &str) -> TrolixResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| TrolixError::InvalidTimestamp(format!("{value}: {e}")))
}

//--------------------------------------------------------------------------------------------------
// Modules
//--------------------------------------------------------------------------------------------------

/// Serde adapter that reads and writes timestamps in the [`format_timestamp`] layout.
pub mod iso8601 {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes a timestamp as a fixed-width ISO-8601 string.
    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(timestamp))
    }

    /// Deserializes a timestamp from an ISO-8601 string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_timestamp(&value).map_err(de::Error::custom)
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_timestamp_is_fixed_width() -> anyhow::Result<()> {
        let whole = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let formatted = format_timestamp(&whole);
        assert_eq!(formatted, "2025-01-02T03:04:05.000000Z");
        assert_eq!(parse_timestamp(&formatted)?, whole);
        Ok(())
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(TrolixError::InvalidTimestamp(_))
        ));
    }
}
