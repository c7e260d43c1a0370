//! Serde helpers for course fields.
//!
//! Clients send `createdAt` in whatever shape their language hands them:
//! an RFC 3339 string, a bare `YYYY-MM-DD` date or epoch milliseconds.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

/// Parses a timestamp string as RFC 3339, falling back to a date at
/// midnight UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("invalid timestamp: {raw}"))
}

/// Deserialize an optional timestamp, treating empty strings as None.
/// Accepts RFC 3339, YYYY-MM-DD or a number of milliseconds since the epoch.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTimestamp::Millis(ms)) => DateTime::<Utc>::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp {ms} out of range"))),
        Some(RawTimestamp::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawTimestamp::Text(s)) => parse_timestamp(&s).map(Some).map_err(de::Error::custom),
    }
}

/// Serialize a duration, writing whole values as JSON integers.
pub fn serialize_duration<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize)]
    struct TimestampField {
        #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
        at: Option<DateTime<Utc>>,
    }

    #[derive(Serialize)]
    struct DurationField {
        #[serde(serialize_with = "serialize_duration")]
        duration: f64,
    }

    fn at(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<TimestampField>(json).unwrap().at
    }

    #[test]
    fn test_timestamp_rfc3339() {
        let ts = at(r#"{"at": "2024-01-12T09:30:00+02:00"}"#).unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-01-12T07:30:00+00:00");
    }

    #[test]
    fn test_timestamp_date_only_is_midnight_utc() {
        let ts = at(r#"{"at": "2024-01-12"}"#).unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_timestamp_epoch_millis() {
        let ts = at(r#"{"at": 1705051800123}"#).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_705_051_800_123);
        assert_eq!(ts.to_rfc3339(), "2024-01-12T09:30:00.123+00:00");
    }

    #[test]
    fn test_timestamp_absent_null_or_empty() {
        assert!(at("{}").is_none());
        assert!(at(r#"{"at": null}"#).is_none());
        assert!(at(r#"{"at": "  "}"#).is_none());
    }

    #[test]
    fn test_timestamp_garbage_rejected() {
        for json in [r#"{"at": "yesterday"}"#, r#"{"at": "2024-13-45"}"#, r#"{"at": true}"#] {
            assert!(
                serde_json::from_str::<TimestampField>(json).is_err(),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_duration_whole_values_are_integers() {
        let json = serde_json::to_string(&DurationField { duration: 120.0 }).unwrap();
        assert_eq!(json, r#"{"duration":120}"#);

        let json = serde_json::to_string(&DurationField { duration: 1.5 }).unwrap();
        assert_eq!(json, r#"{"duration":1.5}"#);
    }
}
