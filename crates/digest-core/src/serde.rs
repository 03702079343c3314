use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Serialize a UTC timestamp as RFC 3339 with millisecond precision,
/// e.g. `2026-08-01T12:34:56.789Z`.
pub fn to_rfc3339_ms<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
