use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Epoch values at or above this magnitude are read as milliseconds.
const EPOCH_MILLIS_CUTOVER: i64 = 100_000_000_000;

/// Normalize a raw date value into a UTC instant.
///
/// Fixture records arrive with several date shapes depending on which
/// ingestion path wrote them: RFC 3339 strings, `YYYY-MM-DD HH:MM:SS`
/// strings, epoch seconds or milliseconds, and Firestore timestamp
/// envelopes. Anything unrecognizable maps to `None` rather than an error.
/// Normalizing an already-normalized value yields the same instant.
pub fn normalize_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_date_str(raw),
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                parse_epoch(n)
            } else {
                number.as_f64().and_then(parse_epoch_float)
            }
        }
        Value::Object(map) => map.get("timestampValue").and_then(normalize_date),
        _ => None,
    }
}

/// Deserialize an optional date field through `normalize_date`.
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(normalize_date))
}

fn parse_date_str(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n.abs() >= EPOCH_MILLIS_CUTOVER {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}

fn parse_epoch_float(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt((seconds * 1000.0).round() as i64).single()
}
