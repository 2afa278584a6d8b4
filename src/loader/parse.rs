use crate::data_value::DataValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a feed timestamp: RFC 3339 first, then each of `formats` as a
/// date-time, then as a bare date at midnight UTC.
pub fn parse_time(text: &str, formats: &[String]) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    for fmt in formats {
        if let Ok(t) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(t.and_utc());
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
        }
    }
    None
}

/// Classify a raw text cell. Empty → `Null`, then bool, integer, decimal,
/// timestamp, falling back to a string.
pub fn parse_cell(text: &str, formats: &[String]) -> DataValue {
    let text = text.trim();
    if text.is_empty() {
        return DataValue::Null;
    }
    if text.eq_ignore_ascii_case("true") {
        return DataValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return DataValue::Bool(false);
    }
    if let Ok(i) = text.parse::<i64>() {
        return DataValue::from(i);
    }
    if let Ok(d) = Decimal::from_str(text) {
        return DataValue::Decimal(d);
    }
    if let Some(t) = parse_time(text, formats) {
        return DataValue::Time(t);
    }
    DataValue::from(text)
}

/// Whether a parsed cell can feed the `Value` field.
#[inline]
pub fn is_numeric(value: &DataValue) -> bool {
    matches!(value, DataValue::Number(_) | DataValue::Decimal(_))
}
