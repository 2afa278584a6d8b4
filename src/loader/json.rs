use super::config::LoaderConfig;
use super::error::LoaderError;
use super::parse::{is_numeric, parse_time};
use crate::data_value::{DataNumber, DataValue};
use crate::dynamic_data::DynamicData;
use crate::types::{FIELD_SYMBOL, FIELD_TIME, FIELD_VALUE};
use chrono::{DateTime, Utc};
use smol_str::SmolStr;
use tracing::debug;

/// Build a record from one JSON object row.
///
/// The time column may hold a string in any configured format or integer
/// Unix seconds. Strings elsewhere are kept verbatim; no type inference.
pub fn load_json_row(
    config: &LoaderConfig,
    row: &serde_json::Value,
) -> Result<DynamicData, LoaderError> {
    let object = row.as_object().ok_or(LoaderError::NotAnObject)?;

    let mut data = DynamicData::new();
    if !config.symbol.is_empty() {
        data.set_by_name(FIELD_SYMBOL, config.symbol.clone())?;
    }

    for (name, cell) in object {
        if name.eq_ignore_ascii_case(&config.time_column) {
            data.set_by_name(FIELD_TIME, json_time(cell, config)?)?;
            continue;
        }
        let value = json_cell(name, cell)?;
        if name.eq_ignore_ascii_case(&config.value_column) && is_numeric(&value) {
            data.set_by_name(FIELD_VALUE, value.clone())?;
        }
        data.set_by_name(name, value)?;
    }

    debug!(symbol = data.symbol(), time = %data.time(), "loaded json row");
    Ok(data)
}

fn json_time(cell: &serde_json::Value, config: &LoaderConfig) -> Result<DateTime<Utc>, LoaderError> {
    let parsed = match cell {
        serde_json::Value::String(s) => parse_time(s, &config.time_formats),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        _ => None,
    };
    parsed.ok_or_else(|| LoaderError::InvalidTime(cell.to_string()))
}

fn json_cell(name: &str, cell: &serde_json::Value) -> Result<DataValue, LoaderError> {
    Ok(match cell {
        serde_json::Value::Null => DataValue::Null,
        serde_json::Value::Bool(b) => DataValue::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DataValue::Number(DataNumber::I64(i))
            } else if let Some(u) = n.as_u64() {
                DataValue::Number(DataNumber::U64(u))
            } else {
                DataValue::Number(DataNumber::F64(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        serde_json::Value::String(s) => DataValue::Str(SmolStr::from(s.as_str())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            return Err(LoaderError::UnsupportedValue(SmolStr::new(name)));
        }
    })
}
