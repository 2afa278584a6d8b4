use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::{Serialize, Serializer};
use smol_str::SmolStr;

// ─── DataNumber ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataNumber {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl DataNumber {
    pub fn as_f64(self) -> f64 {
        match self {
            DataNumber::I64(i) => i as f64,
            DataNumber::U64(u) => u as f64,
            DataNumber::F64(f) => f,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            DataNumber::I64(i) => Some(i),
            DataNumber::U64(u) => i64::try_from(u).ok(),
            DataNumber::F64(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        match self {
            DataNumber::U64(u) => Some(u),
            DataNumber::I64(i) => u64::try_from(i).ok(),
            DataNumber::F64(f) => {
                if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
                    Some(f as u64)
                } else {
                    None
                }
            }
        }
    }

    /// Exact for integers. Floats go through `Decimal::try_from`, so NaN and
    /// infinities have no decimal form.
    pub fn as_decimal(self) -> Option<Decimal> {
        match self {
            DataNumber::I64(i) => Some(Decimal::from(i)),
            DataNumber::U64(u) => Some(Decimal::from(u)),
            DataNumber::F64(f) => Decimal::try_from(f).ok(),
        }
    }
}

// ─── DataValue ──────────────────────────────────────────────────────────────

/// A value held by a named field. The set of variants covers what columnar
/// market-data feeds carry; nested structures are not representable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataValue {
    #[default]
    Null,
    Bool(bool),
    Number(DataNumber),
    Decimal(Decimal),
    Str(SmolStr),
    Time(DateTime<Utc>),
}

impl DataValue {
    /// Short variant name used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "bool",
            DataValue::Number(DataNumber::I64(_)) => "i64",
            DataValue::Number(DataNumber::U64(_)) => "u64",
            DataValue::Number(DataNumber::F64(_)) => "f64",
            DataValue::Decimal(_) => "decimal",
            DataValue::Str(_) => "string",
            DataValue::Time(_) => "timestamp",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(n.as_f64()),
            DataValue::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DataValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            DataValue::Decimal(d) => Some(*d),
            DataValue::Number(n) => n.as_decimal(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            DataValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }
}

// ─── Typed Reads ────────────────────────────────────────────────────────────

/// Conversion out of a [`DataValue`] at the read site.
///
/// `EXPECTED` names the target type in `RecordError::TypeMismatch`.
pub trait FromDataValue: Sized {
    const EXPECTED: &'static str;

    fn from_data_value(value: &DataValue) -> Option<Self>;
}

impl FromDataValue for DataValue {
    const EXPECTED: &'static str = "any";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromDataValue for Decimal {
    const EXPECTED: &'static str = "decimal";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_decimal()
    }
}

impl FromDataValue for DateTime<Utc> {
    const EXPECTED: &'static str = "timestamp";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_time()
    }
}

impl FromDataValue for SmolStr {
    const EXPECTED: &'static str = "string";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        match value {
            DataValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromDataValue for String {
    const EXPECTED: &'static str = "string";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromDataValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_f64()
    }
}

impl FromDataValue for i64 {
    const EXPECTED: &'static str = "i64";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_i64()
    }
}

impl FromDataValue for u64 {
    const EXPECTED: &'static str = "u64";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_u64()
    }
}

impl FromDataValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_data_value(value: &DataValue) -> Option<Self> {
        value.as_bool()
    }
}

// ─── Serialize ──────────────────────────────────────────────────────────────

impl Serialize for DataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DataValue::Null => serializer.serialize_none(),
            DataValue::Bool(b) => serializer.serialize_bool(*b),
            DataValue::Number(n) => match n {
                DataNumber::I64(i) => serializer.serialize_i64(*i),
                DataNumber::U64(u) => serializer.serialize_u64(*u),
                DataNumber::F64(f) => serializer.serialize_f64(*f),
            },
            // String form keeps full precision.
            DataValue::Decimal(d) => serializer.collect_str(d),
            DataValue::Str(s) => serializer.serialize_str(s.as_str()),
            DataValue::Time(t) => serializer.serialize_str(&t.to_rfc3339()),
        }
    }
}

// ─── From impls ─────────────────────────────────────────────────────────────

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Number(DataNumber::F64(n))
    }
}

impl From<i64> for DataValue {
    fn from(n: i64) -> Self {
        DataValue::Number(DataNumber::I64(n))
    }
}

impl From<i32> for DataValue {
    fn from(n: i32) -> Self {
        DataValue::Number(DataNumber::I64(n as i64))
    }
}

impl From<u64> for DataValue {
    fn from(n: u64) -> Self {
        DataValue::Number(DataNumber::U64(n))
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<Decimal> for DataValue {
    fn from(d: Decimal) -> Self {
        DataValue::Decimal(d)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(t: DateTime<Utc>) -> Self {
        DataValue::Time(t)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Str(SmolStr::from(s))
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Str(SmolStr::from(s))
    }
}

impl From<SmolStr> for DataValue {
    fn from(s: SmolStr) -> Self {
        DataValue::Str(s)
    }
}

// ─── Into<serde_json::Value> ────────────────────────────────────────────────

impl From<DataValue> for serde_json::Value {
    fn from(val: DataValue) -> Self {
        match val {
            DataValue::Null => serde_json::Value::Null,
            DataValue::Bool(b) => serde_json::Value::Bool(b),
            DataValue::Number(n) => match n {
                DataNumber::I64(i) => serde_json::json!(i),
                DataNumber::U64(u) => serde_json::json!(u),
                DataNumber::F64(f) => serde_json::json!(f),
            },
            DataValue::Decimal(d) => serde_json::Value::String(d.to_string()),
            DataValue::Str(s) => serde_json::Value::String(s.to_string()),
            DataValue::Time(t) => serde_json::Value::String(t.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_number_as_decimal_is_exact_for_integers() {
        assert_eq!(DataNumber::I64(-7).as_decimal(), Some(Decimal::from(-7)));
        assert_eq!(DataNumber::U64(u64::MAX).as_decimal(), Some(Decimal::from(u64::MAX)));
    }

    #[test]
    fn test_number_as_decimal_rejects_non_finite() {
        assert_eq!(DataNumber::F64(f64::NAN).as_decimal(), None);
        assert_eq!(DataNumber::F64(f64::INFINITY).as_decimal(), None);
        assert_eq!(
            DataNumber::F64(10.5).as_decimal(),
            Some(Decimal::from_str("10.5").unwrap())
        );
    }

    #[test]
    fn test_float_to_int_rejects_upper_bound() {
        // 2^63 and 2^64 are exactly representable and one past the range.
        assert_eq!(DataNumber::F64(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(DataNumber::F64(18_446_744_073_709_551_616.0).as_u64(), None);
        assert_eq!(DataNumber::F64(-9_223_372_036_854_775_808.0).as_i64(), Some(i64::MIN));
        assert_eq!(DataNumber::F64(4_096.0).as_u64(), Some(4_096));
        assert_eq!(DataNumber::F64(1.5).as_i64(), None);
    }

    #[test]
    fn test_number_debug_names_variant() {
        assert_eq!(format!("{:?}", DataNumber::I64(-2)), "I64(-2)");
        assert_eq!(format!("{:?}", DataNumber::F64(0.5)), "F64(0.5)");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(DataValue::Null.type_name(), "null");
        assert_eq!(DataValue::from(1i64).type_name(), "i64");
        assert_eq!(DataValue::from(1u64).type_name(), "u64");
        assert_eq!(DataValue::from(1.0f64).type_name(), "f64");
        assert_eq!(DataValue::from("x").type_name(), "string");
        assert_eq!(DataValue::from(Decimal::ONE).type_name(), "decimal");
    }

    #[test]
    fn test_typed_reads() {
        let v = DataValue::from(1523i64);
        assert_eq!(i64::from_data_value(&v), Some(1523));
        assert_eq!(u64::from_data_value(&v), Some(1523));
        assert_eq!(Decimal::from_data_value(&v), Some(Decimal::from(1523)));
        assert_eq!(String::from_data_value(&v), None);
        assert_eq!(bool::from_data_value(&v), None);

        let s = DataValue::from("SPY");
        assert_eq!(SmolStr::from_data_value(&s), Some(SmolStr::new("SPY")));
        assert_eq!(f64::from_data_value(&s), None);
    }

    #[test]
    fn test_serialize_to_json() {
        let t = Utc.with_ymd_and_hms(2014, 6, 2, 0, 0, 0).unwrap();
        let d = Decimal::from_str("187.125").unwrap();

        assert_eq!(serde_json::to_string(&DataValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&DataValue::from(42i64)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&DataValue::from(d)).unwrap(), "\"187.125\"");
        assert_eq!(
            serde_json::to_string(&DataValue::from(t)).unwrap(),
            "\"2014-06-02T00:00:00+00:00\""
        );
    }

    #[test]
    fn test_into_json_value() {
        let d = Decimal::from_str("0.0001").unwrap();
        assert_eq!(serde_json::Value::from(DataValue::from(d)), serde_json::json!("0.0001"));
        assert_eq!(serde_json::Value::from(DataValue::from(true)), serde_json::json!(true));
        assert_eq!(serde_json::Value::from(DataValue::from(2.5f64)), serde_json::json!(2.5));
    }
}
