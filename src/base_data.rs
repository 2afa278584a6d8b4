use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use smol_str::SmolStr;

/// The fixed-schema part of every market-data record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseData {
    pub time: DateTime<Utc>,
    pub value: Decimal,
    pub symbol: SmolStr,
}

impl BaseData {
    pub fn new(symbol: impl Into<SmolStr>, time: DateTime<Utc>, value: Decimal) -> Self {
        Self {
            time,
            value,
            symbol: symbol.into(),
        }
    }

    /// Point-in-time data has no period, so the end time is the start time.
    #[inline]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Derived from `value`; there is no separate storage behind it.
    #[inline]
    pub fn price(&self) -> Decimal {
        self.value
    }
}
