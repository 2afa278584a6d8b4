use rustc_hash::FxHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

pub type FastMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;

// ─── Reserved Names ─────────────────────────────────────────────────────────

pub const FIELD_TIME: &str = "Time";
pub const FIELD_VALUE: &str = "Value";
pub const FIELD_SYMBOL: &str = "Symbol";
pub const FIELD_PRICE: &str = "Price";

/// The closed set of names backed by typed storage on [`BaseData`].
///
/// Matching is exact and case-sensitive: `"time"` is an ordinary dynamic slot.
///
/// [`BaseData`]: crate::base_data::BaseData
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedField {
    Time,
    Value,
    Symbol,
    Price,
}

impl ReservedField {
    pub const ALL: [ReservedField; 4] = [
        ReservedField::Time,
        ReservedField::Value,
        ReservedField::Symbol,
        ReservedField::Price,
    ];

    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            FIELD_TIME => Some(ReservedField::Time),
            FIELD_VALUE => Some(ReservedField::Value),
            FIELD_SYMBOL => Some(ReservedField::Symbol),
            FIELD_PRICE => Some(ReservedField::Price),
            _ => None,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            ReservedField::Time => FIELD_TIME,
            ReservedField::Value => FIELD_VALUE,
            ReservedField::Symbol => FIELD_SYMBOL,
            ReservedField::Price => FIELD_PRICE,
        }
    }
}

#[inline]
pub fn is_reserved(name: &str) -> bool {
    ReservedField::from_name(name).is_some()
}
