use super::slots::SlotStore;
use crate::base_data::BaseData;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use smol_str::SmolStr;

/// Market-data record with the four well-known fields of [`BaseData`] plus
/// any number of named fields discovered at load time.
///
/// By-name access goes through [`get_by_name`](Self::get_by_name) and
/// [`set_by_name`](Self::set_by_name): `Time`, `Value`, `Symbol` and `Price`
/// resolve to the base record, every other name to the slot store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicData {
    pub(crate) base: BaseData,
    pub(crate) slots: SlotStore,
}

impl DynamicData {
    /// Empty record: epoch time, zero value, empty symbol, no slots.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_base(base: BaseData) -> Self {
        Self {
            base,
            slots: SlotStore::new(),
        }
    }

    #[inline]
    pub fn base(&self) -> &BaseData {
        &self.base
    }

    /// Read-only view of the dynamic slots. Reserved names never appear here.
    #[inline]
    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    // ════════════════════════════════════════════════════════════════════════
    // Typed accessors
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.base.time
    }

    #[inline]
    pub fn end_time(&self) -> DateTime<Utc> {
        self.base.end_time()
    }

    #[inline]
    pub fn value(&self) -> Decimal {
        self.base.value
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.base.symbol
    }

    #[inline]
    pub fn price(&self) -> Decimal {
        self.base.price()
    }

    #[inline]
    pub fn set_time(&mut self, time: DateTime<Utc>) {
        self.base.time = time;
    }

    #[inline]
    pub fn set_value(&mut self, value: Decimal) {
        self.base.value = value;
    }

    #[inline]
    pub fn set_symbol(&mut self, symbol: impl Into<SmolStr>) {
        self.base.symbol = symbol.into();
    }
}
