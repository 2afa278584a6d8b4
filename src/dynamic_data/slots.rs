use crate::data_value::DataValue;
use crate::error::RecordError;
use crate::types::FastMap;
use smol_str::SmolStr;
use std::collections::hash_map::Entry;

/// Named values outside the reserved set. Untyped, last write wins, and a
/// slot lives as long as its record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStore {
    slots: FastMap<SmolStr, DataValue>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. No type checking.
    #[inline]
    pub fn set(&mut self, name: &str, value: DataValue) -> &DataValue {
        match self.slots.entry(SmolStr::new(name)) {
            Entry::Occupied(mut slot) => {
                slot.insert(value);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(value),
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Result<&DataValue, RecordError> {
        self.slots
            .get(name)
            .ok_or_else(|| RecordError::UnknownField(SmolStr::new(name)))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }
}
