use super::record::DynamicData;
use crate::data_value::{DataValue, FromDataValue};
use crate::error::RecordError;
use crate::types::{ReservedField, is_reserved};
use smol_str::SmolStr;
use std::ops::Index;

impl DynamicData {
    /// Read a field by name. Reserved names are served from the base record,
    /// anything else from the slot store.
    pub fn get_by_name(&self, name: &str) -> Result<DataValue, RecordError> {
        match ReservedField::from_name(name) {
            Some(field) => Ok(self.get_reserved(field)),
            None => self.slots.get(name).cloned(),
        }
    }

    /// Read a field by name and convert it to `T`.
    ///
    /// Fails with `TypeMismatch` when the stored value has no `T` form.
    pub fn get<T: FromDataValue>(&self, name: &str) -> Result<T, RecordError> {
        match ReservedField::from_name(name) {
            Some(field) => {
                let value = self.get_reserved(field);
                T::from_data_value(&value).ok_or_else(|| mismatch::<T>(name, &value))
            }
            None => {
                let value = self.slots.get(name)?;
                T::from_data_value(value).ok_or_else(|| mismatch::<T>(name, value))
            }
        }
    }

    /// True when `name` resolves: always for reserved names, otherwise only
    /// once the slot has been written.
    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        is_reserved(name) || self.slots.contains(name)
    }

    /// Reserved fields first, in declaration order, then dynamic slots in
    /// unspecified order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, DataValue)> + '_ {
        ReservedField::ALL
            .into_iter()
            .map(move |field| (field.name(), self.get_reserved(field)))
            .chain(self.slots.iter().map(|(name, value)| (name, value.clone())))
    }

    #[inline]
    pub(crate) fn get_reserved(&self, field: ReservedField) -> DataValue {
        match field {
            ReservedField::Time => DataValue::Time(self.base.time),
            ReservedField::Value => DataValue::Decimal(self.base.value),
            ReservedField::Symbol => DataValue::Str(self.base.symbol.clone()),
            ReservedField::Price => DataValue::Decimal(self.base.price()),
        }
    }
}

fn mismatch<T: FromDataValue>(name: &str, value: &DataValue) -> RecordError {
    RecordError::TypeMismatch {
        field: SmolStr::new(name),
        expected: T::EXPECTED,
        actual: value.type_name(),
    }
}

/// Panicking read of a dynamic slot. Reserved names have no stored
/// `DataValue` to borrow; use the typed accessors for those.
impl Index<&str> for DynamicData {
    type Output = DataValue;

    fn index(&self, name: &str) -> &DataValue {
        assert!(
            !is_reserved(name),
            "reserved field {name} cannot be indexed, use the typed accessor"
        );
        match self.slots.get(name) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}
