use super::record::DynamicData;
use crate::data_value::{DataValue, FromDataValue};
use crate::error::RecordError;
use crate::types::ReservedField;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use smol_str::SmolStr;
use tracing::{debug, trace};

impl DynamicData {
    /// Write a field by name and return the value actually stored.
    ///
    /// Reserved names convert `value` to the field's type first: `Time` takes
    /// a timestamp, `Value` a decimal or finite number, `Symbol` a string.
    /// `Price` is derived and always rejected. On error the record is left
    /// untouched. Any other name overwrites its slot without type checks.
    pub fn set_by_name(
        &mut self,
        name: &str,
        value: impl Into<DataValue>,
    ) -> Result<DataValue, RecordError> {
        let value = value.into();
        match ReservedField::from_name(name) {
            Some(field) => self.set_reserved(field, value),
            None => {
                trace!(field = name, kind = value.type_name(), "set dynamic slot");
                Ok(self.slots.set(name, value).clone())
            }
        }
    }

    fn set_reserved(
        &mut self,
        field: ReservedField,
        value: DataValue,
    ) -> Result<DataValue, RecordError> {
        match field {
            ReservedField::Time => {
                self.base.time = convert::<DateTime<Utc>>(field, &value)?;
                Ok(DataValue::Time(self.base.time))
            }
            ReservedField::Value => {
                self.base.value = convert::<Decimal>(field, &value)?;
                Ok(DataValue::Decimal(self.base.value))
            }
            ReservedField::Symbol => {
                self.base.symbol = convert::<SmolStr>(field, &value)?;
                Ok(DataValue::Str(self.base.symbol.clone()))
            }
            ReservedField::Price => {
                debug!(field = field.name(), "rejected write to read-only field");
                Err(RecordError::ReadOnlyField(SmolStr::new_static(field.name())))
            }
        }
    }
}

fn convert<T: FromDataValue>(field: ReservedField, value: &DataValue) -> Result<T, RecordError> {
    T::from_data_value(value).ok_or_else(|| {
        debug!(
            field = field.name(),
            actual = value.type_name(),
            "rejected reserved field write"
        );
        RecordError::TypeMismatch {
            field: SmolStr::new_static(field.name()),
            expected: T::EXPECTED,
            actual: value.type_name(),
        }
    })
}
