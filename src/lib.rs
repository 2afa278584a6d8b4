pub mod base_data;
pub mod data_value;
pub mod dynamic_data;
pub mod error;
pub mod loader;
pub mod types;

pub use base_data::BaseData;
pub use data_value::{DataNumber, DataValue, FromDataValue};
pub use dynamic_data::DynamicData;
pub use error::RecordError;
pub use types::ReservedField;
