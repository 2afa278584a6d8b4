mod read_op;
pub mod record;
pub mod slots;
mod write_op;

pub use record::DynamicData;
pub use slots::SlotStore;
