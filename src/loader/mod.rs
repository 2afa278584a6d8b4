pub mod columnar;
pub mod config;
pub mod error;
mod json;
pub mod parse;

pub use columnar::ColumnarLoader;
pub use config::LoaderConfig;
pub use error::LoaderError;
pub use json::load_json_row;
