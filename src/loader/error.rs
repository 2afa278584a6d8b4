use crate::error::RecordError;
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("header row is empty")]
    EmptyHeader,
    #[error("row read before header")]
    HeaderNotRead,
    #[error("column {0} not found in header")]
    MissingColumn(SmolStr),
    #[error("row has {actual} cells, header has {expected}")]
    ColumnCount { expected: usize, actual: usize },
    #[error("cannot parse time {0:?}")]
    InvalidTime(String),
    #[error("row is not a JSON object")]
    NotAnObject,
    #[error("field {0} holds a nested value")]
    UnsupportedValue(SmolStr),
    #[error("record error: {0}")]
    Record(#[from] RecordError),
    #[error("delimiter {0:?} is not a single ASCII byte")]
    InvalidDelimiter(char),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
