use thiserror::Error;

use crate::GameField;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown sort direction: {0} (expected asc, desc or ns)")]
    UnknownDirection(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("sorter index {index} out of range ({len} sorters configured)")]
    SorterIndexOutOfRange { index: usize, len: usize },
    #[error("sorter fields cannot change: expected [{expected}], got [{actual}]")]
    SorterFieldsChanged { expected: String, actual: String },
    #[error("duplicate sorter field: {0}")]
    DuplicateSorterField(GameField),
}

pub type Result<T> = std::result::Result<T, ModelError>;
