use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("header row {header_index} is out of range for a table with {row_count} rows")]
    HeaderRowOutOfRange {
        header_index: usize,
        row_count: usize,
    },
    #[error("field key must not be empty")]
    EmptyFieldKey,
    #[error("duplicate field key: {0}")]
    DuplicateFieldKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
