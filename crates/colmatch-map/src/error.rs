//! Error types for matching operations.

use colmatch_model::ModelError;
use thiserror::Error;

/// Errors surfaced by a matching session.
///
/// Unknown field keys and unrecognized field types are not errors: they
/// classify a column as empty. Only misuse by the caller ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Column index outside the header row.
    #[error("column index {index} is out of range for {len} columns")]
    InvalidIndex { index: usize, len: usize },
    /// Option mapping requested on a column not bound to an enumerated field.
    #[error("column {index} is not matched to a select field")]
    NotEnumerated { index: usize },
    /// Entry position outside the column's distinct values.
    #[error("column {index} has no entry at position {entry} ({len} entries)")]
    InvalidEntry {
        index: usize,
        entry: usize,
        len: usize,
    },
    /// Option value not declared by the bound field.
    #[error("field '{field}' has no option '{value}'")]
    UnknownOption { field: String, value: String },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, MatchError>;
