#![deny(unsafe_code)]

use crate::cell::RawCell;
use crate::error::{ModelError, Result};

/// Number of data rows shown under each column while matching.
pub const PREVIEW_ROW_COUNT: usize = 2;

pub type Row = Vec<RawCell>;

/// Already-decoded tabular data with one designated header row.
///
/// Rows above the header are kept but never read; rows below it are the data
/// rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    rows: Vec<Row>,
    header_index: usize,
}

impl RawTable {
    pub fn new(rows: Vec<Row>, header_index: usize) -> Result<Self> {
        if header_index >= rows.len() {
            return Err(ModelError::HeaderRowOutOfRange {
                header_index,
                row_count: rows.len(),
            });
        }
        Ok(Self { rows, header_index })
    }

    pub fn header_index(&self) -> usize {
        self.header_index
    }

    pub fn header_row(&self) -> &[RawCell] {
        &self.rows[self.header_index]
    }

    /// Header cells rendered as column labels.
    pub fn header_labels(&self) -> Vec<String> {
        self.header_row().iter().map(ToString::to_string).collect()
    }

    pub fn column_count(&self) -> usize {
        self.header_row().len()
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[self.header_index + 1..]
    }

    /// The first `limit` data rows, or all of them when `limit` is `None`.
    pub fn sample_rows(&self, limit: Option<usize>) -> &[Row] {
        let data = self.data_rows();
        match limit {
            Some(limit) => &data[..limit.min(data.len())],
            None => data,
        }
    }

    pub fn preview_rows(&self) -> &[Row] {
        self.sample_rows(Some(PREVIEW_ROW_COUNT))
    }
}
