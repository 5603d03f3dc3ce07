pub mod cell;
pub mod column;
pub mod config;
pub mod error;
pub mod field;
pub mod table;

pub use cell::RawCell;
pub use column::{ColumnState, MatchedOption};
pub use config::MatchConfig;
pub use error::{ModelError, Result};
pub use field::{FieldType, SelectOption, TemplateField, Validation, validate_catalog};
pub use table::{PREVIEW_ROW_COUNT, RawTable, Row};
