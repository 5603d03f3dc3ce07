//! Per-column classification state.

use serde::{Deserialize, Serialize};

use crate::cell::RawCell;

/// One distinct raw value of a column bound to an enumerated field, and the
/// option value the user mapped it to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchedOption {
    /// Raw value seen in the column; `None` when the row was too short.
    pub entry: Option<RawCell>,
    /// Mapped option value; `None` until the user picks one.
    pub value: Option<String>,
}

impl MatchedOption {
    pub fn unmapped(entry: Option<RawCell>) -> Self {
        Self { entry, value: None }
    }

    pub fn is_mapped(&self) -> bool {
        self.value.is_some()
    }
}

/// Classification of one source column.
///
/// `index` is the column's position in the header row and `header` its label.
/// Neither changes for the lifetime of a matching session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ColumnState {
    /// No field assigned and not ignored.
    Empty { index: usize, header: String },
    /// Excluded from the target by the user.
    Ignored { index: usize, header: String },
    /// Bound to a free-text or checkbox field.
    Matched {
        index: usize,
        header: String,
        value: String,
    },
    /// Bound to an enumerated field.
    MatchedEnumerated {
        index: usize,
        header: String,
        value: String,
        matched_options: Vec<MatchedOption>,
    },
}

impl ColumnState {
    pub fn empty(index: usize, header: impl Into<String>) -> Self {
        Self::Empty {
            index,
            header: header.into(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Empty { index, .. }
            | Self::Ignored { index, .. }
            | Self::Matched { index, .. }
            | Self::MatchedEnumerated { index, .. } => *index,
        }
    }

    pub fn header(&self) -> &str {
        match self {
            Self::Empty { header, .. }
            | Self::Ignored { header, .. }
            | Self::Matched { header, .. }
            | Self::MatchedEnumerated { header, .. } => header,
        }
    }

    /// Key of the bound field, if any.
    pub fn field_key(&self) -> Option<&str> {
        match self {
            Self::Matched { value, .. } | Self::MatchedEnumerated { value, .. } => Some(value),
            Self::Empty { .. } | Self::Ignored { .. } => None,
        }
    }

    pub fn matched_options(&self) -> Option<&[MatchedOption]> {
        match self {
            Self::MatchedEnumerated {
                matched_options, ..
            } => Some(matched_options),
            Self::Empty { .. } | Self::Ignored { .. } | Self::Matched { .. } => None,
        }
    }

    pub fn matched_options_mut(&mut self) -> Option<&mut Vec<MatchedOption>> {
        match self {
            Self::MatchedEnumerated {
                matched_options, ..
            } => Some(matched_options),
            Self::Empty { .. } | Self::Ignored { .. } | Self::Matched { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }

    /// True when the column is bound to `key`.
    pub fn is_bound_to(&self, key: &str) -> bool {
        self.field_key() == Some(key)
    }

    /// True for an enumerated column whose every entry has a mapped option.
    ///
    /// A column with no entries counts as fully mapped.
    pub fn all_options_mapped(&self) -> bool {
        self.matched_options()
            .is_some_and(|options| options.iter().all(MatchedOption::is_mapped))
    }

    /// Short name of the variant, used in log fields and tables.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty",
            Self::Ignored { .. } => "ignored",
            Self::Matched { .. } => "matched",
            Self::MatchedEnumerated { .. } => "matchedEnumerated",
        }
    }
}
