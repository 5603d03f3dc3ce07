//! Session configuration supplied by the wizard.

use serde::{Deserialize, Serialize};

/// Options for a column matching session.
///
/// Passed explicitly when a session is created; nothing in the engine reads
/// process-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchConfig {
    /// Let the user continue past the unmatched-fields prompt.
    pub allow_invalid_submit: bool,

    /// Upper bound on data rows scanned for distinct values when a column is
    /// bound to an enumerated field. `None` scans every data row.
    pub sample_row_limit: Option<usize>,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_allow_invalid_submit(mut self, allow: bool) -> Self {
        self.allow_invalid_submit = allow;
        self
    }

    #[must_use]
    pub fn with_sample_row_limit(mut self, limit: Option<usize>) -> Self {
        self.sample_row_limit = limit;
        self
    }
}
