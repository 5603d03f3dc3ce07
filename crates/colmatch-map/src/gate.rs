//! Unmatched required fields check run before the wizard advances.

use colmatch_model::{ColumnState, TemplateField};
use serde::{Deserialize, Serialize};

/// Labels of required fields that no column is bound to, in catalog order.
pub fn unmatched_required_fields(columns: &[ColumnState], fields: &[TemplateField]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.is_required())
        .filter(|field| !columns.iter().any(|column| column.is_bound_to(&field.key)))
        .map(|field| field.label.clone())
        .collect()
}

/// What the wizard should do when the user asks to continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum SubmitDecision {
    /// Every required field has a column.
    Proceed,
    /// Ask the user to confirm continuing without these fields.
    Confirm { unmatched: Vec<String> },
    /// Tell the user these fields are missing; continuing is not offered.
    Blocked { unmatched: Vec<String> },
}

impl SubmitDecision {
    /// Applies the submit policy to a list of unmatched field labels.
    pub fn evaluate(unmatched: Vec<String>, allow_invalid_submit: bool) -> Self {
        if unmatched.is_empty() {
            Self::Proceed
        } else if allow_invalid_submit {
            Self::Confirm { unmatched }
        } else {
            Self::Blocked { unmatched }
        }
    }

    pub fn unmatched(&self) -> &[String] {
        match self {
            Self::Proceed => &[],
            Self::Confirm { unmatched } | Self::Blocked { unmatched } => unmatched,
        }
    }

    /// Whether continuing is possible, possibly after a confirmation.
    pub fn can_continue(&self) -> bool {
        matches!(self, Self::Proceed | Self::Confirm { .. })
    }

    /// The unmatched labels as shown in the confirmation prompt.
    pub fn prompt_list(&self) -> String {
        self.unmatched().join(", ")
    }
}
