//! Column classification.
//!
//! Both transforms are pure: they take the previous state by reference and
//! return the next one. The column's index and header always carry over.

use colmatch_model::{ColumnState, FieldType, MatchedOption, Row, TemplateField};

use crate::samples::extract_samples;

/// Computes the next state of a column.
///
/// - no field: [`ColumnState::Empty`]
/// - select field: [`ColumnState::MatchedEnumerated`] with one unmapped entry
///   per distinct value of the column in `sample_rows`
/// - input or checkbox field: [`ColumnState::Matched`]
/// - unrecognized field type: [`ColumnState::Empty`]
///
/// Previous option mappings are never merged into the result.
pub fn classify(
    previous: &ColumnState,
    field: Option<&TemplateField>,
    sample_rows: Option<&[Row]>,
) -> ColumnState {
    let index = previous.index();
    let header = previous.header().to_string();
    let Some(field) = field else {
        return ColumnState::Empty { index, header };
    };
    match &field.field_type {
        FieldType::Enumerated { .. } => ColumnState::MatchedEnumerated {
            index,
            header,
            value: field.key.clone(),
            matched_options: extract_samples(sample_rows.unwrap_or_default(), index)
                .into_iter()
                .map(MatchedOption::unmapped)
                .collect(),
        },
        FieldType::FreeText | FieldType::Checkbox => ColumnState::Matched {
            index,
            header,
            value: field.key.clone(),
        },
        FieldType::Unrecognized => ColumnState::Empty { index, header },
    }
}

/// Marks a column ignored, dropping any binding it had.
pub fn ignore(previous: &ColumnState) -> ColumnState {
    ColumnState::Ignored {
        index: previous.index(),
        header: previous.header().to_string(),
    }
}
