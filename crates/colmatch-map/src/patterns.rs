use std::collections::{BTreeMap, BTreeSet};

use colmatch_model::{ColumnState, FieldType, TemplateField};

use crate::utils::normalize_text;

/// Normalized spellings that identify each field: its key, its label and its
/// alternate matches. Fields of an unrecognized type are left out since they
/// can never be bound.
pub fn build_field_patterns(fields: &[TemplateField]) -> BTreeMap<&str, BTreeSet<String>> {
    let mut patterns = BTreeMap::new();
    for field in fields {
        if field.field_type == FieldType::Unrecognized {
            continue;
        }
        let values: BTreeSet<String> = std::iter::once(field.key.as_str())
            .chain(std::iter::once(field.label.as_str()))
            .chain(field.alternate_matches.iter().map(String::as_str))
            .map(normalize_text)
            .filter(|value| !value.is_empty())
            .collect();
        patterns.insert(field.key.as_str(), values);
    }
    patterns
}

/// Pairs every empty column whose header spells a field with that field.
///
/// Columns are visited left to right and fields in catalog order. A field that
/// is already bound, or was paired with an earlier column, is skipped.
pub fn suggest_header_matches(
    columns: &[ColumnState],
    fields: &[TemplateField],
) -> Vec<(usize, String)> {
    let patterns = build_field_patterns(fields);
    let mut taken: BTreeSet<&str> = columns.iter().filter_map(ColumnState::field_key).collect();
    let mut suggestions = Vec::new();
    for column in columns.iter().filter(|column| column.is_empty()) {
        let header = normalize_text(column.header());
        if header.is_empty() {
            continue;
        }
        let found = fields.iter().find(|field| {
            !taken.contains(field.key.as_str())
                && patterns
                    .get(field.key.as_str())
                    .is_some_and(|values| values.contains(&header))
        });
        if let Some(field) = found {
            taken.insert(field.key.as_str());
            suggestions.push((column.index(), field.key.clone()));
        }
    }
    suggestions
}
