//! Template field definitions.
//!
//! A template field is one column of the target schema that source columns
//! are matched onto. The catalog is supplied once per matching session by the
//! wizard configuration and never mutated by the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One allowed value of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label.
    pub label: String,
    /// Stored value.
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declared type of a template field.
///
/// Wire tags follow the wizard configuration format: `input`, `checkbox` and
/// `select`. Any other tag deserializes to [`FieldType::Unrecognized`], which
/// the classifier treats as "no field".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    /// Free-text input.
    #[serde(rename = "input")]
    FreeText,
    /// Boolean field.
    #[serde(rename = "checkbox")]
    Checkbox,
    /// Value must be one of a fixed set of options.
    #[serde(rename = "select")]
    Enumerated { options: Vec<SelectOption> },
    /// A type this engine does not know about.
    #[serde(other)]
    Unrecognized,
}

impl FieldType {
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Self::Enumerated { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeText => "input",
            Self::Checkbox => "checkbox",
            Self::Enumerated { .. } => "select",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Validation rule attached to a field.
///
/// Only `required` matters to column matching; the others are carried through
/// for the row validation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Validation {
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_message: Option<String>,
    },
    Unique {
        #[serde(default)]
        allow_empty: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_message: Option<String>,
    },
    Regex {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flags: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error_message: Option<String>,
    },
    #[serde(other)]
    Other,
}

/// A target schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateField {
    /// Unique, stable identifier.
    pub key: String,
    /// Human-readable name, reported by the unmatched-fields gate.
    pub label: String,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
    /// Other header spellings that identify this field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_matches: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl TemplateField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            validations: Vec::new(),
            alternate_matches: Vec::new(),
            description: None,
            example: None,
        }
    }

    pub fn input(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::FreeText)
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Checkbox)
    }

    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(key, label, FieldType::Enumerated { options })
    }

    /// Adds a `required` validation rule.
    #[must_use]
    pub fn required(mut self) -> Self {
        if !self.is_required() {
            self.validations.push(Validation::Required {
                error_message: None,
            });
        }
        self
    }

    #[must_use]
    pub fn with_alternate_matches<I, S>(mut self, matches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_matches = matches.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_required(&self) -> bool {
        self.validations
            .iter()
            .any(|v| matches!(v, Validation::Required { .. }))
    }

    /// Options of an enumerated field, empty for every other type.
    pub fn options(&self) -> &[SelectOption] {
        match &self.field_type {
            FieldType::Enumerated { options } => options,
            FieldType::FreeText | FieldType::Checkbox | FieldType::Unrecognized => &[],
        }
    }
}

/// Checks that every field has a non-empty key and that keys are unique.
pub fn validate_catalog(fields: &[TemplateField]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if field.key.trim().is_empty() {
            return Err(ModelError::EmptyFieldKey);
        }
        if !seen.insert(field.key.as_str()) {
            return Err(ModelError::DuplicateFieldKey(field.key.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wizard_config() {
        let json = r#"[
            {"key": "name", "label": "Name", "fieldType": {"type": "input"},
             "validations": [{"rule": "required", "errorMessage": "Name is required"}],
             "alternateMatches": ["first name"]},
            {"key": "active", "label": "Active", "fieldType": {"type": "checkbox"}},
            {"key": "team", "label": "Team", "fieldType": {"type": "select",
             "options": [{"label": "Team One", "value": "one"}]}},
            {"key": "when", "label": "When", "fieldType": {"type": "datepicker"}}
        ]"#;
        let fields: Vec<TemplateField> = serde_json::from_str(json).unwrap();

        assert_eq!(fields[0].field_type, FieldType::FreeText);
        assert!(fields[0].is_required());
        assert_eq!(fields[0].alternate_matches, vec!["first name".to_string()]);
        assert_eq!(fields[1].field_type, FieldType::Checkbox);
        assert!(!fields[1].is_required());
        assert_eq!(fields[2].options(), &[SelectOption::new("Team One", "one")]);
        assert_eq!(fields[3].field_type, FieldType::Unrecognized);
        assert!(fields[3].options().is_empty());
    }

    #[test]
    fn unknown_validation_rule_is_tolerated() {
        let json = r#"{"key": "age", "label": "Age", "fieldType": {"type": "input"},
            "validations": [{"rule": "custom"}, {"rule": "unique", "allowEmpty": true}]}"#;
        let field: TemplateField = serde_json::from_str(json).unwrap();
        assert_eq!(field.validations[0], Validation::Other);
        assert!(!field.is_required());
    }

    #[test]
    fn required_is_not_duplicated() {
        let field = TemplateField::input("name", "Name").required().required();
        assert_eq!(field.validations.len(), 1);
    }

    #[test]
    fn catalog_rejects_duplicate_and_empty_keys() {
        let dup = vec![
            TemplateField::input("name", "Name"),
            TemplateField::checkbox("name", "Other"),
        ];
        assert_eq!(
            validate_catalog(&dup),
            Err(ModelError::DuplicateFieldKey("name".to_string()))
        );
        let empty = vec![TemplateField::input(" ", "Blank")];
        assert_eq!(validate_catalog(&empty), Err(ModelError::EmptyFieldKey));
        assert!(validate_catalog(&[TemplateField::input("a", "A")]).is_ok());
    }
}
