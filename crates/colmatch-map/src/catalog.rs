//! Read-only lookups over the template field catalog.

use colmatch_model::{SelectOption, TemplateField, validate_catalog};

use crate::error::Result;

/// Finds a field by key.
pub fn find_field<'a>(fields: &'a [TemplateField], key: &str) -> Option<&'a TemplateField> {
    fields.iter().find(|field| field.key == key)
}

/// Options of an enumerated field; empty for every other field type.
pub fn options_of(field: &TemplateField) -> &[SelectOption] {
    field.options()
}

/// The template fields of one matching session.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: Vec<TemplateField>,
}

impl FieldCatalog {
    /// Builds a catalog, rejecting empty or duplicate keys.
    pub fn new(fields: Vec<TemplateField>) -> Result<Self> {
        validate_catalog(&fields)?;
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[TemplateField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&TemplateField> {
        find_field(&self.fields, key)
    }

    /// Options for the field with `key`, empty when the key is unknown or the
    /// field is not a select.
    pub fn field_options(&self, key: &str) -> &[SelectOption] {
        self.find(key).map(options_of).unwrap_or_default()
    }

    /// Fields carrying a `required` rule, in catalog order.
    pub fn required_fields(&self) -> impl Iterator<Item = &TemplateField> {
        self.fields.iter().filter(|field| field.is_required())
    }
}
