//! Column set state for an interactive matching session.
//!
//! A [`MatchSession`] owns one [`ColumnState`] per header column. Every
//! operation recomputes only the column it targets and hands back its new
//! state, so a presentation layer can re-render that column alone.

use colmatch_model::{ColumnState, MatchConfig, RawCell, RawTable, Row, TemplateField};
use tracing::{debug, info, warn};

use crate::catalog::FieldCatalog;
use crate::classify::{classify, ignore};
use crate::error::{MatchError, Result};
use crate::gate::{SubmitDecision, unmatched_required_fields};
use crate::patterns::suggest_header_matches;
use crate::samples::preview_entries;

/// State of a column matching session for one table.
#[derive(Debug, Clone)]
pub struct MatchSession {
    table: RawTable,
    catalog: FieldCatalog,
    config: MatchConfig,
    columns: Vec<ColumnState>,
}

impl MatchSession {
    /// Starts a session with every header column [`ColumnState::Empty`].
    pub fn new(table: RawTable, fields: Vec<TemplateField>, config: MatchConfig) -> Result<Self> {
        let catalog = FieldCatalog::new(fields)?;
        let columns = table
            .header_labels()
            .into_iter()
            .enumerate()
            .map(|(index, header)| ColumnState::empty(index, header))
            .collect::<Vec<_>>();
        debug!(
            columns = columns.len(),
            data_rows = table.data_rows().len(),
            fields = catalog.len(),
            "match session started"
        );
        Ok(Self {
            table,
            catalog,
            config,
            columns,
        })
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Result<&ColumnState> {
        self.columns.get(index).ok_or(MatchError::InvalidIndex {
            index,
            len: self.columns.len(),
        })
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn table(&self) -> &RawTable {
        &self.table
    }

    /// Ends the session, keeping the final column set.
    pub fn into_columns(self) -> Vec<ColumnState> {
        self.columns
    }

    /// Rows scanned for distinct values when binding a select field.
    pub fn sample_rows(&self) -> &[Row] {
        self.table.sample_rows(self.config.sample_row_limit)
    }

    /// Binds column `index` to the field with `key`, or clears it when `key`
    /// is `None`.
    ///
    /// An unknown key clears the column as well.
    pub fn assign_field(&mut self, index: usize, key: Option<&str>) -> Result<&ColumnState> {
        let previous = self.column(index)?;
        let field = key.and_then(|key| {
            let field = self.catalog.find(key);
            if field.is_none() {
                warn!(column = index, field = key, "unknown field key, clearing column");
            }
            field
        });
        let next = classify(previous, field, Some(self.sample_rows()));
        Ok(self.replace(index, next))
    }

    /// Excludes column `index` from the import.
    pub fn ignore(&mut self, index: usize) -> Result<&ColumnState> {
        let next = ignore(self.column(index)?);
        Ok(self.replace(index, next))
    }

    /// Brings an ignored column back as [`ColumnState::Empty`].
    ///
    /// The binding the column had before it was ignored is not restored.
    pub fn revert_ignore(&mut self, index: usize) -> Result<&ColumnState> {
        let next = classify(self.column(index)?, None, None);
        Ok(self.replace(index, next))
    }

    /// Maps the raw value at position `entry` of an enumerated column to
    /// `option`, or clears the mapping when `option` is `None`.
    pub fn map_option(
        &mut self,
        index: usize,
        entry: usize,
        option: Option<&str>,
    ) -> Result<&ColumnState> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(index)
            .ok_or(MatchError::InvalidIndex { index, len })?;
        let ColumnState::MatchedEnumerated {
            value: key,
            matched_options,
            ..
        } = column
        else {
            return Err(MatchError::NotEnumerated { index });
        };
        if let Some(option) = option
            && !self
                .catalog
                .field_options(key)
                .iter()
                .any(|candidate| candidate.value == option)
        {
            return Err(MatchError::UnknownOption {
                field: key.clone(),
                value: option.to_string(),
            });
        }
        let entries = matched_options.len();
        let slot = matched_options
            .get_mut(entry)
            .ok_or(MatchError::InvalidEntry {
                index,
                entry,
                len: entries,
            })?;
        slot.value = option.map(str::to_string);
        debug!(column = index, entry, mapped = option.is_some(), "option mapping changed");
        Ok(&self.columns[index])
    }

    /// Binds every empty column whose header spells an unbound field.
    ///
    /// Returns the indices of the columns that were bound.
    pub fn auto_match(&mut self) -> Vec<usize> {
        let suggestions = suggest_header_matches(&self.columns, self.catalog.fields());
        let mut bound = Vec::with_capacity(suggestions.len());
        for (index, key) in suggestions {
            match self.assign_field(index, Some(key.as_str())) {
                Ok(_) => bound.push(index),
                Err(error) => {
                    warn!(column = index, field = %key, %error, "auto-match skipped column");
                }
            }
        }
        info!(bound = bound.len(), columns = self.columns.len(), "auto-matched headers");
        bound
    }

    /// Cells of the preview rows under column `index`.
    pub fn preview(&self, index: usize) -> Result<Vec<Option<&RawCell>>> {
        self.column(index)?;
        Ok(preview_entries(self.table.preview_rows(), index))
    }

    /// Labels of required fields without a bound column.
    pub fn unmatched_required_fields(&self) -> Vec<String> {
        unmatched_required_fields(&self.columns, self.catalog.fields())
    }

    /// Whether the wizard may advance, given the session's submit policy.
    pub fn submit_decision(&self) -> SubmitDecision {
        SubmitDecision::evaluate(
            self.unmatched_required_fields(),
            self.config.allow_invalid_submit,
        )
    }

    fn replace(&mut self, index: usize, next: ColumnState) -> &ColumnState {
        let slot = &mut self.columns[index];
        debug!(
            column = index,
            header = slot.header(),
            from = slot.kind(),
            to = next.kind(),
            field = next.field_key(),
            "column state changed"
        );
        *slot = next;
        slot
    }
}
