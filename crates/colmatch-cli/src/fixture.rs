//! Session fixtures: a decoded table, a field catalog and the user actions to
//! replay against them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, trace};

use colmatch_map::{MatchSession, SubmitDecision};
use colmatch_model::{ColumnState, MatchConfig, RawTable, Row, TemplateField};

use crate::logging::redact_value;

/// One user interaction with the matching step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    /// Select a field for a column; `null` clears the selection.
    Assign {
        column: usize,
        #[serde(default)]
        field: Option<String>,
    },
    Ignore {
        column: usize,
    },
    RevertIgnore {
        column: usize,
    },
    /// Map one distinct value of a select column; `null` clears the mapping.
    MapOption {
        column: usize,
        entry: usize,
        #[serde(default)]
        option: Option<String>,
    },
    AutoMatch,
}

impl Action {
    pub fn apply(&self, session: &mut MatchSession) -> colmatch_map::Result<()> {
        match self {
            Self::Assign { column, field } => {
                session.assign_field(*column, field.as_deref())?;
            }
            Self::Ignore { column } => {
                session.ignore(*column)?;
            }
            Self::RevertIgnore { column } => {
                session.revert_ignore(*column)?;
            }
            Self::MapOption {
                column,
                entry,
                option,
            } => {
                let state = session.map_option(*column, *entry, option.as_deref())?;
                if let Some(raw) = state
                    .matched_options()
                    .and_then(|options| options.get(*entry))
                    .and_then(|mapped| mapped.entry.as_ref())
                {
                    let raw = raw.to_string();
                    trace!(
                        column,
                        entry = redact_value(&raw),
                        option = option.as_deref(),
                        "mapped entry"
                    );
                }
            }
            Self::AutoMatch => {
                session.auto_match();
            }
        }
        Ok(())
    }
}

/// A matching session as handed over by the surrounding wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFixture {
    pub rows: Vec<Row>,
    #[serde(default)]
    pub header_index: usize,
    pub fields: Vec<TemplateField>,
    #[serde(default)]
    pub config: MatchConfig,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl SessionFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read fixture {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse fixture {}", path.display()))
    }
}

/// Command-line overrides applied on top of a fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub auto_match: bool,
    pub allow_invalid_submit: bool,
    pub sample_rows: Option<usize>,
}

/// Exit code when required fields are unmatched and continuing is not allowed.
pub const EXIT_BLOCKED: i32 = 1;
/// Exit code when required fields are unmatched and the user must confirm.
pub const EXIT_NEEDS_CONFIRMATION: i32 = 2;

/// Final column set and gate decision of a replayed session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub columns: Vec<ColumnState>,
    /// Preview cells per column, rendered as text.
    pub previews: Vec<Vec<Option<String>>>,
    pub decision: SubmitDecision,
}

impl MatchOutcome {
    /// Process exit code for the gate decision.
    ///
    /// `accept_unmatched` answers the confirmation prompt; it never lifts a
    /// blocked gate.
    pub fn exit_code(&self, accept_unmatched: bool) -> i32 {
        match self.decision {
            SubmitDecision::Proceed => 0,
            SubmitDecision::Confirm { .. } if accept_unmatched => 0,
            SubmitDecision::Confirm { .. } => EXIT_NEEDS_CONFIRMATION,
            SubmitDecision::Blocked { .. } => EXIT_BLOCKED,
        }
    }
}

/// Builds a session from `fixture` and replays its actions in order.
///
/// The first failing action aborts the replay.
pub fn run_fixture(fixture: SessionFixture, options: RunOptions) -> Result<MatchOutcome> {
    let span = info_span!("match", actions = fixture.actions.len());
    let _guard = span.enter();

    let mut config = fixture.config;
    if options.allow_invalid_submit {
        config.allow_invalid_submit = true;
    }
    if options.sample_rows.is_some() {
        config.sample_row_limit = options.sample_rows;
    }
    let table = RawTable::new(fixture.rows, fixture.header_index).context("build table")?;
    let mut session = MatchSession::new(table, fixture.fields, config).context("start session")?;

    if options.auto_match {
        Action::AutoMatch.apply(&mut session)?;
    }
    for (position, action) in fixture.actions.iter().enumerate() {
        trace!(position, ?action, "applying action");
        action
            .apply(&mut session)
            .with_context(|| format!("action {position} ({action:?})"))?;
    }

    let previews = (0..session.columns().len())
        .map(|index| {
            session.preview(index).map(|cells| {
                cells
                    .into_iter()
                    .map(|cell| cell.map(ToString::to_string))
                    .collect()
            })
        })
        .collect::<colmatch_map::Result<Vec<_>>>()?;
    let decision = session.submit_decision();
    info!(
        columns = session.columns().len(),
        unmatched = decision.unmatched().len(),
        "session replayed"
    );
    Ok(MatchOutcome {
        columns: session.into_columns(),
        previews,
        decision,
    })
}
