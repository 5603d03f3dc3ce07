//! Integration tests for fixture loading and replay.

use std::io::Write;

use colmatch_cli::fixture::{
    Action, EXIT_BLOCKED, EXIT_NEEDS_CONFIRMATION, MatchOutcome, RunOptions, SessionFixture,
    run_fixture,
};
use colmatch_map::SubmitDecision;
use colmatch_model::ColumnState;

const FIXTURE: &str = r#"{
    "rows": [
        ["Exported 2024-05-01"],
        ["Name", "Surname", "Manager?", "Notes"],
        ["Ann", "Lee", "Y", "first"],
        ["Bob", "Ray", "N"],
        ["Cid", "Fox", "Y", "third"]
    ],
    "headerIndex": 1,
    "fields": [
        {"key": "name", "label": "Name", "fieldType": {"type": "input"},
         "validations": [{"rule": "required"}]},
        {"key": "surname", "label": "Surname", "fieldType": {"type": "input"},
         "validations": [{"rule": "required"}]},
        {"key": "isManager", "label": "Is manager", "fieldType": {"type": "select",
         "options": [{"label": "Yes", "value": "yes"}, {"label": "No", "value": "no"}]},
         "alternateMatches": ["manager?"]}
    ],
    "config": {"allowInvalidSubmit": false},
    "actions": [
        {"action": "assign", "column": 0, "field": "name"},
        {"action": "assign", "column": 2, "field": "isManager"},
        {"action": "mapOption", "column": 2, "entry": 0, "option": "yes"},
        {"action": "ignore", "column": 3}
    ]
}"#;

fn fixture() -> SessionFixture {
    serde_json::from_str(FIXTURE).expect("parse fixture")
}

#[test]
fn actions_deserialize_from_tagged_json() {
    let fixture = fixture();
    assert_eq!(fixture.header_index, 1);
    assert_eq!(
        fixture.actions[2],
        Action::MapOption {
            column: 2,
            entry: 0,
            option: Some("yes".to_string())
        }
    );
    let clear: Action =
        serde_json::from_str(r#"{"action": "assign", "column": 1}"#).expect("parse action");
    assert_eq!(
        clear,
        Action::Assign {
            column: 1,
            field: None
        }
    );
    let auto: Action = serde_json::from_str(r#"{"action": "autoMatch"}"#).expect("parse action");
    assert_eq!(auto, Action::AutoMatch);
}

#[test]
fn replay_reports_blocked_gate() {
    let outcome = run_fixture(fixture(), RunOptions::default()).expect("replay");

    assert_eq!(outcome.columns.len(), 4);
    assert!(outcome.columns[0].is_bound_to("name"));
    assert!(outcome.columns[1].is_empty());
    assert!(outcome.columns[3].is_ignored());
    let options = outcome.columns[2].matched_options().expect("select column");
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value.as_deref(), Some("yes"));
    assert_eq!(options[1].value, None);

    assert_eq!(
        outcome.previews[3],
        vec![Some("first".to_string()), None]
    );
    assert_eq!(
        outcome.decision,
        SubmitDecision::Blocked {
            unmatched: vec!["Surname".to_string()]
        }
    );
}

#[test]
fn overrides_apply_on_top_of_fixture() {
    let options = RunOptions {
        auto_match: true,
        allow_invalid_submit: true,
        sample_rows: Some(1),
    };
    let mut fixture = fixture();
    fixture.actions.clear();
    let outcome = run_fixture(fixture, options).expect("replay");

    assert!(outcome.columns[0].is_bound_to("name"));
    assert!(outcome.columns[1].is_bound_to("surname"));
    assert_eq!(
        outcome.columns[2],
        ColumnState::MatchedEnumerated {
            index: 2,
            header: "Manager?".to_string(),
            value: "isManager".to_string(),
            matched_options: vec![colmatch_model::MatchedOption::unmapped(Some(
                colmatch_model::RawCell::text("Y")
            ))],
        }
    );
    assert_eq!(outcome.decision, SubmitDecision::Proceed);
}

#[test]
fn failing_action_aborts_replay() {
    let mut fixture = fixture();
    fixture.actions.push(Action::Ignore { column: 7 });
    let error = run_fixture(fixture, RunOptions::default()).expect_err("out of range");
    let message = format!("{error:#}");
    assert!(message.contains("action 4"));
    assert!(message.contains("column index 7 is out of range for 4 columns"));
}

#[test]
fn bad_header_index_is_reported() {
    let mut fixture = fixture();
    fixture.header_index = 10;
    let error = run_fixture(fixture, RunOptions::default()).expect_err("bad header");
    assert!(format!("{error:#}").contains("header row 10 is out of range"));
}

#[test]
fn loads_fixture_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");
    let fixture = SessionFixture::load(file.path()).expect("load fixture");
    assert_eq!(fixture.fields.len(), 3);
    assert_eq!(fixture.actions.len(), 4);

    let missing = SessionFixture::load(std::path::Path::new("/nonexistent/fixture.json"));
    assert!(format!("{:#}", missing.expect_err("missing file")).contains("read fixture"));
}

#[test]
fn outcome_serializes_for_presentation() {
    let outcome = run_fixture(fixture(), RunOptions::default()).expect("replay");
    let json = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(json["columns"][0]["type"], "matched");
    assert_eq!(json["columns"][2]["type"], "matchedEnumerated");
    assert_eq!(json["decision"]["decision"], "blocked");
    assert_eq!(json["decision"]["unmatched"][0], "Surname");
}

fn outcome_with(decision: SubmitDecision) -> MatchOutcome {
    MatchOutcome {
        columns: Vec::new(),
        previews: Vec::new(),
        decision,
    }
}

#[test]
fn exit_code_follows_decision() {
    let unmatched = vec!["Surname".to_string()];

    let proceed = outcome_with(SubmitDecision::Proceed);
    assert_eq!(proceed.exit_code(false), 0);
    assert_eq!(proceed.exit_code(true), 0);

    let confirm = outcome_with(SubmitDecision::Confirm {
        unmatched: unmatched.clone(),
    });
    assert_eq!(confirm.exit_code(false), EXIT_NEEDS_CONFIRMATION);
    assert_eq!(confirm.exit_code(true), 0);

    let blocked = outcome_with(SubmitDecision::Blocked { unmatched });
    assert_eq!(blocked.exit_code(false), EXIT_BLOCKED);
    assert_eq!(blocked.exit_code(true), EXIT_BLOCKED);
}

#[test]
fn replayed_fixture_exit_codes() {
    let blocked = run_fixture(fixture(), RunOptions::default()).expect("replay");
    assert_eq!(blocked.exit_code(true), EXIT_BLOCKED);

    let options = RunOptions {
        allow_invalid_submit: true,
        ..RunOptions::default()
    };
    let confirm = run_fixture(fixture(), options).expect("replay");
    assert_eq!(confirm.exit_code(false), EXIT_NEEDS_CONFIRMATION);
    assert_eq!(confirm.exit_code(true), 0);
}
