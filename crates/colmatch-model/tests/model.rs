//! Tests for colmatch-model types.

use colmatch_model::{
    ColumnState, FieldType, MatchedOption, RawCell, RawTable, SelectOption, TemplateField,
};

#[test]
fn numeric_header_cells_become_labels() {
    let table = RawTable::new(
        vec![
            vec![RawCell::text("Name"), RawCell::Number(2024.0), RawCell::Number(0.5)],
            vec![RawCell::text("Ann")],
        ],
        0,
    )
    .expect("valid table");
    assert_eq!(table.header_labels(), vec!["Name", "2024", "0.5"]);
}

#[test]
fn field_catalog_serializes_with_wire_tags() {
    let field = TemplateField::select(
        "team",
        "Team",
        vec![SelectOption::new("Team One", "one")],
    )
    .required();
    let json = serde_json::to_value(&field).expect("serialize field");
    assert_eq!(json["fieldType"]["type"], "select");
    assert_eq!(json["validations"][0]["rule"], "required");
    assert!(json.get("alternateMatches").is_none());

    let round: TemplateField = serde_json::from_value(json).expect("deserialize field");
    assert_eq!(round, field);
    assert!(matches!(round.field_type, FieldType::Enumerated { .. }));
}

#[test]
fn column_set_round_trips_through_json() {
    let columns = vec![
        ColumnState::empty(0, "Name"),
        ColumnState::Ignored {
            index: 1,
            header: "Notes".to_string(),
        },
        ColumnState::MatchedEnumerated {
            index: 2,
            header: "Team".to_string(),
            value: "team".to_string(),
            matched_options: vec![
                MatchedOption {
                    entry: Some(RawCell::Number(1.0)),
                    value: Some("one".to_string()),
                },
                MatchedOption::unmapped(None),
            ],
        },
    ];
    let json = serde_json::to_string(&columns).expect("serialize columns");
    let round: Vec<ColumnState> = serde_json::from_str(&json).expect("deserialize columns");
    assert_eq!(round, columns);
}
