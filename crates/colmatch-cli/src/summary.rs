use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colmatch_map::SubmitDecision;
use colmatch_model::{ColumnState, TemplateField};

use colmatch_cli::fixture::MatchOutcome;

pub fn print_outcome(outcome: &MatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Preview"),
        header_cell("State"),
        header_cell("Field"),
        header_cell("Options"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for (column, preview) in outcome.columns.iter().zip(&outcome.previews) {
        table.add_row(vec![
            Cell::new(column.index()),
            Cell::new(column.header()).add_attribute(Attribute::Bold),
            preview_cell(preview),
            state_cell(column),
            column.field_key().map_or_else(|| dim_cell("-"), Cell::new),
            options_cell(column),
        ]);
    }
    println!("{table}");
    print_option_table(&outcome.columns);
    print_decision(&outcome.decision);
}

fn print_option_table(columns: &[ColumnState]) {
    let enumerated: Vec<&ColumnState> = columns
        .iter()
        .filter(|column| column.matched_options().is_some_and(|o| !o.is_empty()))
        .collect();
    if enumerated.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Entry"),
        header_cell("Mapped to"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in enumerated {
        for option in column.matched_options().unwrap_or_default() {
            table.add_row(vec![
                Cell::new(column.index()),
                Cell::new(column.header()),
                option
                    .entry
                    .as_ref()
                    .map_or_else(|| dim_cell("(blank)"), Cell::new),
                option
                    .value
                    .as_deref()
                    .map_or_else(|| Cell::new("unmapped").fg(Color::Yellow), Cell::new),
            ]);
        }
    }
    println!();
    println!("Select values:");
    println!("{table}");
}

fn print_decision(decision: &SubmitDecision) {
    println!();
    match decision {
        SubmitDecision::Proceed => println!("All required fields are matched."),
        SubmitDecision::Confirm { .. } => {
            println!("Unmatched required fields: {}", decision.prompt_list());
            println!("Continuing is allowed after confirmation.");
        }
        SubmitDecision::Blocked { .. } => {
            eprintln!("Unmatched required fields: {}", decision.prompt_list());
            eprintln!("Match these fields before continuing.");
        }
    }
}

pub fn print_fields(fields: &[TemplateField]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in fields {
        let options = field
            .options()
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&field.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&field.label),
            Cell::new(field.field_type.as_str()),
            if field.is_required() {
                Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
            if options.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(options)
            },
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn preview_cell(preview: &[Option<String>]) -> Cell {
    if preview.is_empty() {
        return dim_cell("-");
    }
    let text = preview
        .iter()
        .map(|cell| cell.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n");
    Cell::new(text).fg(Color::DarkGrey)
}

fn state_cell(column: &ColumnState) -> Cell {
    match column {
        ColumnState::Empty { .. } => Cell::new("unmatched").fg(Color::Yellow),
        ColumnState::Ignored { .. } => dim_cell("ignored"),
        ColumnState::Matched { .. } => Cell::new("matched").fg(Color::Green),
        ColumnState::MatchedEnumerated { .. } if column.all_options_mapped() => {
            Cell::new("matched").fg(Color::Green)
        }
        ColumnState::MatchedEnumerated { .. } => Cell::new("matched*").fg(Color::Cyan),
    }
}

fn options_cell(column: &ColumnState) -> Cell {
    match column.matched_options() {
        Some(options) => {
            let mapped = options.iter().filter(|o| o.is_mapped()).count();
            let cell = Cell::new(format!("{mapped}/{}", options.len()));
            if mapped == options.len() {
                cell.fg(Color::Green)
            } else {
                cell.fg(Color::Yellow)
            }
        }
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
