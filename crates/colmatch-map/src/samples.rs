//! Distinct value discovery over sample rows.

use colmatch_model::{RawCell, Row};

/// Distinct values of column `index`, in first-seen order.
///
/// Rows shorter than `index + 1` contribute an absent value, which is itself
/// deduplicated like any other value.
pub fn extract_samples(rows: &[Row], index: usize) -> Vec<Option<RawCell>> {
    let mut distinct: Vec<Option<RawCell>> = Vec::new();
    for row in rows {
        let cell = row.get(index);
        if !distinct.iter().any(|seen| seen.as_ref() == cell) {
            distinct.push(cell.cloned());
        }
    }
    distinct
}

/// Cells of column `index` for display, one per row, duplicates kept.
pub fn preview_entries(rows: &[Row], index: usize) -> Vec<Option<&RawCell>> {
    rows.iter().map(|row| row.get(index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(values: &[&str]) -> Vec<Row> {
        values.iter().map(|v| vec![RawCell::text(*v)]).collect()
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let rows = text_rows(&["a", "b", "a", "c"]);
        assert_eq!(
            extract_samples(&rows, 0),
            vec![
                Some(RawCell::text("a")),
                Some(RawCell::text("b")),
                Some(RawCell::text("c")),
            ]
        );
    }

    #[test]
    fn short_rows_collapse_to_one_absent_entry() {
        let rows = vec![
            vec![RawCell::text("x"), RawCell::text("1")],
            vec![RawCell::text("y")],
            vec![],
            vec![RawCell::text("z"), RawCell::text("1")],
        ];
        assert_eq!(extract_samples(&rows, 1), vec![Some(RawCell::text("1")), None]);
    }

    #[test]
    fn numbers_and_text_stay_distinct() {
        let rows = vec![
            vec![RawCell::Number(1.0)],
            vec![RawCell::text("1")],
            vec![RawCell::Number(1.0)],
        ];
        assert_eq!(extract_samples(&rows, 0).len(), 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_samples(&[], 3).is_empty());
    }

    #[test]
    fn preview_keeps_duplicates() {
        let rows = text_rows(&["a", "a"]);
        let entries = preview_entries(&rows, 0);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
        assert_eq!(preview_entries(&rows, 1), vec![None, None]);
    }
}
