use std::collections::HashSet;

use crate::domain::entities::dataset::{Columns, Row};
use crate::domain::entities::edit::CellEdit;
use crate::error::DatasetError;

/// Rewrites one column of every row whose key matches the edit, in both
/// the master collection and the cached view.
///
/// The patch runs against the view independently of the filter, so a row
/// being edited stays on the visible page even when its new content would
/// no longer match a freshly derived view. All key matches are updated;
/// duplicate keys should not exist after a load but are tolerated here.
/// Key-column and unknown-column edits touch nothing and report zero.
///
/// Returns the number of master rows touched.
pub fn apply_cell_edit(
    columns: &Columns,
    master: &mut [Row],
    view: &mut [Row],
    edit: &CellEdit,
) -> usize {
    let Some(col_idx) = columns.index_of(&edit.column) else {
        return 0;
    };
    if col_idx == 0 {
        // Key column is read-only.
        return 0;
    }

    let touched = patch(master, col_idx, edit);
    patch(view, col_idx, edit);
    touched
}

fn patch(rows: &mut [Row], col_idx: usize, edit: &CellEdit) -> usize {
    let mut touched = 0;
    for row in rows.iter_mut().filter(|row| row.key() == edit.row_key) {
        if col_idx >= row.cells.len() {
            row.cells.resize(col_idx + 1, String::new());
        }
        row.cells[col_idx] = edit.value.clone();
        touched += 1;
    }
    touched
}

/// Appends candidate rows whose key is not already present in the master
/// collection, in their given order, after all existing rows. Each
/// appended row is resized to the full column width, filling missing
/// cells with empty strings.
///
/// An all-duplicate batch appends nothing and returns zero without error.
pub fn merge_append(
    columns: &Columns,
    master: &mut Vec<Row>,
    candidates: Vec<Row>,
) -> Result<usize, DatasetError> {
    if columns.len() < 2 {
        return Err(DatasetError::InsufficientColumns);
    }

    let existing: HashSet<String> = master.iter().map(|row| row.key().to_string()).collect();

    let mut appended = 0;
    for mut row in candidates {
        if existing.contains(row.key()) {
            continue;
        }
        row.cells.resize(columns.len(), String::new());
        master.push(row);
        appended += 1;
    }
    Ok(appended)
}
