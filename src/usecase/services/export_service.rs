use anyhow::Result;

use crate::domain::entities::dataset::{Columns, Row};
use crate::infra::csv::encode::encode_csv;

/// Serializes the master collection back to CSV text, header first,
/// column order preserved.
pub fn export_csv(columns: &Columns, rows: &[Row]) -> Result<String> {
    encode_csv(columns, rows)
}

/// Download name for an export: the loaded file's stem with an `_edited`
/// suffix, or a date-stamped fallback when no source name is known.
pub fn export_file_name(source_name: Option<&str>) -> String {
    match source_name.and_then(file_stem) {
        Some(stem) => format!("{stem}_edited.csv"),
        None => format!("dataset_{}.csv", chrono::Local::now().format("%m%d")),
    }
}

fn file_stem(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let stem = trimmed
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(trimmed);
    Some(stem)
}
