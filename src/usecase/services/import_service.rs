use crate::domain::entities::dataset::{Columns, Row};
use crate::error::DatasetError;
use crate::infra::csv::decode::ParsedTable;

/// Validated load input: the rows that survived the blank-key drop plus
/// the column list that will become immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub columns: Columns,
    pub rows: Vec<Row>,
}

/// Checks a decoded table before it may replace a session's master
/// collection.
///
/// Fails fast with the first decoder error; drops rows whose key-column
/// value is blank, which also covers fully blank lines; rejects the load
/// outright when nothing survives. No session state is involved here, so
/// a failed load leaves any prior dataset untouched.
pub fn validate_load(parsed: ParsedTable) -> Result<LoadedTable, DatasetError> {
    if let Some(first) = parsed.errors.first() {
        return Err(DatasetError::CsvParse(first.clone()));
    }

    let rows: Vec<Row> = parsed
        .rows
        .into_iter()
        .filter(|row| !row.key().trim().is_empty())
        .collect();

    if rows.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    Ok(LoadedTable {
        columns: Columns::new(parsed.fields),
        rows,
    })
}
