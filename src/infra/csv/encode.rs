use anyhow::{Context, Result};

use crate::domain::entities::dataset::{Columns, Row};

/// Writes the column list and rows back out as CSV text, header first,
/// one row per line. Rows are padded or cut to the column count so the
/// output stays rectangular.
pub fn encode_csv(columns: &Columns, rows: &[Row]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns.names())
        .context("failed to write csv header")?;

    let width = columns.len();
    for row in rows {
        let record: Vec<&str> = (0..width).map(|idx| row.get(idx)).collect();
        writer
            .write_record(&record)
            .context("failed to write csv row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv writer: {}", err.error()))?;
    String::from_utf8(bytes).context("csv output was not valid utf-8")
}
