use crate::domain::entities::dataset::Row;

/// Decoded CSV text before validation: column order, raw rows, and any
/// record-level errors the reader reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub fields: Vec<String>,
    pub rows: Vec<Row>,
    pub errors: Vec<String>,
}

/// Splits CSV text into records, first line as header.
///
/// Record-level failures (ragged lines, broken quoting) are collected
/// into `errors` instead of aborting the read; validation downstream
/// fails fast on the first one. Short records are padded with empty
/// fields up to the header width, extra fields are dropped.
pub fn decode_csv(text: &str) -> ParsedTable {
    let mut parsed = ParsedTable::default();
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            parsed.errors.push(err.to_string());
            return parsed;
        }
    };
    parsed.fields = headers.iter().map(str::to_string).collect();
    if parsed.fields.is_empty() {
        parsed.errors.push("csv header is required".to_string());
        return parsed;
    }

    let width = parsed.fields.len();
    for record in reader.records() {
        match record {
            Ok(record) => {
                let cells = (0..width)
                    .map(|idx| record.get(idx).unwrap_or("").to_string())
                    .collect();
                parsed.rows.push(Row::new(cells));
            }
            Err(err) => parsed.errors.push(err.to_string()),
        }
    }

    parsed
}
