use thiserror::Error;

/// Load/append failures surfaced to the user for corrective action.
///
/// All variants are local and recoverable; the operation that raised them
/// leaves any previously loaded dataset untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("failed to parse csv: {0}")]
    CsvParse(String),
    #[error("no usable rows in dataset")]
    EmptyDataset,
    #[error("at least two columns are required before rows can be appended")]
    InsufficientColumns,
}
