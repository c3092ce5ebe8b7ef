/// A single-cell edit addressed by row identity and column name.
///
/// The key column itself is never a valid target; identity stays stable
/// for the life of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row_key: String,
    pub column: String,
    pub value: String,
}
