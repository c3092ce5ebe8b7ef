use serde::{Deserialize, Serialize};

/// Ordered column names; the first entry is the key column whose value is
/// a row's identity. Set once when a dataset loads, immutable afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
}

impl Columns {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn key(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One record; cells are positionally aligned with the session's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// The key-column value. Opaque text, compared by equality only.
    pub fn key(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, idx: usize) -> &str {
        self.cells.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// A named, fixed set of row identities supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    pub name: String,
    pub ids: Vec<String>,
}

impl Team {
    /// Exact identity membership, never a substring match.
    pub fn contains(&self, row_key: &str) -> bool {
        self.ids.iter().any(|id| id == row_key)
    }
}

/// Active row restriction: optional team plus optional free-text search.
/// An unset axis places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub team: Option<String>,
    pub search: String,
}

impl FilterSpec {
    pub fn is_unrestricted(&self) -> bool {
        self.team.is_none() && self.search.trim().is_empty()
    }
}

/// Requested paging parameters. Both fields stay at 1 or above; requests
/// outside the valid range are clamped when the slice is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: i64,
    pub page: i64,
}

impl PageState {
    pub const DEFAULT_PAGE_SIZE: i64 = 50;
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

/// One computed slice of the view, with the page number actually served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<Row>,
    pub page: i64,
    pub total_pages: i64,
}
