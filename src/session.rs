use tracing::{debug, info, warn};

use crate::domain::entities::dataset::{Columns, FilterSpec, PageResult, PageState, Row, Team};
use crate::domain::entities::edit::CellEdit;
use crate::error::DatasetError;
use crate::infra::csv::decode::{decode_csv, ParsedTable};
use crate::usecase::services::edit_service::{apply_cell_edit, merge_append};
use crate::usecase::services::export_service;
use crate::usecase::services::import_service::validate_load;
use crate::usecase::services::query_service::{apply_filter, paginate};

/// The single owner of all dataset state for one interactive session.
///
/// Master collection, filter spec, and page state are the source of
/// truth. The view is re-derived from them after every mutation except a
/// cell edit, which patches the cached view in place so the edited row
/// stays on the visible page. The slice itself is computed on read, so
/// the page clamp is always applied against the current view.
///
/// Everything runs synchronously on the caller's thread; operations run
/// to completion before the next one starts.
#[derive(Debug, Default)]
pub struct Session {
    teams: Vec<Team>,
    columns: Columns,
    master: Vec<Row>,
    view: Vec<Row>,
    filter: FilterSpec,
    pages: PageState,
    source_name: Option<String>,
}

impl Session {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::default()
        }
    }

    /// Decodes CSV text and replaces the dataset with it. Returns the
    /// number of rows loaded.
    pub fn load_csv(&mut self, source_name: &str, text: &str) -> Result<usize, DatasetError> {
        self.load(decode_csv(text), source_name)
    }

    /// Replaces the dataset with an already decoded table.
    ///
    /// On failure nothing changes and any prior dataset stays loaded. On
    /// success the surviving rows become the master collection in their
    /// original order and all filter and page state falls back to
    /// defaults.
    pub fn load(&mut self, parsed: ParsedTable, source_name: &str) -> Result<usize, DatasetError> {
        let loaded = validate_load(parsed)?;
        let row_count = loaded.rows.len();

        self.columns = loaded.columns;
        self.master = loaded.rows;
        self.filter = FilterSpec::default();
        self.pages = PageState::default();
        self.source_name = Some(source_name.to_string());
        self.refresh_view();

        info!(rows = row_count, source = source_name, "loaded dataset");
        Ok(row_count)
    }

    /// Clears the dataset and all derived state. The team roster is
    /// session configuration and survives a reset.
    pub fn reset(&mut self) {
        *self = Self {
            teams: std::mem::take(&mut self.teams),
            ..Self::default()
        };
        info!("session reset");
    }

    pub fn key_column(&self) -> Option<&str> {
        self.columns.key()
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
        self.refresh_view();
        debug!(term, view = self.view.len(), "search updated");
    }

    /// Selects the team filter; `None` clears it. A key with no matching
    /// configuration entry stays selected but matches all rows at filter
    /// time.
    pub fn set_team(&mut self, key: Option<&str>) {
        if let Some(key) = key {
            if !self.teams.iter().any(|team| team.key == key) {
                warn!(key, "unknown team key; filter will match all rows");
            }
        }
        self.filter.team = key.map(str::to_string);
        self.refresh_view();
        debug!(team = ?self.filter.team, view = self.view.len(), "team filter updated");
    }

    pub fn set_page(&mut self, page: i64) {
        self.pages.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.pages.page_size = page_size.max(1);
        self.pages.page = 1;
    }

    /// The currently visible slice, derived on read so the page clamp is
    /// applied against the latest view.
    pub fn page(&self) -> PageResult {
        paginate(&self.view, self.pages.page_size, self.pages.page)
    }

    /// Applies a single-cell edit to master and cached view; returns the
    /// number of master rows touched. Key-column edits are rejected.
    pub fn edit_cell(&mut self, edit: &CellEdit) -> usize {
        if self.columns.key() == Some(edit.column.as_str()) {
            warn!(column = %edit.column, "refusing edit of key column");
            return 0;
        }
        let touched = apply_cell_edit(&self.columns, &mut self.master, &mut self.view, edit);
        debug!(row = %edit.row_key, column = %edit.column, touched, "cell edited");
        touched
    }

    /// Appends candidates whose key is not already present. The view is
    /// re-derived afterwards so the active filter applies to new rows.
    pub fn append_rows(&mut self, candidates: Vec<Row>) -> Result<usize, DatasetError> {
        let appended = merge_append(&self.columns, &mut self.master, candidates)?;
        self.refresh_view();
        info!(appended, total = self.master.len(), "rows appended");
        Ok(appended)
    }

    /// Serializes the full master collection (not the filtered view) back
    /// to CSV text.
    pub fn export_csv(&self) -> anyhow::Result<String> {
        let text = export_service::export_csv(&self.columns, &self.master)?;
        info!(rows = self.master.len(), "exported dataset");
        Ok(text)
    }

    pub fn export_file_name(&self) -> String {
        export_service::export_file_name(self.source_name.as_deref())
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn master(&self) -> &[Row] {
        &self.master
    }

    pub fn view(&self) -> &[Row] {
        &self.view
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page_state(&self) -> PageState {
        self.pages
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    fn refresh_view(&mut self) {
        self.view = apply_filter(&self.master, &self.filter, &self.teams);
    }
}
