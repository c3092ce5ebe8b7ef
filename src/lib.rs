//! roster: in-memory tabular dataset sessions.
//!
//! A [`Session`] owns a master row collection loaded from CSV, a filtered
//! view derived from a free-text search and an optional team filter, and a
//! paginated slice of that view. Cell edits patch master and view in place
//! so an edited row never drops off the visible page; every other mutation
//! re-derives the view from the master collection. Rendering and file I/O
//! stay on the host side: the crate takes CSV text in and hands CSV text
//! back.

pub mod domain;
pub mod error;
pub mod infra;
pub mod session;
pub mod usecase;

pub use domain::entities::dataset::{Columns, FilterSpec, PageResult, PageState, Row, Team};
pub use domain::entities::edit::CellEdit;
pub use error::DatasetError;
pub use infra::config::teams::{load_teams_file, load_teams_json};
pub use infra::csv::decode::{decode_csv, ParsedTable};
pub use infra::csv::encode::encode_csv;
pub use session::Session;
