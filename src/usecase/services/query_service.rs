use crate::domain::entities::dataset::{FilterSpec, PageResult, Row, Team};

/// Applies the active filter to the master collection, producing the view.
///
/// The two stages AND-compose in fixed order: team membership on the
/// key-column value first, then a case-folded substring search across
/// every column. Row order is preserved and `master` is never mutated.
/// A team key with no matching configuration entry disables the team
/// stage rather than erroring.
pub fn apply_filter(master: &[Row], spec: &FilterSpec, teams: &[Team]) -> Vec<Row> {
    let team = spec
        .team
        .as_deref()
        .and_then(|key| teams.iter().find(|team| team.key == key));

    let search = spec.search.trim().to_lowercase();

    master
        .iter()
        .filter(|row| team.map_or(true, |team| team.contains(row.key())))
        .filter(|row| {
            if search.is_empty() {
                return true;
            }
            row.cells
                .iter()
                .any(|cell| cell.to_lowercase().contains(&search))
        })
        .cloned()
        .collect()
}

/// Cuts the requested page out of the view.
///
/// `total_pages` is never below 1, even for an empty view. Out-of-range
/// page numbers (including zero and negatives) are clamped into
/// `1..=total_pages`, so a view that shrank under the current page pulls
/// the page back instead of erroring. A page size below 1 is treated as 1.
pub fn paginate(view: &[Row], page_size: i64, requested_page: i64) -> PageResult {
    let page_size = page_size.max(1);
    let total = view.len() as i64;
    let total_pages = ((total + page_size - 1) / page_size).max(1);
    let page = requested_page.clamp(1, total_pages);

    let start = ((page - 1) * page_size) as usize;
    let end = (start + page_size as usize).min(view.len());
    let rows = if start < view.len() {
        view[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        rows,
        page,
        total_pages,
    }
}
