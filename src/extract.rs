//! The column extractor: pulls the qualifying values of one chosen
//! column out of a [`Table`].

use crate::set::UrlSet;
use crate::table::Table;

/// The scheme prefix a cell value must carry, byte for byte, to
/// qualify. No case folding and no scheme normalization: `HTTPS://`
/// and `http://` values do not qualify.
pub const HTTPS_PREFIX: &str = "https://";

/// Trims surrounding whitespace from `cell` and returns the trimmed
/// value if (and only if) it qualifies.
#[must_use]
pub fn qualifying(cell: &str) -> Option<&str> {
    let cell = cell.trim();
    cell.starts_with(HTTPS_PREFIX).then_some(cell)
}

/// The set of distinct qualifying values in `column`, in first-seen
/// row order.
///
/// Empty cells and cells missing from short rows are skipped. A
/// `column` that is not in the table's header yields an empty set
/// rather than an error; callers that would rather fail fast validate
/// with [`Table::require_column`] before extracting.
#[must_use]
pub fn qualifying_urls(table: &Table, column: &str) -> UrlSet {
    let mut urls = UrlSet::default();
    let Some(index) = table.column_index(column) else { return urls };
    for row in table.rows() {
        let Some(cell) = row.get(index) else { continue };
        if let Some(url) = qualifying(cell) {
            urls.insert(url.to_owned());
        }
    }
    urls
}
