//! The `unique_https_urls` function is the kernel of the application. The
//! `table` module reads a delimited file into a header row and data rows,
//! `extract` picks the qualifying HTTPS URLs out of a chosen column, `set`
//! computes the symmetric difference of two URL sets, and `output` writes the
//! result as a one-column CSV. The `args` module parses the command line.
//!
//! Current Limitations:
//! * The delimiter is always a comma; there's no sniffing for tabs or
//!   semicolons.
//! * Files without a byte-order mark are decoded as windows-1252, so a
//!   BOM-less UTF-8 file with non-ASCII cells is mis-decoded rather than
//!   rejected.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

use std::path::Path;

pub mod args;
pub mod error;
use crate::error::Result;
pub mod extract;
use crate::extract::qualifying_urls;
pub mod output;
pub mod set;
use crate::set::{symmetric_difference, UrlSet};
pub mod table;
use crate::table::Table;

/// Reads `first_column` of the file at `first` and `second_column` of the
/// file at `second`, and returns the HTTPS URLs that appear in exactly one of
/// the two columns.
///
/// Each column is treated as a set: a cell value is trimmed of leading and
/// trailing whitespace and kept if it starts with `https://`, and duplicates
/// within a column count once. URLs found in both columns are dropped. The
/// survivors keep their first-seen order, those from `first` before those
/// from `second`.
///
/// Fails if either file can't be read or decoded, or if a named column is
/// missing from its file's header row.
pub fn unique_https_urls(
    first: &Path,
    first_column: &str,
    second: &Path,
    second_column: &str,
) -> Result<UrlSet> {
    let first = Table::read_path(first)?;
    first.require_column(first_column)?;
    let second = Table::read_path(second)?;
    second.require_column(second_column)?;

    let ours = qualifying_urls(&first, first_column);
    let theirs = qualifying_urls(&second, second_column);
    Ok(symmetric_difference(&ours, &theirs))
}
