//! The tabular reader: turns one delimited-text file into an in-memory
//! [`Table`] keyed by the column names of its header row.
//!
//! Inputs are decoded as windows-1252, the legacy Western encoding
//! most exports arrive in, unless a Unicode byte order mark says the
//! file is really UTF-8 or UTF-16. Decoding never
//! substitutes replacement characters: a malformed sequence is a
//! [`MalformedInput`](UrlDiffError::MalformedInput) error, so mojibake
//! can't leak into the comparison downstream.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;

use crate::error::{Result, UrlDiffError};

/// An in-memory delimited-text file: the ordered column names of its
/// header row, plus its data rows.
///
/// Rows may be shorter than the header; a short row simply has no value
/// in the trailing columns. A `Table` is built once per input file and
/// dropped as soon as its column has been extracted.
#[derive(Debug)]
pub struct Table {
    path: PathBuf,
    columns: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Reads `path` to completion and parses it.
    ///
    /// The first record is the header row; its cells become the
    /// table's column names, verbatim. An input with no header row at
    /// all (an empty file, or nothing but a byte order mark) is
    /// malformed, but a file that ends right after its header is a
    /// legitimate table with zero rows.
    pub fn read_path(path: &Path) -> Result<Table> {
        let raw = fs::read(path).map_err(|e| UrlDiffError::read(path, e))?;
        let text = decode(path, &raw)?;
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

        let header = reader.headers().map_err(|e| malformed(path, &e))?;
        if header.is_empty() {
            return Err(UrlDiffError::MalformedInput {
                path: path.to_owned(),
                reason: "missing header row".to_string(),
            });
        }
        let columns = header.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.map_err(|e| malformed(path, &e))?);
        }
        Ok(Table { path: path.to_owned(), columns, rows })
    }

    /// The column names discovered in the header row, in file order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The position of `name` in the header, or `None`.
    ///
    /// Matching is exact: case-sensitive and untrimmed. When a header
    /// repeats a name, the first occurrence wins.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Like [`column_index`](Table::column_index), but a missing column
    /// is a [`MissingColumn`](UrlDiffError::MissingColumn) error that
    /// names the columns the file does have.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| UrlDiffError::MissingColumn {
            column: name.to_owned(),
            path: self.path.clone(),
            available: self.columns.clone(),
        })
    }

    pub(crate) fn rows(&self) -> &[StringRecord] {
        &self.rows
    }
}

/// Decodes `raw` with BOM sniffing: a UTF-8 or UTF-16 byte order mark
/// selects that encoding (and is stripped), anything else is
/// windows-1252.
fn decode<'a>(path: &Path, raw: &'a [u8]) -> Result<Cow<'a, str>> {
    let (text, encoding, had_errors) = WINDOWS_1252.decode(raw);
    if had_errors {
        return Err(UrlDiffError::MalformedInput {
            path: path.to_owned(),
            reason: format!("undecodable {} byte sequence", encoding.name()),
        });
    }
    Ok(text)
}

fn malformed(path: &Path, err: &csv::Error) -> UrlDiffError {
    UrlDiffError::MalformedInput { path: path.to_owned(), reason: err.to_string() }
}
