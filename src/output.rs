//! The result writer: serializes a [`UrlSet`] as a one-column CSV
//! file under a single fixed header.
//!
//! File-writing goes through a temporary sibling that is persisted
//! into place on success, so a failed run never leaves a half-written
//! artifact behind, and [`write_result_unique`] gives every invocation
//! its own output file so concurrent runs sharing a directory can't
//! race each other.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::Writer;
use tempfile::{Builder, NamedTempFile};

use crate::error::{Result, UrlDiffError};
use crate::set::UrlSet;

/// The one header cell of every result file.
pub const RESULT_HEADER: &str = "Unique HTTPS URLs";

/// Writes the header record and one record per value to `sink`, in the
/// set's iteration order.
///
/// Output is UTF-8 with `\n` record terminators, quoted only where a
/// value embeds a delimiter, quote, or line break. Callers wanting an
/// order other than the set's own must rebuild the set in that order
/// first.
pub fn write_result<W: Write>(urls: &UrlSet, sink: W) -> io::Result<()> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record([RESULT_HEADER]).map_err(into_io)?;
    for url in urls {
        writer.write_record([url.as_str()]).map_err(into_io)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the result to `path` by way of a temporary file in the same
/// directory, persisted over `path` on success.
pub fn write_result_file(urls: &UrlSet, path: &Path) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(parent_of(path))
        .map_err(|e| UrlDiffError::write(path, e))?;
    write_result(urls, tmp.as_file_mut()).map_err(|e| UrlDiffError::write(path, e))?;
    tmp.persist(path).map_err(|e| UrlDiffError::write(path, e.error))?;
    Ok(())
}

/// Writes the result to a fresh, uniquely named
/// `unique-https-urls-*.csv` inside `dir` and returns its path.
///
/// Every invocation gets its own artifact; a fixed output filename
/// would let two concurrent runs overwrite each other, last writer
/// winning.
pub fn write_result_unique(urls: &UrlSet, dir: &Path) -> Result<PathBuf> {
    let mut tmp = Builder::new()
        .prefix("unique-https-urls-")
        .suffix(".csv")
        .tempfile_in(dir)
        .map_err(|e| UrlDiffError::write(dir, e))?;
    write_result(urls, tmp.as_file_mut()).map_err(|e| UrlDiffError::write(dir, e))?;
    let (_, path) = tmp.keep().map_err(|e| UrlDiffError::write(dir, e.error))?;
    Ok(path)
}

/// The directory a sibling temporary file for `path` belongs in. A
/// bare filename has an empty parent, which `tempfile` won't accept.
fn parent_of(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Our record shapes can't trip the csv crate's non-I/O errors, but
/// the types insist.
fn into_io(err: csv::Error) -> io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn url_set(urls: &[&str]) -> UrlSet {
        urls.iter().map(|url| (*url).to_owned()).collect()
    }

    fn written(urls: &UrlSet) -> String {
        let mut sink = Vec::new();
        write_result(urls, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn the_empty_set_writes_the_header_row_only() {
        assert_eq!(written(&UrlSet::default()), "Unique HTTPS URLs\n");
    }

    #[test]
    fn values_are_written_one_per_record_in_set_order() {
        let urls = url_set(&["https://c.com", "https://d.com"]);
        assert_eq!(written(&urls), "Unique HTTPS URLs\nhttps://c.com\nhttps://d.com\n");
    }

    #[test]
    fn embedded_delimiters_and_quotes_are_quoted() {
        let urls = url_set(&["https://a.com/q,1", "https://b.com/\"x\""]);
        assert_eq!(
            written(&urls),
            "Unique HTTPS URLs\n\"https://a.com/q,1\"\n\"https://b.com/\"\"x\"\"\"\n"
        );
    }

    #[test]
    fn write_result_file_replaces_the_target_wholesale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale leftover data that is much longer than the result\n").unwrap();
        write_result_file(&url_set(&["https://a.com"]), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Unique HTTPS URLs\nhttps://a.com\n");
    }

    #[test]
    fn a_bare_filename_gets_a_dot_parent() {
        assert_eq!(parent_of(Path::new("bare.csv")), Path::new("."));
        assert_eq!(parent_of(Path::new("dir/out.csv")), Path::new("dir"));
        assert_eq!(parent_of(Path::new("/out.csv")), Path::new("/"));
    }

    #[test]
    fn unique_writes_get_distinct_paths_and_equal_content() {
        let dir = TempDir::new().unwrap();
        let urls = url_set(&["https://a.com"]);
        let first = write_result_unique(&urls, dir.path()).unwrap();
        let second = write_result_unique(&urls, dir.path()).unwrap();
        assert_ne!(first, second);
        for path in [&first, &second] {
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(name.starts_with("unique-https-urls-"), "got: {name}");
            assert!(name.ends_with(".csv"), "got: {name}");
            assert_eq!(
                fs::read_to_string(path).unwrap(),
                "Unique HTTPS URLs\nhttps://a.com\n"
            );
        }
    }

    #[test]
    fn write_failures_name_the_target() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = write_result_unique(&UrlSet::default(), &missing).unwrap_err();
        assert!(matches!(err, UrlDiffError::Io { .. }), "got: {err}");
        assert!(err.to_string().contains("no-such-dir"), "got: {err}");
    }
}
