use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::path::Path;

use urldiff::args::{self, Command};
use urldiff::output::{write_result, write_result_file, write_result_unique};
use urldiff::set::UrlSet;
use urldiff::table::Table;
use urldiff::unique_https_urls;

fn main() -> Result<()> {
    match args::parsed().command {
        Command::Columns { file } => list_columns(&file),
        Command::Unique { first_file, first_column, second_file, second_column, output } => {
            let unique =
                unique_https_urls(&first_file, &first_column, &second_file, &second_column)?;
            emit(&unique, output.as_deref())
        }
    }
}

fn list_columns(file: &Path) -> Result<()> {
    let table = Table::read_path(file)?;
    let mut out = io::stdout().lock();
    for column in table.columns() {
        writeln!(out, "{column}")?;
    }
    Ok(())
}

fn emit(unique: &UrlSet, output: Option<&Path>) -> Result<()> {
    match output {
        None => {
            if io::stdout().is_terminal() {
                write_result(unique, io::stdout().lock())?;
            } else {
                write_result(unique, io::BufWriter::new(io::stdout().lock()))?;
            }
        }
        Some(dir) if dir.is_dir() => {
            let written = write_result_unique(unique, dir)?;
            report(unique, &written);
        }
        Some(path) => {
            write_result_file(unique, path)?;
            report(unique, path);
        }
    }
    Ok(())
}

fn report(unique: &UrlSet, written: &Path) {
    println!("wrote {} unique HTTPS URLs to {}", unique.len(), written.display());
}
