//! Code to parse the command line using `clap`, and definitions of the
//! parsed result

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Returns the parsed command line.
#[must_use]
pub fn parsed() -> Args {
    Args::parse()
}

/// `Args` contains the parsed command line.
#[derive(Debug, Parser)]
#[command(
    name = "urldiff",
    version,
    about = "Finds the HTTPS URLs that occur in exactly one of two CSV columns"
)]
pub struct Args {
    /// The requested operation.
    #[command(subcommand)]
    pub command: Command,
}

/// The operations urldiff can run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the column names of a CSV file, one per line
    Columns {
        /// The file whose header row to list
        file: PathBuf,
    },
    /// Print the HTTPS URLs present in exactly one of two chosen columns
    Unique {
        /// First input file
        first_file: PathBuf,
        /// Column of FIRST_FILE to extract URLs from
        first_column: String,
        /// Second input file
        second_file: PathBuf,
        /// Column of SECOND_FILE to extract URLs from
        second_column: String,
        /// Write the result CSV here instead of stdout; an existing
        /// directory gets a fresh, uniquely named file inside it
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
