//! Streaming reader for submission scripts
//!
//! Provides an iterator over submissions read from a CSV script with the
//! header `account,action,amount`. Rows are read one at a time.
//!
//! ```no_run
//! use atm_ledger::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::open(Path::new("session.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(submission) => println!("Submitting: {:?}", submission),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `open()`
//! - Malformed rows are yielded as `Err` items carrying their line number

use crate::io::script_format::ScriptRecord;
use crate::types::{LedgerError, Submission};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming script reader
#[derive(Debug)]
pub struct ScriptReader<R = File> {
    reader: csv::Reader<R>,
    rows_read: usize,
}

impl ScriptReader<File> {
    /// Open a script file
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Read a script from any byte source
    ///
    /// The CSV reader is configured to trim whitespace from all fields and
    /// to accept rows with a missing trailing amount column.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        ScriptReader {
            reader,
            rows_read: 0,
        }
    }

    /// Number of rows consumed so far, malformed ones included
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Submission, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<ScriptRecord>();
        let row = rows.next()?;
        self.rows_read += 1;

        Some(row.map(Submission::from).map_err(LedgerError::from))
    }
}
