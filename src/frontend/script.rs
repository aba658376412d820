//! Script replay front end
//!
//! Reads submissions from a CSV script via [`ScriptReader`] and passes each
//! one to the teller. Malformed rows are logged and skipped; only failing to
//! open the script or to write output stops the replay.

use crate::core::Teller;
use crate::frontend::Frontend;
use crate::io::ScriptReader;
use crate::types::LedgerError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Replays a CSV script
#[derive(Debug, Clone)]
pub struct ScriptFrontend {
    path: PathBuf,
}

impl ScriptFrontend {
    /// Replay the script at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScriptFrontend { path: path.into() }
    }

    /// Path of the script being replayed
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Frontend for ScriptFrontend {
    fn run(&mut self, teller: &mut Teller, output: &mut dyn Write) -> Result<(), LedgerError> {
        let reader = ScriptReader::open(&self.path)?;
        let mut submitted = 0usize;
        let mut skipped = 0usize;

        for row in reader {
            match row {
                Ok(submission) => {
                    let outcome = teller.submit(submission);
                    writeln!(output, "{}", outcome.message())?;
                    submitted += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Skipping malformed script row");
                    skipped += 1;
                }
            }
        }

        output.flush()?;
        info!(
            script = %self.path.display(),
            submitted,
            skipped,
            "Script replay finished"
        );

        Ok(())
    }
}
