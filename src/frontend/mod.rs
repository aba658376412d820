//! Front end module
//!
//! A front end collects submissions from somewhere, hands each one to the
//! [`Teller`], and writes the outcome message for the user. Two
//! implementations can be selected at runtime:
//!
//! - [`ScriptFrontend`] replays a CSV script
//! - [`InteractiveFrontend`] reads one submission per line

use crate::core::Teller;
use crate::types::LedgerError;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

pub mod interactive;
pub mod script;

pub use interactive::{parse_command_line, Command, InteractiveFrontend};
pub use script::ScriptFrontend;

/// A source of submissions driving a teller
pub trait Frontend {
    /// Feed every submission to `teller`, writing one outcome message per
    /// submission to `output`
    ///
    /// # Errors
    ///
    /// Only fatal conditions are returned: the input cannot be opened or
    /// read, or the output cannot be written. Rejected submissions are part
    /// of normal operation and are reported through `output`.
    fn run(&mut self, teller: &mut Teller, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Choose a front end
///
/// A script path selects replay. Otherwise submissions come from stdin,
/// with a prompt when stdin is a terminal.
pub fn create_frontend(script: Option<PathBuf>) -> Box<dyn Frontend> {
    match script {
        Some(path) => Box::new(ScriptFrontend::new(path)),
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Box::new(InteractiveFrontend::new(Box::new(stdin.lock()), prompt))
        }
    }
}
