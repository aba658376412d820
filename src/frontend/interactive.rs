//! Interactive front end
//!
//! Reads one submission per line. Two line shapes are accepted:
//!
//! - `ACCOUNT ACTION [AMOUNT]`, where ACTION may be two words
//!   (`user1 check balance`, `alice create account`)
//! - `ACCOUNT,ACTION,AMOUNT`, the script row shape
//!
//! The first shape splits on whitespace, so an account identifier that
//! contains a space must be entered in the comma shape
//! (`smith j,deposit,10`).
//!
//! Lines that are not valid UTF-8 are logged and skipped.
//!
//! A bare account with no action is submitted as-is so the teller reports
//! that no action was selected. `quit` or `exit` ends the session, as does
//! end of input.

use crate::core::Teller;
use crate::frontend::Frontend;
use crate::types::{Action, LedgerError, Submission};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const PROMPT: &str = "> ";

/// Line-oriented front end
pub struct InteractiveFrontend {
    input: Box<dyn BufRead>,
    prompt: bool,
}

impl InteractiveFrontend {
    /// Read submissions from `input`, printing a prompt before each line
    /// when `prompt` is set
    pub fn new(input: Box<dyn BufRead>, prompt: bool) -> Self {
        InteractiveFrontend { input, prompt }
    }
}

/// What a single input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand a submission to the teller
    Submit(Submission),
    /// End the session
    Quit,
}

/// Parse one input line
///
/// Returns `None` for blank lines and `#` comments.
pub fn parse_command_line(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Some(Command::Quit);
    }

    if line.contains(',') {
        let mut fields = line.splitn(3, ',').map(str::trim);
        let account = fields.next().unwrap_or_default();
        let action = fields.next().filter(|f| !f.is_empty());
        let amount = fields.next().filter(|f| !f.is_empty());
        return Some(Command::Submit(Submission::new(account, action, amount)));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (account, rest) = match tokens.split_first() {
        Some((account, rest)) => (*account, rest),
        None => return None,
    };

    // Prefer a two-word action so "check balance 5" keeps "5" as the amount
    let action_len = match rest {
        [first, second, ..] if format!("{first} {second}").parse::<Action>().is_ok() => 2,
        [] => 0,
        _ => 1,
    };

    let action = (action_len > 0).then(|| rest[..action_len].join(" "));
    let amount = (rest.len() > action_len).then(|| rest[action_len..].join(" "));

    Some(Command::Submit(Submission {
        account: account.to_string(),
        action,
        amount,
    }))
}

impl Frontend for InteractiveFrontend {
    fn run(&mut self, teller: &mut Teller, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            if self.prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            line_number += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(line = line_number, error = %e, "Skipping line that is not valid UTF-8");
                    continue;
                }
            };

            match parse_command_line(line) {
                Some(Command::Submit(submission)) => {
                    let outcome = teller.submit(submission);
                    writeln!(output, "{}", outcome.message())?;
                }
                Some(Command::Quit) => break,
                None => continue,
            }
        }

        output.flush()?;
        Ok(())
    }
}
