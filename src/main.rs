//! ATM CLI
//!
//! Terminal front end for the in-memory ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                   # interactive: "user1 withdraw 50"
//! cargo run -- --script session.csv           # replay a CSV script
//! cargo run -- --script session.csv --dump-balances > out.txt
//! cargo run -- --strict-amounts --no-seed --log-file atm.log
//! ```
//!
//! One outcome message is printed per submission. With `--dump-balances`
//! the final balance sheet follows as CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found, output not writable, bad log settings)

use atm_ledger::cli::{self, CliArgs};
use atm_ledger::frontend;
use atm_ledger::logging;
use atm_ledger::{write_balances_csv, Ledger, LedgerError, Teller};
use std::io::{self, Write};
use std::process;
use tracing::{error, info};

fn run(args: CliArgs) -> Result<(), LedgerError> {
    let config = args.to_ledger_config();
    info!(
        amount_policy = ?config.amount_policy,
        seeded = config.seed_demo_account,
        "Starting ATM session"
    );

    let mut teller = Teller::new(Ledger::with_config(&config));
    let mut frontend = frontend::create_frontend(args.script);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    frontend.run(&mut teller, &mut output)?;

    if args.dump_balances {
        write_balances_csv(&teller.ledger().accounts(), &mut output)?;
    }
    output.flush()?;

    info!(
        accounts = teller.ledger().len(),
        accounts_created = teller.ledger().accounts_created(),
        "Session ended"
    );
    Ok(())
}

fn main() {
    let args = cli::parse_args();

    let code = {
        // Dropped before exiting so buffered file events are flushed
        let _guard = match logging::init(&args.to_log_config()) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };

        match run(args) {
            Ok(()) => 0,
            Err(e) => {
                error!(error = %e, "Session aborted");
                eprintln!("Error: {}", e);
                1
            }
        }
    };

    process::exit(code);
}
