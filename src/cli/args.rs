use crate::core::{AmountPolicy, LedgerConfig};
use crate::logging::LogConfig;
use clap::Parser;
use std::path::PathBuf;

/// Deposit, withdraw, check balances and open accounts against an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "atm")]
#[command(about = "Deposit, withdraw, check balances and open accounts against an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Replay submissions from a CSV script instead of reading stdin
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "CSV script with columns account,action,amount"
    )]
    pub script: Option<PathBuf>,

    /// Print the final balance sheet as CSV when the session ends
    #[arg(long = "dump-balances")]
    pub dump_balances: bool,

    /// Reject zero and negative deposit/withdraw amounts
    #[arg(long = "strict-amounts")]
    pub strict_amounts: bool,

    /// Start without the demonstration account
    #[arg(long = "no-seed", help = "Do not seed the user1 demonstration account")]
    pub no_seed: bool,

    /// Also append the event log to this file (stderr always receives it)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Event log filter
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "info",
        help = "Log filter, e.g. 'warn' or 'info,atm_ledger=debug'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Ledger settings selected by the flags
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            amount_policy: if self.strict_amounts {
                AmountPolicy::Strict
            } else {
                AmountPolicy::Permissive
            },
            seed_demo_account: !self.no_seed,
        }
    }

    /// Logging settings selected by the flags
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            filter: self.log_level.clone(),
            file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["atm"]).unwrap();

        assert_eq!(parsed.script, None);
        assert!(!parsed.dump_balances);
        assert_eq!(parsed.to_ledger_config(), LedgerConfig::default());
        assert_eq!(parsed.to_log_config(), LogConfig::default());
    }

    #[test]
    fn test_all_options() {
        let parsed = CliArgs::try_parse_from([
            "atm",
            "--script",
            "session.csv",
            "--dump-balances",
            "--strict-amounts",
            "--no-seed",
            "--log-file",
            "logs/atm.log",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(parsed.script, Some(PathBuf::from("session.csv")));
        assert!(parsed.dump_balances);
        assert_eq!(
            parsed.to_ledger_config(),
            LedgerConfig {
                amount_policy: AmountPolicy::Strict,
                seed_demo_account: false,
            }
        );
        assert_eq!(
            parsed.to_log_config(),
            LogConfig {
                filter: "debug".to_string(),
                file: Some(PathBuf::from("logs/atm.log")),
            }
        );
    }

    #[rstest]
    #[case::strict(&["atm", "--strict-amounts"], AmountPolicy::Strict)]
    #[case::permissive(&["atm"], AmountPolicy::Permissive)]
    fn test_amount_policy(#[case] args: &[&str], #[case] expected: AmountPolicy) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_ledger_config().amount_policy, expected);
    }

    #[rstest]
    #[case::unknown_flag(&["atm", "--turbo"])]
    #[case::script_without_path(&["atm", "--script"])]
    #[case::positional(&["atm", "session.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
