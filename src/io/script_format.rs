//! CSV format handling for scripts and balance sheets
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to submissions
//! - Balance sheet serialization
//!
//! All functions are pure (no I/O beyond the writer they are given).

use crate::types::{format_balance, Account, LedgerError, Submission};
use serde::Deserialize;
use std::io::Write;

/// Header written at the top of a balance sheet
pub const BALANCE_HEADER: [&str; 2] = ["account", "balance"];

/// Script row structure for deserialization
///
/// Matches the script format with columns: account, action, amount.
/// Empty or missing `action` and `amount` cells become `None`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScriptRecord {
    pub account: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

impl From<ScriptRecord> for Submission {
    fn from(record: ScriptRecord) -> Self {
        Submission {
            account: record.account,
            action: record.action.filter(|a| !a.trim().is_empty()),
            amount: record.amount.filter(|a| !a.trim().is_empty()),
        }
    }
}

/// Write account balances as CSV
///
/// Columns: account, balance. Rows are sorted by account identifier and
/// balances are rendered with two decimal places.
pub fn write_balances_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(BALANCE_HEADER)?;

    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    for account in sorted {
        writer.write_record([account.id.as_str(), format_balance(account.balance).as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
