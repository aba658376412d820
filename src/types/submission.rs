//! Submission-related types for the ATM ledger
//!
//! A submission is one press of the form's execute button: the raw account
//! identifier, action selector and amount text. The teller turns it into
//! exactly one ledger operation and an [`Outcome`].

use super::account::AccountId;
use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Actions offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Credit an amount to an existing account
    Deposit,

    /// Debit an amount from an existing account
    ///
    /// Requires the balance to cover the amount.
    Withdraw,

    /// Report the current balance
    CheckBalance,

    /// Open a new account with a zero balance
    CreateAccount,
}

impl Action {
    /// All actions, in the order the form lists them
    pub const ALL: [Action; 4] = [
        Action::Deposit,
        Action::Withdraw,
        Action::CheckBalance,
        Action::CreateAccount,
    ];

    /// Whether the amount field must hold a number for this action
    pub fn requires_amount(self) -> bool {
        matches!(self, Action::Deposit | Action::Withdraw)
    }

    /// Operation name used in log events
    pub fn operation(self) -> &'static str {
        match self {
            Action::Deposit => "deposit",
            Action::Withdraw => "withdraw",
            Action::CheckBalance => "check_balance",
            Action::CreateAccount => "create_account",
        }
    }

    /// Label shown on the form
    pub fn label(self) -> &'static str {
        match self {
            Action::Deposit => "Deposit",
            Action::Withdraw => "Withdraw",
            Action::CheckBalance => "Check Balance",
            Action::CreateAccount => "Create Account",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = LedgerError;

    /// Parse a form label or one of its aliases, ignoring case and
    /// surrounding whitespace. `-` and `_` count as spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "deposit" => Ok(Action::Deposit),
            "withdraw" | "withdrawal" => Ok(Action::Withdraw),
            "check balance" | "balance" => Ok(Action::CheckBalance),
            "create account" | "create" => Ok(Action::CreateAccount),
            _ => Err(LedgerError::unknown_action(s.trim())),
        }
    }
}

/// Raw form fields of a single submission
///
/// Nothing here is validated yet; see [`crate::core::Teller::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Account identifier as typed
    pub account: AccountId,

    /// Action selector, `None` when nothing was chosen
    pub action: Option<String>,

    /// Amount text, `None` when the field was left empty
    pub amount: Option<String>,
}

impl Submission {
    /// Build a submission from its three fields
    pub fn new(account: impl Into<AccountId>, action: Option<&str>, amount: Option<&str>) -> Self {
        Submission {
            account: account.into(),
            action: action.map(str::to_string),
            amount: amount.map(str::to_string),
        }
    }
}

/// Successful result of a ledger operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Receipt {
    /// Deposit applied; carries the new balance
    Deposited { balance: Decimal },
    /// Withdrawal applied; carries the new balance
    Withdrawn { balance: Decimal },
    /// Balance query answered
    Balance { balance: Decimal },
    /// Account created with a zero balance
    Created,
}

impl Receipt {
    /// Balance reported by the receipt, if any
    pub fn balance(&self) -> Option<Decimal> {
        match self {
            Receipt::Deposited { balance }
            | Receipt::Withdrawn { balance }
            | Receipt::Balance { balance } => Some(*balance),
            Receipt::Created => None,
        }
    }
}

/// What a submission produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Account identifier from the submission
    pub account: AccountId,

    /// The parsed action, `None` if parsing failed before it was known
    pub action: Option<Action>,

    /// The receipt, or the reason the submission was rejected
    pub result: Result<Receipt, LedgerError>,
}

impl Outcome {
    /// Whether the ledger operation succeeded
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable message for the user
    pub fn message(&self) -> String {
        match &self.result {
            Ok(Receipt::Deposited { balance }) => {
                format!("Deposit successful. New balance: {}", format_balance(*balance))
            }
            Ok(Receipt::Withdrawn { balance }) => {
                format!("Withdrawal successful. New balance: {}", format_balance(*balance))
            }
            Ok(Receipt::Balance { balance }) => {
                format!("Current balance: {}", format_balance(*balance))
            }
            Ok(Receipt::Created) => {
                format!("Account created successfully with ID: {}", self.account)
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render a balance the way the teller and the balance sheet show it
pub fn format_balance(balance: Decimal) -> String {
    format!("{:.2}", balance)
}
