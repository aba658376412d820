//! Error types for the ATM ledger
//!
//! This module defines all error types that can occur while handling a
//! submission or replaying a script.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Account missing or duplicated, insufficient funds, overflow
//! - **Input Errors**: No action selected, unknown action, unparseable amount
//! - **Script I/O Errors**: File not found, malformed CSV rows, write failures
//! - **Configuration Errors**: Bad log filter or log file path

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every business condition is a recoverable value: the caller renders it
/// and logs it, the ledger itself never does either.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Create-account was called for an identifier that is already a key
    #[error("Account already exists: {account}")]
    AccountAlreadyExists {
        /// The duplicated account identifier
        account: String,
    },

    /// The account identifier is not a key of the ledger
    #[error("Account does not exist: {account}")]
    AccountNotFound {
        /// The missing account identifier
        account: String,
    },

    /// Withdrawal larger than the current balance
    ///
    /// The balance is left unchanged.
    #[error(
        "Insufficient funds for account {account}: available {available:.2}, requested {requested:.2}"
    )]
    InsufficientFunds {
        /// Account identifier
        account: String,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Amount did not parse as a finite number, or was rejected by the
    /// strict amount policy
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The offending amount as entered
        amount: String,
    },

    /// The submission carried no action
    #[error("No action selected")]
    NoActionSelected,

    /// The submission named an action the teller does not know
    #[error("Unknown action '{action}'")]
    UnknownAction {
        /// The action as entered
        action: String,
    },

    /// Balance arithmetic would overflow
    ///
    /// The operation is rejected and the balance is left unchanged.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: String,
    },

    /// Script file not found at the specified path
    ///
    /// This is a fatal error that prevents a replay from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Script row could not be parsed
    ///
    /// The row is skipped and the replay continues.
    #[error("Script parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Invalid runtime configuration (log filter, log file path)
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountAlreadyExists error
    pub fn account_already_exists(account: &str) -> Self {
        LedgerError::AccountAlreadyExists {
            account: account.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an UnknownAction error
    pub fn unknown_action(action: &str) -> Self {
        LedgerError::UnknownAction {
            action: action.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LedgerError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this is an expected business condition raised by the ledger
    /// itself (as opposed to input validation or I/O)
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            LedgerError::AccountAlreadyExists { .. }
                | LedgerError::AccountNotFound { .. }
                | LedgerError::InsufficientFunds { .. }
                | LedgerError::ArithmeticOverflow { .. }
        )
    }
}
