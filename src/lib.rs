//! ATM Ledger Library
//! # Overview
//!
//! An in-memory account ledger driven by form-style submissions: an account
//! identifier, an action and an optional amount.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Action, Submission, Outcome, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account balances and the four operations
//!   - [`core::teller`] - Submission validation, dispatch and event logging
//! - [`io`] - Script reading and balance sheet output
//! - [`frontend`] - Script replay and interactive line input
//! - [`logging`] - Event log subscriber setup
//!
//! # Actions
//!
//! - **Deposit**: Credit an amount to an existing account
//! - **Withdraw**: Debit an amount, rejected when the balance does not cover it
//! - **Check Balance**: Report the current balance
//! - **Create Account**: Open a new account with a zero balance
//!
//! # Example
//!
//! ```
//! use atm_ledger::{Ledger, Submission, Teller};
//!
//! let mut teller = Teller::new(Ledger::seeded());
//! let outcome = teller.submit(Submission::new("user1", Some("Withdraw"), Some("250")));
//! assert_eq!(outcome.message(), "Withdrawal successful. New balance: 750.00");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod frontend;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{AmountPolicy, Ledger, LedgerConfig, LedgerOps, Teller};
pub use io::write_balances_csv;
pub use types::{Account, AccountId, Action, LedgerError, Outcome, Receipt, Submission};
