//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifier and snapshot
//! - `submission`: Actions, raw form submissions and their outcomes
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod submission;

pub use account::{Account, AccountId};
pub use error::LedgerError;
pub use submission::{format_balance, Action, Outcome, Receipt, Submission};
