//! Account-related types for the ATM ledger
//!
//! This module defines the account identifier and the read-only account
//! snapshot handed out by the ledger.

use rust_decimal::Decimal;

/// Account identifier
///
/// An opaque, caller-supplied string. The ledger enforces no format on it.
pub type AccountId = String;

/// Snapshot of a single account
///
/// Produced by [`crate::core::Ledger::accounts`] for balance sheet output.
/// Changing a snapshot never affects the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The account identifier
    pub id: AccountId,

    /// Current balance
    pub balance: Decimal,
}

impl Account {
    /// Create a snapshot for `id` holding `balance`
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            balance,
        }
    }
}
