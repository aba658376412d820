//! Core traits for ledger operations
//!
//! The teller is generic over this trait so it can drive any store that
//! offers the four form operations.

use crate::types::LedgerError;
use rust_decimal::Decimal;

/// The four operations a ledger exposes to the form
///
/// Each call is a single lookup-and-mutate. Expected business conditions
/// come back as `Err` values.
pub trait LedgerOps {
    /// Open `account` with a zero balance
    fn create_account(&mut self, account: &str) -> Result<(), LedgerError>;

    /// Credit `amount` to `account`, returning the new balance
    fn deposit(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Debit `amount` from `account`, returning the new balance
    fn withdraw(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Current balance of `account`
    fn check_balance(&self, account: &str) -> Result<Decimal, LedgerError>;
}
