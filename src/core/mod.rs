//! Core business logic module
//!
//! This module contains the ledger and the submission handler:
//! - `traits` - The operations a ledger exposes to the form
//! - `ledger` - Account balances and the four operations
//! - `teller` - Submission validation, dispatch and event logging

pub mod ledger;
pub mod teller;
pub mod traits;

pub use ledger::{AmountPolicy, Ledger, LedgerConfig, DEMO_ACCOUNT, DEMO_BALANCE};
pub use teller::{parse_amount, Teller};
pub use traits::LedgerOps;
