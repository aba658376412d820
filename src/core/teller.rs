//! Submission handling
//!
//! This module provides the `Teller`, the caller-side half of the form: it
//! validates the raw fields of a [`Submission`], dispatches exactly one
//! ledger operation, and emits one log event describing what happened.
//!
//! Validation rules:
//! - A missing or blank action is `NoActionSelected`
//! - An unrecognised action is `UnknownAction`
//! - Deposit and withdraw need an amount that parses as a finite number
//! - Check-balance and create-account ignore the amount field

use crate::core::ledger::Ledger;
use crate::core::traits::LedgerOps;
use crate::types::{Action, LedgerError, Outcome, Receipt, Submission};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{error, field, info, warn};

/// Parse the amount field
///
/// Accepts plain decimals (`"12.50"`, `"-3"`) and scientific notation
/// (`"1e3"`). Surrounding whitespace is ignored. Anything else, including
/// an empty field, is `InvalidAmount`.
pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid_amount(input));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::invalid_amount(input))
}

/// Form submission handler
///
/// Owns the ledger it drives. The ledger type defaults to [`Ledger`] but any
/// [`LedgerOps`] implementation works.
#[derive(Debug, Default)]
pub struct Teller<L = Ledger> {
    ledger: L,
}

impl<L: LedgerOps> Teller<L> {
    /// Create a teller driving `ledger`
    pub fn new(ledger: L) -> Self {
        Teller { ledger }
    }

    /// The ledger being driven
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consume the teller, returning its ledger
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Handle one submission
    ///
    /// Never fails: every rejection is carried in [`Outcome::result`].
    pub fn submit(&mut self, submission: Submission) -> Outcome {
        let Submission {
            account,
            action,
            amount,
        } = submission;

        let action = match action.as_deref().map(str::trim) {
            None | Some("") => {
                warn!(account = %account, "No action selected");
                return Outcome {
                    account,
                    action: None,
                    result: Err(LedgerError::NoActionSelected),
                };
            }
            Some(raw) => match raw.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    warn!(account = %account, action = raw, "Unknown action");
                    return Outcome {
                        account,
                        action: None,
                        result: Err(e),
                    };
                }
            },
        };

        let amount = if action.requires_amount() {
            match parse_amount(amount.as_deref().unwrap_or_default()) {
                Ok(amount) => Some(amount),
                Err(e) => {
                    error!(
                        operation = action.operation(),
                        account = %account,
                        amount = amount.as_deref().unwrap_or_default(),
                        "Invalid amount entered"
                    );
                    return Outcome {
                        account,
                        action: Some(action),
                        result: Err(e),
                    };
                }
            }
        } else {
            None
        };

        let result = self.dispatch(action, &account, amount);
        log_outcome(action, &account, amount, &result);

        Outcome {
            account,
            action: Some(action),
            result,
        }
    }

    fn dispatch(
        &mut self,
        action: Action,
        account: &str,
        amount: Option<Decimal>,
    ) -> Result<Receipt, LedgerError> {
        let amount = amount.unwrap_or(Decimal::ZERO);
        match action {
            Action::Deposit => self
                .ledger
                .deposit(account, amount)
                .map(|balance| Receipt::Deposited { balance }),
            Action::Withdraw => self
                .ledger
                .withdraw(account, amount)
                .map(|balance| Receipt::Withdrawn { balance }),
            Action::CheckBalance => self
                .ledger
                .check_balance(account)
                .map(|balance| Receipt::Balance { balance }),
            Action::CreateAccount => self
                .ledger
                .create_account(account)
                .map(|()| Receipt::Created),
        }
    }
}

fn log_outcome(
    action: Action,
    account: &str,
    amount: Option<Decimal>,
    result: &Result<Receipt, LedgerError>,
) {
    let operation = action.operation();
    match result {
        Ok(receipt) => info!(
            operation,
            account,
            amount = amount.map(field::display),
            balance = receipt.balance().map(field::display),
            "{} succeeded",
            action
        ),
        Err(e @ LedgerError::InvalidAmount { .. }) => error!(
            operation,
            account,
            amount = amount.map(field::display),
            error = %e,
            "{} rejected",
            action
        ),
        Err(e) => warn!(
            operation,
            account,
            amount = amount.map(field::display),
            error = %e,
            "{} rejected",
            action
        ),
    }
}
