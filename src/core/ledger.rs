//! Ledger module
//!
//! This module provides the `Ledger` struct which owns the mapping from
//! account identifiers to balances.
//!
//! The Ledger is responsible for:
//! - Creating accounts with a zero balance
//! - Applying deposits and withdrawals with checked arithmetic
//! - Answering balance queries
//! - Providing sorted account listings for output
//!
//! It never logs and never renders; callers do that from the returned
//! `Result`.

use crate::core::traits::LedgerOps;
use crate::types::{Account, AccountId, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Identifier of the demonstration account seeded at start-up
pub const DEMO_ACCOUNT: &str = "user1";

/// Balance of the demonstration account (1000.00)
pub const DEMO_BALANCE: Decimal = Decimal::from_parts(100000, 0, 0, false, 2);

/// How deposit and withdraw treat zero or negative amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountPolicy {
    /// Apply any finite amount as given, negative ones included
    #[default]
    Permissive,

    /// Reject amounts `<= 0` with `InvalidAmount`
    Strict,
}

/// Ledger construction settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Amount validation applied by deposit and withdraw
    pub amount_policy: AmountPolicy,

    /// Whether to seed `user1 -> 1000.00`
    pub seed_demo_account: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            amount_policy: AmountPolicy::Permissive,
            seed_demo_account: true,
        }
    }
}

/// In-memory store of account balances
///
/// Entries are created by [`Ledger::create_account`], mutated in place by
/// deposit and withdraw, and never removed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Map of account identifiers to balances
    balances: HashMap<AccountId, Decimal>,

    /// Amount validation for deposit and withdraw
    policy: AmountPolicy,

    /// Accounts opened through `create_account` (seeded ones excluded)
    accounts_created: u64,
}

impl Ledger {
    /// Create an empty ledger with the permissive amount policy
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Create a ledger as described by `config`
    pub fn with_config(config: &LedgerConfig) -> Self {
        let mut ledger = Ledger {
            policy: config.amount_policy,
            ..Ledger::default()
        };
        if config.seed_demo_account {
            ledger
                .balances
                .insert(DEMO_ACCOUNT.to_string(), DEMO_BALANCE);
        }
        ledger
    }

    /// Create a ledger holding the demonstration account
    pub fn seeded() -> Self {
        Ledger::with_config(&LedgerConfig::default())
    }

    /// The amount policy in force
    pub fn amount_policy(&self) -> AmountPolicy {
        self.policy
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Whether `account` is a key of the ledger
    pub fn contains(&self, account: &str) -> bool {
        self.balances.contains_key(account)
    }

    /// Number of successful `create_account` calls
    pub fn accounts_created(&self) -> u64 {
        self.accounts_created
    }

    /// Snapshot of all accounts sorted by identifier
    pub fn accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .balances
            .iter()
            .map(|(id, balance)| Account::new(id.clone(), *balance))
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// Open an account with a zero balance
    ///
    /// # Errors
    ///
    /// `AccountAlreadyExists` if `account` is already a key. The existing
    /// balance is untouched.
    pub fn create_account(&mut self, account: &str) -> Result<(), LedgerError> {
        if self.balances.contains_key(account) {
            return Err(LedgerError::account_already_exists(account));
        }

        self.balances.insert(account.to_string(), Decimal::ZERO);
        self.accounts_created += 1;

        Ok(())
    }

    /// Credit `amount` to `account`
    ///
    /// Under the permissive policy negative amounts are applied as-is.
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The strict policy is active and `amount <= 0`
    /// - The account does not exist
    /// - The addition would overflow
    pub fn deposit(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.check_amount(amount)?;

        let balance = self
            .balances
            .get_mut(account)
            .ok_or_else(|| LedgerError::account_not_found(account))?;

        let new_balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account))?;

        *balance = new_balance;

        Ok(new_balance)
    }

    /// Debit `amount` from `account`
    ///
    /// # Returns
    ///
    /// The new balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The strict policy is active and `amount <= 0`
    /// - The account does not exist
    /// - The balance is smaller than `amount`
    /// - The subtraction would overflow (only reachable with a negative
    ///   amount under the permissive policy)
    pub fn withdraw(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.check_amount(amount)?;

        let balance = self
            .balances
            .get_mut(account)
            .ok_or_else(|| LedgerError::account_not_found(account))?;

        if *balance < amount {
            return Err(LedgerError::insufficient_funds(account, *balance, amount));
        }

        let new_balance = balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdraw", account))?;

        *balance = new_balance;

        Ok(new_balance)
    }

    /// Current balance of `account`
    ///
    /// # Errors
    ///
    /// `AccountNotFound` if `account` is not a key.
    pub fn check_balance(&self, account: &str) -> Result<Decimal, LedgerError> {
        self.balances
            .get(account)
            .copied()
            .ok_or_else(|| LedgerError::account_not_found(account))
    }

    fn check_amount(&self, amount: Decimal) -> Result<(), LedgerError> {
        if self.policy == AmountPolicy::Strict && amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(&amount.to_string()));
        }
        Ok(())
    }
}

impl LedgerOps for Ledger {
    fn create_account(&mut self, account: &str) -> Result<(), LedgerError> {
        Ledger::create_account(self, account)
    }

    fn deposit(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        Ledger::deposit(self, account, amount)
    }

    fn withdraw(&mut self, account: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        Ledger::withdraw(self, account, amount)
    }

    fn check_balance(&self, account: &str) -> Result<Decimal, LedgerError> {
        Ledger::check_balance(self, account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strict() -> Ledger {
        Ledger::with_config(&LedgerConfig {
            amount_policy: AmountPolicy::Strict,
            seed_demo_account: false,
        })
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();

        assert!(ledger.is_empty());
        assert_eq!(ledger.accounts_created(), 0);
        assert_eq!(ledger.amount_policy(), AmountPolicy::Permissive);
    }

    #[test]
    fn test_seeded_ledger_holds_demo_account() {
        let ledger = Ledger::seeded();

        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.check_balance(DEMO_ACCOUNT).unwrap(),
            Decimal::new(100000, 2)
        );
        // Seeding is not an account creation
        assert_eq!(ledger.accounts_created(), 0);
    }

    #[test]
    fn test_config_without_seed() {
        let ledger = Ledger::with_config(&LedgerConfig {
            seed_demo_account: false,
            ..LedgerConfig::default()
        });

        assert!(ledger.is_empty());
    }

    #[rstest]
    #[case::deposit(|l: &mut Ledger| l.deposit("ghost", Decimal::ONE))]
    #[case::withdraw(|l: &mut Ledger| l.withdraw("ghost", Decimal::ONE))]
    #[case::check_balance(|l: &mut Ledger| l.check_balance("ghost"))]
    fn test_missing_account_is_not_found(
        #[case] op: fn(&mut Ledger) -> Result<Decimal, LedgerError>,
    ) {
        let mut ledger = Ledger::seeded();

        let result = op(&mut ledger);

        assert_eq!(result, Err(LedgerError::account_not_found("ghost")));
        assert!(!ledger.contains("ghost"));
    }

    #[test]
    fn test_create_account_twice_fails() {
        let mut ledger = Ledger::new();

        assert!(ledger.create_account("a").is_ok());
        assert_eq!(
            ledger.create_account("a"),
            Err(LedgerError::account_already_exists("a"))
        );
        assert_eq!(ledger.accounts_created(), 1);
    }

    #[test]
    fn test_create_seeded_account_keeps_balance() {
        let mut ledger = Ledger::seeded();

        assert!(ledger.create_account(DEMO_ACCOUNT).is_err());
        assert_eq!(ledger.check_balance(DEMO_ACCOUNT).unwrap(), DEMO_BALANCE);
    }

    #[test]
    fn test_new_account_has_zero_balance() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();

        assert_eq!(ledger.check_balance("a").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_then_check_balance() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();

        assert_eq!(ledger.deposit("a", Decimal::new(50, 0)).unwrap(), Decimal::new(50, 0));
        assert_eq!(ledger.check_balance("a").unwrap(), Decimal::new(50, 0));
    }

    #[test]
    fn test_deposit_accumulates() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();

        ledger.deposit("a", Decimal::new(10000, 4)).unwrap();
        ledger.deposit("a", Decimal::new(25000, 4)).unwrap();
        let balance = ledger.deposit("a", Decimal::new(5000, 4)).unwrap();

        assert_eq!(balance, Decimal::new(40000, 4));
    }

    #[test]
    fn test_withdraw_then_overdraw() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();
        ledger.deposit("a", Decimal::new(100, 0)).unwrap();

        assert_eq!(ledger.withdraw("a", Decimal::new(30, 0)).unwrap(), Decimal::new(70, 0));

        let result = ledger.withdraw("a", Decimal::new(1000, 0));
        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                "a",
                Decimal::new(70, 0),
                Decimal::new(1000, 0)
            ))
        );
        assert_eq!(ledger.check_balance("a").unwrap(), Decimal::new(70, 0));
    }

    #[test]
    fn test_seeded_account_can_be_emptied_exactly() {
        let mut ledger = Ledger::seeded();

        let balance = ledger.withdraw(DEMO_ACCOUNT, Decimal::new(100000, 2)).unwrap();
        assert_eq!(balance, Decimal::ZERO);

        let result = ledger.withdraw(DEMO_ACCOUNT, Decimal::new(1, 2));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(ledger.check_balance(DEMO_ACCOUNT).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_permissive_policy_allows_negative_deposit() {
        let mut ledger = Ledger::seeded();

        let balance = ledger.deposit(DEMO_ACCOUNT, Decimal::new(-250, 0)).unwrap();

        assert_eq!(balance, Decimal::new(75000, 2));
    }

    #[test]
    fn test_permissive_policy_negative_withdraw_credits() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();

        let balance = ledger.withdraw("a", Decimal::new(-5, 0)).unwrap();

        assert_eq!(balance, Decimal::new(5, 0));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1, 2))]
    fn test_strict_policy_rejects_non_positive(#[case] amount: Decimal) {
        let mut ledger = strict();
        ledger.create_account("a").unwrap();
        ledger.deposit("a", Decimal::new(10, 0)).unwrap();

        assert!(matches!(
            ledger.deposit("a", amount),
            Err(LedgerError::InvalidAmount { .. })
        ));
        assert!(matches!(
            ledger.withdraw("a", amount),
            Err(LedgerError::InvalidAmount { .. })
        ));
        assert_eq!(ledger.check_balance("a").unwrap(), Decimal::new(10, 0));
    }

    #[test]
    fn test_strict_policy_checks_amount_before_account() {
        let mut ledger = strict();

        assert!(matches!(
            ledger.deposit("ghost", Decimal::ZERO),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut ledger = Ledger::new();
        ledger.create_account("a").unwrap();
        ledger.deposit("a", Decimal::MAX).unwrap();

        let result = ledger.deposit("a", Decimal::MAX);

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("deposit", "a")));
        assert_eq!(ledger.check_balance("a").unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_accounts_sorted_by_id() {
        let mut ledger = Ledger::seeded();
        ledger.create_account("zed").unwrap();
        ledger.create_account("alice").unwrap();

        let ids: Vec<String> = ledger.accounts().into_iter().map(|a| a.id).collect();

        assert_eq!(ids, vec!["alice", "user1", "zed"]);
        assert_eq!(ledger.accounts_created(), 2);
    }

    #[test]
    fn test_independent_ledgers_do_not_share_state() {
        let mut first = Ledger::new();
        let second = Ledger::new();

        first.create_account("a").unwrap();

        assert!(first.contains("a"));
        assert!(!second.contains("a"));
    }

    #[test]
    fn test_trait_dispatch_matches_inherent_methods() {
        fn exercise<L: LedgerOps>(ledger: &mut L) -> Decimal {
            ledger.create_account("t").unwrap();
            ledger.deposit("t", Decimal::new(20, 0)).unwrap();
            ledger.withdraw("t", Decimal::new(5, 0)).unwrap();
            ledger.check_balance("t").unwrap()
        }

        let mut ledger = Ledger::new();
        assert_eq!(exercise(&mut ledger), Decimal::new(15, 0));
    }
}
