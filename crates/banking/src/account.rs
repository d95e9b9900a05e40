use serde::{Deserialize, Serialize};

use tally_core::{AccountId, DomainError, DomainResult, Entity, Money};

/// A single account: identity, label and a balance.
///
/// Accounts are only created by [`Ledger::create_account`](crate::Ledger::create_account).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Money,
}

impl Account {
    pub(crate) fn open(id: AccountId, name: String, opening_balance: Money) -> Self {
        Self {
            id,
            name,
            balance: opening_balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Balance after depositing `amount`, without applying it.
    pub fn check_deposit(&self, amount: Money) -> DomainResult<Money> {
        if amount.is_negative() {
            return Err(DomainError::NegativeAmount);
        }
        self.balance.checked_add(amount)
    }

    /// Balance after withdrawing `amount`, without applying it.
    ///
    /// Withdrawing exactly the balance is allowed and leaves zero.
    pub fn check_withdraw(&self, amount: Money) -> DomainResult<Money> {
        if amount.is_negative() {
            return Err(DomainError::NegativeAmount);
        }
        if self.balance < amount {
            return Err(DomainError::InsufficientFunds);
        }
        self.balance.checked_sub(amount)
    }

    pub fn deposit(&mut self, amount: Money) -> DomainResult<()> {
        self.balance = self.check_deposit(amount)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> DomainResult<()> {
        self.balance = self.check_withdraw(amount)?;
        Ok(())
    }

    /// Point-in-time view of the account.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_id: self.id,
            name: self.name.clone(),
            balance: self.balance,
        }
    }

    /// Commits a balance computed by one of the `check_*` methods.
    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Read-only snapshot of an account, as printed in the console transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_id: AccountId,
    pub name: String,
    pub balance: Money,
}

impl core::fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Account Number: {}", self.account_id)?;
        writeln!(f, "Account Name: {}", self.name)?;
        write!(f, "Balance: {}", self.balance.trimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_account(balance: Money) -> Account {
        Account::open(AccountId::new(1), "John Doe".to_string(), balance)
    }

    #[test]
    fn withdraw_exact_balance_drains_to_zero() {
        let mut account = test_account(Money::from_units(500));
        account.withdraw(Money::from_units(500)).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    #[test]
    fn withdraw_more_than_balance_is_rejected() {
        let mut account = test_account(Money::from_units(500));
        let err = account.withdraw(Money::from_units(501)).unwrap_err();
        assert_eq!(err, DomainError::InsufficientFunds);
        assert_eq!(account.balance(), Money::from_units(500));
    }

    #[test]
    fn negative_amount_wins_over_insufficient_funds() {
        let mut account = test_account(Money::ZERO);
        assert_eq!(
            account.withdraw(Money::from_units(-1)),
            Err(DomainError::NegativeAmount)
        );
    }

    #[test]
    fn deposit_overflow_leaves_balance_untouched() {
        let mut account = test_account(Money::from_cents(i64::MAX - 1));
        assert_eq!(
            account.deposit(Money::from_cents(2)),
            Err(DomainError::AmountOverflow)
        );
        assert_eq!(account.balance(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn summary_renders_three_lines() {
        let account = test_account(Money::from_units(1500));
        assert_eq!(
            account.summary().to_string(),
            "Account Number: 1\nAccount Name: John Doe\nBalance: 1500.0"
        );
    }

    #[test]
    fn summary_keeps_significant_cents() {
        let account = test_account(Money::from_cents(50_050));
        assert!(account.summary().to_string().ends_with("\nBalance: 500.5"));

        let account = test_account(Money::from_cents(51));
        assert!(account.summary().to_string().ends_with("\nBalance: 0.51"));
    }

    #[test]
    fn zero_amounts_are_accepted() {
        let mut account = test_account(Money::ZERO);
        account.deposit(Money::ZERO).unwrap();
        account.withdraw(Money::ZERO).unwrap();
        assert_eq!(account.balance(), Money::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: negative amounts are rejected by both operations and
        /// never touch the balance.
        #[test]
        fn negative_amounts_never_mutate(
            balance in -1_000_000i64..1_000_000i64,
            amount in i64::MIN..0i64,
        ) {
            let mut account = test_account(Money::from_cents(balance));
            prop_assert_eq!(account.deposit(Money::from_cents(amount)), Err(DomainError::NegativeAmount));
            prop_assert_eq!(account.withdraw(Money::from_cents(amount)), Err(DomainError::NegativeAmount));
            prop_assert_eq!(account.balance(), Money::from_cents(balance));
        }

        /// Property: withdrawals up to the balance subtract exactly; anything
        /// larger fails and changes nothing.
        #[test]
        fn withdraw_is_exact_or_rejected(
            balance in 0i64..1_000_000i64,
            amount in 0i64..2_000_000i64,
        ) {
            let mut account = test_account(Money::from_cents(balance));
            let result = account.withdraw(Money::from_cents(amount));
            if amount <= balance {
                prop_assert!(result.is_ok());
                prop_assert_eq!(account.balance().cents(), balance - amount);
            } else {
                prop_assert_eq!(result, Err(DomainError::InsufficientFunds));
                prop_assert_eq!(account.balance().cents(), balance);
            }
        }

        /// Property: each deposit adds exactly its amount, every time.
        #[test]
        fn deposit_adds_exactly_per_call(
            balance in -1_000_000i64..1_000_000i64,
            amount in 0i64..1_000_000i64,
        ) {
            let mut account = test_account(Money::from_cents(balance));
            account.deposit(Money::from_cents(amount)).unwrap();
            account.deposit(Money::from_cents(amount)).unwrap();
            prop_assert_eq!(account.balance().cents(), balance + 2 * amount);
        }
    }
}
