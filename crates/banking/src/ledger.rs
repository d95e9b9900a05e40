use tracing::instrument;

use tally_core::{AccountId, DomainError, DomainResult, Entity, Money};

use crate::account::Account;
use crate::config::LedgerConfig;
use crate::journal::{Journal, LedgerEvent};

/// In-memory registry of accounts.
///
/// The ledger owns every account it creates. Ids are assigned densely
/// (`1, 2, 3, ...`) and accounts are never removed, so the account with id
/// `k` is stored at index `k - 1` and lookups are O(1).
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    journal: Journal,
    config: LedgerConfig,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Opens a new account with id `len() + 1`.
    ///
    /// The opening deposit becomes the starting balance as given, negative
    /// values included, unless `strict_opening_deposit` is set.
    #[instrument(skip(self), fields(account_id), err(level = "warn"))]
    pub fn create_account(&mut self, name: &str, initial_deposit: Money) -> DomainResult<AccountId> {
        if self.config.strict_opening_deposit && initial_deposit.is_negative() {
            return Err(DomainError::NegativeAmount);
        }

        let next = u32::try_from(self.accounts.len() + 1).map_err(|_| {
            DomainError::invalid_id("AccountId: registry exhausted")
        })?;
        let id = AccountId::new(next);
        tracing::Span::current().record("account_id", next);

        self.accounts
            .push(Account::open(id, name.to_string(), initial_deposit));
        self.journal.record(LedgerEvent::AccountOpened {
            account_id: id,
            name: name.to_string(),
            opening_balance: initial_deposit,
        });

        tracing::debug!(%id, balance = %initial_deposit, "account opened");
        Ok(id)
    }

    /// Returns the live account registered under `id`.
    pub fn find_account(&self, id: AccountId) -> DomainResult<&Account> {
        let slot = self.slot_of(id)?;
        Ok(&self.accounts[slot])
    }

    /// Mutable access to the live account registered under `id`.
    ///
    /// Changes made through the returned reference are visible to every later
    /// lookup but are not journaled; prefer [`Ledger::deposit`] and
    /// [`Ledger::withdraw`].
    pub fn find_account_mut(&mut self, id: AccountId) -> DomainResult<&mut Account> {
        let slot = self.slot_of(id)?;
        Ok(&mut self.accounts[slot])
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub fn deposit(&mut self, id: AccountId, amount: Money) -> DomainResult<Money> {
        let account = self.find_account_mut(id)?;
        account.deposit(amount)?;
        let balance = account.balance();

        self.journal.record(LedgerEvent::FundsDeposited {
            account_id: id,
            amount,
        });
        tracing::debug!(%id, %amount, %balance, "deposit applied");
        Ok(balance)
    }

    #[instrument(skip(self), err(level = "warn"))]
    pub fn withdraw(&mut self, id: AccountId, amount: Money) -> DomainResult<Money> {
        let account = self.find_account_mut(id)?;
        account.withdraw(amount)?;
        let balance = account.balance();

        self.journal.record(LedgerEvent::FundsWithdrawn {
            account_id: id,
            amount,
        });
        tracing::debug!(%id, %amount, %balance, "withdrawal applied");
        Ok(balance)
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// Both sides are validated before either balance changes, so a failed
    /// transfer has no effect at all. Failure order: `SameAccount`, then
    /// `AccountNotFound` for `from` and `to`, then the source's withdraw
    /// checks, then the destination's deposit checks.
    #[instrument(skip(self), err(level = "warn"))]
    pub fn transfer_money(&mut self, from: AccountId, to: AccountId, amount: Money) -> DomainResult<()> {
        if from == to {
            return Err(DomainError::SameAccount);
        }

        let from_slot = self.slot_of(from)?;
        let to_slot = self.slot_of(to)?;

        let from_balance = self.accounts[from_slot].check_withdraw(amount)?;
        let to_balance = self.accounts[to_slot].check_deposit(amount)?;

        self.accounts[from_slot].set_balance(from_balance);
        self.accounts[to_slot].set_balance(to_balance);

        let sequence = self
            .journal
            .record(LedgerEvent::FundsTransferred { from, to, amount })
            .sequence;
        tracing::debug!(
            %from,
            %to,
            %amount,
            %from_balance,
            %to_balance,
            sequence,
            "transfer committed"
        );
        Ok(())
    }

    fn slot_of(&self, id: AccountId) -> DomainResult<usize> {
        id.slot()
            .filter(|&slot| self.accounts.get(slot).is_some_and(|a| a.id() == id))
            .ok_or(DomainError::not_found(id))
    }
}
