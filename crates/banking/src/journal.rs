//! Append-only record of ledger state changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::{AccountId, Money};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - designed to be **append-only**
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "banking.account.opened").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    AccountOpened {
        account_id: AccountId,
        name: String,
        opening_balance: Money,
    },
    FundsDeposited {
        account_id: AccountId,
        amount: Money,
    },
    FundsWithdrawn {
        account_id: AccountId,
        amount: Money,
    },
    FundsTransferred {
        from: AccountId,
        to: AccountId,
        amount: Money,
    },
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::AccountOpened { .. } => "banking.account.opened",
            LedgerEvent::FundsDeposited { .. } => "banking.account.deposited",
            LedgerEvent::FundsWithdrawn { .. } => "banking.account.withdrawn",
            LedgerEvent::FundsTransferred { .. } => "banking.ledger.transferred",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// One journal entry. `sequence` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub sequence: u64,
    pub occurred_at: DateTime<Utc>,
    /// Schema version of `event`, as reported by [`Event::version`].
    pub event_version: u32,
    pub event: LedgerEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Journal {
    records: Vec<JournalRecord>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, event: LedgerEvent) -> &JournalRecord {
        let sequence = self.records.len() as u64 + 1;
        tracing::trace!(sequence, event_type = event.event_type(), "journal append");
        self.records.push(JournalRecord {
            sequence,
            occurred_at: Utc::now(),
            event_version: event.version(),
            event,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[JournalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// JSON array of all records, oldest first.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
