//! Banking module (accounts and the in-memory ledger that owns them).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod config;
pub mod journal;
pub mod ledger;

pub use account::{Account, AccountSummary};
pub use config::LedgerConfig;
pub use journal::{Event, Journal, JournalRecord, LedgerEvent};
pub use ledger::Ledger;
