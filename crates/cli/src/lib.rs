//! Demonstration driver for the ledger.
//!
//! [`run_demo`] replays the fixed scenario and writes the transcript to any
//! [`Write`] sink; the `tally-demo` binary points it at stdout.

use std::io::Write;

use anyhow::Result;

use tally_banking::Ledger;
use tally_core::{AccountId, DomainError, Money};

/// Runs the scenario against `ledger`.
///
/// The scenario is two guarded blocks. A recoverable [`DomainError`] inside a
/// block is printed as `Error: <message>` and ends that block only; anything
/// else (including [`DomainError::SameAccount`]) is returned to the caller.
pub fn run_demo(ledger: &mut Ledger, out: &mut impl Write) -> Result<()> {
    let john = ledger.create_account("John Doe", Money::from_units(1000))?;
    let jane = ledger.create_account("Jane Smith", Money::from_units(1000))?;

    let outcome = transfer_and_summarize(ledger, out, john, jane);
    report(out, outcome)?;

    let outcome = ledger
        .transfer_money(john, jane, Money::from_units(501))
        .map_err(anyhow::Error::from);
    report(out, outcome)?;

    Ok(())
}

fn transfer_and_summarize(
    ledger: &mut Ledger,
    out: &mut impl Write,
    from: AccountId,
    to: AccountId,
) -> Result<()> {
    ledger.transfer_money(from, to, Money::from_units(500))?;

    writeln!(out, "{}", ledger.find_account(from)?.summary())?;
    writeln!(out)?;
    writeln!(out, "{}", ledger.find_account(to)?.summary())?;
    writeln!(out)?;

    ledger.transfer_money(from, to, Money::from_units(-51))?;
    Ok(())
}

/// Prints recoverable domain errors; propagates everything else.
fn report(out: &mut impl Write, outcome: Result<()>) -> Result<()> {
    let Err(err) = outcome else {
        return Ok(());
    };

    match err.downcast::<DomainError>() {
        Ok(domain) if domain.is_recoverable() => {
            writeln!(out, "Error: {domain}")?;
            Ok(())
        }
        Ok(domain) => Err(domain.into()),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_prints_business_errors() {
        let mut out = Vec::new();
        report(&mut out, Err(DomainError::InsufficientFunds.into())).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: Insufficient funds\n");
    }

    #[test]
    fn report_propagates_same_account() {
        let mut out = Vec::new();
        let err = report(&mut out, Err(DomainError::SameAccount.into())).unwrap_err();
        assert_eq!(err.downcast::<DomainError>().unwrap(), DomainError::SameAccount);
        assert!(out.is_empty());
    }

    #[test]
    fn report_passes_success_through() {
        let mut out = Vec::new();
        report(&mut out, Ok(())).unwrap();
        assert!(out.is_empty());
    }
}
