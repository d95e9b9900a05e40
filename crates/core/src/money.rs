//! Monetary amounts.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

const CENTS_PER_UNIT: i64 = 100;

/// Signed money amount in the smallest unit (cents).
///
/// A value object: compared by value, copied freely, never mutated in place.
///
/// Balances and operation amounts both use this type. Amounts handed to
/// account operations are expected to be non-negative; balances may be
/// negative only when an account was opened with a negative deposit.
///
/// ```rust
/// use tally_core::Money;
///
/// assert_eq!(Money::from_units(500).to_string(), "500.00");
/// assert_eq!("-0.51".parse::<Money>().unwrap().cents(), -51);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole currency units. `i32` keeps the conversion lossless.
    pub const fn from_units(units: i32) -> Self {
        Self(units as i64 * CENTS_PER_UNIT)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> DomainResult<Money> {
        self.0
            .checked_add(rhs.0)
            .map(Money)
            .ok_or(DomainError::AmountOverflow)
    }

    pub fn checked_sub(self, rhs: Money) -> DomainResult<Money> {
        self.0
            .checked_sub(rhs.0)
            .map(Money)
            .ok_or(DomainError::AmountOverflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / CENTS_PER_UNIT as u64;
        let cents = abs % CENTS_PER_UNIT as u64;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

/// Shortest decimal rendering of a [`Money`]: `500.0`, `500.5`, `0.51`.
///
/// At least one fraction digit is always printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Trimmed(Money);

impl Money {
    pub const fn trimmed(self) -> Trimmed {
        Trimmed(self)
    }
}

impl fmt::Display for Trimmed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.0 < 0 { "-" } else { "" };
        let abs = self.0.0.unsigned_abs();
        let units = abs / CENTS_PER_UNIT as u64;
        let cents = abs % CENTS_PER_UNIT as u64;
        if cents % 10 == 0 {
            write!(f, "{sign}{units}.{}", cents / 10)
        } else {
            write!(f, "{sign}{units}.{cents:02}")
        }
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `"12"`, `"12.5"`, `"12,50"`, `"-0.51"` or `"+3"`.
    ///
    /// At most two fraction digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::invalid_amount(format!("'{s}'"));

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (units_str, frac_str) = match rest.split_once(['.', ',']) {
            Some((units, frac)) => (units, frac),
            None => (rest, ""),
        };

        if units_str.is_empty() || !units_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| DomainError::AmountOverflow)?;
        let cents: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac_str.parse::<i64>().map_err(|_| invalid())?,
            _ => return Err(DomainError::invalid_amount("too many decimals")),
        };

        let total = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|v| v.checked_add(cents))
            .ok_or(DomainError::AmountOverflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}
