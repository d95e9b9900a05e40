//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// Environment variable backing [`LedgerConfig::strict_opening_deposit`].
pub const STRICT_OPENING_DEPOSIT_ENV: &str = "TALLY_STRICT_OPENING_DEPOSIT";

/// Behavioural switches for a [`Ledger`](crate::Ledger).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Reject negative opening deposits in `create_account`.
    ///
    /// Off by default: opening balances are stored as given.
    pub strict_opening_deposit: bool,
}

impl LedgerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            strict_opening_deposit: env_flag(STRICT_OPENING_DEPOSIT_ENV),
        }
    }
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
            tracing::warn!("{name}={raw:?} is not a boolean; using false");
            false
        }),
        Err(_) => false,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        assert!(!LedgerConfig::default().strict_opening_deposit);
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
