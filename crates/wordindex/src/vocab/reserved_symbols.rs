//! # Reserved Symbols
//!
//! The structural markers `START`, `END` and `UNKNOWN`.
//!
//! An empty string disables a marker. Enabled markers take the lowest
//! indices of a vocabulary, in the fixed order `START`, `END`, `UNKNOWN`,
//! whether or not they are observed in the corpus.

use serde::{Deserialize, Serialize};

use crate::errors::{WIResult, WordindexError};

/// Default `START` marker.
pub const DEFAULT_START: &str = "#";

/// Default `END` marker.
pub const DEFAULT_END: &str = "&";

/// Default `UNKNOWN` marker.
pub const DEFAULT_UNKNOWN: &str = "@";

/// The reserved marker strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservedSymbols {
    /// Prepended to every text.
    pub start: String,

    /// Appended to every text.
    pub end: String,

    /// Substituted for out-of-vocabulary tokens; also the padding symbol.
    pub unknown: String,
}

impl Default for ReservedSymbols {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END, DEFAULT_UNKNOWN)
    }
}

impl ReservedSymbols {
    /// Build reserved symbols; empty strings are disabled.
    pub fn new<A, B, C>(
        start: A,
        end: B,
        unknown: C,
    ) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            start: start.into(),
            end: end.into(),
            unknown: unknown.into(),
        }
    }

    /// All markers disabled.
    pub fn disabled() -> Self {
        Self::new("", "", "")
    }

    /// The `START` marker, if enabled.
    pub fn start(&self) -> Option<&str> {
        enabled(&self.start)
    }

    /// The `END` marker, if enabled.
    pub fn end(&self) -> Option<&str> {
        enabled(&self.end)
    }

    /// The `UNKNOWN` marker, if enabled.
    pub fn unknown(&self) -> Option<&str> {
        enabled(&self.unknown)
    }

    /// The enabled markers, in index order.
    pub fn iter_enabled(&self) -> impl Iterator<Item = &str> {
        [self.start(), self.end(), self.unknown()]
            .into_iter()
            .flatten()
    }

    /// Is `token` one of the enabled markers?
    pub fn is_reserved(
        &self,
        token: &str,
    ) -> bool {
        !token.is_empty() && self.iter_enabled().any(|r| r == token)
    }

    /// Is `token` the enabled `START` or `END` marker?
    pub fn is_structural(
        &self,
        token: &str,
    ) -> bool {
        !token.is_empty() && (self.start() == Some(token) || self.end() == Some(token))
    }

    /// Reject enabled markers which share a string.
    pub fn validate(&self) -> WIResult<()> {
        let enabled: Vec<&str> = self.iter_enabled().collect();
        for (i, a) in enabled.iter().enumerate() {
            if enabled[i + 1..].contains(a) {
                return Err(WordindexError::InvalidConfiguration(format!(
                    "reserved symbol {a:?} is used more than once"
                )));
            }
        }
        Ok(())
    }
}

fn enabled(symbol: &str) -> Option<&str> {
    if symbol.is_empty() { None } else { Some(symbol) }
}
