//! # Built-in Pretreatments

use crate::pretreatment::{PretreatmentKind, TextPretreatment};

/// Removes every tab, newline, carriage return and space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripWhitespace;

impl StripWhitespace {
    /// The characters removed.
    pub const STRIPPED: [char; 4] = ['\t', '\n', '\r', ' '];
}

impl TextPretreatment for StripWhitespace {
    fn name(&self) -> &str {
        PretreatmentKind::StripWhitespace.name()
    }

    fn pretreat(
        &self,
        text: &str,
    ) -> String {
        text.chars()
            .filter(|c| !Self::STRIPPED.contains(c))
            .collect()
    }
}

/// Leaves text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl TextPretreatment for Identity {
    fn name(&self) -> &str {
        PretreatmentKind::Identity.name()
    }

    fn pretreat(
        &self,
        text: &str,
    ) -> String {
        text.to_string()
    }
}

/// Unicode lowercasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl TextPretreatment for Lowercase {
    fn name(&self) -> &str {
        PretreatmentKind::Lowercase.name()
    }

    fn pretreat(
        &self,
        text: &str,
    ) -> String {
        text.to_lowercase()
    }
}
