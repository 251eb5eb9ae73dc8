//! # Decode Options

/// What decoding does with the `UNKNOWN` marker.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum UnknownPolicy {
    /// Keep `UNKNOWN` markers; they stand for real, unrecognized content.
    #[default]
    Retain,

    /// Drop `UNKNOWN` markers; for reconstructing text from seen tokens only.
    Drop,
}

/// Options for decoding index sequences.
///
/// `START` / `END` markers and empty tokens are always dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// The `UNKNOWN` marker policy.
    pub unknown: UnknownPolicy,

    /// Fail on out-of-range indices, instead of substituting `UNKNOWN`.
    pub strict: bool,

    /// Joins tokens in `decode_to_string`.
    pub separator: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown: UnknownPolicy::Retain,
            strict: false,
            separator: String::new(),
        }
    }
}

impl DecodeOptions {
    /// Sets the `UNKNOWN` marker policy.
    pub fn with_unknown(
        self,
        unknown: UnknownPolicy,
    ) -> Self {
        Self { unknown, ..self }
    }

    /// Sets strict index checking.
    pub fn with_strict(
        self,
        strict: bool,
    ) -> Self {
        Self { strict, ..self }
    }

    /// Sets the join separator.
    pub fn with_separator<S: Into<String>>(
        self,
        separator: S,
    ) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }
}
