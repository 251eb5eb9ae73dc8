//! # Built-in Segmenter Names

use std::sync::Arc;

use crate::{
    errors::{WIResult, WordindexError},
    segmentation::{CharSegmenter, RegexSegmenter, TextSegmenter, WORDS_PATTERN, WhitespaceSegmenter},
};

/// The built-in segmenters, by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SegmenterKind {
    /// One token per character; see [`CharSegmenter`].
    Chars,

    /// Whitespace separated words; see [`WhitespaceSegmenter`].
    Whitespace,

    /// Word runs and single symbols; see [`WORDS_PATTERN`].
    Words,
}

impl SegmenterKind {
    /// Resolve a built-in segmenter kind by name.
    ///
    /// ## Returns
    /// The kind, or `InvalidConfiguration` for unknown names.
    pub fn from_name(name: &str) -> WIResult<Self> {
        name.parse().map_err(|_| {
            WordindexError::InvalidConfiguration(format!("unknown segmenter: {name:?}"))
        })
    }

    /// The persisted name of this kind.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Build the segmenter.
    pub fn build(self) -> WIResult<Arc<dyn TextSegmenter>> {
        Ok(match self {
            Self::Chars => Arc::new(CharSegmenter),
            Self::Whitespace => Arc::new(WhitespaceSegmenter),
            Self::Words => Arc::new(RegexSegmenter::new(self.name(), WORDS_PATTERN)?),
        })
    }
}
