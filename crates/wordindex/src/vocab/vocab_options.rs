//! # Vocabulary Options
//!
//! The configuration of a [`crate::codec::VocabCodec`].
//! This is also the `config` section of the persisted vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WIResult, WordindexError},
    pretreatment::PretreatmentKind,
    segmentation::SegmenterKind,
    vocab::ReservedSymbols,
};

/// Default `max_length`.
pub const DEFAULT_MAX_LENGTH: usize = 30;

/// Options for building and applying a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabOptions {
    /// The segmenter name.
    pub segmenter: String,

    /// The pretreatment name.
    pub pretreatment: String,

    /// Maximum tokens per text, markers included.
    pub max_length: usize,

    /// Tokens with a document frequency `<= min_frequency` are not learned.
    pub min_frequency: u64,

    /// The reserved markers.
    #[serde(flatten)]
    pub reserved: ReservedSymbols,

    /// Tokens dropped from segmenter output.
    pub stop_words: BTreeSet<String>,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            segmenter: SegmenterKind::Chars.name().to_string(),
            pretreatment: PretreatmentKind::default().name().to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            min_frequency: 0,
            reserved: ReservedSymbols::default(),
            stop_words: BTreeSet::new(),
        }
    }
}

impl VocabOptions {
    /// Sets the segmenter name.
    pub fn with_segmenter<S: Into<String>>(
        self,
        segmenter: S,
    ) -> Self {
        Self {
            segmenter: segmenter.into(),
            ..self
        }
    }

    /// Sets the pretreatment name.
    pub fn with_pretreatment<S: Into<String>>(
        self,
        pretreatment: S,
    ) -> Self {
        Self {
            pretreatment: pretreatment.into(),
            ..self
        }
    }

    /// Sets the maximum tokens per text.
    pub fn with_max_length(
        self,
        max_length: usize,
    ) -> Self {
        Self { max_length, ..self }
    }

    /// Sets the minimum frequency threshold.
    pub fn with_min_frequency(
        self,
        min_frequency: u64,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Sets the reserved markers.
    pub fn with_reserved(
        self,
        reserved: ReservedSymbols,
    ) -> Self {
        Self { reserved, ..self }
    }

    /// Enables the default markers, or disables all markers.
    pub fn with_placeholders(
        self,
        enabled: bool,
    ) -> Self {
        self.with_reserved(if enabled {
            ReservedSymbols::default()
        } else {
            ReservedSymbols::disabled()
        })
    }

    /// Sets the stop words.
    pub fn with_stop_words<W, S>(
        self,
        stop_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Check the options for consistency.
    ///
    /// Component names are checked when they are resolved,
    /// see [`crate::components::ComponentRegistry`].
    pub fn validate(&self) -> WIResult<()> {
        if self.max_length == 0 {
            return Err(WordindexError::InvalidConfiguration(
                "max_length must be > 0".to_string(),
            ));
        }
        self.reserved.validate()
    }
}
