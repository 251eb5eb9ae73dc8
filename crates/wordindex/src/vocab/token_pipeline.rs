//! # Token Pipeline
//!
//! Turns one text into the bounded token window that is counted or encoded:
//!
//! 1. pretreat the text,
//! 2. segment it, dropping empty tokens and stop words,
//! 3. wrap it in the enabled `START` / `END` markers,
//! 4. truncate to `max_length` tokens.
//!
//! Markers are added as whole tokens, so a multi-character marker is never
//! split by the segmenter.

use std::sync::Arc;

use crate::{
    components::ComponentRegistry,
    errors::WIResult,
    pretreatment::TextPretreatment,
    segmentation::TextSegmenter,
    types::WIHashSet,
    vocab::{ReservedSymbols, VocabOptions},
};

/// The text -> token window pipeline.
#[derive(Clone)]
pub struct TokenPipeline {
    segmenter: Arc<dyn TextSegmenter>,
    pretreatment: Arc<dyn TextPretreatment>,
    reserved: ReservedSymbols,
    stop_words: WIHashSet<String>,
    max_length: usize,
}

impl core::fmt::Debug for TokenPipeline {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenPipeline")
            .field("segmenter", &self.segmenter.name())
            .field("pretreatment", &self.pretreatment.name())
            .field("reserved", &self.reserved)
            .field("stop_words", &self.stop_words.len())
            .field("max_length", &self.max_length)
            .finish()
    }
}

impl TokenPipeline {
    /// Build a pipeline from explicit components.
    ///
    /// The component names in `options` are ignored.
    pub fn new(
        options: &VocabOptions,
        segmenter: Arc<dyn TextSegmenter>,
        pretreatment: Arc<dyn TextPretreatment>,
    ) -> WIResult<Self> {
        options.validate()?;
        Ok(Self {
            segmenter,
            pretreatment,
            reserved: options.reserved.clone(),
            stop_words: options.stop_words.iter().cloned().collect(),
            max_length: options.max_length,
        })
    }

    /// Build a pipeline, resolving component names through a registry.
    pub fn from_registry(
        options: &VocabOptions,
        registry: &ComponentRegistry,
    ) -> WIResult<Self> {
        Self::new(
            options,
            registry.segmenter(&options.segmenter)?,
            registry.pretreatment(&options.pretreatment)?,
        )
    }

    /// The segmenter.
    pub fn segmenter(&self) -> &Arc<dyn TextSegmenter> {
        &self.segmenter
    }

    /// The pretreatment.
    pub fn pretreatment(&self) -> &Arc<dyn TextPretreatment> {
        &self.pretreatment
    }

    /// The reserved markers.
    pub fn reserved(&self) -> &ReservedSymbols {
        &self.reserved
    }

    /// The maximum window length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Produce the token window for a text.
    ///
    /// ## Returns
    /// At most `max_length` tokens.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let text = self.pretreatment.pretreat(text);

        let mut tokens = Vec::with_capacity(self.max_length);
        if let Some(start) = self.reserved.start() {
            tokens.push(start.to_string());
        }
        tokens.extend(
            self.segmenter
                .segment(&text)
                .into_iter()
                .filter(|t| !t.is_empty())
                .filter(|t| self.reserved.is_reserved(t) || !self.stop_words.contains(t)),
        );
        if let Some(end) = self.reserved.end() {
            tokens.push(end.to_string());
        }

        tokens.truncate(self.max_length);
        tokens
    }
}
