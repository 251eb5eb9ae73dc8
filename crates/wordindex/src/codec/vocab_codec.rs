//! # Vocab Codec

use std::sync::Arc;

use crate::{
    codec::{DecodeOptions, UnknownPolicy, parallel::try_map_batch},
    components::{ComponentRegistry, check_custom_pretreatment_name, check_custom_segmenter_name},
    errors::{WIResult, WordindexError},
    pretreatment::TextPretreatment,
    segmentation::TextSegmenter,
    types::TokenType,
    vocab::{
        TokenPipeline, TokenVocab, VocabBuilder, VocabOptions,
        io::{vocab_from_json_str, write_vocab_json},
    },
};

/// A text <-> index sequence codec over a learned vocabulary.
///
/// The vocabulary is empty until [`feed`](Self::feed) (or a restore);
/// encoding before that fails with `UnknownToken`.
///
/// `feed` takes `&mut self`; encoding and decoding are pure reads,
/// so a fed codec can be shared across threads.
#[derive(Debug, Clone)]
pub struct VocabCodec<T: TokenType = u32> {
    options: VocabOptions,
    pipeline: TokenPipeline,
    vocab: TokenVocab<T>,
    decode_options: DecodeOptions,
}

impl<T: TokenType> VocabCodec<T> {
    /// Create a codec with built-in components.
    ///
    /// ## Returns
    /// `InvalidConfiguration` for bad options or unknown component names.
    pub fn new(options: VocabOptions) -> WIResult<Self> {
        Self::from_registry(options, &ComponentRegistry::default())
    }

    /// Create a codec, resolving component names through `registry`.
    pub fn from_registry(
        options: VocabOptions,
        registry: &ComponentRegistry,
    ) -> WIResult<Self> {
        let pipeline = TokenPipeline::from_registry(&options, registry)?;
        Ok(Self::from_parts(options, pipeline, TokenVocab::default()))
    }

    /// Create a codec with injected components.
    ///
    /// The component names in `options` are replaced by the components' own names.
    /// Built-in components are selected by name, through [`new`](Self::new).
    ///
    /// ## Returns
    /// `InvalidConfiguration` if a component name is empty or a built-in name;
    /// it would be persisted under a name that restores to something else.
    pub fn with_components(
        options: VocabOptions,
        segmenter: Arc<dyn TextSegmenter>,
        pretreatment: Arc<dyn TextPretreatment>,
    ) -> WIResult<Self> {
        check_custom_segmenter_name(segmenter.name())?;
        check_custom_pretreatment_name(pretreatment.name())?;
        let options = options
            .with_segmenter(segmenter.name())
            .with_pretreatment(pretreatment.name());
        let pipeline = TokenPipeline::new(&options, segmenter, pretreatment)?;
        Ok(Self::from_parts(options, pipeline, TokenVocab::default()))
    }

    pub(crate) fn from_parts(
        options: VocabOptions,
        pipeline: TokenPipeline,
        vocab: TokenVocab<T>,
    ) -> Self {
        Self {
            options,
            pipeline,
            vocab,
            decode_options: DecodeOptions::default(),
        }
    }

    /// The codec options.
    pub fn options(&self) -> &VocabOptions {
        &self.options
    }

    /// The token pipeline.
    pub fn pipeline(&self) -> &TokenPipeline {
        &self.pipeline
    }

    /// The learned vocabulary.
    pub fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }

    /// The default decode options.
    pub fn decode_options(&self) -> &DecodeOptions {
        &self.decode_options
    }

    /// Sets the default decode options.
    pub fn set_decode_options(
        &mut self,
        decode_options: DecodeOptions,
    ) {
        self.decode_options = decode_options;
    }

    /// Sets the default decode options, builder style.
    pub fn with_decode_options(
        mut self,
        decode_options: DecodeOptions,
    ) -> Self {
        self.set_decode_options(decode_options);
        self
    }

    /// The index of the `START` marker, if enabled.
    pub fn start_index(&self) -> Option<T> {
        self.reserved_index(self.options.reserved.start())
    }

    /// The index of the `END` marker, if enabled.
    pub fn end_index(&self) -> Option<T> {
        self.reserved_index(self.options.reserved.end())
    }

    /// The index of the `UNKNOWN` marker, if enabled.
    pub fn unknown_index(&self) -> Option<T> {
        self.reserved_index(self.options.reserved.unknown())
    }

    fn reserved_index(
        &self,
        symbol: Option<&str>,
    ) -> Option<T> {
        symbol.and_then(|s| self.vocab.lookup_index(s))
    }

    /// Learn the vocabulary from a corpus, replacing any previous vocabulary.
    ///
    /// ## Arguments
    /// * `corpus` - One text per item.
    ///
    /// ## Returns
    /// `VocabSizeOverflow` if the vocabulary does not fit `T`;
    /// the previous vocabulary is kept in that case.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, corpus)))]
    pub fn feed<I>(
        &mut self,
        corpus: I,
    ) -> WIResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = VocabBuilder::new(self.pipeline.clone(), self.options.min_frequency);
        builder.update_from_samples(corpus);
        self.vocab = builder.build()?;
        Ok(())
    }

    /// The bounded token window for `text`, before index mapping.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.pipeline.tokenize(text)
    }

    fn token_index(
        &self,
        token: &str,
    ) -> WIResult<T> {
        self.vocab
            .lookup_index(token)
            .or_else(|| self.unknown_index())
            .ok_or_else(|| WordindexError::UnknownToken {
                token: token.to_string(),
            })
    }

    /// Encode text into indices.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `fill` - Right-pad with `UNKNOWN` to exactly `max_length`.
    ///
    /// ## Returns
    /// `min(max_length, window length)` indices, or `max_length` with `fill`.
    /// `UnknownToken` if a token (or needed padding) has no index.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        fill: bool,
    ) -> WIResult<Vec<T>> {
        self.encode_tokens(&self.tokenize(text), fill)
    }

    /// Encode an already segmented token sequence.
    ///
    /// The sequence is truncated to `max_length`; no markers are added.
    pub fn encode_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        fill: bool,
    ) -> WIResult<Vec<T>> {
        let max_length = self.options.max_length;
        let mut indices = Vec::with_capacity(if fill { max_length } else { tokens.len() });
        for token in tokens.iter().take(max_length) {
            indices.push(self.token_index(token.as_ref())?);
        }

        if fill && indices.len() < max_length {
            let pad = self.token_index(&self.options.reserved.unknown)?;
            indices.resize(max_length, pad);
        }
        Ok(indices)
    }

    /// Encode a batch of texts; in parallel with the `rayon` feature.
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
        fill: bool,
    ) -> WIResult<Vec<Vec<T>>> {
        try_map_batch(batch, |text| self.encode(text.as_ref(), fill))
    }

    /// Decode indices into tokens, with the codec's default [`DecodeOptions`].
    pub fn decode(
        &self,
        indices: &[T],
    ) -> WIResult<Vec<String>> {
        self.decode_with(indices, &self.decode_options)
    }

    /// Decode indices into tokens.
    ///
    /// `START` / `END` markers and empty tokens are dropped.
    /// Out-of-range indices become `UNKNOWN`, unless `options.strict`.
    ///
    /// ## Returns
    /// The tokens; `InvalidIndex` for an out-of-range index in strict mode.
    pub fn decode_with(
        &self,
        indices: &[T],
        options: &DecodeOptions,
    ) -> WIResult<Vec<String>> {
        let reserved = &self.options.reserved;
        let drop_unknown = options.unknown == UnknownPolicy::Drop;

        let mut tokens = Vec::with_capacity(indices.len());
        for &index in indices {
            let token = match self.vocab.lookup_token(index) {
                Some(token) => token,
                None if options.strict => {
                    return Err(WordindexError::InvalidIndex {
                        index: index.to_u64().unwrap_or(u64::MAX),
                        size: self.vocab.len(),
                    });
                }
                None => reserved.unknown.as_str(),
            };

            if token.is_empty()
                || reserved.is_structural(token)
                || (drop_unknown && reserved.unknown() == Some(token))
            {
                continue;
            }
            tokens.push(token.to_string());
        }
        Ok(tokens)
    }

    /// Decode indices and join the tokens with the configured separator.
    pub fn decode_to_string(
        &self,
        indices: &[T],
    ) -> WIResult<String> {
        Ok(self
            .decode(indices)?
            .join(&self.decode_options.separator))
    }

    /// Decode a batch of index sequences; in parallel with the `rayon` feature.
    pub fn decode_batch<V: AsRef<[T]> + Sync>(
        &self,
        batch: &[V],
    ) -> WIResult<Vec<Vec<String>>> {
        try_map_batch(batch, |indices| self.decode(indices.as_ref()))
    }

    /// Serialize the codec state; see [`crate::vocab::io`].
    pub fn save(&self) -> WIResult<Vec<u8>> {
        let mut buf = Vec::new();
        write_vocab_json(self, &mut buf)?;
        Ok(buf)
    }

    /// Restore a codec saved with [`save`](Self::save), using built-in components.
    pub fn restore(bytes: &[u8]) -> WIResult<Self> {
        Self::restore_with_registry(bytes, &ComponentRegistry::default())
    }

    /// Restore a codec, resolving component names through `registry`.
    pub fn restore_with_registry(
        bytes: &[u8],
        registry: &ComponentRegistry,
    ) -> WIResult<Self> {
        let json = core::str::from_utf8(bytes)
            .map_err(|e| WordindexError::MalformedVocabulary(e.to_string()))?;
        vocab_from_json_str(json, registry)
    }
}
