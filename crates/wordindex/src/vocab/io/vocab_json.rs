//! # JSON Vocabulary IO
//!
//! The persisted form of a [`VocabCodec`]:
//!
//! ```json
//! {
//!   "format": "wordindex.vocab",
//!   "version": 1,
//!   "config": { "segmenter": "chars", "max_length": 30, "start": "#", ... },
//!   "token_to_index": { "#": 0, "&": 1, "@": 2, "c": 3 },
//!   "index_to_token": { "0": "#", "1": "&", "2": "@", "3": "c" },
//!   "known_tokens": ["#", "&", "@", "c"]
//! }
//! ```
//!
//! JSON object keys are strings; the keys of `index_to_token` are parsed
//! back into integers on load. Document frequencies are not persisted.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    codec::VocabCodec,
    components::ComponentRegistry,
    errors::{WIResult, WordindexError},
    types::TokenType,
    vocab::{TokenPipeline, TokenVocab, VocabOptions},
};

/// The `format` tag of persisted vocabularies.
pub const VOCAB_FORMAT: &str = "wordindex.vocab";

/// The current `version` of the persisted layout.
pub const VOCAB_FORMAT_VERSION: u32 = 1;

/// The serialized vocabulary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedVocab {
    /// Always [`VOCAB_FORMAT`].
    pub format: String,

    /// Always [`VOCAB_FORMAT_VERSION`].
    pub version: u32,

    /// The codec configuration.
    pub config: VocabOptions,

    /// The forward map.
    pub token_to_index: BTreeMap<String, u64>,

    /// The inverse map.
    pub index_to_token: BTreeMap<u64, String>,

    /// Every token in the vocabulary, sorted.
    pub known_tokens: Vec<String>,
}

fn malformed<S: Into<String>>(msg: S) -> WordindexError {
    WordindexError::MalformedVocabulary(msg.into())
}

impl PersistedVocab {
    /// Snapshot a codec.
    pub fn from_codec<T: TokenType>(codec: &VocabCodec<T>) -> Self {
        let vocab = codec.vocab();

        let mut token_to_index = BTreeMap::new();
        let mut index_to_token = BTreeMap::new();
        for (idx, token) in vocab.index_to_token().iter().enumerate() {
            token_to_index.insert(token.clone(), idx as u64);
            index_to_token.insert(idx as u64, token.clone());
        }

        Self {
            format: VOCAB_FORMAT.to_string(),
            version: VOCAB_FORMAT_VERSION,
            config: codec.options().clone(),
            known_tokens: token_to_index.keys().cloned().collect(),
            token_to_index,
            index_to_token,
        }
    }

    /// Check the record and rebuild the vocabulary.
    ///
    /// ## Returns
    /// The config and the vocab; `MalformedVocabulary` on any inconsistency.
    pub fn into_parts<T: TokenType>(self) -> WIResult<(VocabOptions, TokenVocab<T>)> {
        if self.format != VOCAB_FORMAT {
            return Err(malformed(format!("unknown format {:?}", self.format)));
        }
        if self.version != VOCAB_FORMAT_VERSION {
            return Err(malformed(format!("unsupported version {}", self.version)));
        }
        self.config
            .validate()
            .map_err(|e| malformed(format!("bad config: {e}")))?;

        let size = self.index_to_token.len();
        let mut tokens = Vec::with_capacity(size);
        for (expected, (index, token)) in self.index_to_token.into_iter().enumerate() {
            if index != expected as u64 {
                return Err(malformed(format!(
                    "indices are not dense: expected {expected}, found {index}"
                )));
            }
            tokens.push(token);
        }

        if self.token_to_index.len() != size {
            return Err(malformed(format!(
                "token_to_index has {} entries, index_to_token has {size}",
                self.token_to_index.len()
            )));
        }
        for (token, &index) in &self.token_to_index {
            let inverse = usize::try_from(index).ok().and_then(|i| tokens.get(i));
            if inverse != Some(token) {
                return Err(malformed(format!(
                    "token {token:?} maps to {index}, which does not map back"
                )));
            }
        }

        let known: BTreeSet<&String> = self.known_tokens.iter().collect();
        if known.len() != self.known_tokens.len()
            || !known.iter().copied().eq(self.token_to_index.keys())
        {
            return Err(malformed("known_tokens does not match token_to_index"));
        }

        // An unfed codec saves an empty vocabulary.
        let reserved = if tokens.is_empty() {
            Vec::new()
        } else {
            self.config.reserved.iter_enabled().collect()
        };
        for (idx, symbol) in reserved.into_iter().enumerate() {
            if tokens.get(idx).map(String::as_str) != Some(symbol) {
                return Err(malformed(format!(
                    "reserved symbol {symbol:?} is not at index {idx}"
                )));
            }
        }

        let vocab = TokenVocab::from_ordered_tokens(tokens, Default::default())
            .map_err(|e| malformed(e.to_string()))?;
        Ok((self.config, vocab))
    }

    /// Rebuild a codec, resolving components through `registry`.
    pub fn into_codec<T: TokenType>(
        self,
        registry: &ComponentRegistry,
    ) -> WIResult<VocabCodec<T>> {
        let (options, vocab) = self.into_parts::<T>()?;
        let pipeline = TokenPipeline::from_registry(&options, registry)?;
        Ok(VocabCodec::from_parts(options, pipeline, vocab))
    }
}

/// Serialize a codec to a JSON string.
pub fn vocab_to_json_string<T: TokenType>(codec: &VocabCodec<T>) -> WIResult<String> {
    Ok(serde_json::to_string_pretty(&PersistedVocab::from_codec(
        codec,
    ))?)
}

/// Restore a codec from a JSON string.
///
/// ## Arguments
/// * `json` - The serialized vocab.
/// * `registry` - Resolves the persisted component names.
pub fn vocab_from_json_str<T: TokenType>(
    json: &str,
    registry: &ComponentRegistry,
) -> WIResult<VocabCodec<T>> {
    let record: PersistedVocab =
        serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
    record.into_codec(registry)
}

/// Write a codec as JSON to a [`Write`] writer.
pub fn write_vocab_json<T, W>(
    codec: &VocabCodec<T>,
    writer: &mut W,
) -> WIResult<()>
where
    T: TokenType,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, &PersistedVocab::from_codec(codec))?;
    writeln!(writer)?;
    Ok(())
}

/// Read a codec from a JSON [`Read`] reader.
pub fn read_vocab_json<T, R>(
    reader: R,
    registry: &ComponentRegistry,
) -> WIResult<VocabCodec<T>>
where
    T: TokenType,
    R: Read,
{
    let record: PersistedVocab =
        serde_json::from_reader(reader).map_err(|e| malformed(e.to_string()))?;
    record.into_codec(registry)
}

/// Save a codec to a JSON vocab file.
pub fn save_vocab_json_path<T: TokenType, P: AsRef<Path>>(
    codec: &VocabCodec<T>,
    path: P,
) -> WIResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_json(codec, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a codec from a JSON vocab file.
pub fn load_vocab_json_path<T: TokenType, P: AsRef<Path>>(
    path: P,
    registry: &ComponentRegistry,
) -> WIResult<VocabCodec<T>> {
    let reader = BufReader::new(File::open(path)?);
    read_vocab_json(reader, registry)
}
