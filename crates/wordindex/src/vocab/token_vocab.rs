//! # Token Vocabulary

use crate::{
    errors::{WIResult, WordindexError},
    types::{TokenType, WIHashMap, try_vocab_size},
};

/// A dense, bidirectional `token <-> index` mapping.
///
/// Indices are exactly `0..len()`; `index_to_token[token_to_index[t]] == t`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_to_index: WIHashMap<String, T>,
    index_to_token: Vec<String>,
    token_frequencies: WIHashMap<String, u64>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            token_to_index: WIHashMap::default(),
            index_to_token: Vec::new(),
            token_frequencies: WIHashMap::default(),
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocab from tokens in index order.
    ///
    /// ## Arguments
    /// * `tokens` - Token `i` is assigned index `i`.
    /// * `token_frequencies` - Document frequencies, kept for inspection.
    ///
    /// ## Returns
    /// `VocabSizeOverflow` if the indices do not fit `T`;
    /// `MalformedVocabulary` if a token repeats.
    pub fn from_ordered_tokens(
        tokens: Vec<String>,
        token_frequencies: WIHashMap<String, u64>,
    ) -> WIResult<Self> {
        try_vocab_size::<T>(tokens.len())?;

        let mut token_to_index: WIHashMap<String, T> = WIHashMap::default();
        token_to_index.reserve(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            // try_vocab_size guarantees every index fits.
            let index = T::from_usize(idx).ok_or(WordindexError::VocabSizeOverflow {
                size: tokens.len(),
            })?;
            if token_to_index.insert(token.clone(), index).is_some() {
                return Err(WordindexError::MalformedVocabulary(format!(
                    "duplicate token {token:?}"
                )));
            }
        }

        Ok(Self {
            token_to_index,
            index_to_token: tokens,
            token_frequencies,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    /// Is the vocab empty?
    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }

    /// Is `token` in the vocab?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_index.contains_key(token)
    }

    /// The index of `token`, if any.
    pub fn lookup_index(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_index.get(token).copied()
    }

    /// The token at `index`, if in range.
    pub fn lookup_token(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|i| self.index_to_token.get(i))
            .map(String::as_str)
    }

    /// The `token -> index` map.
    pub fn token_to_index(&self) -> &WIHashMap<String, T> {
        &self.token_to_index
    }

    /// The tokens, in index order.
    pub fn index_to_token(&self) -> &[String] {
        &self.index_to_token
    }

    /// `(index, token)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.index_to_token
            .iter()
            .enumerate()
            .filter_map(|(i, t)| T::from_usize(i).map(|idx| (idx, t.as_str())))
    }

    /// The document frequencies counted at build time.
    ///
    /// Empty for restored vocabs.
    pub fn token_frequencies(&self) -> &WIHashMap<String, u64> {
        &self.token_frequencies
    }

    /// The document frequency of `token`; `None` if it was never counted.
    pub fn frequency(
        &self,
        token: &str,
    ) -> Option<u64> {
        self.token_frequencies.get(token).copied()
    }

    /// Convert to a different index type.
    pub fn to_token_type<G: TokenType>(&self) -> WIResult<TokenVocab<G>> {
        TokenVocab::<G>::from_ordered_tokens(
            self.index_to_token.clone(),
            self.token_frequencies.clone(),
        )
    }
}
