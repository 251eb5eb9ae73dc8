//! # Vocab Builder

use core::cmp::Reverse;

use crate::{
    errors::WIResult,
    types::{TokenType, WIHashMap},
    vocab::{DocumentFrequencyCounter, ReservedSymbols, TokenPipeline, TokenVocab},
};

/// Learns a [`TokenVocab`] from a corpus.
pub struct VocabBuilder {
    /// The text -> token window pipeline.
    pub pipeline: TokenPipeline,

    /// Tokens with a document frequency `<= min_frequency` are dropped.
    pub min_frequency: u64,

    /// The document frequency counter.
    pub counter: DocumentFrequencyCounter,
}

impl VocabBuilder {
    /// Create a builder with an empty counter.
    pub fn new(
        pipeline: TokenPipeline,
        min_frequency: u64,
    ) -> Self {
        Self {
            pipeline,
            min_frequency,
            counter: DocumentFrequencyCounter::new(),
        }
    }

    /// Count one text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let tokens = self.pipeline.tokenize(text.as_ref());
        self.counter.update_from_tokens(tokens);
    }

    /// Count each text of a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples; one document each.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Assemble the vocabulary from the counts so far.
    ///
    /// ## Returns
    /// The vocab; or `VocabSizeOverflow` if it does not fit `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build<T: TokenType>(self) -> WIResult<TokenVocab<T>> {
        let reserved = self.pipeline.reserved().clone();
        let documents = self.counter.document_count;
        let counts: WIHashMap<String, u64> = self
            .counter
            .release()
            .into_iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect();

        let tokens = order_tokens(&counts, &reserved, self.min_frequency);
        log::debug!(
            "vocab built from {} texts: {} counted tokens, {} indexed",
            documents,
            counts.len(),
            tokens.len()
        );

        TokenVocab::from_ordered_tokens(tokens, counts)
    }
}

/// Order counted tokens into index order.
///
/// The enabled reserved markers come first (`START`, `END`, `UNKNOWN`);
/// then every other token with a count `> min_frequency`, by descending
/// count and then ascending token string.
///
/// A counted token equal to an enabled marker is that marker,
/// and is not given a second index.
pub fn order_tokens(
    counts: &WIHashMap<String, u64>,
    reserved: &ReservedSymbols,
    min_frequency: u64,
) -> Vec<String> {
    let mut learned: Vec<(&str, u64)> = counts
        .iter()
        .filter(|&(token, &count)| count > min_frequency && !reserved.is_reserved(token))
        .map(|(token, &count)| (token.as_str(), count))
        .collect();
    learned.sort_unstable_by_key(|&(token, count)| (Reverse(count), token));

    reserved
        .iter_enabled()
        .chain(learned.into_iter().map(|(token, _)| token))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{components::ComponentRegistry, vocab::VocabOptions};

    fn builder(options: &VocabOptions) -> VocabBuilder {
        let pipeline = TokenPipeline::from_registry(options, &ComponentRegistry::default()).unwrap();
        VocabBuilder::new(pipeline, options.min_frequency)
    }

    fn index_order(vocab: &TokenVocab<u32>) -> Vec<&str> {
        vocab.index_to_token().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_reference_corpus() {
        let options = VocabOptions::default().with_max_length(10);
        let mut b = builder(&options);
        b.update_from_samples(["abcde", "cdefgg", "scdea"]);
        let vocab: TokenVocab<u32> = b.build().unwrap();

        // c, d, e: 3 docs; a: 2; b, f, g, s: 1.
        assert_eq!(
            index_order(&vocab),
            vec!["#", "&", "@", "c", "d", "e", "a", "b", "f", "g", "s"]
        );
        assert_eq!(vocab.frequency("c"), Some(3));
        assert_eq!(vocab.frequency("g"), Some(1));
        // Markers are counted too.
        assert_eq!(vocab.frequency("#"), Some(3));
        assert_eq!(vocab.frequency("@"), None);
    }

    #[test]
    fn test_min_frequency() {
        let options = VocabOptions::default().with_min_frequency(1);
        let mut b = builder(&options);
        b.update_from_samples(["abcde", "cdefgg", "scdea"]);
        let vocab: TokenVocab<u32> = b.build().unwrap();
        assert_eq!(index_order(&vocab), vec!["#", "&", "@", "c", "d", "e", "a"]);
        assert!(!vocab.contains("b"));
        assert_eq!(vocab.frequency("b"), Some(1));
    }

    #[test]
    fn test_empty_corpus() {
        let vocab: TokenVocab<u32> = builder(&VocabOptions::default()).build().unwrap();
        assert_eq!(index_order(&vocab), vec!["#", "&", "@"]);

        let vocab: TokenVocab<u32> =
            builder(&VocabOptions::default().with_placeholders(false))
                .build()
                .unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_reserved_shadow_corpus_tokens() {
        let mut b = builder(&VocabOptions::default());
        b.update_from_samples(["a@b", "@@", "b"]);
        let vocab: TokenVocab<u32> = b.build().unwrap();
        assert_eq!(index_order(&vocab), vec!["#", "&", "@", "b", "a"]);
        assert_eq!(vocab.lookup_index("@"), Some(2));
        assert_eq!(vocab.frequency("@"), Some(2));
    }

    #[test]
    fn test_ties_are_ordered_by_token() {
        let mut counts: WIHashMap<String, u64> = WIHashMap::default();
        for (t, c) in [("zeta", 2), ("alpha", 2), ("mid", 5), ("beta", 2), ("rare", 0)] {
            counts.insert(t.to_string(), c);
        }
        assert_eq!(
            order_tokens(&counts, &ReservedSymbols::new("", "", "?"), 0),
            vec!["?", "mid", "alpha", "beta", "zeta"]
        );
    }

    #[test]
    fn test_document_frequency_not_occurrences() {
        let mut b = builder(&VocabOptions::default().with_placeholders(false));
        b.update_from_samples(["xxxxxxy", "y"]);
        let vocab: TokenVocab<u32> = b.build().unwrap();
        assert_eq!(index_order(&vocab), vec!["y", "x"]);
    }
}
