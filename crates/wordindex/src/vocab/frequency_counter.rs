//! # Document Frequency Counter

use compact_str::CompactString;

use crate::types::{WIHashMap, WIHashSet};

/// Counts, per token, the number of documents containing it.
///
/// A token repeated within one document is counted once for that document.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequencyCounter {
    /// The number of documents seen.
    pub document_count: usize,

    /// The per-token document frequencies.
    pub doc_counts: WIHashMap<CompactString, u64>,
}

impl DocumentFrequencyCounter {
    /// Create a new, empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the document counts and return them.
    pub fn release(self) -> WIHashMap<CompactString, u64> {
        self.doc_counts
    }

    /// The number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.doc_counts.len()
    }

    /// Has no token been seen?
    pub fn is_empty(&self) -> bool {
        self.doc_counts.is_empty()
    }

    /// The document frequency of a token; zero if unseen.
    pub fn count(
        &self,
        token: &str,
    ) -> u64 {
        self.doc_counts.get(token).copied().unwrap_or(0)
    }

    /// Count one document given as its token sequence.
    ///
    /// ## Arguments
    /// * `tokens` - The document's tokens; duplicates count once.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens: Vec<I::Item> = tokens.into_iter().collect();
        let unique: WIHashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();

        for token in unique {
            *self.doc_counts.entry(token.into()).or_default() += 1;
        }
        self.document_count += 1;
    }

    /// Count each item of a document iterator.
    pub fn update_from_documents<D, I>(
        &mut self,
        documents: D,
    ) where
        D: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for doc in documents {
            self.update_from_tokens(doc);
        }
    }
}
