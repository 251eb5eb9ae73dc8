//! # Error Types

/// Errors from wordindex operations.
#[derive(Debug, thiserror::Error)]
pub enum WordindexError {
    /// Encoding met a token outside the vocabulary while the unknown symbol is disabled.
    #[error("unknown token {token:?} and no unknown symbol is enabled")]
    UnknownToken {
        /// The token which has no index.
        token: String,
    },

    /// Strict decoding met an index outside `[0, size)`.
    #[error("index {index} out of range for vocab size {size}")]
    InvalidIndex {
        /// The offending index.
        index: u64,

        /// The vocab size.
        size: usize,
    },

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Serialized vocabulary data is corrupt or incompatible.
    #[error("malformed vocabulary: {0}")]
    MalformedVocabulary(String),

    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for wordindex operations.
pub type WIResult<T> = core::result::Result<T, WordindexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WordindexError::UnknownToken {
            token: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown token \"x\" and no unknown symbol is enabled"
        );

        let err = WordindexError::InvalidIndex { index: 9, size: 3 };
        assert_eq!(err.to_string(), "index 9 out of range for vocab size 3");

        let err = WordindexError::InvalidConfiguration("max_length must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_length must be > 0"
        );
    }
}
