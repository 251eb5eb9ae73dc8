//! # Built-in Segmenters

use regex::Regex;

use crate::{
    errors::{WIResult, WordindexError},
    segmentation::{SegmenterKind, TextSegmenter},
};

/// The word pattern used by [`SegmenterKind::Words`].
///
/// Runs of word characters, or single non-space symbols.
pub const WORDS_PATTERN: &str = r"\w+|[^\w\s]";

/// One token per `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSegmenter;

impl TextSegmenter for CharSegmenter {
    fn name(&self) -> &str {
        SegmenterKind::Chars.name()
    }

    fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
}

/// Splits on runs of unicode whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceSegmenter;

impl TextSegmenter for WhitespaceSegmenter {
    fn name(&self) -> &str {
        SegmenterKind::Whitespace.name()
    }

    fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

/// Emits every non-overlapping match of a regex as a token.
///
/// Text between matches is discarded.
#[derive(Debug, Clone)]
pub struct RegexSegmenter {
    name: String,
    regex: Regex,
}

impl RegexSegmenter {
    /// Compile a regex segmenter.
    ///
    /// ## Arguments
    /// * `name` - The registry / persistence name.
    /// * `pattern` - The token regex.
    ///
    /// ## Returns
    /// The segmenter, or `InvalidConfiguration` if the pattern does not compile.
    pub fn new<S: Into<String>>(
        name: S,
        pattern: &str,
    ) -> WIResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            WordindexError::InvalidConfiguration(format!("bad segmenter pattern: {e}"))
        })?;
        Ok(Self {
            name: name.into(),
            regex,
        })
    }

    /// The compiled pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl TextSegmenter for RegexSegmenter {
    fn name(&self) -> &str {
        &self.name
    }

    fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_segmenter() {
        let seg = CharSegmenter;
        assert_eq!(seg.name(), "chars");
        assert_eq!(seg.segment("ab\u{4f60}"), vec!["a", "b", "\u{4f60}"]);
        assert!(seg.segment("").is_empty());
    }

    #[test]
    fn test_whitespace_segmenter() {
        let seg = WhitespaceSegmenter;
        assert_eq!(seg.name(), "whitespace");
        assert_eq!(
            seg.segment("  hello \t world\n"),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn test_regex_segmenter() {
        let seg = RegexSegmenter::new("words", WORDS_PATTERN).unwrap();
        assert_eq!(seg.name(), "words");
        assert_eq!(seg.pattern(), WORDS_PATTERN);
        assert_eq!(
            seg.segment("Hello, world! 42x"),
            vec!["Hello", ",", "world", "!", "42x"]
        );

        assert!(matches!(
            RegexSegmenter::new("bad", "(unclosed"),
            Err(WordindexError::InvalidConfiguration(_))
        ));
    }
}
