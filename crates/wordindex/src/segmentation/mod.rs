//! # Text Segmentation
//!
//! A segmenter splits (pretreated, marker-wrapped) text into an ordered
//! sequence of token strings. Segmenters must be deterministic.
//!
//! Built-in segmenters are named by [`SegmenterKind`];
//! any other [`TextSegmenter`] can be injected directly,
//! or registered by name in a [`crate::components::ComponentRegistry`].

mod builtin_segmenters;
mod segmenter_kind;
mod text_segmenter;

#[doc(inline)]
pub use builtin_segmenters::{CharSegmenter, RegexSegmenter, WORDS_PATTERN, WhitespaceSegmenter};
#[doc(inline)]
pub use segmenter_kind::SegmenterKind;
#[doc(inline)]
pub use text_segmenter::{FnSegmenter, TextSegmenter};
