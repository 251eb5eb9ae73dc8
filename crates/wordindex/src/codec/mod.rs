//! # Vocabulary Codec
//!
//! [`VocabCodec`] owns the whole lifecycle:
//! `feed` a corpus, `encode` / `decode` text, `save` / `restore` the vocabulary.

mod decode_options;
mod parallel;
mod vocab_codec;

#[doc(inline)]
pub use decode_options::{DecodeOptions, UnknownPolicy};
#[doc(inline)]
pub use vocab_codec::VocabCodec;
