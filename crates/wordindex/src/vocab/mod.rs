//! # Vocabulary
//!
//! This module provides the vocabulary, its builder, and io mechanisms.
//!
//! * [`VocabOptions`] - configuration; also the persisted `config` section.
//! * [`ReservedSymbols`] - the `START` / `END` / `UNKNOWN` markers.
//! * [`TokenPipeline`] - text -> bounded token window.
//! * [`DocumentFrequencyCounter`] - per-document token counting.
//! * [`VocabBuilder`] - corpus -> [`TokenVocab`].
//! * [`io`] - JSON persistence.

pub mod io;

mod frequency_counter;
mod reserved_symbols;
mod token_pipeline;
mod token_vocab;
mod vocab_builder;
mod vocab_options;

#[doc(inline)]
pub use frequency_counter::DocumentFrequencyCounter;
#[doc(inline)]
pub use reserved_symbols::{DEFAULT_END, DEFAULT_START, DEFAULT_UNKNOWN, ReservedSymbols};
#[doc(inline)]
pub use token_pipeline::TokenPipeline;
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use vocab_builder::{VocabBuilder, order_tokens};
#[doc(inline)]
pub use vocab_options::{DEFAULT_MAX_LENGTH, VocabOptions};
