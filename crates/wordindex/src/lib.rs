//! # `wordindex` Vocabulary Codec
//!
//! `wordindex` learns a frequency-ordered vocabulary from a text corpus,
//! and converts text to fixed-length index sequences (and back).
//!
//! See:
//! * [`codec`] to feed, encode, decode, save and restore.
//! * [`vocab`] to manage vocabularies, their options, and vocab io.
//! * [`segmentation`] and [`pretreatment`] for the pluggable text components.
//! * [`components`] to register custom components by name.
//!
//! ## Example
//!
//! ```rust
//! use wordindex::{VocabCodec, VocabOptions};
//!
//! let mut codec: VocabCodec<u32> =
//!     VocabCodec::new(VocabOptions::default().with_max_length(10))?;
//! codec.feed(["abcde", "cdefgg", "scdea"])?;
//!
//! let indices = codec.encode("as12356df", false)?;
//! assert_eq!(indices, vec![0, 6, 10, 2, 2, 2, 2, 2, 4, 8]);
//!
//! let tokens = codec.decode(&indices)?;
//! assert_eq!(tokens, vec!["a", "s", "@", "@", "@", "@", "@", "d", "f"]);
//!
//! let restored: VocabCodec<u32> = VocabCodec::restore(&codec.save()?)?;
//! assert_eq!(restored.encode("as12356df", false)?, indices);
//! # Ok::<(), wordindex::WordindexError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod codec;
pub mod components;
pub mod errors;
pub mod pretreatment;
pub mod segmentation;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use codec::{DecodeOptions, UnknownPolicy, VocabCodec};
#[doc(inline)]
pub use components::ComponentRegistry;
#[doc(inline)]
pub use errors::{WIResult, WordindexError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{ReservedSymbols, TokenVocab, VocabOptions};
