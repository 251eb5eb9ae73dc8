//! # Vocabulary IO
//!
//! ## Saving and Loading A Vocab
//!
//! ```rust,no_run
//! use wordindex::{
//!     VocabCodec,
//!     VocabOptions,
//!     components::ComponentRegistry,
//!     vocab::io::{load_vocab_json_path, save_vocab_json_path},
//! };
//!
//! fn example() -> wordindex::WIResult<VocabCodec<u32>> {
//!     let mut codec: VocabCodec<u32> = VocabCodec::new(VocabOptions::default())?;
//!     codec.feed(["abcde", "cdefgg", "scdea"])?;
//!
//!     save_vocab_json_path(&codec, "vocab.json")?;
//!     load_vocab_json_path("vocab.json", &ComponentRegistry::default())
//! }
//! ```

mod vocab_json;

#[doc(inline)]
pub use vocab_json::*;
