//! # Text Pretreatment
//!
//! Pretreatment normalizes raw text before it is wrapped and segmented.
//!
//! The default, [`StripWhitespace`], removes tab, newline, carriage return and space.

mod builtin_pretreatments;
mod pretreatment_kind;
mod text_pretreatment;

#[doc(inline)]
pub use builtin_pretreatments::{Identity, Lowercase, StripWhitespace};
#[doc(inline)]
pub use pretreatment_kind::PretreatmentKind;
#[doc(inline)]
pub use text_pretreatment::{FnPretreatment, TextPretreatment};
