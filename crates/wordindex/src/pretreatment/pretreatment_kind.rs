//! # Built-in Pretreatment Names

use std::sync::Arc;

use crate::{
    errors::{WIResult, WordindexError},
    pretreatment::{Identity, Lowercase, StripWhitespace, TextPretreatment},
};

/// The built-in pretreatments, by name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PretreatmentKind {
    /// See [`StripWhitespace`].
    #[default]
    StripWhitespace,

    /// See [`Identity`].
    Identity,

    /// See [`Lowercase`].
    Lowercase,
}

impl PretreatmentKind {
    /// Resolve a built-in pretreatment kind by name.
    ///
    /// ## Returns
    /// The kind, or `InvalidConfiguration` for unknown names.
    pub fn from_name(name: &str) -> WIResult<Self> {
        name.parse().map_err(|_| {
            WordindexError::InvalidConfiguration(format!("unknown pretreatment: {name:?}"))
        })
    }

    /// The persisted name of this kind.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Build the pretreatment.
    pub fn build(self) -> Arc<dyn TextPretreatment> {
        match self {
            Self::StripWhitespace => Arc::new(StripWhitespace),
            Self::Identity => Arc::new(Identity),
            Self::Lowercase => Arc::new(Lowercase),
        }
    }
}
