//! # Component Registry
//!
//! Resolves segmenter and pretreatment names to implementations.
//!
//! Built-in names ([`SegmenterKind`], [`PretreatmentKind`]) are always available;
//! custom components are registered under their own [`TextSegmenter::name`] /
//! [`TextPretreatment::name`], and may not shadow a built-in name.

use std::sync::Arc;

use strum::IntoEnumIterator;

use crate::{
    errors::{WIResult, WordindexError},
    pretreatment::{PretreatmentKind, TextPretreatment},
    segmentation::{SegmenterKind, TextSegmenter},
    types::WIHashMap,
};

/// Rejects custom segmenter names that are empty or shadow a built-in.
pub(crate) fn check_custom_segmenter_name(name: &str) -> WIResult<()> {
    if name.is_empty() || SegmenterKind::from_name(name).is_ok() {
        return Err(WordindexError::InvalidConfiguration(format!(
            "segmenter name {name:?} is reserved"
        )));
    }
    Ok(())
}

/// Rejects custom pretreatment names that are empty or shadow a built-in.
pub(crate) fn check_custom_pretreatment_name(name: &str) -> WIResult<()> {
    if name.is_empty() || PretreatmentKind::from_name(name).is_ok() {
        return Err(WordindexError::InvalidConfiguration(format!(
            "pretreatment name {name:?} is reserved"
        )));
    }
    Ok(())
}

/// A name -> implementation registry for pluggable components.
#[derive(Default, Clone)]
pub struct ComponentRegistry {
    segmenters: WIHashMap<String, Arc<dyn TextSegmenter>>,
    pretreatments: WIHashMap<String, Arc<dyn TextPretreatment>>,
}

impl core::fmt::Debug for ComponentRegistry {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("segmenters", &self.segmenter_names())
            .field("pretreatments", &self.pretreatment_names())
            .finish()
    }
}

impl ComponentRegistry {
    /// Register a custom segmenter under its own name.
    ///
    /// ## Returns
    /// `InvalidConfiguration` if the name is empty or a built-in name.
    pub fn register_segmenter(
        &mut self,
        segmenter: Arc<dyn TextSegmenter>,
    ) -> WIResult<()> {
        let name = segmenter.name().to_string();
        check_custom_segmenter_name(&name)?;
        log::debug!("registered segmenter: {name}");
        self.segmenters.insert(name, segmenter);
        Ok(())
    }

    /// Register a custom segmenter, builder style.
    pub fn with_segmenter(
        mut self,
        segmenter: Arc<dyn TextSegmenter>,
    ) -> WIResult<Self> {
        self.register_segmenter(segmenter)?;
        Ok(self)
    }

    /// Register a custom pretreatment under its own name.
    ///
    /// ## Returns
    /// `InvalidConfiguration` if the name is empty or a built-in name.
    pub fn register_pretreatment(
        &mut self,
        pretreatment: Arc<dyn TextPretreatment>,
    ) -> WIResult<()> {
        let name = pretreatment.name().to_string();
        check_custom_pretreatment_name(&name)?;
        log::debug!("registered pretreatment: {name}");
        self.pretreatments.insert(name, pretreatment);
        Ok(())
    }

    /// Register a custom pretreatment, builder style.
    pub fn with_pretreatment(
        mut self,
        pretreatment: Arc<dyn TextPretreatment>,
    ) -> WIResult<Self> {
        self.register_pretreatment(pretreatment)?;
        Ok(self)
    }

    /// Resolve a segmenter by name.
    pub fn segmenter(
        &self,
        name: &str,
    ) -> WIResult<Arc<dyn TextSegmenter>> {
        match self.segmenters.get(name) {
            Some(seg) => Ok(seg.clone()),
            None => SegmenterKind::from_name(name)?.build(),
        }
    }

    /// Resolve a pretreatment by name.
    pub fn pretreatment(
        &self,
        name: &str,
    ) -> WIResult<Arc<dyn TextPretreatment>> {
        match self.pretreatments.get(name) {
            Some(p) => Ok(p.clone()),
            None => Ok(PretreatmentKind::from_name(name)?.build()),
        }
    }

    /// List the resolvable segmenter names; built-ins first, then sorted custom names.
    pub fn segmenter_names(&self) -> Vec<String> {
        let mut custom: Vec<String> = self.segmenters.keys().cloned().collect();
        custom.sort();
        SegmenterKind::iter()
            .map(|k| k.name().to_string())
            .chain(custom)
            .collect()
    }

    /// List the resolvable pretreatment names; built-ins first, then sorted custom names.
    pub fn pretreatment_names(&self) -> Vec<String> {
        let mut custom: Vec<String> = self.pretreatments.keys().cloned().collect();
        custom.sort();
        PretreatmentKind::iter()
            .map(|k| k.name().to_string())
            .chain(custom)
            .collect()
    }
}
