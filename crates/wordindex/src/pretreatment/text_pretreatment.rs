//! # Text Pretreatment Trait

use core::fmt::{Debug, Formatter};

/// A trait for text normalization applied before segmentation.
pub trait TextPretreatment: Send + Sync {
    /// The name this pretreatment is persisted under.
    fn name(&self) -> &str;

    /// Normalize text.
    fn pretreat(
        &self,
        text: &str,
    ) -> String;
}

/// A named closure [`TextPretreatment`].
pub struct FnPretreatment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnPretreatment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    /// Wrap a closure as a pretreatment.
    ///
    /// ## Arguments
    /// * `name` - The registry / persistence name.
    /// * `func` - The normalization function.
    pub fn new<S: Into<String>>(
        name: S,
        func: F,
    ) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Debug for FnPretreatment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("FnPretreatment")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> TextPretreatment for FnPretreatment<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn pretreat(
        &self,
        text: &str,
    ) -> String {
        (self.func)(text)
    }
}
