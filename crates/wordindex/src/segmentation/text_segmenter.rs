//! # Text Segmenter Trait

use core::fmt::{Debug, Formatter};

/// A trait for text segmenters.
pub trait TextSegmenter: Send + Sync {
    /// The name this segmenter is persisted under.
    fn name(&self) -> &str;

    /// Split text into an ordered sequence of tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The tokens, in text order.
    fn segment(
        &self,
        text: &str,
    ) -> Vec<String>;
}

/// A named closure [`TextSegmenter`].
pub struct FnSegmenter<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnSegmenter<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    /// Wrap a closure as a segmenter.
    ///
    /// ## Arguments
    /// * `name` - The registry / persistence name.
    /// * `func` - The segmentation function.
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

impl<F> Debug for FnSegmenter<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("FnSegmenter")
            .field("name", &self.name)
            .finish()
    }
}

impl<F> TextSegmenter for FnSegmenter<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        (self.func)(text)
    }
}
