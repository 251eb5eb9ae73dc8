//! # Batch Helpers
//!
//! With the `rayon` feature, batches are mapped in parallel.

use crate::errors::WIResult;

#[cfg(feature = "rayon")]
pub(crate) fn try_map_batch<I, O, F>(
    batch: &[I],
    f: F,
) -> WIResult<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> WIResult<O> + Sync + Send,
{
    use rayon::prelude::*;

    batch.par_iter().map(f).collect()
}

#[cfg(not(feature = "rayon"))]
pub(crate) fn try_map_batch<I, O, F>(
    batch: &[I],
    f: F,
) -> WIResult<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> WIResult<O> + Sync + Send,
{
    batch.iter().map(f).collect()
}
