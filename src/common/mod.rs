//! Primitives shared by the analysis and synthesis modules.

mod pcm;
mod window_function;

pub use pcm::{frame, samples_from_le_bytes, samples_to_le_bytes, SAMPLE_SCALE};
pub use window_function::hann;

pub(crate) use pcm::normalized;

use crate::error::{Error, Result};

/// Allocates an empty `Vec` with room for `len` elements, reporting
/// allocation failure as [`Error::OutOfMemory`] instead of aborting.
pub(crate) fn try_alloc<T>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory(len))?;
    Ok(buffer)
}

/// Returns the pair in ascending order. The period and splice searches
/// accept a reversed range and swap it instead of failing.
pub(crate) fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
