//! Best circular alignment of a pattern against a data window.

use log::debug;

use crate::common::frame;
use crate::error::{Error, Result};
use crate::sim::warped_similarity;

/// Scores how well `pattern` matches the `window` samples of `data` starting
/// at `offset`, trying every circular shift of the pattern.
///
/// Each shift `d` in `[0, window)` is scored with
/// [`warped_similarity`](crate::sim::warped_similarity), so the pattern and
/// the window may differ in length. Only the best score is returned; the
/// shift that produced it is not reported. An empty window has no shifts to
/// try and scores 0.
///
/// Returns [`Error::InvalidArgument`] if the pattern is empty or the window
/// reaches past `data`.
pub fn match_score(pattern: &[i16], data: &[i16], offset: usize, window: usize) -> Result<f64> {
    if pattern.is_empty() {
        return Err(Error::invalid("pattern must not be empty"));
    }
    let view = frame(data, offset, window)?;
    debug!(
        "pattern match, {} pattern samples against window {}..{}",
        pattern.len(),
        offset,
        offset + window
    );
    if view.is_empty() {
        return Ok(0.0);
    }
    let mut best = f64::NEG_INFINITY;
    for shift in 0..window {
        best = best.max(warped_similarity(pattern, view, shift)?);
    }
    Ok(best)
}
