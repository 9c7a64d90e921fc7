//! Similarity of differently sized windows under time warp.

use crate::common::normalized;
use crate::error::{Error, Result};

/// Compares a pattern against a data window that may differ in length.
///
/// Both sides are walked over `n = max(pattern len, window len)` steps; the
/// shorter side is nearest-neighbor-stretched to the longer one by indexing
/// at `i * len / n`. `shift` rotates the pattern side circularly (modulo the
/// pattern length), which lets a caller scan alignments without copying.
///
/// Unlike [`similarity`](crate::sim::similarity) the denominator is the
/// geometric mean of the two variances, so the score is invariant under
/// rescaling either side. Zero variance on either side scores 0.
///
/// Returns [`Error::InvalidArgument`] if either slice is empty.
pub fn warped_similarity(pattern: &[i16], window: &[i16], shift: usize) -> Result<f64> {
    if pattern.is_empty() || window.is_empty() {
        return Err(Error::invalid(format!(
            "warped similarity needs nonempty windows, got {} and {} samples",
            pattern.len(),
            window.len()
        )));
    }
    let pat_len = pattern.len();
    let win_len = window.len();
    let steps = pat_len.max(win_len);
    let n = steps as f64;
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut t1 = 0.0;
    let mut t2 = 0.0;
    let mut dot = 0.0;
    for i in 0..steps {
        let x1 = normalized(pattern[(i * pat_len / steps + shift) % pat_len]);
        let x2 = normalized(window[i * win_len / steps]);
        s1 += x1;
        s2 += x2;
        t1 += x1 * x1;
        t2 += x2 * x2;
        dot += x1 * x2;
    }
    let ns = n * dot - s1 * s2;
    let nv1 = n * t1 - s1 * s1;
    let nv2 = n * t2 - s2 * s2;
    // Rounding can leave a vanishing negative variance for a near-constant
    // side, which would send a NaN through the square root. Treat anything
    // that is not positive as the degenerate zero-denominator case.
    let nv = nv1 * nv2;
    if nv <= 0.0 {
        Ok(0.0)
    } else {
        Ok(ns / nv.sqrt())
    }
}
