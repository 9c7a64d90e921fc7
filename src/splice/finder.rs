//! Overlap-length search for joining two segments.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::ordered;
use crate::error::{Error, Result};
use crate::sim::raw_similarity;

/// The best overlap between the tail of one buffer and the head of another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpliceResult {
    /// Overlap length in samples; 0 for the no-match sentinel.
    pub length: usize,
    /// Similarity of the overlapping regions; -1 for the no-match sentinel.
    pub score: f64,
}

impl SpliceResult {
    /// Whether this is a real candidate rather than the no-match sentinel.
    pub fn is_match(&self) -> bool {
        self.score >= 0.0
    }
}

/// Finds the overlap length in `[min_len, max_len]` (swapped if reversed)
/// that best matches the last samples of `a` against the first samples of
/// `b`, for crossfading `b` onto the end of `a`.
///
/// The score is the plain [`similarity`](crate::sim::similarity) of the two
/// overlapping regions. The first length reaching the maximum wins, so ties
/// resolve to the shortest overlap. If no length attains a score above the
/// sentinel (every candidate is perfectly anticorrelated), the sentinel
/// `{ length: 0, score: -1.0 }` is returned; see [`SpliceResult::is_match`].
///
/// Returns [`Error::InvalidArgument`] if the range reaches past either
/// buffer.
pub fn find_splice(
    a: &[i16],
    b: &[i16],
    min_len: usize,
    max_len: usize,
) -> Result<SpliceResult> {
    let (min_len, max_len) = ordered(min_len, max_len);
    if max_len > a.len() || max_len > b.len() {
        return Err(Error::invalid(format!(
            "overlap range {}..={} exceeds buffers of {} and {} samples",
            min_len,
            max_len,
            a.len(),
            b.len()
        )));
    }
    debug!(
        "splice search, overlaps {}..={} between {} and {} samples",
        min_len,
        max_len,
        a.len(),
        b.len()
    );
    let mut best = SpliceResult {
        length: 0,
        score: -1.0,
    };
    for w in min_len..=max_len {
        let score = raw_similarity(&a[a.len() - w..], &b[..w]);
        if score > best.score {
            best = SpliceResult { length: w, score };
        }
    }
    Ok(best)
}
