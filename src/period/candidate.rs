//! Ranked period candidates.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::common::try_alloc;
use crate::error::Result;

/// A candidate period, in samples, with its profile score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Hypothesized repetition interval in samples.
    pub period: usize,
    /// Profile score at this period. Nominally within `[-1, 1]` but the
    /// harmonic suppression step can push unscored entries below that.
    pub score: f64,
}

/// Filters, orders and caps a periodicity profile.
///
/// Keeps every entry whose score strictly exceeds `threshold`, sorts the
/// survivors by descending score and truncates to `max_candidates`. The sort
/// is stable, so candidates with equal scores stay in ascending period
/// order. Entry `i` of the profile maps to period `min_period + i`.
///
/// An empty result is a normal outcome, not an error.
pub fn rank(
    profile: &[f64],
    min_period: usize,
    threshold: f64,
    max_candidates: usize,
) -> Result<Vec<Candidate>> {
    let mut candidates = try_alloc(profile.len())?;
    for (i, &score) in profile.iter().enumerate() {
        if score > threshold {
            candidates.push(Candidate {
                period: min_period + i,
                score,
            });
        }
    }
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(max_candidates);
    Ok(candidates)
}
