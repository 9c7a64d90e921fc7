//! Similarity metrics over 16-bit sample windows, based on the
//! [Pearson correlation](https://en.wikipedia.org/wiki/Pearson_correlation_coefficient)
//! of mean-removed, amplitude-normalized samples.
//!
//! Two normalizations coexist on purpose. [`similarity`] divides by the
//! larger of the two window variances, which biases scores toward the more
//! energetic window and suits the periodicity and splice searches that were
//! tuned against it. [`warped_similarity`] divides by the geometric mean of
//! the variances, is scale invariant, and additionally handles windows of
//! different lengths and circular pattern shifts for pattern matching. The
//! two must not be unified; callers depend on the distinction.

mod score;
mod warp;

pub use score::{intensity, similarity};
pub use warp::warped_similarity;

pub(crate) use score::raw_similarity;
