//! Dominant-period (pitch period) estimation for short mono segments, using
//! enhanced [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
//! with harmonic suppression as described by Tolonen and Karjalainen in
//! *A computationally efficient multipitch analysis model* (IEEE Transactions
//! on Speech and Audio Processing, 2000).
//!
//! A plain per-period correlation profile ranks a strongly periodic signal
//! highly at its period *and* at every integer multiple of it. The enhanced
//! profile subtracts half of each period's score from its double as the scan
//! ascends, so the fundamental outranks its harmonics in the ranked result.
//!
//! # Examples
//! ```
//! use wavesim::period::search_periods;
//!
//! // 1000 samples of a waveform that repeats every 100 samples.
//! let cycle: Vec<i16> = (0..100)
//!     .map(|i| (10000.0 * (2.0 * std::f64::consts::PI * i as f64 / 100.0).sin()) as i16)
//!     .collect();
//! let samples: Vec<i16> = (0..1000).map(|i| cycle[i % 100]).collect();
//!
//! // Rank candidate periods between 80 and 120 samples.
//! let candidates = search_periods(&samples, 80, 120, 0.9, 4).unwrap();
//! assert_eq!(candidates[0].period, 100);
//! assert!(candidates[0].score > 0.99);
//! ```

mod candidate;
mod profile;

pub use candidate::{rank, Candidate};
pub use profile::periodicity_profile;

use log::debug;

use crate::common::ordered;
use crate::error::Result;

/// Ranks the candidate periods of `samples` in `[min_period, max_period]`
/// (swapped if reversed): profile construction followed by thresholding,
/// ordering and capping. See [`periodicity_profile`] and [`rank`].
pub fn search_periods(
    samples: &[i16],
    min_period: usize,
    max_period: usize,
    threshold: f64,
    max_candidates: usize,
) -> Result<Vec<Candidate>> {
    let (min_period, max_period) = ordered(min_period, max_period);
    debug!(
        "period search over {} samples, range {}..={}, threshold {}, keeping up to {}",
        samples.len(),
        min_period,
        max_period,
        threshold,
        max_candidates
    );
    let profile = periodicity_profile(samples, min_period, max_period)?;
    rank(&profile, min_period, threshold, max_candidates)
}

/// Returns the single best-scoring period regardless of any threshold,
/// keeping the smallest period on ties.
///
/// This is the historical single-result flavor of the search; use
/// [`search_periods`] when runner-up candidates matter.
pub fn find_period(samples: &[i16], min_period: usize, max_period: usize) -> Result<Candidate> {
    let (min_period, max_period) = ordered(min_period, max_period);
    let profile = periodicity_profile(samples, min_period, max_period)?;
    let mut best = Candidate {
        period: min_period,
        score: profile[0],
    };
    for (i, &score) in profile.iter().enumerate().skip(1) {
        if score > best.score {
            best = Candidate {
                period: min_period + i,
                score,
            };
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn repeated_sine(len: usize, period: usize, amplitude: f64) -> Vec<i16> {
        let cycle: Vec<i16> = (0..period)
            .map(|i| {
                let phase = 2.0 * core::f64::consts::PI * (i as f64) / (period as f64);
                (amplitude * phase.sin()) as i16
            })
            .collect();
        (0..len).map(|i| cycle[i % period]).collect()
    }

    #[test]
    fn test_search_ranks_the_true_period_first() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let candidates = search_periods(&samples, 80, 120, 0.9, 4).unwrap();
        assert!(!candidates.is_empty());
        assert!(candidates.len() <= 4);
        assert_eq!(candidates[0].period, 100);
        assert_eq!(candidates[0].score, 1.0);
        for pair in candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_tight_threshold_keeps_only_the_exact_period() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let candidates = search_periods(&samples, 80, 120, 0.9999, 8).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].period, 100);
    }

    #[test]
    fn test_search_prefers_the_fundamental_over_its_double() {
        // Keep the whole range: near-period lags score high on a smooth
        // sine and would otherwise crowd out the suppressed double.
        let samples = repeated_sine(400, 50, 16000.0);
        let candidates = search_periods(&samples, 40, 110, 0.25, 80).unwrap();
        assert_eq!(candidates[0].period, 50);
        assert_eq!(candidates[0].score, 1.0);
        // The double period correlates perfectly too, but suppression
        // halves it before ranking.
        let double = candidates
            .iter()
            .find(|c| c.period == 100)
            .expect("the double period should clear a 0.25 threshold");
        assert_eq!(double.score, 0.5);
    }

    #[test]
    fn test_reversed_range_matches_forward_range() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let forward = search_periods(&samples, 80, 120, 0.9, 4).unwrap();
        let reversed = search_periods(&samples, 120, 80, 0.9, 4).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_find_period_matches_the_top_candidate() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let best = find_period(&samples, 80, 120).unwrap();
        assert_eq!(best.period, 100);
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_find_period_on_an_unreachable_range() {
        // Too few samples to correlate any period in range: the profile is
        // all zeros and the smallest period wins by first-found.
        let samples = repeated_sine(50, 10, 12000.0);
        let best = find_period(&samples, 30, 40).unwrap();
        assert_eq!(best.period, 30);
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_out_of_bounds_range_is_rejected() {
        let samples = repeated_sine(100, 10, 12000.0);
        assert!(matches!(
            search_periods(&samples, 50, 101, 0.5, 4),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            find_period(&samples, 50, 101),
            Err(Error::InvalidArgument(_))
        ));
    }
}
