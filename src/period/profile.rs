//! Per-period similarity profile with harmonic suppression.

use crate::common::{ordered, try_alloc};
use crate::error::{Error, Result};
use crate::sim::raw_similarity;

/// Builds the enhanced-autocorrelation profile of `samples` for every
/// candidate period in `[min_period, max_period]` (a reversed pair is
/// swapped). Entry `i` scores period `min_period + i`.
///
/// For each period `w`, the signal is correlated against itself delayed by
/// `w` over the longest prefix whose length is a multiple of `w` and at most
/// `max_period`. Periods whose correlation window would run past the end of
/// the signal are skipped and keep their current entry. After a period is
/// scored, half its score is subtracted from the entries at `2w` and
/// `2w + 1`: a strong correlation at `w` also shows up at its multiples, and
/// the subtraction keeps harmonics from outranking the fundamental. Periods
/// are processed in ascending order, so suppressed entries are re-clamped to
/// zero when their own turn comes.
///
/// Scores are clamped at zero as they accumulate; entries that were
/// suppressed but never rescored can stay negative. Ranking is left to
/// [`rank`](crate::period::rank).
///
/// Returns [`Error::InvalidArgument`] if the range reaches past the signal
/// and [`Error::OutOfMemory`] if the profile cannot be allocated.
pub fn periodicity_profile(
    samples: &[i16],
    min_period: usize,
    max_period: usize,
) -> Result<Vec<f64>> {
    let (min_period, max_period) = ordered(min_period, max_period);
    if max_period > samples.len() {
        return Err(Error::invalid(format!(
            "period range {}..={} exceeds signal of {} samples",
            min_period,
            max_period,
            samples.len()
        )));
    }
    let entries = max_period - min_period + 1;
    let mut profile = try_alloc(entries)?;
    profile.resize(entries, 0.0);
    for w in min_period..=max_period {
        if w == 0 {
            // A zero period never repeats; its entry stays zero.
            continue;
        }
        let span = max_period - (max_period % w);
        if span + w > samples.len() {
            continue;
        }
        let score = raw_similarity(&samples[..span], &samples[w..span + w]);
        let score = (profile[w - min_period] + score).max(0.0);
        profile[w - min_period] = score;
        let harmonic = 2 * w - min_period;
        if harmonic + 1 <= max_period - min_period {
            let half = 0.5 * score;
            profile[harmonic] -= half;
            profile[harmonic + 1] -= half;
        }
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Repeats one literal cycle so the signal is exactly periodic,
    /// without trigonometric rounding at cycle boundaries.
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
    fn test_exact_period_scores_one() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let profile = periodicity_profile(&samples, 80, 120).unwrap();
        assert_eq!(profile.len(), 41);
        assert_eq!(profile[20], 1.0);
        for (i, &score) in profile.iter().enumerate() {
            if i != 20 {
                assert!(score < 1.0, "period {} scored {}", 80 + i, score);
            }
        }
    }

    #[test]
    fn test_double_period_is_suppressed() {
        let samples = repeated_sine(400, 50, 16000.0);
        let profile = periodicity_profile(&samples, 40, 110).unwrap();

        // The fundamental at 50 correlates perfectly and is not itself
        // a harmonic of anything in range.
        assert_eq!(profile[10], 1.0);

        // Period 100 also correlates perfectly, but the pass over period 50
        // subtracted half of its score from the 100 and 101 entries first.
        assert_eq!(profile[60], 0.5);

        let unsuppressed = raw_similarity(&samples[..100], &samples[100..200]);
        assert_eq!(unsuppressed, 1.0);
    }

    #[test]
    fn test_short_signal_skips_out_of_reach_periods() {
        // Every period in the range is skipped: even period 30 needs
        // 30 + 30 samples and only 50 are available.
        let samples = repeated_sine(50, 10, 12000.0);
        let profile = periodicity_profile(&samples, 30, 40).unwrap();
        assert!(profile.iter().all(|&score| score == 0.0));
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let samples = repeated_sine(1000, 100, 16000.0);
        let forward = periodicity_profile(&samples, 80, 120).unwrap();
        let reversed = periodicity_profile(&samples, 120, 80).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_period_zero_is_tolerated() {
        let samples = repeated_sine(64, 8, 12000.0);
        let profile = periodicity_profile(&samples, 0, 16).unwrap();
        assert_eq!(profile.len(), 17);
        assert_eq!(profile[0], 0.0);
        assert_eq!(profile[8], 1.0);
    }

    #[test]
    fn test_range_past_signal_is_rejected() {
        let samples = repeated_sine(100, 10, 12000.0);
        assert!(matches!(
            periodicity_profile(&samples, 50, 101),
            Err(Error::InvalidArgument(_))
        ));
    }
}
