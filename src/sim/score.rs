//! Plain similarity scoring of equal-length windows.

use crate::common::{normalized, SAMPLE_SCALE};
use crate::error::{Error, Result};

/// Computes the normalized cross-covariance of two equal-length windows.
///
/// Sample values are scaled to `[-1.0, 1.0)` amplitude and the sums are
/// accumulated in double precision. The denominator is the *larger* of the
/// two window variances, so the score is biased toward the more energetic
/// window: correlating a signal with an attenuated copy of itself scores
/// below 1 (see [`warped_similarity`](crate::sim::warped_similarity) for the
/// scale-invariant variant). Windows with zero variance score 0.
///
/// Returns [`Error::InvalidArgument`] if the windows differ in length.
pub fn similarity(a: &[i16], b: &[i16]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::invalid(format!(
            "window lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(raw_similarity(a, b))
}

/// Kernel behind [`similarity`], shared with the periodicity and splice
/// searches, which produce equal-length windows by construction.
#[inline]
pub(crate) fn raw_similarity(a: &[i16], b: &[i16]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len() as f64;
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut t1 = 0.0;
    let mut t2 = 0.0;
    let mut dot = 0.0;
    for (&sample_a, &sample_b) in a.iter().zip(b.iter()) {
        let x1 = normalized(sample_a);
        let x2 = normalized(sample_b);
        s1 += x1;
        s2 += x2;
        t1 += x1 * x1;
        t2 += x2 * x2;
        dot += x1 * x2;
    }
    let ns = n * dot - s1 * s2;
    let nv1 = n * t1 - s1 * s1;
    let nv2 = n * t2 - s2 * s2;
    let nv = nv1.max(nv2);
    if nv == 0.0 {
        0.0
    } else {
        ns / nv
    }
}

/// Half the peak-to-peak range of the window, in normalized amplitude units.
///
/// An empty window has no range and scores 0.
pub fn intensity(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut lowest = i16::MAX;
    let mut highest = i16::MIN;
    for &sample in samples {
        lowest = lowest.min(sample);
        highest = highest.max(sample);
    }
    (f64::from(highest) - f64::from(lowest)) / 2.0 * SAMPLE_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(len: usize, period: usize, amplitude: f64) -> Vec<i16> {
        (0..len)
            .map(|i| {
                let phase = 2.0 * core::f64::consts::PI * (i as f64) / (period as f64);
                (amplitude * phase.sin()) as i16
            })
            .collect()
    }

    #[test]
    fn test_self_similarity_is_one() {
        let samples = sine(256, 64, 12000.0);
        assert_eq!(similarity(&samples, &samples).unwrap(), 1.0);
    }

    #[test]
    fn test_constant_window_scores_zero() {
        let silence = vec![0_i16; 128];
        assert_eq!(similarity(&silence, &silence).unwrap(), 0.0);

        let dc = vec![523_i16; 128];
        assert_eq!(similarity(&dc, &dc).unwrap(), 0.0);

        // A constant window against a varying one also has a zero numerator
        // after mean removal, but the point here is the denominator path.
        let varying = sine(128, 32, 8000.0);
        assert_eq!(similarity(&dc, &varying).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_windows_score_zero() {
        assert_eq!(similarity(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let result = similarity(&[1, 2, 3], &[1, 2]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_max_denominator_biases_toward_the_louder_window() {
        // Doubling one side doubles the covariance but quadruples the larger
        // variance, so a perfectly correlated pair of unequal gain scores 0.5.
        let quiet = sine(200, 50, 5000.0);
        let loud: Vec<i16> = quiet.iter().map(|&sample| sample * 2).collect();
        assert_eq!(similarity(&quiet, &loud).unwrap(), 0.5);
        // The max denominator makes the score independent of argument order.
        assert_eq!(
            similarity(&loud, &quiet).unwrap(),
            similarity(&quiet, &loud).unwrap()
        );
    }

    #[test]
    fn test_anticorrelated_windows_score_minus_one() {
        let samples = sine(200, 50, 9000.0);
        let inverted: Vec<i16> = samples.iter().map(|&sample| -sample).collect();
        assert_eq!(similarity(&samples, &inverted).unwrap(), -1.0);
    }

    #[test]
    fn test_intensity_of_known_ranges() {
        assert_eq!(intensity(&[]), 0.0);
        assert_eq!(intensity(&[0, 0, 0]), 0.0);
        assert_eq!(intensity(&[-16384, 16384]), 0.5);
        assert_eq!(intensity(&[0, 16384]), 0.25);
        assert_eq!(intensity(&[i16::MIN, i16::MAX]), (65535.0 / 2.0) / 32768.0);
    }
}
