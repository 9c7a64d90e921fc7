//! [Window function](https://en.wikipedia.org/wiki/Window_function) weights
//! used by the overlap-add synthesizer.

use core::f64::consts::PI;

/// Evaluates the [Hann window](https://en.wikipedia.org/wiki/Window_function#Hann_and_Hamming_windows)
/// of length `n` at position `k`: `(1 - cos(2 pi k / n)) / 2`.
///
/// The synthesizer reads the two halves of one window of length `2 * out_len`:
/// positions `[out_len, 2 * out_len)` fall on the decreasing half (fade out)
/// and positions `[0, out_len)` on the increasing half (fade in). The two
/// halves are complementary, `hann(k, n) + hann(k + n / 2, n) == 1`.
#[inline]
pub fn hann(k: usize, n: usize) -> f64 {
    (1.0 - (2.0 * PI * k as f64 / n as f64).cos()) / 2.0
}
