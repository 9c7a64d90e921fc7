//! Crossfading overlap-add synthesis.

use log::debug;

use crate::common::{hann, try_alloc};
use crate::error::{Error, Result};

/// Crossfades window `a` (fading out) into window `b` (fading in) over a
/// freshly allocated buffer of `out_len` samples.
///
/// Each side is nearest-neighbor-resampled onto the output time axis by
/// indexing at `i * len / out_len`, so the sources may be shorter or longer
/// than the output; pitch is preserved while duration changes. The fades are
/// the two halves of a Hann window of length `2 * out_len`, which sum to 1
/// at every position: crossfading a window with itself reproduces it. An
/// empty side simply contributes nothing, turning the call into a pure fade.
///
/// Values are truncated toward zero when stored. Returns
/// [`Error::InvalidArgument`] for a zero `out_len` and
/// [`Error::OutOfMemory`] if the output cannot be allocated.
pub fn synthesize(out_len: usize, a: &[i16], b: &[i16]) -> Result<Vec<i16>> {
    if out_len == 0 {
        return Err(Error::invalid("output length must be positive"));
    }
    debug!(
        "synthesizing {} samples from {} and {}",
        out_len,
        a.len(),
        b.len()
    );
    let mut out = try_alloc(out_len)?;
    let fade_len = 2 * out_len;
    for i in 0..out_len {
        let mut value = 0.0;
        if !a.is_empty() {
            value += f64::from(a[i * a.len() / out_len]) * hann(i + out_len, fade_len);
        }
        if !b.is_empty() {
            value += f64::from(b[i * b.len() / out_len]) * hann(i, fade_len);
        }
        out.push(value as i16);
    }
    Ok(out)
}
