//! Raw [PCM](https://en.wikipedia.org/wiki/Pulse-code_modulation) plumbing:
//! sample scaling, a little-endian byte codec and checked window views into
//! sample buffers.

use crate::common::try_alloc;
use crate::error::{Error, Result};

/// Scale factor mapping a signed 16-bit sample to its semantic amplitude
/// in `[-1.0, 1.0)`.
pub const SAMPLE_SCALE: f64 = 1.0 / 32768.0;

/// Converts a raw sample to its normalized amplitude.
#[inline]
pub(crate) fn normalized(sample: i16) -> f64 {
    f64::from(sample) * SAMPLE_SCALE
}

/// Decodes a densely packed little-endian byte buffer into 16-bit samples.
///
/// Returns [`Error::TypeMismatch`] if the byte count is odd, since the buffer
/// then cannot be a whole number of samples.
pub fn samples_from_le_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        return Err(Error::TypeMismatch(bytes.len()));
    }
    let mut samples = try_alloc(bytes.len() / 2)?;
    for pair in bytes.chunks_exact(2) {
        samples.push(i16::from_le_bytes([pair[0], pair[1]]));
    }
    Ok(samples)
}

/// Encodes samples as a densely packed little-endian byte buffer.
pub fn samples_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Returns the `len`-sample window of `samples` starting at `offset`.
///
/// This is the single place where offset/length pairs are bounds checked.
/// The analysis routines take plain slices, so a caller holding offsets
/// validates them here once and passes the returned view on.
pub fn frame(samples: &[i16], offset: usize, len: usize) -> Result<&[i16]> {
    offset
        .checked_add(len)
        .and_then(|end| samples.get(offset..end))
        .ok_or_else(|| {
            Error::invalid(format!(
                "offset {offset} + length {len} exceeds buffer of {} samples",
                samples.len()
            ))
        })
}
