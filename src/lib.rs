//! Waveform similarity, periodicity and splice analysis with PSOLA-style
//! overlap-add resynthesis, operating on mono 16-bit
//! [PCM](https://en.wikipedia.org/wiki/Pulse-code_modulation) buffers.
//!
//! The crate answers four questions about short sample windows:
//! * how similar two equal-length windows are ([`similarity`]),
//! * what the dominant period of a segment is ([`search_periods`],
//!   [`find_period`]), using enhanced autocorrelation with harmonic
//!   suppression after Tolonen and Karjalainen (2000),
//! * what overlap length joins two segments most seamlessly
//!   ([`find_splice`]),
//! * how to crossfade two windows into one output of arbitrary length
//!   ([`synthesize`]).
//!
//! A fifth routine, [`match_score`], locates the best circular alignment of
//! a short pattern inside a data window under nearest-neighbor time warp.
//!
//! All routines are pure functions over caller-owned slices: no internal
//! state, no I/O, every call works on a complete buffer. Offsets coming
//! from outside are validated once with [`common::frame`]; raw little-endian
//! byte buffers enter through [`common::samples_from_le_bytes`].
//!
//! # Examples
//! ```
//! // 600 samples repeating every 60: the period search ranks 60 first.
//! let cycle: Vec<i16> = (0..60)
//!     .map(|i| (12000.0 * (2.0 * std::f64::consts::PI * i as f64 / 60.0).sin()) as i16)
//!     .collect();
//! let samples: Vec<i16> = (0..600).map(|i| cycle[i % 60]).collect();
//!
//! let candidates = wavesim::search_periods(&samples, 40, 80, 0.9, 4).unwrap();
//! assert_eq!(candidates[0].period, 60);
//!
//! // A window crossfaded with itself comes back essentially unchanged.
//! let out = wavesim::synthesize(600, &samples, &samples).unwrap();
//! assert!((i32::from(out[300]) - i32::from(samples[300])).abs() <= 1);
//! ```

pub mod common;
pub mod error;
pub mod ola;
pub mod pattern;
pub mod period;
pub mod sim;
pub mod splice;

pub use error::{Error, Result};
pub use ola::synthesize;
pub use pattern::match_score;
pub use period::{find_period, search_periods, Candidate};
pub use sim::{intensity, similarity, warped_similarity};
pub use splice::{find_splice, SpliceResult};
