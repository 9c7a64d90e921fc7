//! [PSOLA](https://en.wikipedia.org/wiki/PSOLA)-style overlap-add synthesis:
//! two source windows are time-scaled onto a common output axis by
//! nearest-neighbor indexing and blended with complementary half-Hann
//! fades. Suitable for joining short analysis frames at a splice point, not
//! for general-purpose resampling (no interpolation, no anti-aliasing).
//!
//! # Examples
//! ```
//! use wavesim::ola::synthesize;
//!
//! // Fade a constant out while fading its negation in.
//! let out = synthesize(64, &[8000; 64], &[-8000; 64]).unwrap();
//! assert_eq!(out[0], 8000);
//! assert!(out[63] < -7900);
//! ```

mod synth;

pub use synth::synthesize;
