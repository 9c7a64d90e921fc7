//! Splice-point search: how many samples of overlap join the end of one
//! segment onto the start of another most seamlessly.
//!
//! # Examples
//! ```
//! use wavesim::splice::find_splice;
//!
//! // b opens with the same 3 samples a closes with.
//! let a = [0, 0, 2500, -4000, 6000];
//! let b = [2500, -4000, 6000, 0, 0];
//! let result = find_splice(&a, &b, 3, 5).unwrap();
//! assert_eq!(result.length, 3);
//! assert!((result.score - 1.0).abs() < 1e-12);
//! ```

mod finder;

pub use finder::{find_splice, SpliceResult};
