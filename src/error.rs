use thiserror::Error;

/// Result type for wavesim operations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the analysis and synthesis routines.
///
/// Degenerate numeric cases (silent or constant windows) are not errors;
/// they resolve to a score of zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The byte buffer cannot be interpreted as densely packed
    /// little-endian 16-bit samples.
    #[error("buffer of {0} bytes is not densely packed 16-bit samples")]
    TypeMismatch(usize),

    /// An offset, length or window argument is out of bounds or otherwise
    /// unusable. All argument validation happens before any computation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scratch or output allocation of the given number of elements failed.
    #[error("failed to allocate {0} elements")]
    OutOfMemory(usize),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
