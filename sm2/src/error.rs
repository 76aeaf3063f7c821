//! Error types.

use core::fmt;

/// Errors returned when building SM2 keys.
///
/// Failures of the caller-supplied random source are not wrapped: functions
/// which consume randomness return the source's own error type unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Secret scalar outside of the open interval `(1, n)`.
    InvalidScalar,

    /// Point is the identity or does not satisfy the curve equation.
    InvalidPoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar => write!(f, "private scalar is not in the range (1, n)"),
            Error::InvalidPoint => write!(f, "point is not a valid SM2 public key"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
