//! Error types.

use core::fmt::{self, Display, Formatter};

/// Result type with the `zmod` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Ring errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Modulus is lower than 2.
    InvalidModulus,

    /// Encoded element does not have the ring's encoded length.
    InvalidLength {
        /// Encoded length of the ring.
        expected: usize,
        /// Length of the provided input.
        actual: usize,
    },

    /// Decoded integer is not lower than the modulus.
    OutOfRange,

    /// Operation is only defined for an odd modulus.
    EvenModulus,

    /// Square roots are not implemented for this modulus.
    UnsupportedSqrt,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus => write!(f, "modulus must be at least 2"),
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid encoded length: expected {expected}, got {actual}")
            }
            Error::OutOfRange => write!(f, "encoded value is not lower than the modulus"),
            Error::EvenModulus => write!(f, "operation requires an odd modulus"),
            Error::UnsupportedSqrt => {
                write!(f, "square roots require a prime modulus equal to 3, 5 or 7 mod 8")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
