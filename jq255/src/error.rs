//! Error types.

use core::fmt::{self, Display, Formatter};

/// Result type with the `jq255` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Group and protocol errors.
///
/// Signature verification failures are not errors: verification returns a
/// boolean. Invalid peer keys in ECDH are not errors either.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Invalid ring modulus or curve parameters.
    Construction,

    /// Invalid encoding: wrong length, value out of range, point not on the
    /// curve.
    Decode,

    /// Private key is zero, or public key is the neutral point.
    InvalidKey,

    /// Operands belong to different curves.
    CurveMismatch,

    /// Operation is not supported for this modulus.
    UnsupportedOperation,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Construction => write!(f, "invalid ring or curve parameters"),
            Error::Decode => write!(f, "invalid encoding"),
            Error::InvalidKey => write!(f, "invalid key"),
            Error::CurveMismatch => write!(f, "operands belong to different curves"),
            Error::UnsupportedOperation => write!(f, "operation not supported for this modulus"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<zmod::Error> for Error {
    fn from(err: zmod::Error) -> Self {
        match err {
            zmod::Error::InvalidModulus => Error::Construction,
            zmod::Error::InvalidLength { .. } | zmod::Error::OutOfRange => Error::Decode,
            zmod::Error::EvenModulus | zmod::Error::UnsupportedSqrt => {
                Error::UnsupportedOperation
            }
        }
    }
}

#[cfg(feature = "schnorr")]
impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: Error) -> Self {
        signature::Error::new()
    }
}
