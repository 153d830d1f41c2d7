//! Public keys.

use crate::{Curve, CurveKind, ENCODED_LEN, Error, Point, Result};
use core::fmt::{self, Debug, Formatter};

/// Public keys: non-neutral group elements.
///
/// The encoded form is computed once, when the key is created; it is used
/// as-is in ECDH key derivation and signature challenges.
#[derive(Clone, Eq, PartialEq)]
pub struct PublicKey {
    point: Point,
    encoded: [u8; ENCODED_LEN],
}

impl PublicKey {
    /// Convert a group element into a public key.
    ///
    /// The neutral element is rejected with [`Error::InvalidKey`].
    pub fn from_point(point: Point) -> Result<Self> {
        if point.is_neutral() {
            return Err(Error::InvalidKey);
        }

        Ok(Self::from_point_unchecked(point))
    }

    /// Build a public key from a point known not to be neutral.
    pub(crate) fn from_point_unchecked(point: Point) -> Self {
        debug_assert!(!point.is_neutral());
        let encoded = point.to_bytes();
        Self { point, encoded }
    }

    /// Decode a public key.
    ///
    /// Invalid encodings fail with [`Error::Decode`]; the encoding of the
    /// neutral element fails with [`Error::InvalidKey`].
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        Self::from_point(Point::decode(curve, bytes)?)
    }

    /// Encode this public key.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.encoded
    }

    /// Borrow the encoded form of this public key.
    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.encoded
    }

    /// Borrow the group element of this public key.
    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// The curve of this public key.
    pub fn curve(&self) -> &'static Curve {
        self.point.curve()
    }

    /// Which curve this public key belongs to.
    pub fn kind(&self) -> CurveKind {
        self.point.kind()
    }
}

impl AsRef<Point> for PublicKey {
    fn as_ref(&self) -> &Point {
        &self.point
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

impl From<PublicKey> for Point {
    fn from(public_key: PublicKey) -> Point {
        public_key.point
    }
}

impl From<&PublicKey> for [u8; ENCODED_LEN] {
    fn from(public_key: &PublicKey) -> [u8; ENCODED_LEN] {
        public_key.encoded
    }
}

impl TryFrom<Point> for PublicKey {
    type Error = Error;

    fn try_from(point: Point) -> Result<Self> {
        Self::from_point(point)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, ", self.kind().name())?;
        for byte in &self.encoded {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
