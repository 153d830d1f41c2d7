//! Secret keys.

use crate::{
    Curve, CurveKind, ENCODED_LEN, Error, PublicKey, Result, Scalar, arithmetic::field::to_bytes32,
};
use core::{
    convert::Infallible,
    fmt::{self, Debug, Formatter},
};
use digest::XofReader;
use log::trace;
use rand_core::{CryptoRng, TryCryptoRng};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

/// Secret keys: non-zero scalars, together with the matching public key.
///
/// The scalar is held as a big integer, which is not wiped from memory on
/// drop; the intermediate byte buffers used to build and encode it are.
#[derive(Clone)]
pub struct SecretKey {
    scalar: Scalar,
    public_key: PublicKey,
}

impl SecretKey {
    /// Generate a random [`SecretKey`].
    pub fn random<R: CryptoRng + ?Sized>(curve: &'static Curve, rng: &mut R) -> Self {
        let Ok(key) = Self::generate(curve, |bytes| {
            rng.fill_bytes(bytes);
            Ok::<(), Infallible>(())
        });
        key
    }

    /// Generate a random [`SecretKey`], reporting RNG failures.
    pub fn try_from_rng<R: TryCryptoRng + ?Sized>(
        curve: &'static Curve,
        rng: &mut R,
    ) -> core::result::Result<Self, R::Error> {
        Self::generate(curve, |bytes| rng.try_fill_bytes(bytes))
    }

    /// Derive a [`SecretKey`] from an extendable output function which has
    /// already absorbed a seed, e.g. SHAKE256.
    ///
    /// Successive 32-byte blocks are read from the XOF until one of them
    /// reduces to a non-zero scalar; the result is deterministic in the
    /// seed.
    pub fn from_xof<X: XofReader + ?Sized>(curve: &'static Curve, xof: &mut X) -> Self {
        let Ok(key) = Self::generate(curve, |bytes| {
            xof.read(bytes);
            Ok::<(), Infallible>(())
        });
        key
    }

    /// Create a [`SecretKey`] from a scalar of the curve's scalar field.
    ///
    /// Zero is rejected with [`Error::InvalidKey`].
    pub fn from_scalar(curve: &'static Curve, scalar: Scalar) -> Result<Self> {
        curve.check_scalar(&scalar)?;
        if scalar.is_zero() {
            return Err(Error::InvalidKey);
        }

        Ok(Self::from_nonzero(curve, scalar))
    }

    /// Decode a [`SecretKey`] from its 32-byte little-endian encoding.
    ///
    /// The value must be in the `1..r` range, `r` being the group order.
    pub fn from_bytes(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let scalar = curve.decode_scalar(bytes)?;
        if scalar.is_zero() {
            return Err(Error::InvalidKey);
        }

        Ok(Self::from_nonzero(curve, scalar))
    }

    /// Encode this [`SecretKey`] as 32 little-endian bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; ENCODED_LEN]> {
        Zeroizing::new(to_bytes32(&self.scalar))
    }

    /// Borrow the secret scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// The [`PublicKey`] matching this [`SecretKey`].
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The curve of this key.
    pub fn curve(&self) -> &'static Curve {
        self.public_key.curve()
    }

    /// Which curve this key belongs to.
    pub fn kind(&self) -> CurveKind {
        self.public_key.kind()
    }

    /// Reduce 32-byte blocks from `fill` until a non-zero scalar comes out.
    fn generate<E>(
        curve: &'static Curve,
        mut fill: impl FnMut(&mut [u8]) -> core::result::Result<(), E>,
    ) -> core::result::Result<Self, E> {
        let mut bytes = Zeroizing::new([0u8; ENCODED_LEN]);
        loop {
            fill(bytes.as_mut_slice())?;
            let scalar = curve.scalar_field().decode_reduce(bytes.as_slice());
            if !scalar.is_zero() {
                return Ok(Self::from_nonzero(curve, scalar));
            }
            trace!("{}: zero scalar in key generation, retrying", curve.name());
        }
    }

    fn from_nonzero(curve: &'static Curve, scalar: Scalar) -> Self {
        let point = curve.generator().mul_unchecked(&scalar);
        Self {
            scalar,
            public_key: PublicKey::from_point_unchecked(point),
        }
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_curve = Choice::from(u8::from(self.kind() == other.kind()));
        same_curve & self.to_bytes().as_slice().ct_eq(other.to_bytes().as_slice())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
