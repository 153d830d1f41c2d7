//! Rings of integers modulo `m`.

use crate::{Element, Error, Result, sqrt::Algorithm};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// The ring of integers modulo some `m >= 2`.
///
/// A `Ring` owns its modulus; [`Element`]s borrow the ring they belong to.
/// Process-wide rings are usually kept in `static` cells so that their
/// elements are `Element<'static>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ring {
    modulus: BigUint,
    encoded_len: usize,
    sqrt: Option<Algorithm>,
}

impl Ring {
    /// Create the ring of integers modulo `modulus`.
    ///
    /// Returns [`Error::InvalidModulus`] if `modulus < 2`. The square root
    /// algorithm, if any, is selected here from the residue of the modulus.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(Error::InvalidModulus);
        }

        let encoded_len = modulus.bits().div_ceil(8) as usize;
        let sqrt = Algorithm::for_modulus(&modulus);

        Ok(Self {
            modulus,
            encoded_len,
            sqrt,
        })
    }

    /// Modulus of this ring.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Length, in bytes, of encoded elements.
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Is the modulus odd?
    pub fn is_odd(&self) -> bool {
        self.modulus.bit(0)
    }

    /// Does [`Element::sqrt`] support this modulus?
    pub fn sqrt_supported(&self) -> bool {
        self.sqrt.is_some()
    }

    pub(crate) fn sqrt_algorithm(&self) -> Option<&Algorithm> {
        self.sqrt.as_ref()
    }

    /// The element `0`.
    pub fn zero(&self) -> Element<'_> {
        Element::from_canonical(self, BigUint::zero())
    }

    /// The element `1`.
    pub fn one(&self) -> Element<'_> {
        Element::from_canonical(self, BigUint::one())
    }

    /// The element `-1`, i.e. `m - 1`.
    pub fn minus_one(&self) -> Element<'_> {
        Element::from_canonical(self, &self.modulus - 1u32)
    }

    /// Reduce `x` modulo `m`.
    pub fn element(&self, x: BigUint) -> Element<'_> {
        Element::from_canonical(self, x % &self.modulus)
    }

    /// Reduce a small unsigned integer modulo `m`.
    pub fn from_u64(&self, x: u64) -> Element<'_> {
        self.element(BigUint::from(x))
    }

    /// Reduce a small signed integer modulo `m`.
    pub fn from_i64(&self, x: i64) -> Element<'_> {
        let abs = self.from_u64(x.unsigned_abs());
        if x < 0 { abs.neg() } else { abs }
    }

    /// Reduce a signed integer modulo `m`.
    pub fn from_bigint(&self, x: &BigInt) -> Element<'_> {
        let abs = self.element(x.magnitude().clone());
        match x.sign() {
            Sign::Minus => abs.neg(),
            _ => abs,
        }
    }

    /// Decode an element from exactly [`Ring::encoded_len`] little-endian
    /// bytes. The encoded integer must be lower than the modulus.
    pub fn decode(&self, bytes: &[u8]) -> Result<Element<'_>> {
        if bytes.len() != self.encoded_len {
            return Err(Error::InvalidLength {
                expected: self.encoded_len,
                actual: bytes.len(),
            });
        }

        let x = BigUint::from_bytes_le(bytes);
        if x >= self.modulus {
            return Err(Error::OutOfRange);
        }

        Ok(Element::from_canonical(self, x))
    }

    /// Decode little-endian bytes of any length and reduce the integer
    /// modulo `m`.
    ///
    /// The output is biased unless the input is much longer than the
    /// modulus; only use it on hash outputs or where bias is harmless.
    pub fn decode_reduce(&self, bytes: &[u8]) -> Element<'_> {
        self.element(BigUint::from_bytes_le(bytes))
    }
}
