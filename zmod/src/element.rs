//! Ring elements.

use crate::{Error, Result, Ring};
use alloc::vec::Vec;
use core::{
    fmt::{self, Debug, Display, Formatter},
    mem,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// An element of a [`Ring`], always in canonical form `0 <= x < m`.
///
/// Elements are immutable: every operation returns a new element. Binary
/// operations require both operands to belong to rings with the same
/// modulus and panic otherwise.
#[derive(Clone)]
pub struct Element<'r> {
    ring: &'r Ring,
    value: BigUint,
}

impl<'r> Element<'r> {
    pub(crate) fn from_canonical(ring: &'r Ring, value: BigUint) -> Self {
        debug_assert!(&value < ring.modulus());
        Self { ring, value }
    }

    /// The ring this element belongs to.
    pub fn ring(&self) -> &'r Ring {
        self.ring
    }

    /// Canonical integer value, in `[0, m)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Is the canonical value odd?
    ///
    /// Odd values are considered "negative". This is only a convention used
    /// to pick one of `x` and `-x`, e.g. for square roots and point
    /// encodings.
    pub fn is_negative(&self) -> bool {
        self.value.bit(0)
    }

    /// Do `self` and `other` belong to rings with the same modulus?
    pub fn same_ring(&self, other: &Element<'_>) -> bool {
        core::ptr::eq(self.ring, other.ring) || self.ring.modulus() == other.ring.modulus()
    }

    /// Encode as [`Ring::encoded_len`] little-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.value.to_bytes_le();
        bytes.resize(self.ring.encoded_len(), 0);
        bytes
    }

    /// Compute `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        self.assert_same_ring(rhs);
        let mut value = &self.value + &rhs.value;
        if &value >= self.ring.modulus() {
            value -= self.ring.modulus();
        }
        self.with_value(value)
    }

    /// Compute `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.assert_same_ring(rhs);
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            &self.value + self.ring.modulus() - &rhs.value
        };
        self.with_value(value)
    }

    /// Compute `-self`.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(self.ring.modulus() - &self.value)
    }

    /// Compute `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        self.assert_same_ring(rhs);
        self.with_value((&self.value * &rhs.value) % self.ring.modulus())
    }

    /// Compute `self * k` for a small integer `k`.
    pub fn mul_small(&self, k: u64) -> Self {
        self.with_value((&self.value * k) % self.ring.modulus())
    }

    /// Compute `self^2`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Compute `2 * self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Compute `self * 2^n`.
    ///
    /// `2^n` is reduced modulo `m` first, so large `n` stay cheap.
    pub fn shl(&self, n: u32) -> Self {
        let m = self.ring.modulus();
        let factor = BigUint::from(2u8).modpow(&BigUint::from(n), m);
        self.with_value((&self.value * factor) % m)
    }

    /// Compute `self / 2^n`.
    ///
    /// Each step adds the modulus to odd values before halving, which is
    /// multiplication by the inverse of 2. Requires an odd modulus.
    pub fn shr(&self, n: u32) -> Result<Self> {
        self.require_odd_modulus()?;
        let m = self.ring.modulus();
        let mut value = self.value.clone();

        for _ in 0..n {
            if value.bit(0) {
                value += m;
            }
            value >>= 1u32;
        }

        Ok(self.with_value(value))
    }

    /// Compute `self / rhs` with a binary GCD.
    ///
    /// Requires an odd modulus. If `rhs` is not invertible (zero, or sharing
    /// a factor with the modulus), the result is zero rather than an error.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.assert_same_ring(rhs);
        self.require_odd_modulus()?;
        let m = self.ring.modulus();

        // Invariant: a * self = u * rhs and b * self = v * rhs (mod m).
        let mut a = rhs.value.clone();
        let mut b = m.clone();
        let mut u = self.value.clone();
        let mut v = BigUint::zero();

        while !a.is_zero() {
            if !a.bit(0) {
                a >>= 1u32;
                if u.bit(0) {
                    u += m;
                }
                u >>= 1u32;
            } else {
                if a < b {
                    mem::swap(&mut a, &mut b);
                    mem::swap(&mut u, &mut v);
                }
                a -= &b;
                if u < v {
                    u += m;
                }
                u -= &v;
            }
        }

        // b = gcd(rhs, m)
        if !b.is_one() {
            return Ok(self.ring.zero());
        }

        Ok(self.with_value(v))
    }

    /// Compute `1 / self`, or zero if `self` is not invertible.
    pub fn invert(&self) -> Result<Self> {
        self.ring.one().div(self)
    }

    /// Compute `self^exp` by square-and-multiply.
    ///
    /// The exponent is used as is, never reduced modulo anything.
    pub fn pow_vartime(&self, exp: &BigUint) -> Self {
        let bits = exp.bits();
        if bits == 0 {
            return self.ring.one();
        }

        let mut acc = self.clone();
        for i in (0..bits - 1).rev() {
            acc = acc.square();
            if exp.bit(i) {
                acc = acc.mul(self);
            }
        }
        acc
    }

    /// Compute `self^exp` for a signed exponent.
    ///
    /// A negative exponent inverts `self` first, which requires an odd
    /// modulus.
    pub fn pow(&self, exp: &BigInt) -> Result<Self> {
        match exp.sign() {
            Sign::Minus => Ok(self.invert()?.pow_vartime(exp.magnitude())),
            _ => Ok(self.pow_vartime(exp.magnitude())),
        }
    }

    pub(crate) fn require_odd_modulus(&self) -> Result<()> {
        if self.ring.is_odd() {
            Ok(())
        } else {
            Err(Error::EvenModulus)
        }
    }

    fn assert_same_ring(&self, rhs: &Element<'_>) {
        assert!(self.same_ring(rhs), "ring mismatch");
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self::from_canonical(self.ring, value)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.same_ring(other)
    }
}

impl Eq for Element<'_> {}

impl Debug for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element({} mod {})", self.value, self.ring.modulus())
    }
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}
