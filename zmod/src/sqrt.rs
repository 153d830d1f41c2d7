//! Square roots and quadratic residuosity.

use crate::{Element, Error, Result};
use core::mem;
use num_bigint::BigUint;
use num_traits::Zero;

/// Square root algorithms, each holding its precomputed exponent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Algorithm {
    /// Atkin algorithm for `m ≡ 5 (mod 8)`, with exponent `(m - 5) / 8`.
    Atkin(BigUint),

    /// Shanks algorithm for `m ≡ 3 (mod 4)`, with exponent `(m + 1) / 4`.
    Shanks(BigUint),
}

impl Algorithm {
    /// Determine the algorithm to use with a particular modulus, if any.
    pub(crate) fn for_modulus(m: &BigUint) -> Option<Self> {
        match low_u32(m) & 7 {
            3 | 7 => Some(Self::Shanks((m + 1u32) >> 2u32)),
            5 => Some(Self::Atkin((m - 5u32) >> 3u32)),
            _ => None,
        }
    }
}

impl<'r> Element<'r> {
    /// Returns the square root of `self`, or `None` if `self` is not a
    /// quadratic residue.
    ///
    /// The modulus is assumed prime; only moduli equal to 3, 5 or 7 modulo 8
    /// are supported. The returned root is the one with an even canonical
    /// value.
    pub fn sqrt(&self) -> Result<Option<Self>> {
        let candidate = match self.ring().sqrt_algorithm() {
            Some(Algorithm::Shanks(exp)) => self.pow_vartime(exp),
            Some(Algorithm::Atkin(exp)) => {
                let b = self.double().pow_vartime(exp);
                let c = self.mul(&b.square()).double();
                self.mul(&b).mul(&c.sub(&self.ring().one()))
            }
            None => return Err(Error::UnsupportedSqrt),
        };

        if candidate.square() != *self {
            return Ok(None);
        }

        if candidate.is_negative() {
            Ok(Some(candidate.neg()))
        } else {
            Ok(Some(candidate))
        }
    }

    /// Is `self` a square modulo `m`?
    ///
    /// Computes the Jacobi symbol with the binary GCD reduction steps; zero
    /// counts as a square. Requires an odd modulus. For a prime modulus this
    /// is exactly quadratic residuosity.
    pub fn is_square(&self) -> Result<bool> {
        self.require_odd_modulus()?;
        if self.is_zero() {
            return Ok(true);
        }

        let mut a = self.value().clone();
        let mut b = self.ring().modulus().clone();
        let mut ls = false;

        while !a.is_zero() {
            if !a.bit(0) {
                a >>= 1u32;
                // (2 / b) = -1 when b = 3 or 5 mod 8
                if (low_u32(&b).wrapping_add(2) & 7) > 4 {
                    ls = !ls;
                }
            } else {
                if a < b {
                    mem::swap(&mut a, &mut b);
                    // quadratic reciprocity
                    if low_u32(&a) & low_u32(&b) & 3 == 3 {
                        ls = !ls;
                    }
                }
                a -= &b;
            }
        }

        Ok(!ls)
    }
}

fn low_u32(x: &BigUint) -> u32 {
    x.iter_u32_digits().next().unwrap_or(0)
}
