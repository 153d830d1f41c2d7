//! Scalar multiplication with a signed 5-bit window.

use super::{Point, Scalar};
use crate::Result;
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Window width in bits.
const WINDOW: u32 = 5;

/// Number of signed digits; enough for any scalar below 2^255.
const DIGITS: usize = 51;

/// Number of precomputed multiples.
const LUT_SIZE: usize = 1 << (WINDOW - 1);

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 16p]`.
struct LookupTable {
    points: Vec<Point>,
}

impl From<&Point> for LookupTable {
    fn from(p: &Point) -> Self {
        let mut points = Vec::with_capacity(LUT_SIZE);
        points.push(p.clone());

        for i in (2..LUT_SIZE).step_by(2) {
            let double = points[i / 2 - 1].double();
            let next = p.add_unchecked(&double);
            points.push(double);
            points.push(next);
        }

        let last = p.add_unchecked(&points[LUT_SIZE - 2]);
        points.push(last);

        Self { points }
    }
}

impl LookupTable {
    /// Given `-16 <= x <= 16`, return `x * p`.
    fn select(&self, x: i8) -> Point {
        debug_assert!((-16..=16).contains(&x));
        match x.unsigned_abs() {
            0 => self.points[0].curve().neutral(),
            abs => {
                let p = &self.points[usize::from(abs) - 1];
                if x < 0 { p.neg() } else { p.clone() }
            }
        }
    }
}

/// Recode a scalar into signed digits `d_i` in `[-15, 16]` with
/// `k = sum(d_i * 32^i)`.
///
/// Only a top digit above 16 would need an extra carry: no scalar of either
/// group reaches that, as the group orders are below `2^254 + 2^126`.
fn recode(k: &BigUint) -> [i8; DIGITS] {
    let mut digits = [0i8; DIGITS];
    let mut carry = 0u8;

    for (i, digit) in digits.iter_mut().enumerate() {
        let base = i as u64 * u64::from(WINDOW);
        let chunk = (0..WINDOW).fold(0u8, |acc, b| {
            acc | (u8::from(k.bit(base + u64::from(b))) << b)
        });
        let nd = chunk + carry;
        if nd > 16 {
            *digit = nd as i8 - 32;
            carry = 1;
        } else {
            *digit = nd as i8;
            carry = 0;
        }
    }

    digits
}

impl Point {
    /// Compute `k*self`.
    ///
    /// The scalar must belong to this point's group (i.e. to
    /// [`Curve::scalar_field`](super::Curve::scalar_field)).
    pub fn mul(&self, k: &Scalar) -> Result<Point> {
        self.curve().check_scalar(k)?;
        Ok(self.mul_unchecked(k))
    }

    /// Compute `k*self` for a scalar known to belong to this point's group.
    pub(crate) fn mul_unchecked(&self, k: &Scalar) -> Point {
        let digits = recode(k.value());
        let table = LookupTable::from(self);

        let mut acc = table.select(digits[DIGITS - 1]);
        for &digit in digits[..DIGITS - 1].iter().rev() {
            acc = acc.xdouble(WINDOW).add_unchecked(&table.select(digit));
        }

        acc
    }
}
