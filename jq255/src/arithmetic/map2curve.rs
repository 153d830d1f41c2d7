//! Maps from the base field to the group.
//!
//! These maps are not hash functions: their output is not uniformly
//! distributed. Hashing to the group adds the images of two independent
//! field elements.

use super::{Curve, FieldElement, Point, curve::Formulas, field::FieldOps};
use crate::Result;

impl Curve {
    /// Map a field element to a group element.
    ///
    /// Excluded inputs (`0` on jq255e, `1` and `-1` on jq255s) map to the
    /// neutral element.
    pub fn map_to_curve(&'static self, f: &FieldElement) -> Result<Point> {
        self.check_field(f)?;
        Ok(match &self.formulas {
            Formulas::Jq255e { eta } => self.map_jq255e(f, eta),
            Formulas::Jq255s => self.map_jq255s(f),
        })
    }

    /// Decode bytes as a little-endian integer, reduce it into the base
    /// field and map the result to the group.
    pub fn map_to_curve_bytes(&'static self, bytes: &[u8]) -> Point {
        let f = self.field().decode_reduce(bytes);
        match &self.formulas {
            Formulas::Jq255e { eta } => self.map_jq255e(&f, eta),
            Formulas::Jq255s => self.map_jq255s(&f),
        }
    }

    fn map_jq255e(&'static self, f: &FieldElement, eta: &FieldElement) -> Point {
        if f.is_zero() {
            return self.neutral();
        }

        let seven = self.field().from_u64(7);
        let f2 = f.square();
        let f3 = f2.mul(f);
        let f5 = f3.mul(&f2);
        let f7 = f5.mul(&f2);

        let x1 = f2.mul_small(4).sub(&seven);
        let x2 = f2.mul_small(4).add(&seven).mul(eta);
        let x0 = f.mul_small(4);

        let (c7, c5, c3, c1) = (
            f7.mul_small(64),
            f5.mul_small(176),
            f3.mul_small(308),
            f.mul_small(343),
        );
        let z1 = c7.add(&c5).sub(&c3).sub(&c1);
        let z2 = eta.mul(&c7.sub(&c5).sub(&c3).add(&c1)).neg();
        let y0 = f2.mul_small(8);

        // At least one of z1, z2 and z1*z2 is a square.
        let (x, xx, y, yy) = if let Some(y) = z1.sqrt_opt() {
            (x1, x0, y, y0)
        } else if let Some(y) = z2.sqrt_opt() {
            (x2, x0, y, y0)
        } else {
            let Some(y) = z1.mul(&z2).sqrt_opt() else {
                return self.neutral();
            };
            (x1.mul(&x2), x0.square(), y, y0.square())
        };

        let u = x.mul(&yy);
        let uu = xx.mul(&y);

        let num_x = u.square().mul_small(8).neg();
        let den_x = uu.square();
        let num_u = x.mul(&xx).mul(&uu).double();
        let den_u = u.mul(&x.square().sub(&xx.square().mul_small(8)));
        let num_e = num_x.square().add(&den_x.square().double());
        let den_e = num_x.square().sub(&den_x.square().double());

        self.from_fractions(&num_e, &den_e, &num_u, &den_u)
    }

    fn map_jq255s(&'static self, f: &FieldElement) -> Point {
        let one = self.field().one();
        if *f == one || *f == self.field().minus_one() {
            return self.neutral();
        }

        let f2 = f.square();
        let f4 = f2.square();
        let f6 = f4.mul(&f2);

        let z1 = f6
            .mul_small(2)
            .neg()
            .add(&f4.mul_small(14))
            .sub(&f2.mul_small(14))
            .add(&one.double());
        let z2 = z1.mul(&f2).neg();
        let xx = one.sub(&f2);

        // -1 is not a square, so z2 is a square whenever z1 is not.
        let (x, y) = if let Some(y) = z1.sqrt_opt() {
            (self.field().from_i64(-2), y)
        } else {
            let Some(y) = z2.sqrt_opt() else {
                return self.neutral();
            };
            (f2.double(), y.neg())
        };

        if y.is_zero() {
            return self.neutral();
        }

        let u = x.mul(&xx);
        let uu = y;

        let num_x = u.square().double();
        let den_x = uu.square();
        let num_u = uu.double();
        let den_u = x.square().add(&xx.square());
        let s1 = num_x.mul(&num_x.double().sub(&den_x));
        let s2 = den_x.mul(&num_x.sub(&den_x));
        let num_e = s1.add(&s2);
        let den_e = s1.sub(&s2);

        self.from_fractions(&num_e, &den_e, &num_u, &den_u)
    }

    /// Build the point `(e, u) = (num_e/den_e, num_u/den_u)` without
    /// inversions.
    fn from_fractions(
        &'static self,
        num_e: &FieldElement,
        den_e: &FieldElement,
        num_u: &FieldElement,
        den_u: &FieldElement,
    ) -> Point {
        let den_u2 = den_u.square();
        Point::from_extended(
            self,
            num_e.mul(&den_u2),
            den_e.mul(&den_u2),
            num_u.mul(den_u).mul(den_e),
            num_u.square().mul(den_e),
        )
    }
}
