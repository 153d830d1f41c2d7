//! Group elements in extended coordinates.

use super::{
    Curve, CurveKind, FieldElement,
    curve::Formulas,
    field::{FieldOps, to_bytes32},
};
use crate::{ENCODED_LEN, Error, Result};
use core::fmt::{self, Debug, Display, Formatter};

/// An element of the jq255e or jq255s group.
///
/// Points use extended coordinates `(E:Z:U:T)` with `Z != 0`, standing for
/// the affine point `(e, u) = (E/Z, U/Z)` with `u^2 = T/Z`. Each group element
/// has two affine representations, `(e, u)` and `(-e, -u)`; the canonical
/// one has a non-negative (even) `e` and its `u` is the encoding.
///
/// Operations on points of different curves fail with
/// [`Error::CurveMismatch`].
#[derive(Clone)]
pub struct Point {
    curve: &'static Curve,
    e: FieldElement,
    z: FieldElement,
    u: FieldElement,
    t: FieldElement,
}

impl Point {
    pub(crate) fn from_extended(
        curve: &'static Curve,
        e: FieldElement,
        z: FieldElement,
        u: FieldElement,
        t: FieldElement,
    ) -> Self {
        Self { curve, e, z, u, t }
    }

    /// Create a point from its affine coordinates, checking the curve
    /// equation.
    pub fn from_affine(curve: &'static Curve, e: &FieldElement, u: &FieldElement) -> Result<Self> {
        curve.check_field(e)?;
        curve.check_field(u)?;

        if !curve.is_on_curve(e, u) {
            return Err(Error::Decode);
        }

        let one = curve.field().one();
        Ok(Self::from_extended(curve, e.clone(), one, u.clone(), u.square()))
    }

    /// Decode a point from its 32-byte encoding.
    ///
    /// Only canonical encodings are accepted: `u` must be lower than the
    /// field modulus, and `e` is recovered as the non-negative square root of
    /// `bp*u^4 + ap*u^2 + 1`. All-zero bytes decode to the neutral element.
    pub fn decode(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let u = curve.field().decode(bytes)?;
        let t = u.square();
        let d = curve
            .bp
            .mul(&t.square())
            .add(&curve.ap.mul(&t))
            .add(&curve.field().one());
        let e = d.sqrt_opt().ok_or(Error::Decode)?;
        debug_assert!(!e.is_negative());

        Ok(Self::from_extended(curve, e, curve.field().one(), u, t))
    }

    /// Encode this point as the little-endian bytes of its canonical `u`.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let (_, u) = self.affine();
        to_bytes32(&u)
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Which curve this point belongs to.
    pub fn kind(&self) -> CurveKind {
        self.curve.kind()
    }

    /// Canonical affine coordinates `(e, u)`, with `e` non-negative.
    pub fn affine(&self) -> (FieldElement, FieldElement) {
        let iz = self.z.inverse();
        let e = self.e.mul(&iz);
        let u = self.u.mul(&iz);
        if e.is_negative() {
            (e.neg(), u.neg())
        } else {
            (e, u)
        }
    }

    /// Is this the neutral element?
    pub fn is_neutral(&self) -> bool {
        self.u.is_zero()
    }

    /// Compute `self + rhs`.
    pub fn add(&self, rhs: &Point) -> Result<Point> {
        self.check_curve(rhs)?;
        Ok(self.add_unchecked(rhs))
    }

    /// Compute `self - rhs`.
    pub fn sub(&self, rhs: &Point) -> Result<Point> {
        self.check_curve(rhs)?;
        Ok(self.add_unchecked(&rhs.neg()))
    }

    /// Compute `-self`.
    pub fn neg(&self) -> Point {
        Self {
            u: self.u.neg(),
            ..self.clone()
        }
    }

    /// Compute `2*self`.
    pub fn double(&self) -> Point {
        self.xdouble(1)
    }

    /// Compute `2^n*self` with `n` successive doublings.
    pub fn xdouble(&self, n: u32) -> Point {
        match (n, &self.curve.formulas) {
            (0, _) => self.clone(),
            (_, Formulas::Jq255e { .. }) => self.xdouble_jq255e(n),
            (_, Formulas::Jq255s) => self.xdouble_jq255s(n),
        }
    }

    /// Do `self` and `rhs` represent the same group element?
    pub fn equals(&self, rhs: &Point) -> Result<bool> {
        self.check_curve(rhs)?;
        Ok(self.u.mul(&rhs.e) == rhs.u.mul(&self.e))
    }

    /// Complete addition law; both points are on the same curve.
    pub(crate) fn add_unchecked(&self, rhs: &Point) -> Point {
        let (ap, bp) = (&self.curve.ap, &self.curve.bp);

        let e1e2 = self.e.mul(&rhs.e);
        let z1z2 = self.z.mul(&rhs.z);
        let u1u2 = self.u.mul(&rhs.u);
        let t1t2 = self.t.mul(&rhs.t);
        let tz = self
            .z
            .add(&self.t)
            .mul(&rhs.z.add(&rhs.t))
            .sub(&z1z2)
            .sub(&t1t2);
        let eu = self
            .e
            .add(&self.u)
            .mul(&rhs.e.add(&rhs.u))
            .sub(&e1e2)
            .sub(&u1u2);
        let bp_t1t2 = bp.mul(&t1t2);
        let hd = z1z2.sub(&bp_t1t2);

        let e = z1z2
            .add(&bp_t1t2)
            .mul(&e1e2.add(&ap.mul(&u1u2)))
            .add(&bp.mul(&u1u2).mul(&tz).double());
        let z = hd.square();
        let t = eu.square();
        let u = hd.add(&eu).square().sub(&z).sub(&t).half();

        Self::from_extended(self.curve, e, z, u, t)
    }

    /// Repeated doublings on jq255e through (X:W:J) coordinates.
    fn xdouble_jq255e(&self, n: u32) -> Point {
        let s = self.e.square();
        let mut x = s.square();
        let mut w = self.z.square().double().sub(&s);
        let mut j = self.e.mul(&self.u).double();

        for _ in 1..n {
            let s1 = w.square();
            let s2 = s1.sub(&x.double());
            let s3 = s2.square();
            x = s3.square();
            j = j.mul(&w.add(&s2).square().sub(&s1).sub(&s3));
            w = s3.sub(&s1.square().double());
        }

        let z = w.square();
        let t = j.square();
        let u = w.add(&j).square().sub(&z).sub(&t).half();
        let e = x.double().sub(&z);
        Self::from_extended(self.curve, e, z, u, t)
    }

    /// Repeated doublings on jq255s through (X:W:J) coordinates.
    ///
    /// Intermediate values stand for `2*P + N`, which is the same group
    /// element as `2*P`.
    fn xdouble_jq255s(&self, n: u32) -> Point {
        let s = self.u.square();
        let mut x = s.square().mul_small(8);
        let mut w = s.double().sub(&self.t.add(&self.z).square());
        let mut j = self.e.mul(&self.u).double();

        for _ in 1..n {
            let s1 = w.mul(&j);
            let s2 = s1.square();
            let s3 = w.add(&j).square().sub(&s1.double());
            j = s1.double().mul(&x.double().sub(&s3));
            x = s2.square().mul_small(8);
            w = s2.double().sub(&s3.square());
        }

        let z = w.square();
        let t = j.square();
        let u = w.add(&j).square().sub(&z).sub(&t).half();
        let e = x.double().sub(&z).sub(&t);
        Self::from_extended(self.curve, e, z, u, t)
    }

    pub(crate) fn check_curve(&self, rhs: &Point) -> Result<()> {
        if core::ptr::eq(self.curve, rhs.curve) {
            Ok(())
        } else {
            Err(Error::CurveMismatch)
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other).unwrap_or(false)
    }
}

impl Eq for Point {}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (e, u) = self.affine();
        write!(f, "{}({}, {})", self.kind().display_name(), e, u)
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
