//! Curve configurations.

use super::{
    FieldElement, LazyLock, Point, Scalar,
    field::{FieldOps, GF255E, GF255S},
    scalar::{SCALAR255E, SCALAR255S},
};
use crate::{Error, Result};
use core::fmt::{self, Debug, Formatter};
use hex_literal::hex;
use log::debug;
use num_bigint::BigUint;
use zmod::{Element, Ring};

static JQ255E: LazyLock<Curve> =
    LazyLock::new(|| Curve::new(CurveKind::Jq255e).expect("jq255e parameters are valid"));

static JQ255S: LazyLock<Curve> =
    LazyLock::new(|| Curve::new(CurveKind::Jq255s).expect("jq255s parameters are valid"));

/// The jq255 curves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveKind {
    /// jq255e: `e^2 = 8*u^4 + 1` over GF(2^255 - 18651).
    Jq255e,

    /// jq255s: `e^2 = -u^4 + 2*u^2 + 1` over GF(2^255 - 3957).
    Jq255s,
}

impl CurveKind {
    /// The process-wide configuration of this curve.
    pub fn curve(self) -> &'static Curve {
        match self {
            CurveKind::Jq255e => &*JQ255E,
            CurveKind::Jq255s => &*JQ255S,
        }
    }

    /// Lowercase curve name, `"jq255e"` or `"jq255s"`.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Jq255e => "jq255e",
            CurveKind::Jq255s => "jq255s",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            CurveKind::Jq255e => "Jq255e",
            CurveKind::Jq255s => "Jq255s",
        }
    }
}

/// Curve-specific formulas, selected when the curve is built.
#[derive(Clone, Debug)]
pub(crate) enum Formulas {
    /// jq255e, with `eta`, the non-negative square root of -1, used by the
    /// map to the curve.
    Jq255e { eta: FieldElement },

    /// jq255s.
    Jq255s,
}

/// Configuration of one of the jq255 curves.
///
/// The curve equation is `y^2 = x*(x^2 + a*x + b)`; points are handled in
/// the `(e, u)` coordinates of the Jacobi quartic `e^2 = bp*u^4 + ap*u^2 + 1`
/// with `ap = -2*a` and `bp = a^2 - 4*b`.
///
/// Only two instances exist, obtained with [`Curve::jq255e`],
/// [`Curve::jq255s`] or [`CurveKind::curve`]. Points keep a reference to
/// their curve.
pub struct Curve {
    kind: CurveKind,
    field: &'static Ring,
    scalars: &'static Ring,
    a: FieldElement,
    b: FieldElement,
    pub(crate) ap: FieldElement,
    pub(crate) bp: FieldElement,
    pub(crate) formulas: Formulas,
    /// Extended coordinates (E, Z, U, T) of the generator.
    generator: [FieldElement; 4],
}

impl Curve {
    /// The jq255e curve.
    pub fn jq255e() -> &'static Curve {
        CurveKind::Jq255e.curve()
    }

    /// The jq255s curve.
    pub fn jq255s() -> &'static Curve {
        CurveKind::Jq255s.curve()
    }

    fn new(kind: CurveKind) -> Result<Self> {
        let (field, scalars): (&'static Ring, &'static Ring) = match kind {
            CurveKind::Jq255e => (&*GF255E, &*SCALAR255E),
            CurveKind::Jq255s => (&*GF255S, &*SCALAR255S),
        };

        if !field.is_odd() || !field.sqrt_supported() || !scalars.is_odd() {
            return Err(Error::Construction);
        }

        let (a, b, gx, gu, formulas) = match kind {
            CurveKind::Jq255e => {
                let eta = field.minus_one().sqrt()?.ok_or(Error::Construction)?;
                (
                    field.zero(),
                    field.from_i64(-2),
                    field.from_u64(2),
                    field.from_u64(1),
                    Formulas::Jq255e { eta },
                )
            }
            CurveKind::Jq255s => (
                field.minus_one(),
                field.one().div(&field.from_u64(2))?,
                field.element(BigUint::from_bytes_be(&hex!(
                    "39bd72651783fb6d213759eccb010b9d3ef832265840b5914803ac7d33b156b1"
                ))),
                field.from_u64(3),
                Formulas::Jq255s,
            ),
        };

        let ap = a.double().neg();
        let bp = a.square().sub(&b.mul_small(4));

        // G = (x^2 - b : x^2 + a*x + b : u*(x^2 + a*x + b) : u^2*(x^2 + a*x + b))
        let gz = gx.square().add(&a.mul(&gx)).add(&b);
        let generator = [
            gx.square().sub(&b),
            gz.clone(),
            gu.mul(&gz),
            gu.square().mul(&gz),
        ];

        let curve = Self {
            kind,
            field,
            scalars,
            a,
            b,
            ap,
            bp,
            formulas,
            generator,
        };

        let iz = curve.generator[1].inverse();
        let (ge, gu) = (curve.generator[0].mul(&iz), curve.generator[2].mul(&iz));
        if !curve.is_on_curve(&ge, &gu) {
            return Err(Error::Construction);
        }

        debug!("built {} configuration", kind.name());
        Ok(curve)
    }

    /// Which curve this is.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Lowercase curve name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The base field.
    pub fn field(&self) -> &'static Ring {
        self.field
    }

    /// The scalar field, whose modulus is the prime order of the group.
    pub fn scalar_field(&self) -> &'static Ring {
        self.scalars
    }

    /// Length in bytes of encoded points.
    pub fn encoded_len(&self) -> usize {
        self.field.encoded_len()
    }

    /// Coefficient `a` of the curve equation `y^2 = x*(x^2 + a*x + b)`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` of the curve equation `y^2 = x*(x^2 + a*x + b)`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The conventional generator of the group.
    pub fn generator(&'static self) -> Point {
        let [e, z, u, t] = self.generator.clone();
        Point::from_extended(self, e, z, u, t)
    }

    /// The neutral element `N`, with `(e, u) = (-1, 0)`.
    pub fn neutral(&'static self) -> Point {
        Point::from_extended(
            self,
            self.field.minus_one(),
            self.field.one(),
            self.field.zero(),
            self.field.zero(),
        )
    }

    /// Reduce an integer into a scalar.
    pub fn scalar(&self, k: BigUint) -> Scalar {
        self.scalars.element(k)
    }

    /// Decode a 32-byte scalar; the value must be lower than the group
    /// order.
    pub fn decode_scalar(&self, bytes: &[u8]) -> Result<Scalar> {
        Ok(self.scalars.decode(bytes)?)
    }

    /// Compute `k*G`.
    pub fn mul_generator(&'static self, k: &Scalar) -> Result<Point> {
        self.generator().mul(k)
    }

    /// Check that `e^2 = bp*u^4 + ap*u^2 + 1`.
    pub(crate) fn is_on_curve(&self, e: &FieldElement, u: &FieldElement) -> bool {
        let uu = u.square();
        let rhs = self
            .bp
            .mul(&uu.square())
            .add(&self.ap.mul(&uu))
            .add(&self.field.one());
        e.square() == rhs
    }

    pub(crate) fn check_field(&self, x: &Element<'_>) -> Result<()> {
        if x.ring().modulus() == self.field.modulus() {
            Ok(())
        } else {
            Err(Error::CurveMismatch)
        }
    }

    pub(crate) fn check_scalar(&self, k: &Element<'_>) -> Result<()> {
        if k.ring().modulus() == self.scalars.modulus() {
            Ok(())
        } else {
            Err(Error::CurveMismatch)
        }
    }
}

impl Debug for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("kind", &self.kind)
            .field("modulus", self.field.modulus())
            .field("order", self.scalars.modulus())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Curve {}
