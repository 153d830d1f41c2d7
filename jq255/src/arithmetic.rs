//! Arithmetic in the jq255e and jq255s groups.
//!
//! Base fields, scalar fields, curve configurations and points. All field
//! and curve constants are process-wide singletons built on first use.

pub(crate) mod field;
mod map2curve;
mod mul;
pub(crate) mod scalar;

mod curve;
mod point;

#[cfg(feature = "critical-section")]
pub(crate) use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
pub(crate) use std::sync::LazyLock;

pub use self::{curve::Curve, curve::CurveKind, field::FieldElement, point::Point, scalar::Scalar};
