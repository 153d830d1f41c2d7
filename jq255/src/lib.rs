#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Group arithmetic
//!
//! ```
//! use jq255::{CurveKind, Point};
//! use num_bigint::BigUint;
//!
//! let curve = CurveKind::Jq255s.curve();
//! let g = curve.generator();
//! let k = curve.scalar(BigUint::from(5u8));
//!
//! let p = g.mul(&k)?;
//! let q = g.xdouble(2).add(&g)?;
//! assert_eq!(p, q);
//! assert_eq!(Point::decode(curve, &p.to_bytes())?, p);
//! # Ok::<(), jq255::Error>(())
//! ```

#[cfg(not(any(feature = "critical-section", feature = "std")))]
compile_error!("jq255 requires either the `critical-section` or the `std` feature");

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
#[cfg(feature = "ecdh")]
pub mod ecdh;
#[cfg(feature = "schnorr")]
pub mod schnorr;

mod error;
#[cfg(feature = "hash2curve")]
mod hash2curve;
mod message;
mod public_key;
mod secret_key;

pub use crate::{
    arithmetic::{Curve, CurveKind, FieldElement, Point, Scalar},
    error::{Error, Result},
    message::{HashName, PreparedMessage},
    public_key::PublicKey,
    secret_key::SecretKey,
};
pub use zmod;

/// Length in bytes of encoded field elements, scalars, points and keys.
pub const ENCODED_LEN: usize = 32;
