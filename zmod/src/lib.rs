#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod element;
mod error;
mod ring;
mod sqrt;

pub use crate::{
    element::Element,
    error::{Error, Result},
    ring::Ring,
};
pub use num_bigint::{self, BigInt, BigUint};
