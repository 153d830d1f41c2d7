//! Base fields.

use super::LazyLock;
use hex_literal::hex;
use num_bigint::BigUint;
use zmod::{Element, Ring};

/// Element of the base field of jq255e or jq255s.
pub type FieldElement = Element<'static>;

/// GF(2^255 - 18651), the base field of jq255e.
pub(crate) static GF255E: LazyLock<Ring> = LazyLock::new(|| {
    prime_ring(&hex!(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffb725"
    ))
});

/// GF(2^255 - 3957), the base field of jq255s.
pub(crate) static GF255S: LazyLock<Ring> = LazyLock::new(|| {
    prime_ring(&hex!(
        "7ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff08b"
    ))
});

/// Build the ring of integers modulo a big-endian encoded prime.
pub(crate) fn prime_ring(modulus: &[u8; 32]) -> Ring {
    Ring::new(BigUint::from_bytes_be(modulus)).expect("prime modulus is at least 2")
}

/// Encode a ring element whose modulus fits in 32 bytes.
pub(crate) fn to_bytes32(x: &Element<'_>) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let le = x.value().to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);
    bytes
}

/// Field operations that only fail on moduli which [`Curve`] construction
/// rejects: every curve field is an odd prime with a supported square root.
///
/// [`Curve`]: super::Curve
pub(crate) trait FieldOps: Sized {
    /// Compute `self / 2`.
    fn half(&self) -> Self;

    /// Compute `1 / self` (zero for zero).
    fn inverse(&self) -> Self;

    /// Square root with an even canonical value, if any.
    fn sqrt_opt(&self) -> Option<Self>;
}

impl FieldOps for FieldElement {
    fn half(&self) -> Self {
        self.shr(1).expect("curve fields have an odd modulus")
    }

    fn inverse(&self) -> Self {
        self.invert().expect("curve fields have an odd modulus")
    }

    fn sqrt_opt(&self) -> Option<Self> {
        self.sqrt().expect("curve fields support square roots")
    }
}
