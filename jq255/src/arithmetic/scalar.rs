//! Scalar fields, i.e. integers modulo the prime group orders.

use super::{LazyLock, field::prime_ring};
use hex_literal::hex;
use zmod::{Element, Ring};

/// Element of the scalar field of jq255e or jq255s.
///
/// Private keys and signature components are scalars.
pub type Scalar = Element<'static>;

/// Integers modulo the order of jq255e,
/// `2^254 - 131528281291764213006042413802501683931`.
pub(crate) static SCALAR255E: LazyLock<Ring> = LazyLock::new(|| {
    prime_ring(&hex!(
        "3fffffffffffffffffffffffffffffff9d0c930f54078c531f52c8ae74d84525"
    ))
});

/// Integers modulo the order of jq255s,
/// `2^254 + 56904135270672826811114353017034461895`.
pub(crate) static SCALAR255S: LazyLock<Ring> = LazyLock::new(|| {
    prime_ring(&hex!(
        "400000000000000000000000000000002acf567a912b7f03dcf2ac65396152c7"
    ))
});
