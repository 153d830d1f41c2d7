//! Elliptic Curve Diffie-Hellman with failure masking.
//!
//! Key exchange never fails on an invalid peer key. If the peer's bytes do
//! not decode to a valid public key, a secret is still derived, from our own
//! secret key and the exchanged bytes, and the [`SharedSecret`] is flagged as
//! invalid. An outsider who only sees the traffic cannot tell the two cases
//! apart; this is meant for protocols in which exchanged points are masked.
//!
//! The shared secret is the BLAKE2s digest of:
//!
//! - both encoded public keys, the numerically smaller one first (big-endian
//!   interpretation), so that both parties hash them in the same order;
//! - byte `0x53` followed by the encoded product point on success, or byte
//!   `0x46` followed by our encoded secret key on failure.
//!
//! # Usage
//!
//! ```
//! use jq255::{CurveKind, SecretKey};
//! use rand_core::{OsRng, TryRngCore};
//!
//! let curve = CurveKind::Jq255s.curve();
//!
//! // Alice
//! let alice = SecretKey::random(curve, &mut OsRng.unwrap_err());
//! let alice_pk_bytes = alice.public_key().to_bytes();
//!
//! // Bob
//! let bob = SecretKey::random(curve, &mut OsRng.unwrap_err());
//! let bob_pk_bytes = bob.public_key().to_bytes();
//!
//! // Each side hashes the exchanged bytes with its own secret
//! let alice_shared = alice.diffie_hellman(&bob_pk_bytes)?;
//! let bob_shared = bob.diffie_hellman(&alice_pk_bytes)?;
//!
//! assert!(alice_shared.is_valid());
//! assert_eq!(
//!     alice_shared.raw_secret_bytes(),
//!     bob_shared.raw_secret_bytes()
//! );
//!
//! // Garbage from the peer still yields a secret, flagged as invalid
//! let masked = alice.diffie_hellman(&[0xff; 32])?;
//! assert!(!masked.is_valid());
//! # Ok::<(), jq255::Error>(())
//! ```

use crate::{ENCODED_LEN, Error, Point, PublicKey, Result, SecretKey};
use blake2::{Blake2s256, Digest};
use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
};
use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain byte for a successful exchange.
const TAG_SUCCESS: u8 = 0x53;

/// Domain byte for an exchange with an invalid peer key.
const TAG_FAILURE: u8 = 0x46;

/// The peer's public key, decoded or as received.
#[derive(Clone, Copy, Debug)]
pub enum PeerKey<'a> {
    /// A decoded public key, which must be on our curve.
    Decoded(&'a PublicKey),

    /// Received bytes, decoded internally. Any length is accepted; bytes
    /// which are not the encoding of a valid public key trigger the
    /// alternate derivation.
    Encoded(&'a [u8]),
}

impl<'a> From<&'a PublicKey> for PeerKey<'a> {
    fn from(public_key: &'a PublicKey) -> Self {
        PeerKey::Decoded(public_key)
    }
}

impl<'a> From<&'a [u8]> for PeerKey<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        PeerKey::Encoded(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for PeerKey<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        PeerKey::Encoded(bytes)
    }
}

/// Shared secret value computed via ECDH key agreement.
///
/// The secret bytes are zeroized on drop. The validity flag must be checked
/// by protocols which need to know whether the peer key was valid.
#[derive(Clone)]
pub struct SharedSecret {
    secret_bytes: [u8; ENCODED_LEN],
    valid: bool,
}

impl SharedSecret {
    fn new(secret_bytes: [u8; ENCODED_LEN], valid: bool) -> Self {
        Self {
            secret_bytes,
            valid,
        }
    }

    /// The derived secret, suitable as key material for a symmetric
    /// protocol.
    pub fn raw_secret_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.secret_bytes
    }

    /// Was the peer key valid?
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Debug for SharedSecret {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}

/// Compute a shared secret from our secret key and the peer's public key.
///
/// Fails only with [`Error::CurveMismatch`], when a decoded peer key belongs
/// to another curve. Invalid encoded keys are reported through
/// [`SharedSecret::is_valid`].
pub fn diffie_hellman<'a>(
    secret_key: &SecretKey,
    peer: impl Into<PeerKey<'a>>,
) -> Result<SharedSecret> {
    let curve = secret_key.curve();

    let (peer_bytes, peer_point) = match peer.into() {
        PeerKey::Decoded(public_key) => {
            if !core::ptr::eq(public_key.curve(), curve) {
                return Err(Error::CurveMismatch);
            }
            (
                public_key.as_bytes().as_slice(),
                Some(public_key.as_point().clone()),
            )
        }
        PeerKey::Encoded(bytes) => (
            bytes,
            PublicKey::from_bytes(curve, bytes).ok().map(Point::from),
        ),
    };

    let valid = peer_point.is_some();
    let peer_point = peer_point.unwrap_or_else(|| {
        debug!("{}: invalid peer key, using alternate derivation", curve.name());
        curve.generator()
    });
    let product = peer_point.mul_unchecked(secret_key.as_scalar());

    let own_bytes = secret_key.public_key().as_bytes().as_slice();
    let (first, second) = match cmp_be(own_bytes, peer_bytes) {
        Ordering::Greater => (peer_bytes, own_bytes),
        _ => (own_bytes, peer_bytes),
    };

    let mut hasher = Blake2s256::new();
    hasher.update(first);
    hasher.update(second);
    if valid {
        hasher.update([TAG_SUCCESS]);
        hasher.update(product.to_bytes());
    } else {
        hasher.update([TAG_FAILURE]);
        hasher.update(secret_key.to_bytes().as_slice());
    }

    Ok(SharedSecret::new(hasher.finalize().into(), valid))
}

/// Compare two byte strings as big-endian unsigned integers.
fn cmp_be(a: &[u8], b: &[u8]) -> Ordering {
    let (a, b) = (strip_leading_zeros(a), strip_leading_zeros(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

impl SecretKey {
    /// Compute a shared secret with a peer; see [`diffie_hellman`].
    pub fn diffie_hellman<'a>(&self, peer: impl Into<PeerKey<'a>>) -> Result<SharedSecret> {
        diffie_hellman(self, peer)
    }
}
