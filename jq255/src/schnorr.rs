//! Schnorr signatures over the jq255 groups.
//!
//! # About
//!
//! A signature is the pair `(c, s)` encoded over 48 bytes: the 16-byte
//! challenge `c` followed by the 32-byte scalar `s`. For a secret key `sk`
//! with public key `pk` and a [`PreparedMessage`] `M`:
//!
//! - the nonce `k` is BLAKE2s over `sk || pk || len(seed) || seed || M`,
//!   reduced into the scalar field, with `len(seed)` over 8 little-endian
//!   bytes;
//! - `c` is the first 16 bytes of BLAKE2s over `k*G || pk || M`;
//! - `s = k + c*sk`.
//!
//! Verification recomputes `R = s*G - c*pk` and checks that it yields the
//! same challenge. Verification is a predicate: malformed signatures are
//! simply not valid.
//!
//! Without a seed, signing is deterministic. A seed, which need not be
//! secret, makes signatures randomized; [`SecretKey::sign_with_rng`]
//! draws one from an RNG.
//!
//! # Usage
//!
//! ```
//! use jq255::{
//!     CurveKind, HashName, PreparedMessage, PublicKey, SecretKey,
//!     schnorr::{Signature, signature::{Signer, Verifier}},
//! };
//! use rand_core::{OsRng, TryRngCore};
//! use sha2::{Digest, Sha256};
//!
//! let curve = CurveKind::Jq255e.curve();
//!
//! //
//! // Signing
//! //
//! let secret_key = SecretKey::random(curve, &mut OsRng.unwrap_err());
//! let public_key_bytes = secret_key.public_key().to_bytes();
//!
//! let message = b"Schnorr signatures over a prime order group";
//! let signature: Signature = secret_key.sign(message);
//!
//! let hash_value = Sha256::digest(message);
//! let prehashed = secret_key.sign_prehashed(HashName::Sha256, &hash_value);
//!
//! //
//! // Verification
//! //
//! let public_key = PublicKey::from_bytes(curve, &public_key_bytes)?;
//! public_key.verify(message, &signature)?;
//! assert!(public_key.verify_prepared(
//!     &PreparedMessage::prehashed(HashName::Sha256, &hash_value),
//!     &prehashed,
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod signing;
mod verifying;

pub use signature::{self, Error};

use crate::{Point, PreparedMessage, PublicKey};
use blake2::{Blake2s256, Digest};
use core::fmt;
use signature::Result;

/// Length of the challenge part of a signature.
const CHALLENGE_SIZE: usize = 16;

/// Schnorr signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// Schnorr signature: a 16-byte challenge followed by a 32-byte scalar.
///
/// Only the length is checked when parsing; whether the scalar is in range
/// is part of verification.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Signature(SignatureBytes);

impl Signature {
    /// Size of a signature in bytes.
    pub const BYTE_SIZE: usize = 48;

    /// Serialize this signature as bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        self.0
    }

    /// Get the challenge part of this signature.
    pub fn challenge(&self) -> &[u8] {
        &self.0[..CHALLENGE_SIZE]
    }

    /// Get the encoded scalar part of this signature.
    pub fn response(&self) -> &[u8] {
        &self.0[CHALLENGE_SIZE..]
    }

    fn from_parts(challenge: &[u8; CHALLENGE_SIZE], response: &[u8; 32]) -> Self {
        let mut bytes = [0; Self::BYTE_SIZE];
        let (c, s) = bytes.split_at_mut(CHALLENGE_SIZE);
        c.copy_from_slice(challenge);
        s.copy_from_slice(response);
        Self(bytes)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<SignatureBytes> for Signature {
    fn from(bytes: SignatureBytes) -> Signature {
        Signature(bytes)
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        SignatureBytes::try_from(bytes)
            .map(Signature)
            .map_err(|_| Error::new())
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl signature::SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }
}

/// Compute the challenge for the commitment `r`.
fn challenge(r: &Point, public_key: &PublicKey, message: &PreparedMessage<'_>) -> [u8; CHALLENGE_SIZE] {
    let mut hasher = Blake2s256::new();
    hasher.update(r.to_bytes());
    hasher.update(public_key.as_bytes());
    message.update_digest(&mut hasher);

    let mut c = [0u8; CHALLENGE_SIZE];
    c.copy_from_slice(&hasher.finalize()[..CHALLENGE_SIZE]);
    c
}
