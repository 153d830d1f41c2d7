//! Schnorr signing.

use super::{Signature, challenge};
use crate::{
    HashName, PreparedMessage, PublicKey, Scalar, SecretKey, arithmetic::field::to_bytes32,
};
use blake2::{Blake2s256, Digest};
use rand_core::CryptoRng;
use signature::{KeypairRef, Result, Signer};
use zeroize::Zeroizing;

/// Length of the seed drawn by [`SecretKey::sign_with_rng`].
const RNG_SEED_SIZE: usize = 32;

impl SecretKey {
    /// Sign a prepared message.
    ///
    /// With an empty `seed` the signature is deterministic. A non-empty seed
    /// makes it randomized; the seed need not be secret.
    pub fn sign_prepared(&self, message: &PreparedMessage<'_>, seed: &[u8]) -> Signature {
        let curve = self.curve();
        let k = self.nonce(message, seed);
        let r = curve.generator().mul_unchecked(&k);
        let c = challenge(&r, self.public_key(), message);

        let s = k.add(&self.as_scalar().mul(&curve.scalar_field().decode_reduce(&c)));
        Signature::from_parts(&c, &to_bytes32(&s))
    }

    /// Sign a raw, unhashed message, deterministically.
    pub fn sign_raw(&self, data: &[u8]) -> Signature {
        self.sign_prepared(&PreparedMessage::raw(data), &[])
    }

    /// Sign a hash value computed with the hash function `hash`,
    /// deterministically.
    pub fn sign_prehashed(&self, hash: HashName, hash_value: &[u8]) -> Signature {
        self.sign_prepared(&PreparedMessage::prehashed(hash, hash_value), &[])
    }

    /// Sign a prepared message with a seed drawn from `rng`.
    pub fn sign_with_rng<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &PreparedMessage<'_>,
    ) -> Signature {
        let mut seed = Zeroizing::new([0u8; RNG_SEED_SIZE]);
        rng.fill_bytes(seed.as_mut_slice());
        self.sign_prepared(message, seed.as_slice())
    }

    /// Derive the per-signature nonce.
    fn nonce(&self, message: &PreparedMessage<'_>, seed: &[u8]) -> Scalar {
        let mut hasher = Blake2s256::new();
        hasher.update(self.to_bytes().as_slice());
        hasher.update(self.public_key().as_bytes());
        hasher.update((seed.len() as u64).to_le_bytes());
        hasher.update(seed);
        message.update_digest(&mut hasher);

        let digest: Zeroizing<[u8; 32]> = Zeroizing::new(hasher.finalize().into());
        self.curve().scalar_field().decode_reduce(digest.as_slice())
    }
}

//
// `*Signer` trait impls
//

impl Signer<Signature> for SecretKey {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature> {
        Ok(self.sign_raw(msg))
    }
}

//
// Other trait impls
//

impl AsRef<PublicKey> for SecretKey {
    fn as_ref(&self) -> &PublicKey {
        self.public_key()
    }
}

impl KeypairRef for SecretKey {
    type VerifyingKey = PublicKey;
}
