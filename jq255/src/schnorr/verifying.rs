//! Schnorr verification.

use super::{CHALLENGE_SIZE, Error, Signature, challenge};
use crate::{HashName, PreparedMessage, PublicKey};
use signature::{Result, Verifier};
use subtle::ConstantTimeEq;

impl PublicKey {
    /// Verify a signature over a prepared message.
    ///
    /// Returns `false` if the signature does not have the right length, if
    /// its scalar part is not lower than the group order, or if it does not
    /// match.
    pub fn verify_prepared(&self, message: &PreparedMessage<'_>, signature: impl AsRef<[u8]>) -> bool {
        let signature = signature.as_ref();
        if signature.len() != Signature::BYTE_SIZE {
            return false;
        }

        let (c, s) = signature.split_at(CHALLENGE_SIZE);
        let curve = self.curve();
        let Ok(s) = curve.decode_scalar(s) else {
            return false;
        };

        // R = s*G - c*pk
        let c_scalar = curve.scalar_field().decode_reduce(c);
        let r = curve
            .generator()
            .mul_unchecked(&s)
            .add_unchecked(&self.as_point().mul_unchecked(&c_scalar).neg());

        challenge(&r, self, message).as_slice().ct_eq(c).into()
    }

    /// Verify a signature over a raw, unhashed message.
    pub fn verify_raw(&self, data: &[u8], signature: impl AsRef<[u8]>) -> bool {
        self.verify_prepared(&PreparedMessage::raw(data), signature)
    }

    /// Verify a signature over a hash value computed with the hash function
    /// `hash`.
    pub fn verify_prehashed(
        &self,
        hash: HashName,
        hash_value: &[u8],
        signature: impl AsRef<[u8]>,
    ) -> bool {
        self.verify_prepared(&PreparedMessage::prehashed(hash, hash_value), signature)
    }
}

//
// `*Verifier` trait impls
//

impl Verifier<Signature> for PublicKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        if self.verify_raw(msg, signature) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}
