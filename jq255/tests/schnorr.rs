//! Schnorr signature tests.

#![cfg(feature = "schnorr")]

use jq255::{
    CurveKind, HashName, PreparedMessage, SecretKey,
    schnorr::{
        Signature,
        signature::{Keypair, Signer, Verifier},
    },
};
use num_bigint::BigUint;
use proptest::{
    collection::vec, prelude::any, prop_assert, prop_compose, proptest,
};
use rand_core::{OsRng, TryRngCore};

prop_compose! {
    fn secret_key(kind: CurveKind)(bytes in any::<[u8; 32]>()) -> SecretKey {
        let curve = kind.curve();
        let k = curve.scalar_field().decode_reduce(&bytes);
        if k.is_zero() {
            SecretKey::from_scalar(curve, curve.scalar_field().one()).unwrap()
        } else {
            SecretKey::from_scalar(curve, k).unwrap()
        }
    }
}

#[test]
fn unit_key_example() {
    let curve = CurveKind::Jq255e.curve();
    let sk = SecretKey::from_scalar(curve, curve.scalar(BigUint::from(1u8))).unwrap();
    let pk = sk.public_key();
    assert_eq!(pk.as_point(), &curve.generator());

    let sig = sk.sign_raw(b"test");
    assert_eq!(sig, sk.sign_raw(b"test"));
    assert!(pk.verify_raw(b"test", sig));
    assert!(!pk.verify_raw(b"tamper", sig));
}

#[test]
fn randomized_signatures() {
    let curve = CurveKind::Jq255s.curve();
    let sk = SecretKey::random(curve, &mut OsRng.unwrap_err());
    let msg = PreparedMessage::prehashed(HashName::Sha3_256, &[0x5a; 32]);

    let a = sk.sign_with_rng(&mut OsRng.unwrap_err(), &msg);
    let b = sk.sign_with_rng(&mut OsRng.unwrap_err(), &msg);
    assert_ne!(a, b);
    assert!(sk.public_key().verify_prepared(&msg, a));
    assert!(sk.public_key().verify_prepared(&msg, b));
}

#[test]
fn custom_hash_name() {
    let curve = CurveKind::Jq255e.curve();
    let sk = SecretKey::random(curve, &mut OsRng.unwrap_err());
    let msg = PreparedMessage::with_hash_name(b"sha512", &[1u8; 64]);

    let sig = sk.sign_prepared(&msg, &[]);
    assert!(sk.public_key().verify_prehashed(HashName::Sha512, &[1u8; 64], sig));
    assert!(!sk.public_key().verify_prehashed(HashName::Sha384, &[1u8; 64], sig));
}

#[test]
fn trait_impls() {
    let curve = CurveKind::Jq255s.curve();
    let sk = SecretKey::random(curve, &mut OsRng.unwrap_err());
    let signature: Signature = sk.sign(b"message");
    let bytes = signature.to_bytes();

    let decoded = Signature::try_from(bytes.as_slice()).unwrap();
    assert!(sk.verifying_key().verify(b"message", &decoded).is_ok());
    assert!(sk.verifying_key().verify(b"massage", &decoded).is_err());
    assert!(Signature::try_from(&bytes[..47]).is_err());
}

proptest! {
    #[test]
    fn sign_verify_jq255e(
        sk in secret_key(CurveKind::Jq255e),
        msg in vec(any::<u8>(), 0..100),
    ) {
        let sig = sk.sign_raw(&msg);
        prop_assert!(sk.public_key().verify_raw(&msg, sig));
    }

    #[test]
    fn sign_verify_jq255s(
        sk in secret_key(CurveKind::Jq255s),
        msg in vec(any::<u8>(), 0..100),
        seed in vec(any::<u8>(), 0..40),
    ) {
        let prepared = PreparedMessage::raw(&msg);
        let sig = sk.sign_prepared(&prepared, &seed);
        prop_assert!(sk.public_key().verify_prepared(&prepared, sig));
    }

    #[test]
    fn flipped_bit_is_rejected_jq255e(
        sk in secret_key(CurveKind::Jq255e),
        msg in vec(any::<u8>(), 0..40),
        bit in 0usize..384,
    ) {
        prop_assert!(!verifies_with_flipped_bit(&sk, &msg, bit));
    }

    #[test]
    fn flipped_bit_is_rejected_jq255s(
        sk in secret_key(CurveKind::Jq255s),
        msg in vec(any::<u8>(), 0..40),
        bit in 0usize..384,
    ) {
        prop_assert!(!verifies_with_flipped_bit(&sk, &msg, bit));
    }
}

fn verifies_with_flipped_bit(sk: &SecretKey, msg: &[u8], bit: usize) -> bool {
    let mut sig = sk.sign_raw(msg).to_bytes();
    sig[bit / 8] ^= 1 << (bit % 8);
    sk.public_key().verify_raw(msg, sig)
}
