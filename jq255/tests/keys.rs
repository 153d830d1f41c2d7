//! Key generation and key encoding.

use hex_literal::hex;
use jq255::{CurveKind, Error, PublicKey, SecretKey};
use rand_core::{OsRng, TryRngCore};
use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update},
};

/// Key generation test vector
struct KeygenVector {
    curve: CurveKind,

    /// Seed absorbed by SHAKE256
    seed: &'static [u8],

    /// Expected secret key
    secret_key: [u8; 32],

    /// Expected public key
    public_key: [u8; 32],
}

const KEYGEN_VECTORS: &[KeygenVector] = &[
    KeygenVector {
        curve: CurveKind::Jq255e,
        seed: b"jq255e keygen",
        secret_key: hex!("f2a47c0d135cae71339dce0fa2b8e35a53c5b8cbd710128c27c92e1378cea524"),
        public_key: hex!("141b124aefb11a59e05440c6e706aa2c95e2d5e6c6afa6291551aa72963d395b"),
    },
    KeygenVector {
        curve: CurveKind::Jq255e,
        seed: b"jq255e peer",
        secret_key: hex!("dd42a29fdcecb4cf5f7818a417bb86997a41c3294a8dfccf2d48a5369a0d662a"),
        public_key: hex!("7af61c9ca2099308e4309efeee95cd733a4314b689117b7ccc875af17e519651"),
    },
    KeygenVector {
        curve: CurveKind::Jq255s,
        seed: b"jq255s keygen",
        secret_key: hex!("298e7c4614b4cb65753279dc46493d82cd45aa9435ef0a48dd1441402beae332"),
        public_key: hex!("02c51897b7e7ef81033b0a768bc3034b3f6e054724409ef4339b0e5210ec716b"),
    },
    KeygenVector {
        curve: CurveKind::Jq255s,
        seed: b"jq255s peer",
        secret_key: hex!("b62d036e6d6d9b119764153c8443f490f0cf24279ddca2ab14ed65403061c310"),
        public_key: hex!("336e0fd83213cb3c63307a511d52587966e5d26e1612711395a92d422052a44d"),
    },
];

fn shake(seed: &[u8]) -> impl sha3::digest::XofReader {
    let mut hasher = Shake256::default();
    hasher.update(seed);
    hasher.finalize_xof()
}

#[test]
fn keygen_from_xof() {
    for vector in KEYGEN_VECTORS {
        let curve = vector.curve.curve();
        let sk = SecretKey::from_xof(curve, &mut shake(vector.seed));
        assert_eq!(*sk.to_bytes(), vector.secret_key);
        assert_eq!(sk.public_key().to_bytes(), vector.public_key);

        let pk = PublicKey::from_bytes(curve, &vector.public_key).unwrap();
        assert_eq!(&pk, sk.public_key());
    }
}

#[test]
fn keygen_from_os_rng() {
    for kind in [CurveKind::Jq255e, CurveKind::Jq255s] {
        let curve = kind.curve();
        let sk1 = SecretKey::random(curve, &mut OsRng.unwrap_err());
        let sk2 = SecretKey::try_from_rng(curve, &mut OsRng).unwrap();
        assert_ne!(sk1, sk2);
        assert_eq!(sk1.kind(), kind);

        let decoded = SecretKey::from_bytes(curve, sk1.to_bytes().as_slice()).unwrap();
        assert_eq!(decoded, sk1);
        assert_eq!(decoded.public_key(), sk1.public_key());
    }
}

#[test]
fn public_key_decoding() {
    for kind in [CurveKind::Jq255e, CurveKind::Jq255s] {
        let curve = kind.curve();
        assert_eq!(
            PublicKey::from_bytes(curve, &[0u8; 32]),
            Err(Error::InvalidKey)
        );
        assert_eq!(PublicKey::from_bytes(curve, &[0u8; 31]), Err(Error::Decode));
        assert_eq!(PublicKey::from_bytes(curve, &[0xff; 32]), Err(Error::Decode));
    }
}

#[test]
fn keys_are_curve_specific() {
    let bytes = KEYGEN_VECTORS[0].secret_key;
    let e = SecretKey::from_bytes(CurveKind::Jq255e.curve(), &bytes).unwrap();
    let s = SecretKey::from_bytes(CurveKind::Jq255s.curve(), &bytes).unwrap();
    assert_ne!(e, s);
    assert_ne!(e.public_key().to_bytes(), s.public_key().to_bytes());
}
