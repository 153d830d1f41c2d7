//! Group arithmetic tests.

use hex_literal::hex;
use jq255::{Curve, CurveKind, Error, Point, Scalar};
use num_bigint::BigUint;
use proptest::{prelude::any, prop_assert, prop_assert_eq, prop_compose, proptest};

prop_compose! {
    fn scalar(kind: CurveKind)(bytes in any::<[u8; 32]>()) -> Scalar {
        kind.curve().scalar_field().decode_reduce(&bytes)
    }
}

prop_compose! {
    fn point(kind: CurveKind)(k in scalar(kind)) -> Point {
        kind.curve().mul_generator(&k).unwrap()
    }
}

/// Multiples of the generator
struct MulVector {
    curve: CurveKind,

    /// Little-endian integer, reduced modulo the group order
    scalar: [u8; 32],

    /// Encoded product
    point: [u8; 32],
}

const MUL_VECTORS: &[MulVector] = &[
    // 2^254, above the order of jq255e
    MulVector {
        curve: CurveKind::Jq255e,
        scalar: hex!("0000000000000000000000000000000000000000000000000000000000000040"),
        point: hex!("43f79ac7d12c0e76af584dda30a7d88df868d155eeb3403a02aac1df96cd522a"),
    },
    MulVector {
        curve: CurveKind::Jq255s,
        scalar: hex!("0000000000000000000000000000000000000000000000000000000000000040"),
        point: hex!("2b29d02fbc736a260904d440f01ab095e2d5ad9051cc04c28568c4d72e43b634"),
    },
    // 2^254 + 2^100 + 12345, below the order of jq255s
    MulVector {
        curve: CurveKind::Jq255s,
        scalar: hex!("3930000000000000000000001000000000000000000000000000000000000040"),
        point: hex!("25b57d2d111ad1252baf26b42536aaa168abe250c1ebe43b7c0bb1037daa2f6d"),
    },
];

#[test]
fn mul_vectors() {
    for vector in MUL_VECTORS {
        let curve = vector.curve.curve();
        let k = curve.scalar_field().decode_reduce(&vector.scalar);
        assert_eq!(curve.mul_generator(&k).unwrap().to_bytes(), vector.point);
    }
}

#[test]
fn strict_scalar_decoding() {
    let above_jq255e_order = &MUL_VECTORS[0].scalar;
    assert_eq!(
        Curve::jq255e().decode_scalar(above_jq255e_order),
        Err(Error::Decode)
    );
    assert!(Curve::jq255s().decode_scalar(above_jq255e_order).is_ok());

    let vector = &MUL_VECTORS[2];
    let k = vector.curve.curve().decode_scalar(&vector.scalar).unwrap();
    assert_eq!(k.value(), &BigUint::from_bytes_le(&vector.scalar));
}

#[test]
fn order_minus_one_is_negation() {
    let minus_g = [
        (
            Curve::jq255e(),
            hex!("0100000000000000000000000000000000000000000000000000000000000000"),
        ),
        (
            Curve::jq255s(),
            hex!("88f0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        ),
    ];

    for (curve, expected) in minus_g {
        let k = curve.scalar_field().minus_one();
        let p = curve.mul_generator(&k).unwrap();
        assert_eq!(p.to_bytes(), expected);
        assert_eq!(p, curve.generator().neg());
    }
}

#[test]
fn identity_laws() {
    for curve in [Curve::jq255e(), Curve::jq255s()] {
        let g = curve.generator();
        let n = curve.neutral();
        assert!(curve.mul_generator(&curve.scalar_field().zero()).unwrap().is_neutral());
        assert_eq!(curve.mul_generator(&curve.scalar_field().one()).unwrap(), g);
        assert_eq!(n.add(&g).unwrap(), g);
        assert!(g.add(&g.neg()).unwrap().is_neutral());
        assert_eq!(g.neg().neg(), g);
        assert_eq!(Point::decode(curve, &n.to_bytes()).unwrap(), n);
    }
}

#[test]
fn scalar_from_other_curve() {
    let g = Curve::jq255e().generator();
    let k = Curve::jq255s().scalar(BigUint::from(3u8));
    assert_eq!(g.mul(&k), Err(Error::CurveMismatch));
}

proptest! {
    #[test]
    fn add_homomorphism(k1 in scalar(CurveKind::Jq255e), k2 in scalar(CurveKind::Jq255e)) {
        let curve = Curve::jq255e();
        let g = curve.generator();
        let lhs = g.mul(&k1.add(&k2)).unwrap();
        let rhs = g.mul(&k1).unwrap().add(&g.mul(&k2).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn mul_homomorphism(k1 in scalar(CurveKind::Jq255s), k2 in scalar(CurveKind::Jq255s)) {
        let curve = Curve::jq255s();
        let g = curve.generator();
        let lhs = g.mul(&k1.mul(&k2)).unwrap();
        let rhs = g.mul(&k2).unwrap().mul(&k1).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn xdouble_matches_doubling(p in point(CurveKind::Jq255e), n in 1u32..=8) {
        let mut acc = p.clone();
        for _ in 0..n {
            acc = acc.double();
        }
        prop_assert_eq!(p.xdouble(n), acc);
    }

    #[test]
    fn xdouble_matches_addition(p in point(CurveKind::Jq255s), n in 1u32..=8) {
        let mut acc = p.clone();
        for _ in 0..n {
            acc = acc.add(&acc).unwrap();
        }
        prop_assert_eq!(p.xdouble(n), acc);
    }

    #[test]
    fn encoding_round_trip_jq255e(p in point(CurveKind::Jq255e)) {
        let bytes = p.to_bytes();
        let q = Point::decode(Curve::jq255e(), &bytes).unwrap();
        prop_assert_eq!(&q, &p);
        prop_assert_eq!(q.to_bytes(), bytes);
        prop_assert_eq!(p.neg().to_bytes() == bytes, p.is_neutral());
    }

    #[test]
    fn encoding_round_trip_jq255s(p in point(CurveKind::Jq255s)) {
        let bytes = p.to_bytes();
        let q = Point::decode(Curve::jq255s(), &bytes).unwrap();
        prop_assert_eq!(&q, &p);
        prop_assert_eq!(q.to_bytes(), bytes);
    }

    #[test]
    fn sub_is_add_neg(p in point(CurveKind::Jq255s), q in point(CurveKind::Jq255s)) {
        prop_assert_eq!(p.sub(&q).unwrap(), p.add(&q.neg()).unwrap());
        prop_assert!(p.sub(&p).unwrap().is_neutral());
    }

    #[test]
    fn decoded_points_are_canonical(bytes in any::<[u8; 32]>()) {
        for curve in [Curve::jq255e(), Curve::jq255s()] {
            if let Ok(p) = Point::decode(curve, &bytes) {
                prop_assert_eq!(p.to_bytes(), bytes);
            }
        }
    }
}
