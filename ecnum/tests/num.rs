//! Property tests checking `BoundedInt` against `num-bigint`.

use ecnum::{BoundedInt, MAX_BYTES, SignedWord};
use hex_literal::hex;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

/// secp256k1 group order
const ORDER: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// secp256k1 field modulus
const FIELD_MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

fn to_bigint(a: &BoundedInt) -> BigInt {
    let bytes = a.to_be_bytes::<{ 2 * MAX_BYTES + 16 }>();
    let sign = if a.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_be(sign, &bytes)
}

fn from_bigint(a: &BigInt) -> BoundedInt {
    let (sign, bytes) = a.to_bytes_be();
    let mut ret = BoundedInt::from_be_bytes(&bytes);
    if sign == Sign::Minus {
        ret.negate();
    }
    ret
}

prop_compose! {
    /// Signed value of up to `max_bytes` bytes.
    fn signed(max_bytes: usize)(
        bytes in proptest::collection::vec(any::<u8>(), 1..=max_bytes),
        negative in any::<bool>(),
    ) -> BoundedInt {
        let mut ret = BoundedInt::from_be_bytes(&bytes);
        if negative {
            ret.negate();
        }
        ret
    }
}

prop_compose! {
    fn nonzero(max_bytes: usize)(
        a in signed(max_bytes).prop_filter("non-zero", |a| !a.is_zero()),
    ) -> BoundedInt {
        a
    }
}

prop_compose! {
    /// Non-zero residue modulo the secp256k1 order.
    fn scalar()(bytes in any::<[u8; 32]>()) -> BoundedInt {
        let mut ret = BoundedInt::from_be_bytes(&bytes);
        ret.reduce(&BoundedInt::from_be_bytes(&ORDER));
        if ret.is_zero() { BoundedInt::ONE } else { ret }
    }
}

#[test]
fn concrete_scenarios() {
    let int = |w: SignedWord| BoundedInt::from(w);

    assert_eq!(int(0x1F).add(&int(0x0A)), int(0x29));
    assert_eq!(int(3).invert_mod(&int(11)), int(4));
    assert!(BoundedInt::from_be_bytes(&[0u8; 32]).is_zero());
    assert_eq!(int(-7).div(&int(2)), int(-3));

    let mut r = int(-1);
    r.reduce(&int(5));
    assert_eq!(r, int(4));

    let (low, high) = int(0b10110).split(2);
    assert_eq!(low, int(0b10));
    assert_eq!(high, int(0b101));
}

#[test]
fn formatting() {
    let a = BoundedInt::from(-0x1fab);
    assert_eq!(format!("{a:X}"), "-1FAB");
    assert_eq!(format!("{a:x}"), "-1fab");
    assert_eq!(format!("{a:#x}"), "-0x1fab");
    assert_eq!(format!("{a:?}"), "BoundedInt(-0x1FAB)");
    assert_eq!(format!("{:X}", BoundedInt::ZERO), "0");

    let n = BoundedInt::from_be_bytes(&ORDER);
    assert_eq!(
        format!("{n:X}"),
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
    );
}

#[test]
fn field_modulus_inverse() {
    let p = BoundedInt::from_be_bytes(&FIELD_MODULUS);
    let two = BoundedInt::from(2);
    let inv = two.invert_mod(&p);
    // (p + 1) / 2
    let mut expected = p;
    expected.increment();
    assert_eq!(expected.shift_right(1), 0);
    assert_eq!(inv, expected);
}

proptest! {
    #[test]
    fn bytes_round_trip(bytes in any::<[u8; 32]>()) {
        let a = BoundedInt::from_be_bytes(&bytes);
        prop_assert_eq!(a.to_be_bytes::<32>(), bytes);
        prop_assert_eq!(to_bigint(&a), BigInt::from_bytes_be(Sign::Plus, &bytes));
    }

    #[test]
    fn hex_round_trip(a in signed(MAX_BYTES)) {
        let a = a.abs();
        let mut hex = [0u8; 2 * MAX_BYTES];
        a.write_hex(&mut hex);
        prop_assert_eq!(BoundedInt::from_hex(&hex), a);

        let digits = to_bigint(&a).to_str_radix(16).to_uppercase();
        let expected = format!("{digits:0>width$}", width = 2 * MAX_BYTES);
        prop_assert_eq!(&hex[..], expected.as_bytes());
    }

    #[test]
    fn add_matches_bigint(a in signed(MAX_BYTES), b in signed(MAX_BYTES)) {
        prop_assert_eq!(to_bigint(&a.add(&b)), to_bigint(&a) + to_bigint(&b));
        prop_assert_eq!(to_bigint(&a.sub(&b)), to_bigint(&a) - to_bigint(&b));
    }

    #[test]
    fn add_then_sub(a in signed(MAX_BYTES), b in signed(MAX_BYTES)) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn mul_matches_bigint(a in signed(MAX_BYTES), b in signed(MAX_BYTES)) {
        prop_assert_eq!(to_bigint(&a.mul(&b)), to_bigint(&a) * to_bigint(&b));
    }

    #[test]
    fn div_matches_bigint(a in signed(MAX_BYTES), b in nonzero(MAX_BYTES)) {
        let q = a.mul(&b).add(&a).div(&b);
        let expected = (to_bigint(&a) * to_bigint(&b) + to_bigint(&a)) / to_bigint(&b);
        prop_assert_eq!(to_bigint(&q), expected);
        prop_assert_eq!(to_bigint(&a.div(&b)), to_bigint(&a) / to_bigint(&b));
    }

    #[test]
    fn mul_then_div(a in signed(MAX_BYTES), b in nonzero(MAX_BYTES)) {
        prop_assert_eq!(a.mul(&b).div(&b), a);
    }

    #[test]
    fn reduce_is_canonical(a in signed(MAX_BYTES), m in nonzero(MAX_BYTES)) {
        let m = m.abs();
        let mut r = a.mul(&a);
        r.reduce(&m);
        prop_assert!(!r.is_negative());
        prop_assert_eq!(r.cmp_magnitude(&m), core::cmp::Ordering::Less);

        let mut r = a;
        r.reduce(&m);
        let (a, m_big) = (to_bigint(&a), to_bigint(&m));
        let expected = ((a % &m_big) + &m_big) % &m_big;
        prop_assert_eq!(to_bigint(&r), expected);
    }

    #[test]
    fn mul_mod_matches_bigint(a in signed(MAX_BYTES), b in signed(MAX_BYTES)) {
        let n = BoundedInt::from_be_bytes(&ORDER);
        let r = a.mul_mod(&b, &n);
        let n_big = to_bigint(&n);
        let product = to_bigint(&a) * to_bigint(&b);
        prop_assert_eq!(to_bigint(&r), ((product % &n_big) + &n_big) % &n_big);
    }

    #[test]
    fn invert_mod_order(a in scalar()) {
        let n = BoundedInt::from_be_bytes(&ORDER);
        let inv = a.invert_mod(&n);
        prop_assert!(!inv.is_negative());
        prop_assert_eq!(inv.cmp_magnitude(&n), core::cmp::Ordering::Less);
        prop_assert_eq!(a.mul_mod(&inv, &n), BoundedInt::ONE);
        prop_assert!((to_bigint(&a) * to_bigint(&inv) % to_bigint(&n)).is_one());
    }

    #[test]
    fn split_identity(a in signed(MAX_BYTES), bits in 1usize..600) {
        let (low, high) = a.split(bits);
        let recombined = to_bigint(&low) + (to_bigint(&high) << bits);
        prop_assert_eq!(recombined, to_bigint(&a));
        prop_assert!(low.bits() <= bits);
        if !low.is_zero() {
            prop_assert_eq!(low.is_negative(), a.is_negative());
        }
    }

    #[test]
    fn bits_and_bit(a in signed(MAX_BYTES)) {
        let big = to_bigint(&a);
        prop_assert_eq!(a.bits() as u64, big.bits());
        let mag = big.abs();
        for pos in [0usize, 1, 7, 63, 64, 65, 255, 511, 600] {
            prop_assert_eq!(a.bit(pos), ((&mag >> pos) % 2u32).is_one());
        }
        prop_assert_eq!(a.is_odd(), (&mag % 2u32).is_one());
    }

    #[test]
    fn get_bits_window(a in signed(MAX_BYTES), offset in 0usize..520, count in 0usize..=32) {
        let mag = to_bigint(&a).abs();
        let expected = (mag >> offset) % (BigInt::one() << count);
        prop_assert_eq!(BigInt::from(a.get_bits(offset, count)), expected);
    }

    #[test]
    fn shift_right_matches_bigint(a in signed(MAX_BYTES), bits in 0u32..32) {
        let mut r = a;
        let out = r.shift_right(bits);
        let mag = to_bigint(&a).abs();
        let mut expected = mag.clone() >> bits;
        if a.is_negative() && !expected.is_zero() {
            expected = -expected;
        }
        prop_assert_eq!(to_bigint(&r), expected);
        prop_assert_eq!(BigInt::from(out), mag % (BigInt::one() << bits));
    }

    #[test]
    fn increment_adds_one_to_magnitude(a in signed(MAX_BYTES)) {
        let mut r = a;
        r.increment();
        prop_assert_eq!(to_bigint(&r).abs(), to_bigint(&a).abs() + 1);
    }

    #[test]
    fn roundtrip_through_bigint(a in signed(MAX_BYTES)) {
        prop_assert_eq!(from_bigint(&to_bigint(&a)), a);
    }
}
