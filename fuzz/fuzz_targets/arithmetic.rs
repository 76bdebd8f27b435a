#![no_main]
// Checks `BoundedInt` arithmetic against `num-bigint` on arbitrary operands.
use ecnum::{BoundedInt, MAX_BYTES};
use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};

fn to_bigint(a: &BoundedInt) -> BigInt {
    let bytes = a.to_be_bytes::<{ 2 * MAX_BYTES + 16 }>();
    let sign = if a.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_bytes_be(sign, &bytes)
}

/// Reads a signed operand of 1..=MAX_BYTES bytes: one header byte (sign and length), then the magnitude.
fn operand(data: &[u8]) -> Option<(BoundedInt, &[u8])> {
    let (&header, rest) = data.split_first()?;
    let len = usize::from(header & 0x3f) + 1;
    if rest.len() < len {
        return None;
    }
    let mut ret = BoundedInt::from_be_bytes(&rest[..len]);
    if header & 0x80 != 0 {
        ret.negate();
    }
    Some((ret, &rest[len..]))
}

fn canonical_mod(a: BigInt, m: &BigInt) -> BigInt {
    ((a % m) + m) % m
}

fuzz_target!(|data: &[u8]| {
    let Some((a, rest)) = operand(data) else {
        return;
    };
    let Some((b, _)) = operand(rest) else {
        return;
    };
    let (a_big, b_big) = (to_bigint(&a), to_bigint(&b));

    assert_eq!(to_bigint(&a.add(&b)), &a_big + &b_big);
    assert_eq!(to_bigint(&a.sub(&b)), &a_big - &b_big);
    assert_eq!(to_bigint(&a.mul(&b)), &a_big * &b_big);
    assert_eq!(a.add(&b).sub(&b), a);

    if !b.is_zero() {
        assert_eq!(to_bigint(&a.div(&b)), &a_big / &b_big);
        assert_eq!(a.mul(&b).div(&b), a);

        let m = b.abs();
        let m_big = to_bigint(&m);
        let mut r = a.mul(&b);
        r.reduce(&m);
        assert_eq!(to_bigint(&r), canonical_mod(&a_big * &b_big, &m_big));

        let mut r = a;
        r.reduce(&m);
        assert_eq!(to_bigint(&r), canonical_mod(a_big.clone(), &m_big));
    }

    for bits in [1, 7, 64, 100, 255, 513] {
        let (low, high) = a.split(bits);
        assert_eq!(to_bigint(&low) + (to_bigint(&high) << bits), a_big);
    }

    let mut hex = [0u8; 2 * MAX_BYTES];
    a.abs().write_hex(&mut hex);
    assert_eq!(BoundedInt::from_hex(&hex), a.abs());
});
