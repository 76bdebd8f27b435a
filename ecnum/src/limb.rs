//! Limb-level (multi-precision) arithmetic on little-endian word slices.
//!
//! These are the `mpn`-style building blocks `BoundedInt` is written in terms
//! of. None of them allocate, and none of them are constant-time.

use cfg_if::cfg_if;
use core::cmp::Ordering;
use zeroize::Zeroize;

use crate::num::WORK_LIMBS;

cfg_if! {
    if #[cfg(all(target_pointer_width = "64", not(feature = "force-32-bit")))] {
        /// Unsigned machine word used as a limb.
        pub type Word = u64;
        /// Signed counterpart of [`Word`].
        pub type SignedWord = i64;
        pub(crate) type WideWord = u128;
    } else {
        /// Unsigned machine word used as a limb.
        pub type Word = u32;
        /// Signed counterpart of [`Word`].
        pub type SignedWord = i32;
        pub(crate) type WideWord = u64;
    }
}

/// Size of a [`Word`] in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Size of a [`Word`] in bytes.
pub(crate) const WORD_BYTES: usize = WORD_BITS / 8;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + (b as WideWord) + (carry as WideWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow (`0` or `1`).
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let ret = (a as WideWord).wrapping_sub((b as WideWord) + (borrow as WideWord));
    (ret as Word, ((ret >> WORD_BITS) as Word) & 1)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + ((b as WideWord) * (c as WideWord)) + (carry as WideWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Number of limbs left once leading zero limbs are dropped, never less than one.
pub(crate) fn normalized_len(a: &[Word]) -> usize {
    let mut len = a.len();
    while len > 1 && a[len - 1] == 0 {
        len -= 1;
    }
    len
}

/// Compares two limb slices of the same length, most significant limb first.
pub(crate) fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}

/// `r[..a.len()] = a + b`, returning the carry out of the top limb.
///
/// Requires `a.len() >= b.len()`.
pub(crate) fn add(r: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    debug_assert!(a.len() >= b.len());
    let mut carry = 0;
    for i in 0..a.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        (r[i], carry) = adc(a[i], rhs, carry);
    }
    carry
}

/// `a += 1`, returning the carry out of the top limb.
pub(crate) fn add_one(a: &mut [Word]) -> Word {
    for limb in a.iter_mut() {
        let (sum, carry) = adc(*limb, 1, 0);
        *limb = sum;
        if carry == 0 {
            return 0;
        }
    }
    1
}

/// `r[..a.len()] = a - b`, returning the borrow out of the top limb.
///
/// Requires `a.len() >= b.len()`.
pub(crate) fn sub(r: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;
    for i in 0..a.len() {
        let rhs = if i < b.len() { b[i] } else { 0 };
        (r[i], borrow) = sbb(a[i], rhs, borrow);
    }
    borrow
}

/// Schoolbook product: `r[..a.len() + b.len()] = a * b`.
pub(crate) fn mul(r: &mut [Word], a: &[Word], b: &[Word]) {
    r[..a.len() + b.len()].fill(0);
    for (i, &ai) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            (r[i + j], carry) = mac(r[i + j], ai, bj, carry);
        }
        r[i + b.len()] = carry;
    }
}

/// `r[..a.len()] = a << shift`, returning the bits shifted out of the top limb.
///
/// Requires `shift < WORD_BITS`.
pub(crate) fn shl(r: &mut [Word], a: &[Word], shift: u32) -> Word {
    debug_assert!((shift as usize) < WORD_BITS);
    if shift == 0 {
        r[..a.len()].copy_from_slice(a);
        return 0;
    }
    let mut carry = 0;
    for (dst, &limb) in r.iter_mut().zip(a) {
        *dst = (limb << shift) | carry;
        carry = limb >> (Word::BITS - shift);
    }
    carry
}

/// `a >>= shift` in place, returning the bits shifted out of the bottom limb
/// in the low `shift` bits of the result.
///
/// Requires `shift < WORD_BITS`.
pub(crate) fn shr_assign(a: &mut [Word], shift: u32) -> Word {
    debug_assert!((shift as usize) < WORD_BITS);
    if shift == 0 || a.is_empty() {
        return 0;
    }
    let out = a[0] & ((1 << shift) - 1);
    for i in 0..a.len() {
        let hi = if i + 1 < a.len() {
            a[i + 1] << (Word::BITS - shift)
        } else {
            0
        };
        a[i] = (a[i] >> shift) | hi;
    }
    out
}

/// Truncating long division of magnitudes (Knuth, TAOCP vol. 2, 4.3.1, Algorithm D).
///
/// Writes the quotient to `q[..a.len() - b.len() + 1]` and the remainder to
/// `rem[..b.len()]`. Requires `a.len() >= b.len() >= 1` and a non-zero top limb in `b`.
pub(crate) fn div_rem(q: &mut [Word], rem: &mut [Word], a: &[Word], b: &[Word]) {
    let n = b.len();
    debug_assert!(n >= 1 && a.len() >= n);
    debug_assert!(b[n - 1] != 0);
    let m = a.len() - n;

    if n == 1 {
        let d = b[0] as WideWord;
        let mut r: WideWord = 0;
        for i in (0..a.len()).rev() {
            let cur = (r << WORD_BITS) | (a[i] as WideWord);
            q[i] = (cur / d) as Word;
            r = cur % d;
        }
        rem[0] = r as Word;
        return;
    }

    // D1: normalize so the divisor's top bit is set.
    let shift = b[n - 1].leading_zeros();
    let mut v = [0 as Word; WORK_LIMBS];
    let mut u = [0 as Word; WORK_LIMBS + 1];
    shl(&mut v[..n], b, shift);
    let top = shl(&mut u[..m + n], a, shift);
    u[m + n] = top;

    let base = (Word::MAX as WideWord) + 1;
    let v_top = v[n - 1] as WideWord;
    let v_next = v[n - 2] as WideWord;

    for j in (0..=m).rev() {
        // D3: estimate the quotient digit from the top two limbs.
        let num = ((u[j + n] as WideWord) << WORD_BITS) | (u[j + n - 1] as WideWord);
        let mut qhat = num / v_top;
        let mut rhat = num % v_top;
        while qhat >= base || qhat * v_next > ((rhat << WORD_BITS) | (u[j + n - 2] as WideWord))
        {
            qhat -= 1;
            rhat += v_top;
            if rhat >= base {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut carry: Word = 0;
        let mut borrow: Word = 0;
        for i in 0..n {
            let p = qhat * (v[i] as WideWord) + (carry as WideWord);
            carry = (p >> WORD_BITS) as Word;
            (u[i + j], borrow) = sbb(u[i + j], p as Word, borrow);
        }
        (u[j + n], borrow) = sbb(u[j + n], carry, borrow);

        // D6: the estimate was one too large, add the divisor back.
        if borrow != 0 {
            qhat -= 1;
            let mut carry = 0;
            for i in 0..n {
                (u[i + j], carry) = adc(u[i + j], v[i], carry);
            }
            u[j + n] = u[j + n].wrapping_add(carry);
        }

        q[j] = qhat as Word;
    }

    // D8: unnormalize the remainder.
    shr_assign(&mut u[..n], shift);
    rem[..n].copy_from_slice(&u[..n]);

    u.zeroize();
    v.zeroize();
}
