//! Bounded-precision sign-magnitude integers.

mod arith;
mod bits;
mod encoding;
mod modular;

use crate::limb::{self, WORD_BITS, Word};
use core::cmp::Ordering;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Largest number of bytes accepted by [`BoundedInt::from_be_bytes`].
pub const MAX_BYTES: usize = 64;

/// Number of limbs needed to hold [`MAX_BYTES`] bytes, the largest valid modulus.
pub const MAX_LIMBS: usize = MAX_BYTES * 8 / WORD_BITS;

/// Working capacity in limbs: the full product of two `MAX_LIMBS` values plus a carry limb.
pub const WORK_LIMBS: usize = 2 * MAX_LIMBS + 1;

/// Signed integer with a fixed maximum capacity of [`WORK_LIMBS`] words.
///
/// The value is stored as a magnitude (little-endian limbs) and a sign flag.
/// It is kept in canonical form: no leading zero limbs, and zero is never negative.
///
/// # ⚠️ Warning
///
/// Every operation on this type is variable-time. It is meant for parsing,
/// encoding, and auxiliary computations on public values, not for secret
/// scalars in a side-channel sensitive setting.
#[derive(Clone, Copy)]
pub struct BoundedInt {
    limbs: [Word; WORK_LIMBS],
    len: usize,
    negative: bool,
}

impl BoundedInt {
    /// Zero.
    pub const ZERO: Self = Self {
        limbs: [0; WORK_LIMBS],
        len: 1,
        negative: false,
    };

    /// One.
    pub const ONE: Self = Self::from_word(1);

    /// Returns zero.
    pub const fn new() -> Self {
        Self::ZERO
    }

    const fn from_word(w: Word) -> Self {
        let mut limbs = [0; WORK_LIMBS];
        limbs[0] = w;
        Self {
            limbs,
            len: 1,
            negative: false,
        }
    }

    /// Creates a value from a signed machine word.
    pub const fn from_signed_word(w: crate::SignedWord) -> Self {
        let mut ret = Self::from_word(w.unsigned_abs());
        ret.negative = w < 0;
        ret
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        let mut ret = *self;
        ret.negative = false;
        ret
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.limbs[0] == 0
    }

    /// Is the magnitude odd?
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Is this value strictly negative?
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Compares magnitudes by limb count, then limb by limb from the most significant.
    ///
    /// The sign is ignored: `-5` and `5` compare equal, and `-7` is greater than `3`.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| limb::cmp(self.as_limbs(), other.as_limbs()))
    }

    /// Significant limbs of the magnitude, least significant first.
    pub(crate) fn as_limbs(&self) -> &[Word] {
        &self.limbs[..self.len]
    }

    /// Builds a value from little-endian limbs, trimming leading zeros.
    fn from_limbs(limbs: &[Word], negative: bool) -> Self {
        verify_check!(limbs.len() <= WORK_LIMBS, "value exceeds working capacity");
        let mut ret = Self::ZERO;
        ret.limbs[..limbs.len()].copy_from_slice(limbs);
        ret.len = limbs.len().max(1);
        ret.negative = negative;
        ret.normalize();
        ret
    }

    /// Drops leading zero limbs and clears the sign of zero.
    fn normalize(&mut self) {
        self.len = limb::normalized_len(&self.limbs[..self.len]);
        if self.is_zero() {
            self.negative = false;
        }
    }

    fn is_canonical(&self) -> bool {
        (1..=WORK_LIMBS).contains(&self.len)
            && (self.len == 1 || self.limbs[self.len - 1] != 0)
            && !(self.negative && self.is_zero())
    }
}

impl Default for BoundedInt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<crate::SignedWord> for BoundedInt {
    fn from(w: crate::SignedWord) -> Self {
        Self::from_signed_word(w)
    }
}

impl PartialEq for BoundedInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.as_limbs() == other.as_limbs()
    }
}

impl Eq for BoundedInt {}

impl ConstantTimeEq for BoundedInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        let sign = Choice::from(self.is_negative() as u8);
        let other_sign = Choice::from(other.is_negative() as u8);
        let mut ret = (self.len as u64).ct_eq(&(other.len as u64)) & sign.ct_eq(&other_sign);
        for i in 0..WORK_LIMBS {
            let a = if i < self.len { self.limbs[i] } else { 0 };
            let b = if i < other.len { other.limbs[i] } else { 0 };
            ret &= a.ct_eq(&b);
        }
        ret
    }
}

impl ConditionallySelectable for BoundedInt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0; WORK_LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = Word::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self {
            limbs,
            len: u64::conditional_select(&(a.len as u64), &(b.len as u64), choice) as usize,
            negative: bool::from(Choice::conditional_select(
                &Choice::from(a.negative as u8),
                &Choice::from(b.negative as u8),
                choice,
            )),
        }
    }
}

impl Zeroize for BoundedInt {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
        self.len = 1;
        self.negative = false;
    }
}
