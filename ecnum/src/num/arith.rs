//! Signed addition, subtraction, multiplication and truncating division.

use super::{BoundedInt, WORK_LIMBS};
use crate::limb;
use core::cmp::Ordering;
use zeroize::Zeroize;

impl BoundedInt {
    /// Returns `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        self.add_signed(rhs, rhs.negative)
    }

    /// Returns `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add_signed(rhs, !rhs.negative)
    }

    /// Returns `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        verify_check!(
            self.len + rhs.len <= WORK_LIMBS,
            "product exceeds working capacity"
        );
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }

        let mut ret = Self::ZERO;
        let len = self.len + rhs.len;
        limb::mul(&mut ret.limbs[..len], self.as_limbs(), rhs.as_limbs());
        ret.len = len;
        ret.negative = self.negative ^ rhs.negative;
        ret.normalize();
        ret
    }

    /// Returns `self / rhs`, rounded toward zero.
    ///
    /// `-7 / 2 == -3`.
    pub fn div(&self, rhs: &Self) -> Self {
        verify_check!(!rhs.is_zero(), "division by zero");
        if rhs.len > self.len {
            return Self::ZERO;
        }

        let mut ret = Self::ZERO;
        let mut rem = [0; WORK_LIMBS];
        let len = self.len - rhs.len + 1;
        limb::div_rem(
            &mut ret.limbs[..len],
            &mut rem,
            self.as_limbs(),
            rhs.as_limbs(),
        );
        rem.zeroize();

        ret.len = len;
        ret.negative = self.negative ^ rhs.negative;
        ret.normalize();
        ret
    }

    /// Returns `(self * rhs) mod m` as the canonical residue in `[0, m)`.
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
        let mut ret = self.mul(rhs);
        ret.reduce(m);
        ret
    }

    /// Adds `rhs` to `self`, treating `rhs` as having sign `rhs_negative`.
    fn add_signed(&self, rhs: &Self, rhs_negative: bool) -> Self {
        debug_assert!(self.is_canonical() && rhs.is_canonical());
        if self.negative == rhs_negative {
            let mut ret = if self.len >= rhs.len {
                Self::add_abs(self, rhs)
            } else {
                Self::add_abs(rhs, self)
            };
            ret.negative = self.negative;
            ret.normalize();
            return ret;
        }

        let mut ret = match self.cmp_magnitude(rhs) {
            Ordering::Greater => {
                let mut ret = Self::sub_abs(self, rhs);
                ret.negative = self.negative;
                ret
            }
            _ => {
                let mut ret = Self::sub_abs(rhs, self);
                ret.negative = rhs_negative;
                ret
            }
        };
        ret.normalize();
        ret
    }

    /// `|a| + |b|`. Requires `a.len >= b.len`.
    pub(super) fn add_abs(a: &Self, b: &Self) -> Self {
        let mut ret = Self::ZERO;
        let carry = limb::add(&mut ret.limbs, a.as_limbs(), b.as_limbs());
        ret.len = a.len;
        if carry != 0 {
            verify_check!(ret.len < WORK_LIMBS, "sum exceeds working capacity");
            ret.limbs[ret.len] = carry;
            ret.len += 1;
        }
        ret
    }

    /// `|a| - |b|`. Requires `|a| >= |b|`.
    pub(super) fn sub_abs(a: &Self, b: &Self) -> Self {
        verify_check!(
            a.cmp_magnitude(b) != Ordering::Less,
            "magnitude subtraction would underflow"
        );
        let mut ret = Self::ZERO;
        let borrow = limb::sub(&mut ret.limbs, a.as_limbs(), b.as_limbs());
        debug_assert_eq!(borrow, 0);
        ret.len = a.len;
        ret.normalize();
        ret
    }
}
