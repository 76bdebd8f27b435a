//! Canonical modular reduction and inversion.

use super::{BoundedInt, MAX_LIMBS, WORK_LIMBS};
use crate::limb;
use zeroize::Zeroize;

impl BoundedInt {
    /// Reduces `self` modulo `m` in place, leaving the canonical residue in `[0, m)`.
    ///
    /// Negative values are mapped to `m - (|self| mod m)`, so `-1 mod 5 == 4`.
    /// `m` must be positive and at most [`MAX_LIMBS`] limbs long.
    pub fn reduce(&mut self, m: &Self) {
        verify_check!(!m.is_zero(), "modulus is zero");
        verify_check!(!m.is_negative(), "modulus is negative");
        verify_check!(m.len <= MAX_LIMBS, "modulus exceeds capacity");

        if self.len >= m.len {
            let mut quo = [0; WORK_LIMBS];
            let mut rem = [0; WORK_LIMBS];
            limb::div_rem(&mut quo, &mut rem[..m.len], self.as_limbs(), m.as_limbs());
            let negative = self.negative;
            self.zeroize();
            *self = Self::from_limbs(&rem[..m.len], negative);
            quo.zeroize();
            rem.zeroize();
        }

        if self.is_negative() {
            *self = Self::sub_abs(m, self);
        }
    }

    /// Returns the inverse of `self` modulo `m`, via the extended Euclidean algorithm.
    ///
    /// The inverse is computed for the magnitudes `|self|` and `|m|` and lies in
    /// `[0, |m|)`; its sign is the XOR of the signs of `self` and `m`.
    ///
    /// `self` and `m` must be coprime. A GCD other than one is a caller bug,
    /// not a recoverable error.
    pub fn invert_mod(&self, m: &Self) -> Self {
        verify_check!(!m.is_zero(), "modulus is zero");
        verify_check!(m.len <= MAX_LIMBS, "modulus exceeds capacity");

        let modulus = m.abs();
        let mut r0 = self.abs();
        r0.reduce(&modulus);
        let mut r1 = modulus;
        let mut s0 = Self::ONE;
        let mut s1 = Self::ZERO;
        let mut q;
        let mut t;

        // Invariant: r_i ≡ s_i * |self| (mod |m|)
        while !r1.is_zero() {
            q = r0.div(&r1);

            t = r0.sub(&q.mul(&r1));
            r0 = r1;
            r1 = t;

            t = s0.sub(&q.mul(&s1));
            s0 = s1;
            s1 = t;

            q.zeroize();
            t.zeroize();
        }
        verify_check!(r0 == Self::ONE, "value is not invertible modulo m");

        if s0.is_negative() {
            s0 = modulus.add(&s0);
        }
        s0.negative = self.negative ^ m.negative;
        s0.normalize();

        r0.zeroize();
        s1.zeroize();
        s0
    }
}
