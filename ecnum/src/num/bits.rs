//! Bit access, shifting and splitting.

use super::{BoundedInt, WORK_LIMBS};
use crate::limb::{self, WORD_BITS, Word};

impl BoundedInt {
    /// Number of significant bits of the magnitude; `0` for zero.
    pub fn bits(&self) -> usize {
        let top = self.limbs[self.len - 1];
        (self.len - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
    }

    /// Returns bit `pos` of the magnitude, or `false` past the top limb.
    pub fn bit(&self, pos: usize) -> bool {
        pos < self.len * WORD_BITS && (self.limbs[pos / WORD_BITS] >> (pos % WORD_BITS)) & 1 == 1
    }

    /// Extracts `count` bits starting at bit `offset`, packed least significant first.
    ///
    /// `count` must be at most 32.
    pub fn get_bits(&self, offset: usize, count: usize) -> u32 {
        verify_check!(count <= 32, "bit count exceeds 32");
        (0..count).fold(0, |acc, i| acc | ((self.bit(offset + i) as u32) << i))
    }

    /// Shifts the magnitude right by `bits` in place, returning the bits shifted out.
    ///
    /// `bits` must be less than [`WORD_BITS`].
    pub fn shift_right(&mut self, bits: u32) -> Word {
        verify_check!((bits as usize) < WORD_BITS, "shift exceeds word width");
        let len = self.len;
        let out = limb::shr_assign(&mut self.limbs[..len], bits);
        self.normalize();
        out
    }

    /// Adds one to the magnitude in place.
    pub fn increment(&mut self) {
        let len = self.len;
        if limb::add_one(&mut self.limbs[..len]) != 0 {
            verify_check!(len < WORK_LIMBS, "increment exceeds working capacity");
            self.limbs[len] = 1;
            self.len += 1;
        }
    }

    /// Flips the sign in place. Zero stays non-negative.
    pub fn negate(&mut self) {
        self.negative = !self.negative;
        self.normalize();
    }

    /// Splits `self` into `(low, high)` such that `self == low + high * 2^bits`.
    ///
    /// `low` holds the low `bits` bits of the magnitude and `high` the rest;
    /// both carry the sign of `self`. `bits` must be positive.
    pub fn split(&self, bits: usize) -> (Self, Self) {
        verify_check!(bits > 0, "split position must be positive");
        if bits >= self.len * WORD_BITS {
            return (*self, Self::ZERO);
        }

        let whole = bits / WORD_BITS;
        let rem = (bits % WORD_BITS) as u32;

        let mut low = Self::ZERO;
        low.limbs[..whole].copy_from_slice(&self.limbs[..whole]);
        low.len = whole;
        if rem > 0 {
            low.limbs[whole] = self.limbs[whole] & ((1 << rem) - 1);
            low.len += 1;
        }
        low.negative = self.negative;
        low.normalize();

        let mut high = Self::ZERO;
        let high_len = self.len - whole;
        high.limbs[..high_len].copy_from_slice(&self.limbs[whole..self.len]);
        limb::shr_assign(&mut high.limbs[..high_len], rem);
        high.len = high_len;
        high.negative = self.negative;
        high.normalize();

        (low, high)
    }
}
