//! Fixed-width big-endian byte and hexadecimal encodings.
//!
//! Neither encoding carries a sign: only the magnitude is written, and parsed
//! values are always non-negative.

use super::{BoundedInt, MAX_BYTES, WORK_LIMBS};
use crate::limb::{WORD_BITS, WORD_BYTES, Word};
use core::fmt;

/// Uppercase hex digits, indexed by nibble value.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Largest number of hex digits [`BoundedInt::from_hex`] accepts.
const MAX_HEX_DIGITS: usize = WORK_LIMBS * WORD_BITS / 4;

/// Maps an ASCII hex digit to its value. Anything else decodes as zero.
const fn hex_value(c: u8) -> Word {
    match c {
        b'0'..=b'9' => (c - b'0') as Word,
        b'a'..=b'f' => (c - b'a' + 10) as Word,
        b'A'..=b'F' => (c - b'A' + 10) as Word,
        _ => 0,
    }
}

impl BoundedInt {
    /// Parses a big-endian unsigned magnitude.
    ///
    /// `bytes` must be between 1 and [`MAX_BYTES`] bytes long.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        verify_check!(!bytes.is_empty(), "empty byte string");
        verify_check!(bytes.len() <= MAX_BYTES, "byte string longer than {MAX_BYTES}");

        let mut ret = Self::ZERO;
        for (limb, chunk) in ret.limbs.iter_mut().zip(bytes.rchunks(WORD_BYTES)) {
            let mut buf = [0u8; WORD_BYTES];
            buf[WORD_BYTES - chunk.len()..].copy_from_slice(chunk);
            *limb = Word::from_be_bytes(buf);
        }
        ret.len = bytes.len().div_ceil(WORD_BYTES).max(1);
        ret.normalize();
        ret
    }

    /// Writes the magnitude big-endian into `out`, left-padded with zeros.
    ///
    /// The magnitude must fit in `out.len()` bytes. The sign is not encoded.
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        verify_check!(
            self.bits().div_ceil(8) <= out.len(),
            "value does not fit in {} bytes",
            out.len()
        );
        for (i, byte) in out.iter_mut().rev().enumerate() {
            let limb = i / WORD_BYTES;
            *byte = if limb < self.len {
                (self.limbs[limb] >> (8 * (i % WORD_BYTES))) as u8
            } else {
                0
            };
        }
    }

    /// Returns the magnitude as a big-endian array of `N` bytes.
    pub fn to_be_bytes<const N: usize>(&self) -> [u8; N] {
        let mut ret = [0u8; N];
        self.write_be_bytes(&mut ret);
        ret
    }

    /// Parses a big-endian hexadecimal magnitude.
    ///
    /// Both cases are accepted. Characters which are not hex digits decode as
    /// `0` rather than being rejected; callers that need strict parsing must
    /// validate the input first. An empty string parses as zero.
    pub fn from_hex(hex: &[u8]) -> Self {
        verify_check!(
            hex.len() <= MAX_HEX_DIGITS,
            "hex string longer than {MAX_HEX_DIGITS} digits"
        );
        let mut ret = Self::ZERO;
        for (i, &c) in hex.iter().rev().enumerate() {
            let bit = 4 * i;
            ret.limbs[bit / WORD_BITS] |= hex_value(c) << (bit % WORD_BITS);
        }
        ret.len = (4 * hex.len()).div_ceil(WORD_BITS).max(1);
        ret.normalize();
        ret
    }

    /// Writes the magnitude as uppercase hex into `out`, left-padded with `'0'`.
    ///
    /// The magnitude must fit in `out.len()` digits. The sign is not encoded.
    pub fn write_hex(&self, out: &mut [u8]) {
        verify_check!(
            self.bits().div_ceil(4) <= out.len(),
            "value does not fit in {} hex digits",
            out.len()
        );
        for (i, digit) in out.iter_mut().rev().enumerate() {
            *digit = HEX_DIGITS[self.nibble(i) as usize];
        }
    }

    /// Returns the `i`-th 4-bit digit of the magnitude, least significant first.
    fn nibble(&self, i: usize) -> u8 {
        let bit = 4 * i;
        if bit / WORD_BITS < self.len {
            ((self.limbs[bit / WORD_BITS] >> (bit % WORD_BITS)) & 0xf) as u8
        } else {
            0
        }
    }

    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, digits: &[u8; 16]) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        let n = self.bits().div_ceil(4).max(1);
        for i in (0..n).rev() {
            let c = digits[self.nibble(i) as usize];
            fmt::Write::write_char(f, c as char)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, HEX_DIGITS)
    }
}

impl fmt::LowerHex for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, b"0123456789abcdef")
    }
}

impl fmt::Debug for BoundedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedInt({self:#X})")
    }
}
