#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use ecnum::BoundedInt;
//!
//! let a = BoundedInt::from_be_bytes(&[0x03]);
//! let m = BoundedInt::from_be_bytes(&[0x0b]);
//! let inv = a.invert_mod(&m);
//!
//! assert_eq!(inv, BoundedInt::from(4));
//! assert_eq!(a.mul_mod(&inv, &m), BoundedInt::ONE);
//! ```

#[macro_use]
mod macros;

mod limb;
mod num;
mod ops;

pub use crate::{
    limb::{SignedWord, WORD_BITS, Word},
    num::{BoundedInt, MAX_BYTES, MAX_LIMBS, WORK_LIMBS},
};
pub use subtle;
pub use zeroize;
