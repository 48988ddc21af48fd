//! Unsigned variable-length integers as used by the multiformats family.
//!
//! Every value is written as a sequence of 7-bit groups, least significant
//! group first:
//! - The high bit (0x80) of each byte is set while more groups follow
//! - The last byte has the high bit clear
//! - Values up to `u32::MAX` take at most [`MAX_VARINT_LEN`] bytes
//!
//! Decoding is permissive about over-long encodings but never reads past the
//! end of the input.

pub mod codec;
pub mod error;

pub use codec::{decode, encode, encode_into, encode_signed, encoded_len, MAX_VARINT_LEN};
pub use error::{Result, VarintError};
