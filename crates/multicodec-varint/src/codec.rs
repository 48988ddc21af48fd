use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, VarintError};

/// Maximum encoded size of a 32-bit value: 5 groups of 7 bits.
pub const MAX_VARINT_LEN: usize = 5;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;

/// Encode a value as an unsigned varint.
///
/// ```text
/// 300 = 0b10_0101100
///       ┌──────────┬──────────┐
///       │ 1_0101100│ 0_0000010│
///       │   0xAC   │   0x02   │
///       └──────────┴──────────┘
/// ```
pub fn encode(value: u32) -> Bytes {
    let mut dst = BytesMut::with_capacity(encoded_len(value));
    encode_into(value, &mut dst);
    dst.freeze()
}

/// Encode a value held in a signed integer.
///
/// Negative values and values above `u32::MAX` are rejected with
/// [`VarintError::InvalidInput`].
pub fn encode_signed(value: i64) -> Result<Bytes> {
    let value = u32::try_from(value).map_err(|_| VarintError::InvalidInput { value })?;
    Ok(encode(value))
}

/// Append the varint encoding of `value` to `dst`.
pub fn encode_into(value: u32, dst: &mut BytesMut) {
    dst.reserve(encoded_len(value));
    let mut remaining = value;
    loop {
        let group = (remaining as u8) & GROUP_MASK;
        remaining >>= 7;
        if remaining == 0 {
            dst.put_u8(group);
            break;
        }
        dst.put_u8(group | CONTINUATION);
    }
}

/// Number of bytes [`encode`] emits for `value`.
pub fn encoded_len(value: u32) -> usize {
    let bits = (u32::BITS - value.leading_zeros()).max(1) as usize;
    bits.div_ceil(7)
}

/// Decode a varint starting at `offset`.
///
/// Returns the value and the number of bytes consumed, so the caller can find
/// whatever follows the varint in `src`. Over-long encodings (`0x80 0x00`) are
/// accepted.
pub fn decode(src: &[u8], offset: usize) -> Result<(u32, usize)> {
    let truncated = VarintError::TruncatedInput {
        offset,
        len: src.len(),
    };

    let input = match src.get(offset..) {
        Some(rest) if !rest.is_empty() => rest,
        _ => return Err(truncated),
    };

    let last = input
        .iter()
        .position(|byte| byte & CONTINUATION == 0)
        .ok_or(truncated)?;

    if last >= MAX_VARINT_LEN {
        return Err(VarintError::Overflow { offset });
    }

    let value = input[..=last]
        .iter()
        .enumerate()
        .fold(0u64, |acc, (index, byte)| {
            acc | (u64::from(byte & GROUP_MASK) << (7 * index))
        });

    let value = u32::try_from(value).map_err(|_| VarintError::Overflow { offset })?;
    Ok((value, last + 1))
}
