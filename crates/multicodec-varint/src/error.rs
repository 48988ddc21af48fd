/// Errors that can occur during varint encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
    /// The value cannot be represented as an unsigned 32-bit varint.
    #[error("invalid varint input {value} (must be within 0..={max})", max = u32::MAX)]
    InvalidInput { value: i64 },

    /// The input ended before a terminating byte was found.
    #[error("truncated varint (offset {offset}, input length {len})")]
    TruncatedInput { offset: usize, len: usize },

    /// The encoding runs past the supported width.
    #[error("varint overflows 32 bits (at offset {offset})")]
    Overflow { offset: usize },
}

pub type Result<T> = std::result::Result<T, VarintError>;
