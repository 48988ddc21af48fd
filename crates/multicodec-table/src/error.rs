use multicodec_varint::VarintError;

/// Errors that can occur while loading a table or tagging/untagging payloads.
#[derive(Debug, thiserror::Error)]
pub enum MulticodecError {
    /// No codec with this name is registered.
    #[error("unknown codec: {0}")]
    UnknownCodec(String),

    /// No codec with this code is registered.
    #[error("unknown codec code 0x{0:x}")]
    UnknownCode(u32),

    /// The varint prefix could not be decoded.
    #[error("invalid multicodec prefix: {0}")]
    Varint(#[from] VarintError),

    /// The table source could not be read.
    #[error("failed to load codec table: {0}")]
    LoadFailed(String),

    /// A codec name appears twice with different codes.
    #[error("duplicate codec name {name} (0x{existing:x} and 0x{code:x})")]
    DuplicateName {
        name: String,
        existing: u32,
        code: u32,
    },

    /// A code appears twice under different names.
    #[error("duplicate codec code 0x{code:x} ({existing} and {name})")]
    DuplicateCode {
        code: u32,
        existing: String,
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, MulticodecError>;
