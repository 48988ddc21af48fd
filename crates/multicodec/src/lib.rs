//! Self-describing multicodec prefixes over unsigned varints.
//!
//! # Crate Structure
//!
//! - [`varint`] — Unsigned varint encoding and decoding
//! - [`table`] — Codec table parsing and the name↔code registry
//!
//! ```
//! use multicodec::MulticodecRegistry;
//!
//! let registry = MulticodecRegistry::builtin().unwrap();
//! let tagged = registry.tag("sha2-256", b"EiC5TSe5k00").unwrap();
//! assert_eq!(tagged[0], 0x12);
//!
//! let (name, payload) = registry.untag(&tagged).unwrap();
//! assert_eq!(name, "sha2-256");
//! assert_eq!(payload, b"EiC5TSe5k00");
//! ```

/// Re-export varint types.
pub mod varint {
    pub use multicodec_varint::*;
}

/// Re-export table and registry types.
pub mod table {
    pub use multicodec_table::*;
}

pub use multicodec_table::{
    CodecEntry, DuplicatePolicy, MulticodecError, MulticodecRegistry, RegistryConfig,
};
pub use multicodec_varint::VarintError;
