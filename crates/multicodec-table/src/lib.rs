//! Multicodec name/code registry.
//!
//! A multicodec tags a payload with the unsigned varint of a numeric code:
//!
//! ```text
//! ┌──────────────────┬───────────────────────────┐
//! │ code (varint)    │ payload (remaining bytes) │
//! └──────────────────┴───────────────────────────┘
//! ```
//!
//! [`MulticodecRegistry`] holds the name↔code table and tags/untags byte
//! buffers against it. A registry is built once and never mutated, so it can
//! be shared between threads without locking.

pub mod config;
pub mod error;
pub mod registry;
pub mod table;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{MulticodecError, Result};
pub use registry::MulticodecRegistry;
pub use table::{parse_table, CodecEntry, BUILTIN_TABLE};
