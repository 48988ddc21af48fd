use std::fmt;
use std::io;

use multicodec_table::MulticodecError;
use multicodec_varint::VarintError;

// Exit code constants aligned with sysexits-style CLI semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn varint_error(context: &str, err: VarintError) -> CliError {
    match err {
        VarintError::InvalidInput { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        VarintError::TruncatedInput { .. } | VarintError::Overflow { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn registry_error(context: &str, err: MulticodecError) -> CliError {
    match err {
        MulticodecError::Varint(err) => varint_error(context, err),
        MulticodecError::UnknownCodec(_) | MulticodecError::UnknownCode(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        MulticodecError::LoadFailed(_)
        | MulticodecError::DuplicateName { .. }
        | MulticodecError::DuplicateCode { .. } => {
            CliError::new(FAILURE, format!("{context}: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codec_maps_to_data_invalid() {
        let err = registry_error(
            "tag failed",
            MulticodecError::UnknownCodec("nope".to_string()),
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(err.to_string(), "tag failed: unknown codec: nope");
    }

    #[test]
    fn negative_varint_maps_to_usage() {
        let err = varint_error("encode failed", VarintError::InvalidInput { value: -1 });
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn wrapped_truncation_maps_to_data_invalid() {
        let err = registry_error(
            "untag failed",
            MulticodecError::Varint(VarintError::TruncatedInput { offset: 0, len: 1 }),
        );
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn load_failures_map_to_failure() {
        let err = registry_error("load", MulticodecError::LoadFailed("gone".to_string()));
        assert_eq!(err.code, FAILURE);

        let err = io_error(
            "read",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.code, PERMISSION_DENIED);
    }
}
