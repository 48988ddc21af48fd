use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use multicodec_table::{DuplicatePolicy, MulticodecRegistry, RegistryConfig};

use crate::exit::{io_error, registry_error, CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod list;
pub mod tag;
pub mod untag;
pub mod varint;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prefix a payload with a codec's varint code.
    Tag(TagArgs),
    /// Split a tagged payload into codec and data.
    Untag(UntagArgs),
    /// List registered codecs.
    List(ListArgs),
    /// Encode or decode a bare unsigned varint.
    Varint(VarintArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Settings shared by every subcommand.
#[derive(Debug)]
pub struct Context {
    pub format: OutputFormat,
    pub table: Option<PathBuf>,
    pub duplicates: DuplicatePolicy,
}

impl Context {
    /// Build the registry from `--table`, or the built-in table when unset.
    pub fn registry(&self) -> CliResult<MulticodecRegistry> {
        let config = RegistryConfig {
            duplicates: self.duplicates,
            ..RegistryConfig::default()
        };

        let registry = match &self.table {
            Some(path) => MulticodecRegistry::from_path_with_config(path, config),
            None => {
                MulticodecRegistry::from_csv_with_config(multicodec_table::BUILTIN_TABLE, config)
            }
        };
        registry.map_err(|err| registry_error("failed loading codec table", err))
    }
}

pub fn run(command: Command, ctx: &Context) -> CliResult<i32> {
    match command {
        Command::Tag(args) => tag::run(args, ctx),
        Command::Untag(args) => untag::run(args, ctx),
        Command::List(args) => list::run(args, ctx),
        Command::Varint(args) => varint::run(args, ctx.format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DuplicateArg {
    FirstWins,
    LastWins,
    Reject,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::FirstWins => DuplicatePolicy::FirstWins,
            DuplicateArg::LastWins => DuplicatePolicy::LastWins,
            DuplicateArg::Reject => DuplicatePolicy::Reject,
        }
    }
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub data: Option<String>,
    /// Hex-encoded payload.
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub hex: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with_all = ["data", "hex"])]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    /// Resolve the payload bytes. No source means an empty payload.
    pub fn resolve(&self) -> CliResult<Vec<u8>> {
        if let Some(data) = &self.data {
            return Ok(data.as_bytes().to_vec());
        }
        if let Some(text) = &self.hex {
            return parse_hex(text);
        }
        if let Some(path) = &self.file {
            return fs::read(path)
                .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
        }
        Ok(Vec::new())
    }
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Codec name, e.g. sha2-256.
    pub codec: String,
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args, Debug)]
pub struct UntagArgs {
    #[command(flatten)]
    pub payload: PayloadArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show codecs whose name contains this text.
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct VarintArgs {
    #[command(subcommand)]
    pub action: VarintAction,
}

#[derive(Subcommand, Debug)]
pub enum VarintAction {
    /// Encode an integer (decimal or 0x-prefixed hex).
    Encode {
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        value: i64,
    },
    /// Decode a hex-encoded varint.
    Decode {
        hex: String,
        /// Byte offset to start decoding at.
        #[arg(long, default_value = "0")]
        offset: usize,
    },
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Decode hex text, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str) -> CliResult<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    let digits = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(digits).map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}

fn parse_number(input: &str) -> Result<i64, String> {
    let input = input.trim();
    let (negative, magnitude) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (digits, radix) = match magnitude.strip_prefix("0x") {
        Some(digits) => (digits, 16),
        None => (magnitude, 10),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(format!("invalid integer {input}"));
    }

    let value = i64::from_str_radix(digits, radix)
        .map_err(|err| format!("invalid integer {input}: {err}"))?;

    Ok(if negative { -value } else { value })
}
