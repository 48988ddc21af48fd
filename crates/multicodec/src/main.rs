mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::{Command, Context, DuplicateArg};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "multicodec",
    version,
    about = "Tag and untag payloads with multicodec prefixes"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Codec table file (CSV). Defaults to the built-in table.
    #[arg(long, value_name = "PATH", env = "MULTICODEC_TABLE", global = true)]
    table: Option<PathBuf>,

    /// How to resolve repeated names or codes in the table.
    #[arg(
        long,
        value_name = "POLICY",
        default_value = "first-wins",
        global = true
    )]
    duplicates: DuplicateArg,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "MULTICODEC_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let ctx = Context {
        format: cli.format.unwrap_or_else(OutputFormat::default_for_stdout),
        table: cli.table,
        duplicates: cli.duplicates.into(),
    };

    match cmd::run(cli.command, &ctx) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tag_subcommand() {
        let cli = Cli::try_parse_from(["multicodec", "tag", "sha2-256", "--data", "hello"])
            .expect("tag args should parse");

        assert!(matches!(cli.command, Command::Tag(_)));
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from(["multicodec", "untag", "--hex", "1248", "--data", "hello"])
            .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_negative_varint_value() {
        let cli = Cli::try_parse_from(["multicodec", "varint", "encode", "-1"])
            .expect("negative value should reach the encoder");
        assert!(matches!(cli.command, Command::Varint(_)));
    }

    #[test]
    fn parses_global_table_options() {
        let cli = Cli::try_parse_from([
            "multicodec",
            "list",
            "--table",
            "/tmp/table.csv",
            "--duplicates",
            "reject",
        ])
        .expect("list args should parse");

        assert_eq!(cli.table, Some(PathBuf::from("/tmp/table.csv")));
        assert!(matches!(cli.duplicates, DuplicateArg::Reject));
    }
}
