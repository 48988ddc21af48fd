//! Comma-separated codec table parsing.
//!
//! Each row is `name,tag,code[,description...]` where `code` is a
//! `0x`-prefixed hex literal. Rows that don't fit that shape (the header,
//! blank lines, short rows, bad hex) are skipped and the rest of the table
//! still loads.

/// The table compiled into the crate.
pub const BUILTIN_TABLE: &str = include_str!("../table.csv");

const NAME_FIELD: usize = 0;
const CODE_FIELD: usize = 2;

/// A single name/code pairing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodecEntry {
    /// Human-readable codec name, e.g. `sha2-256`.
    pub name: String,
    /// Numeric multicodec identifier.
    pub code: u32,
}

impl CodecEntry {
    /// Create a new codec entry.
    pub fn new(name: impl Into<String>, code: u32) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }
}

/// Parse table text into entries, skipping rows that don't parse.
pub fn parse_table(text: &str) -> Vec<CodecEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                skipped += 1;
                tracing::debug!(line = index + 1, reason, "skipping codec table row");
            }
        }
    }

    tracing::debug!(entries = entries.len(), skipped, "parsed codec table");
    entries
}

fn parse_row(line: &str) -> std::result::Result<CodecEntry, &'static str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    let code = fields.get(CODE_FIELD).ok_or("missing code field")?;
    let digits = code
        .strip_prefix("0x")
        .ok_or("code is not a 0x hex literal")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("code is not valid hex");
    }
    let code = u32::from_str_radix(digits, 16).map_err(|_| "code does not fit in 32 bits")?;

    let name = fields[NAME_FIELD];
    if name.is_empty() {
        return Err("missing codec name");
    }

    Ok(CodecEntry::new(name, code))
}
