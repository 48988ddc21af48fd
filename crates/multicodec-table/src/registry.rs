use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use bytes::{BufMut, Bytes, BytesMut};
use multicodec_varint as varint;

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{MulticodecError, Result};
use crate::table::{parse_table, CodecEntry, BUILTIN_TABLE};

/// Bidirectional name↔code table with prefix tagging.
///
/// Built once by one of the constructors and read-only afterwards.
#[derive(Debug, Clone)]
pub struct MulticodecRegistry {
    codes: HashMap<String, u32>,
    names: HashMap<u32, String>,
    config: RegistryConfig,
}

impl MulticodecRegistry {
    /// Build a registry from parsed entries with default config.
    pub fn load(entries: impl IntoIterator<Item = CodecEntry>) -> Result<Self> {
        Self::load_with_config(entries, RegistryConfig::default())
    }

    /// Build a registry from parsed entries with explicit config.
    ///
    /// Entries with an empty name are skipped. Repeated names or codes are
    /// resolved by `config.duplicates`.
    pub fn load_with_config(
        entries: impl IntoIterator<Item = CodecEntry>,
        config: RegistryConfig,
    ) -> Result<Self> {
        let mut registry = Self {
            codes: HashMap::new(),
            names: HashMap::new(),
            config,
        };
        let mut skipped = 0usize;

        for entry in entries {
            if entry.name.is_empty() {
                skipped += 1;
                tracing::debug!(code = entry.code, "skipping codec entry without a name");
                continue;
            }

            if registry.contains_exact(&entry) {
                continue;
            }

            if let Some(conflict) = registry.conflict(&entry) {
                match config.duplicates {
                    DuplicatePolicy::Reject => return Err(conflict),
                    DuplicatePolicy::FirstWins => {
                        skipped += 1;
                        tracing::warn!(%conflict, "keeping first codec entry");
                        continue;
                    }
                    DuplicatePolicy::LastWins => {
                        tracing::warn!(%conflict, "replacing earlier codec entry");
                        registry.evict(&entry);
                    }
                }
            }

            registry.codes.insert(entry.name.clone(), entry.code);
            registry.names.insert(entry.code, entry.name);
        }

        tracing::debug!(
            codecs = registry.len(),
            skipped,
            "loaded multicodec registry"
        );
        Ok(registry)
    }

    /// Build a registry from comma-separated table text.
    pub fn from_csv(text: &str) -> Result<Self> {
        Self::from_csv_with_config(text, RegistryConfig::default())
    }

    /// Build a registry from comma-separated table text with explicit config.
    pub fn from_csv_with_config(text: &str, config: RegistryConfig) -> Result<Self> {
        Self::load_with_config(parse_table(text), config)
    }

    /// Load a table file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_path_with_config(path, RegistryConfig::default())
    }

    /// Load a table file with explicit config.
    pub fn from_path_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|err| {
            MulticodecError::LoadFailed(format!("failed opening {}: {err}", path.display()))
        })?;
        let metadata = file
            .metadata()
            .map_err(|err| MulticodecError::LoadFailed(format!("{}: {err}", path.display())))?;

        if !metadata.is_file() {
            return Err(MulticodecError::LoadFailed(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let max_bytes = config.max_table_file_size;
        if metadata.len() > max_bytes as u64 {
            return Err(MulticodecError::LoadFailed(format!(
                "table file too large ({} bytes, max {max_bytes}): {}",
                metadata.len(),
                path.display()
            )));
        }

        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                MulticodecError::LoadFailed(format!("failed reading {}: {err}", path.display()))
            })?;
        if content.len() > max_bytes {
            return Err(MulticodecError::LoadFailed(format!(
                "table file too large while reading: {}",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "read codec table");
        Self::from_csv_with_config(&content, config)
    }

    /// Registry built from the table compiled into this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_csv(BUILTIN_TABLE)
    }

    /// Numeric code registered under `name`.
    pub fn code_for(&self, name: &str) -> Result<u32> {
        self.codes
            .get(name)
            .copied()
            .ok_or_else(|| MulticodecError::UnknownCodec(name.to_string()))
    }

    /// Check if a codec name is registered.
    pub fn is_known(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    /// Codec name registered under `code`.
    pub fn name_for(&self, code: u32) -> Result<&str> {
        self.names
            .get(&code)
            .map(String::as_str)
            .ok_or(MulticodecError::UnknownCode(code))
    }

    /// Varint prefix bytes for a codec name.
    pub fn prefix_for(&self, name: &str) -> Result<Bytes> {
        Ok(varint::encode(self.code_for(name)?))
    }

    /// Prefix `payload` with the varint code of `name`.
    pub fn tag(&self, name: &str, payload: &[u8]) -> Result<Bytes> {
        let mut dst = BytesMut::new();
        self.tag_into(name, payload, &mut dst)?;
        Ok(dst.freeze())
    }

    /// Append the tagged form of `payload` to `dst`.
    ///
    /// `dst` is left untouched when `name` is unknown.
    pub fn tag_into(&self, name: &str, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
        let code = self.code_for(name)?;
        dst.reserve(varint::encoded_len(code) + payload.len());
        varint::encode_into(code, dst);
        dst.put_slice(payload);
        Ok(())
    }

    /// Split a tagged buffer into its codec name and payload.
    pub fn untag<'a>(&self, tagged: &'a [u8]) -> Result<(&str, &'a [u8])> {
        let (code, consumed) = varint::decode(tagged, 0)?;
        let name = self.name_for(code)?;
        Ok((name, &tagged[consumed..]))
    }

    /// Codec name of a tagged buffer.
    pub fn codec_of(&self, tagged: &[u8]) -> Result<&str> {
        self.name_for(self.peek_code(tagged)?)
    }

    /// Payload of a tagged buffer, without checking the code is registered.
    pub fn strip_prefix<'a>(&self, tagged: &'a [u8]) -> Result<&'a [u8]> {
        let (_, consumed) = varint::decode(tagged, 0)?;
        Ok(&tagged[consumed..])
    }

    /// Leading code of a tagged buffer, without consulting the table.
    pub fn peek_code(&self, tagged: &[u8]) -> Result<u32> {
        let (code, _) = varint::decode(tagged, 0)?;
        Ok(code)
    }

    /// Leading varint of a tagged buffer, re-encoded in canonical form.
    pub fn extract_prefix(&self, tagged: &[u8]) -> Result<Bytes> {
        Ok(varint::encode(self.peek_code(tagged)?))
    }

    /// Number of registered codecs.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no codecs are registered.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Registered codec names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered entries, sorted by code.
    pub fn entries(&self) -> Vec<CodecEntry> {
        let mut entries: Vec<CodecEntry> = self
            .names
            .iter()
            .map(|(code, name)| CodecEntry::new(name.as_str(), *code))
            .collect();
        entries.sort_unstable_by_key(|entry| entry.code);
        entries
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn contains_exact(&self, entry: &CodecEntry) -> bool {
        self.codes.get(&entry.name) == Some(&entry.code)
    }

    fn conflict(&self, entry: &CodecEntry) -> Option<MulticodecError> {
        if let Some(&existing) = self.codes.get(&entry.name) {
            return Some(MulticodecError::DuplicateName {
                name: entry.name.clone(),
                existing,
                code: entry.code,
            });
        }
        self.names
            .get(&entry.code)
            .map(|existing| MulticodecError::DuplicateCode {
                code: entry.code,
                existing: existing.clone(),
                name: entry.name.clone(),
            })
    }

    fn evict(&mut self, entry: &CodecEntry) {
        if let Some(code) = self.codes.remove(&entry.name) {
            self.names.remove(&code);
        }
        if let Some(name) = self.names.remove(&entry.code) {
            self.codes.remove(&name);
        }
    }
}
