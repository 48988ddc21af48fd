/// How a registry resolves a table that repeats a name or a code.
///
/// Both mappings stay one-to-one whatever the policy, so every registered name
/// survives a tag/untag round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the entry seen first and drop later conflicting rows.
    #[default]
    FirstWins,
    /// Replace earlier entries with the conflicting row.
    LastWins,
    /// Fail the load with `DuplicateName` / `DuplicateCode`.
    Reject,
}

/// Controls how a registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Conflict resolution for repeated names or codes.
    pub duplicates: DuplicatePolicy,
    /// Maximum bytes read from a table file.
    pub max_table_file_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            max_table_file_size: 1024 * 1024,
        }
    }
}
