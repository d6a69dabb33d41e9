use serde::Deserialize;

/// SQLite `journal_mode` used while the destination is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMode {
    /// No rollback journal
    Off,
    /// Journal deleted at commit
    Delete,
    /// Journal truncated at commit
    Truncate,
    /// Journal header zeroed at commit
    Persist,
    /// Journal kept in memory
    #[default]
    Memory,
    /// Write-ahead log
    Wal,
}

impl JournalMode {
    /// Pragma value.
    pub fn as_str(self) -> &'static str {
        match self {
            JournalMode::Off => "OFF",
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
        }
    }
}

/// SQLite `synchronous` level used while the destination is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Synchronous {
    /// No syncs
    #[default]
    Off,
    /// Sync at critical moments
    Normal,
    /// Sync after every transaction
    Full,
    /// Full plus directory syncs
    Extra,
}

impl Synchronous {
    /// Pragma value.
    pub fn as_str(self) -> &'static str {
        match self {
            Synchronous::Off => "OFF",
            Synchronous::Normal => "NORMAL",
            Synchronous::Full => "FULL",
            Synchronous::Extra => "EXTRA",
        }
    }
}

/// Settings of the SQLite store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Journal mode pragma
    pub journal_mode: JournalMode,
    /// Synchronous pragma
    pub synchronous: Synchronous,
}
