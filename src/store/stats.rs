use std::collections::BTreeMap;
use std::fmt;

use crate::rows::TableKind;

/// Statistics from a committed database
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    /// Rows written per table, every table included
    pub rows_per_table: BTreeMap<TableKind, usize>,
    /// Total number of rows written
    pub rows_written: usize,
    /// Size of the destination file in bytes
    pub file_size_bytes: u64,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows in {} tables ({} bytes)",
            self.rows_written,
            self.rows_per_table.len(),
            self.file_size_bytes
        )
    }
}
