//! SQLite destination store.
//!
//! [`SqliteStore::commit`] writes a complete database from a
//! [`PendingRows`] set:
//!
//! 1. a fresh database is created in a temporary file next to the
//!    destination, with every table of [`TableKind::ALL`];
//! 2. all rows are inserted inside one transaction with cached prepared
//!    statements;
//! 3. the transaction commits, the connection closes, and the temporary
//!    file is renamed over the destination.
//!
//! The destination is therefore either fully replaced or left exactly as it
//! was. Re-running a conversion never merges into an older database.

mod config;
mod error;
mod records;
pub mod schema;
mod stats;

#[cfg(test)]
mod tests;

pub use config::{JournalMode, StoreConfig, Synchronous};
pub use error::StoreError;
pub use stats::StoreStats;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rusqlite::{params_from_iter, Connection};

use crate::rows::{PendingRows, TableKind};

/// Writes pending rows into a SQLite database file.
#[derive(Debug, Clone, Default)]
pub struct SqliteStore {
    config: StoreConfig,
}

impl SqliteStore {
    /// Create a store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with custom settings.
    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Write `rows` as a complete database at `destination`, replacing any
    /// existing file. Missing parent directories are created.
    pub fn commit(&self, rows: &PendingRows, destination: &Path) -> Result<StoreStats, StoreError> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let temp = tempfile::Builder::new()
            .prefix(".raw2sqlite-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        debug!("Writing database to {}", temp.path().display());

        let mut conn = Connection::open(temp.path())?;
        self.apply_pragmas(&conn)?;
        let rows_per_table = write_tables(&mut conn, rows)?;
        conn.close().map_err(|(_, e)| e)?;

        temp.persist(destination)?;

        let stats = StoreStats {
            rows_written: rows_per_table.values().sum(),
            rows_per_table,
            file_size_bytes: fs::metadata(destination)?.len(),
        };
        info!("{} to {}", stats, destination.display());
        Ok(stats)
    }

    fn apply_pragmas(&self, conn: &Connection) -> Result<(), StoreError> {
        let mode: String = conn.pragma_update_and_check(
            None,
            "journal_mode",
            self.config.journal_mode.as_str(),
            |row| row.get(0),
        )?;
        conn.pragma_update(None, "synchronous", self.config.synchronous.as_str())?;
        debug!(
            "journal_mode={}, synchronous={}",
            mode,
            self.config.synchronous.as_str()
        );
        Ok(())
    }
}

fn write_tables(
    conn: &mut Connection,
    rows: &PendingRows,
) -> Result<BTreeMap<TableKind, usize>, StoreError> {
    let tx = conn.transaction()?;
    let mut rows_per_table = BTreeMap::new();

    for table in TableKind::ALL {
        tx.execute(&schema::create_table_sql(table), [])?;
    }

    for table in TableKind::ALL {
        let keyed = rows.rows(table);
        {
            let mut stmt = tx.prepare_cached(&schema::insert_sql(table))?;
            for row in keyed {
                stmt.execute(params_from_iter(records::values(row)))?;
            }
        }
        debug!("{}: {} rows", table, keyed.len());
        rows_per_table.insert(table, keyed.len());
    }

    tx.commit()?;
    Ok(rows_per_table)
}
