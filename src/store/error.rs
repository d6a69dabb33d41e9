/// Errors that can occur while writing the destination database
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error around the destination file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by SQLite
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// The finished database could not be moved over the destination
    #[error("Failed to replace destination: {0}")]
    PersistError(#[from] tempfile::PersistError),
}
