//! End-to-end conversion of one raw file into one SQLite database.

use std::path::Path;

use log::{info, warn};

use crate::extract::{extract, ExtractError, ExtractionStats};
use crate::gate::Readiness;
use crate::rows::PendingRows;
use crate::source::{SnapshotOpener, SourceOpener};
use crate::store::{SqliteStore, StoreConfig, StoreError, StoreStats};

/// Errors that end a conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The source failed the precondition gate
    #[error("{0}")]
    Precondition(Readiness),

    /// The extraction pass failed
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The destination could not be written
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ConversionError {
    /// Process exit code: the fixed gate codes for precondition failures,
    /// `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConversionError::Precondition(readiness) => readiness.exit_code(),
            ConversionError::Extract(_) | ConversionError::Store(_) => 1,
        }
    }
}

/// Statistics from a completed conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Extraction pass summary
    pub extraction: ExtractionStats,
    /// Store summary
    pub store: StoreStats,
}

/// Runs the gate, the extraction pass and the store commit.
#[derive(Debug, Clone, Default)]
pub struct RawConverter<O = SnapshotOpener> {
    opener: O,
    store: SqliteStore,
}

impl RawConverter<SnapshotOpener> {
    /// Converter reading acquisition snapshots with default store settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: SourceOpener> RawConverter<O> {
    /// Converter using a custom opener.
    pub fn with_opener(opener: O) -> Self {
        Self {
            opener,
            store: SqliteStore::default(),
        }
    }

    /// Replace the store settings.
    pub fn with_store_config(mut self, config: StoreConfig) -> Self {
        self.store = SqliteStore::with_config(config);
        self
    }

    /// Convert `input` into a fresh database at `output`.
    ///
    /// Nothing is written unless the source passes the gate and the whole
    /// extraction pass succeeds.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionStats, ConversionError> {
        let mut source = match self.opener.open(input) {
            Ok(source) => source,
            Err(e) => {
                warn!("{}", e);
                return Err(ConversionError::Precondition(Readiness::classify(None)));
            }
        };

        let readiness = Readiness::classify(Some(source.as_ref()));
        if !readiness.is_ready() {
            return Err(ConversionError::Precondition(readiness));
        }

        info!("Extracting {}", input.display());
        let mut rows = PendingRows::new();
        let extraction = extract(source.as_mut(), &mut rows)?;
        drop(source);

        let store = self.store.commit(&rows, output)?;
        Ok(ConversionStats { extraction, store })
    }
}
