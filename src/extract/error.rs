use std::fmt;

use crate::blob::BlobError;
use crate::rows::ScanKey;
use crate::source::SourceError;

/// Where in the object graph an extraction step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// File-level descriptors
    File,
    /// Per-instrument descriptors of a 1-based instrument index
    Instrument(i32),
    /// One scan
    Scan(ScanKey),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::File => f.write_str("file"),
            Scope::Instrument(index) => write!(f, "instrument {}", index),
            Scope::Scan(key) => write!(f, "instrument {} scan {}", key.instrument, key.scan),
        }
    }
}

/// Errors that abort an extraction pass
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A pull from the source failed
    #[error("Source error at {scope}: {source}")]
    Source {
        /// Location of the failed pull
        scope: Scope,
        /// Underlying source error
        #[source]
        source: SourceError,
    },

    /// A field could not be serialized
    #[error("Serialization error at {scope}: {source}")]
    Blob {
        /// Location of the failed field
        scope: Scope,
        /// Underlying serializer error
        #[source]
        source: BlobError,
    },
}

/// Attach a [`Scope`] to source and serializer results.
pub(crate) trait InScope<T> {
    fn in_scope(self, scope: Scope) -> Result<T, ExtractError>;
}

impl<T> InScope<T> for Result<T, SourceError> {
    fn in_scope(self, scope: Scope) -> Result<T, ExtractError> {
        self.map_err(|source| ExtractError::Source { scope, source })
    }
}

impl<T> InScope<T> for Result<T, BlobError> {
    fn in_scope(self, scope: Scope) -> Result<T, ExtractError> {
        self.map_err(|source| ExtractError::Blob { scope, source })
    }
}
