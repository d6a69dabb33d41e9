//! Error types for raw source access.

use thiserror::Error;

use super::enums::Device;

/// Errors a raw source can report while opening or pulling data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The reader could not be constructed for this path
    #[error("Failed to open raw source: {0}")]
    OpenError(String),

    /// Instrument index outside `1..=instrument_count`
    #[error("Instrument {index} out of range (file declares {count})")]
    InstrumentOutOfRange {
        /// Requested 1-based index
        index: i32,
        /// Declared instrument count
        count: i32,
    },

    /// Selection asked for a device type the slot does not hold
    #[error("Instrument {index} is {actual}, not {requested}")]
    InstrumentMismatch {
        /// Requested 1-based index
        index: i32,
        /// Device type that was asked for
        requested: Device,
        /// Device type actually present
        actual: Device,
    },

    /// Pull made with a context that is not the current selection
    #[error("Instrument {index} is not the selected instrument")]
    StaleContext {
        /// 1-based index carried by the stale context
        index: i32,
    },

    /// Scan number outside the instrument's spectrum range
    #[error("Scan {scan} not available for instrument {instrument}")]
    ScanOutOfRange {
        /// 1-based instrument index
        instrument: i32,
        /// Requested scan number
        scan: i32,
    },

    /// Required data is missing from the source
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed snapshot document
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
