//! # raw2sqlite - Raw acquisition files as relational data
//!
//! `raw2sqlite` flattens a mass spectrometry raw acquisition file into a
//! normalized SQLite database: fifteen tables keyed by instrument index,
//! scan number and precursor order, with every variable-length array stored
//! as JSON text.
//!
//! ## Pipeline
//!
//! ```text
//! SourceOpener ──► Readiness::classify ──► extract ──► PendingRows ──► SqliteStore::commit
//!                  (precondition gate)     (instrument and scan walkers)
//! ```
//!
//! 1. A [`source::SourceOpener`] turns a path into a [`source::RawSource`].
//! 2. The [`gate`] rejects sources that are unusable, errored, not open or
//!    still being acquired, each with its own exit code.
//! 3. [`extract::extract`] walks file, instrument and scan data and emits
//!    typed [`rows::Row`]s, serializing array fields through [`blob`].
//! 4. [`store::SqliteStore`] writes all rows in one transaction and
//!    atomically replaces the destination.
//!
//! [`converter::RawConverter`] runs all four steps.
//!
//! ## Input
//!
//! The only bundled reader is [`source::SnapshotOpener`], which reads an
//! acquisition snapshot: the whole object graph of a raw file saved as JSON
//! ([`source::AcquisitionSnapshot`]). Vendor `.raw` files are not parsed
//! here; reading them needs a [`source::RawSource`] implementation over the
//! vendor library, plugged in with [`converter::RawConverter::with_opener`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use raw2sqlite::converter::RawConverter;
//!
//! let stats = RawConverter::new().convert("run01.json".as_ref(), "run01.sqlite".as_ref())?;
//! println!("{}", stats.extraction);
//! println!("{}", stats.store);
//! # Ok::<(), raw2sqlite::converter::ConversionError>(())
//! ```
//!
//! ## Tables
//!
//! | Table | Key |
//! |-------|-----|
//! | FileHeader, AutoSamplerInformation, RawFile | `Key` (surrogate) |
//! | InstrumentType, InstrumentData | `Index` |
//! | RunHeader, RunHeaderEx | `Instrument` |
//! | TrailerExtraHeaderInformation | `Instrument`, `HeaderIndex` |
//! | TrailerExtraInformation, ScanStatistics, ScanObject, CentroidStream, ScanEvent, CentroidScan | `Instrument`, `ScanNumber` |
//! | Precursor | `Instrument`, `ScanNumber`, `OrderIndex` |
//!
//! Enumerated values are stored as their variant names, booleans as 0/1 and
//! dates as RFC 3339 text. A NaN in a scalar REAL column reads back as NULL
//! (SQLite has no NaN); inside array blobs it is spelled `"NaN"`.

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod blob;
pub mod converter;
pub mod extract;
pub mod gate;
pub mod rows;
pub mod source;
pub mod store;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::blob::{Blob, BlobCodec, BlobError, BlobKind};
    pub use crate::converter::{ConversionError, ConversionStats, RawConverter};
    pub use crate::extract::{extract, ExtractError, ExtractionStats};
    pub use crate::gate::Readiness;
    pub use crate::rows::{PendingRows, Row, RowSink, TableKind};
    pub use crate::source::{
        AcquisitionSnapshot, InstrumentContext, RawSource, SnapshotOpener, SourceError,
        SourceOpener,
    };
    pub use crate::store::{SqliteStore, StoreConfig, StoreError, StoreStats};
}
