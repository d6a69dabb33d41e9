//! Read-only access to raw acquisition files.
//!
//! The pipeline never talks to a vendor reader directly. It consumes the
//! [`RawSource`] trait, which exposes exactly the object graph the walkers
//! need:
//!
//! - file state (`is_error`, `is_open`, `in_acquisition`) and file-level
//!   descriptors,
//! - the declared instruments and, once one is selected, its descriptors,
//! - per-scan data for the selected instrument.
//!
//! Instrument selection returns an [`InstrumentContext`] that every scoped
//! pull takes explicitly. A source backed by a stateful vendor reader keeps
//! its cursor internally and can check the context against it; the snapshot
//! source in [`snapshot`] simply indexes by it.
//!
//! # Example
//!
//! ```no_run
//! use raw2sqlite::source::{RawSource, SnapshotOpener, SourceOpener};
//!
//! let mut source = SnapshotOpener.open("run.raw".as_ref())?;
//! for index in 1..=source.instrument_count() {
//!     let device = source.instrument_type(index - 1)?;
//!     let ctx = source.select_instrument(device, index)?;
//!     let header = source.run_header_ex(&ctx)?;
//!     println!("{device}: scans {}..={}", header.first_spectrum, header.last_spectrum);
//! }
//! # Ok::<(), raw2sqlite::source::SourceError>(())
//! ```

pub mod enums;
pub mod error;
pub mod snapshot;
pub mod types;

use std::path::Path;

pub use enums::{Device, MsOrder, PeakOptions};
pub use error::SourceError;
pub use snapshot::{AcquisitionSnapshot, InstrumentSnapshot, ScanSnapshot, SnapshotOpener};
pub use types::{
    AutoSamplerInformation, CentroidStream, FileError, FileHeader, HeaderItem, InstrumentContext,
    InstrumentData, LabelPeak, MassRange, RawFileInfo, Reaction, RunHeader, RunHeaderEx,
    ScanEvent, ScanObject, ScanStatistics, SegmentedScan, TrailerExtra,
};

/// Read-only view over an opened raw acquisition file.
///
/// Every pull may fail; the extraction pass treats any error as fatal.
pub trait RawSource {
    /// Whether the reader hit an internal error while opening the file.
    fn is_error(&self) -> bool;

    /// Details of the error (or warning) the reader reported.
    fn file_error(&self) -> FileError;

    /// Whether the file was opened successfully.
    fn is_open(&self) -> bool;

    /// Whether the instrument is still writing the file.
    fn in_acquisition(&self) -> bool;

    /// The file header block.
    fn file_header(&self) -> Result<FileHeader, SourceError>;

    /// Autosampler tray configuration.
    fn auto_sampler(&self) -> Result<AutoSamplerInformation, SourceError>;

    /// File-level summary.
    fn raw_file_info(&self) -> Result<RawFileInfo, SourceError>;

    /// Number of declared instruments.
    fn instrument_count(&self) -> i32;

    /// Device type at the zero-based instrument position.
    fn instrument_type(&self, index0: i32) -> Result<Device, SourceError>;

    /// Select the instrument at the 1-based `index1` of type `device`.
    fn select_instrument(
        &mut self,
        device: Device,
        index1: i32,
    ) -> Result<InstrumentContext, SourceError>;

    /// Static descriptor of the selected instrument.
    fn instrument_data(&self, ctx: &InstrumentContext) -> Result<InstrumentData, SourceError>;

    /// Basic run header of the selected instrument.
    fn run_header(&self, ctx: &InstrumentContext) -> Result<RunHeader, SourceError>;

    /// Extended run header of the selected instrument.
    fn run_header_ex(&self, ctx: &InstrumentContext) -> Result<RunHeaderEx, SourceError>;

    /// Trailer-extra schema of the selected instrument.
    fn trailer_extra_header(&self, ctx: &InstrumentContext)
        -> Result<Vec<HeaderItem>, SourceError>;

    /// Trailer-extra values of one scan.
    fn trailer_extra(&self, ctx: &InstrumentContext, scan: i32)
        -> Result<TrailerExtra, SourceError>;

    /// Summary statistics of one scan.
    fn scan_statistics(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<ScanStatistics, SourceError>;

    /// Processed representation of one scan.
    fn scan(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanObject, SourceError>;

    /// Centroid stream of one scan, optionally with segments merged.
    fn centroid_stream(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        merge_segments: bool,
    ) -> Result<CentroidStream, SourceError>;

    /// Scan event active during one scan.
    fn scan_event(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanEvent, SourceError>;

    /// Precursor reaction at a zero-based order index, `None` when absent.
    fn reaction(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        order: i32,
    ) -> Result<Option<Reaction>, SourceError>;

    /// Post-processed centroid result of a centroid-mode scan.
    fn centroid_scan(&self, ctx: &InstrumentContext, scan: i32)
        -> Result<CentroidStream, SourceError>;
}

/// Factory that turns a path into a [`RawSource`].
pub trait SourceOpener {
    /// Open `path`. An error means no reader could be constructed at all;
    /// a reader that opened with problems reports them through its state.
    fn open(&self, path: &Path) -> Result<Box<dyn RawSource>, SourceError>;
}
