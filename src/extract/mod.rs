//! Extraction pass: walks a ready source and emits every destination row.
//!
//! The pass emits the three file-level rows, then hands over to the
//! instrument walker, which in turn drives the scan walker across each
//! instrument's declared scan range:
//!
//! ```text
//! FileHeader, AutoSamplerInformation, RawFile
//! for instrument in 1..=instrument_count:
//!     InstrumentType, InstrumentData, RunHeader, RunHeaderEx,
//!     TrailerExtraHeaderInformation (one per schema field)
//!     for scan in first_spectrum..=last_spectrum:
//!         TrailerExtraInformation, ScanStatistics, ScanObject,
//!         CentroidStream, ScanEvent,
//!         Precursor (MS^n only, per present reaction),
//!         CentroidScan (centroid-mode scans only)
//! ```
//!
//! Any failed pull aborts the pass. Nothing emitted so far is durable; the
//! caller simply drops the sink.
//!
//! # Example
//!
//! ```
//! use raw2sqlite::extract::extract;
//! use raw2sqlite::rows::{PendingRows, TableKind};
//! use raw2sqlite::source::{AcquisitionSnapshot, Device, InstrumentSnapshot};
//!
//! let mut source = AcquisitionSnapshot::new()
//!     .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 3));
//! let mut rows = PendingRows::new();
//! let stats = extract(&mut source, &mut rows)?;
//!
//! assert_eq!(stats.scans, 3);
//! assert_eq!(rows.count(TableKind::ScanEvent), 3);
//! # Ok::<(), raw2sqlite::extract::ExtractError>(())
//! ```

mod error;
mod instrument;
mod mapping;
mod scan;
mod stats;

#[cfg(test)]
mod tests;

pub use error::{ExtractError, Scope};
pub use stats::ExtractionStats;

use log::info;

use crate::rows::{Row, RowSink};
use crate::source::RawSource;
use error::InScope;
use mapping::FileState;

/// Run the extraction pass over `source`, emitting into `sink`.
///
/// The source must already have passed the precondition gate.
pub fn extract(
    source: &mut dyn RawSource,
    sink: &mut dyn RowSink,
) -> Result<ExtractionStats, ExtractError> {
    let mut stats = ExtractionStats::default();

    emit_file_rows(source, sink)?;
    instrument::walk_instruments(source, sink, &mut stats)?;

    info!("{}", stats);
    Ok(stats)
}

fn emit_file_rows(source: &dyn RawSource, sink: &mut dyn RowSink) -> Result<(), ExtractError> {
    let scope = Scope::File;

    let header = source.file_header().in_scope(scope)?;
    sink.emit(Row::FileHeader(mapping::file_header_row(header)));

    let auto_sampler = source.auto_sampler().in_scope(scope)?;
    sink.emit(Row::AutoSampler(mapping::auto_sampler_row(auto_sampler)));

    let info = source.raw_file_info().in_scope(scope)?;
    let state = FileState {
        is_error: source.is_error(),
        is_open: source.is_open(),
        in_acquisition: source.in_acquisition(),
        instrument_count: source.instrument_count(),
        file_error: source.file_error(),
    };
    sink.emit(Row::RawFile(
        mapping::raw_file_row(info, state).in_scope(scope)?,
    ));

    Ok(())
}
