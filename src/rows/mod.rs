//! # Row Emitter
//!
//! Typed records for the fifteen destination tables and the sink that
//! collects them for one conversion.
//!
//! The walkers build a fully-formed [`Row`] and hand it to a [`RowSink`].
//! [`PendingRows`] is the sink used for a real conversion: it groups rows
//! by [`TableKind`], assigns the 1-based surrogate keys of the file-level
//! tables in emission order, and keeps everything in memory until the
//! store commits it in one transaction.
//!
//! Rows of the per-instrument and per-scan tables carry their own natural
//! keys ([`ScanKey`], [`PrecursorKey`]), so emission order does not matter
//! for them.

mod file;
mod instrument;
mod keys;
mod scan;


use std::collections::BTreeMap;
use std::fmt;

pub use file::{AutoSamplerRow, FileHeaderRow, RawFileRow};
pub use instrument::{
    InstrumentDataRow, InstrumentTypeRow, RunHeaderExRow, RunHeaderRow, TrailerExtraHeaderRow,
};
pub use keys::{PrecursorKey, RowKey, ScanKey};
pub use scan::{
    CentroidScanRow, CentroidStreamRow, PeakColumns, PrecursorRow, ScanEventRow, ScanObjectRow,
    ScanStatisticsRow, TrailerExtraRow,
};

/// Destination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    /// File header block
    FileHeader,
    /// Autosampler tray configuration
    AutoSamplerInformation,
    /// File-level summary
    RawFile,
    /// Device type per instrument
    InstrumentType,
    /// Static instrument descriptor
    InstrumentData,
    /// Basic run header
    RunHeader,
    /// Extended run header
    RunHeaderEx,
    /// Trailer-extra schema
    TrailerExtraHeaderInformation,
    /// Trailer-extra values per scan
    TrailerExtraInformation,
    /// Scan summary statistics
    ScanStatistics,
    /// Processed scan
    ScanObject,
    /// Centroid stream per scan
    CentroidStream,
    /// Scan event per scan
    ScanEvent,
    /// Precursor reactions of MSn scans
    Precursor,
    /// Centroid result of centroid-mode scans
    CentroidScan,
}

impl TableKind {
    /// Every table, in creation order.
    pub const ALL: [TableKind; 15] = [
        TableKind::FileHeader,
        TableKind::AutoSamplerInformation,
        TableKind::RawFile,
        TableKind::InstrumentType,
        TableKind::InstrumentData,
        TableKind::RunHeader,
        TableKind::RunHeaderEx,
        TableKind::TrailerExtraHeaderInformation,
        TableKind::TrailerExtraInformation,
        TableKind::ScanStatistics,
        TableKind::ScanObject,
        TableKind::CentroidStream,
        TableKind::ScanEvent,
        TableKind::Precursor,
        TableKind::CentroidScan,
    ];

    /// SQL table name.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::FileHeader => "FileHeader",
            TableKind::AutoSamplerInformation => "AutoSamplerInformation",
            TableKind::RawFile => "RawFile",
            TableKind::InstrumentType => "InstrumentType",
            TableKind::InstrumentData => "InstrumentData",
            TableKind::RunHeader => "RunHeader",
            TableKind::RunHeaderEx => "RunHeaderEx",
            TableKind::TrailerExtraHeaderInformation => "TrailerExtraHeaderInformation",
            TableKind::TrailerExtraInformation => "TrailerExtraInformation",
            TableKind::ScanStatistics => "ScanStatistics",
            TableKind::ScanObject => "ScanObject",
            TableKind::CentroidStream => "CentroidStream",
            TableKind::ScanEvent => "ScanEvent",
            TableKind::Precursor => "Precursor",
            TableKind::CentroidScan => "CentroidScan",
        }
    }

    /// Whether rows of this table are keyed by a surrogate assigned at
    /// emission.
    pub fn uses_surrogate_key(self) -> bool {
        matches!(
            self,
            TableKind::FileHeader | TableKind::AutoSamplerInformation | TableKind::RawFile
        )
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One typed destination row.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Row {
    FileHeader(FileHeaderRow),
    AutoSampler(AutoSamplerRow),
    RawFile(RawFileRow),
    InstrumentType(InstrumentTypeRow),
    InstrumentData(InstrumentDataRow),
    RunHeader(RunHeaderRow),
    RunHeaderEx(RunHeaderExRow),
    TrailerExtraHeader(TrailerExtraHeaderRow),
    TrailerExtra(TrailerExtraRow),
    ScanStatistics(ScanStatisticsRow),
    ScanObject(ScanObjectRow),
    CentroidStream(CentroidStreamRow),
    ScanEvent(ScanEventRow),
    Precursor(PrecursorRow),
    CentroidScan(CentroidScanRow),
}

impl Row {
    /// Table this row belongs to.
    pub fn table(&self) -> TableKind {
        match self {
            Row::FileHeader(_) => TableKind::FileHeader,
            Row::AutoSampler(_) => TableKind::AutoSamplerInformation,
            Row::RawFile(_) => TableKind::RawFile,
            Row::InstrumentType(_) => TableKind::InstrumentType,
            Row::InstrumentData(_) => TableKind::InstrumentData,
            Row::RunHeader(_) => TableKind::RunHeader,
            Row::RunHeaderEx(_) => TableKind::RunHeaderEx,
            Row::TrailerExtraHeader(_) => TableKind::TrailerExtraHeaderInformation,
            Row::TrailerExtra(_) => TableKind::TrailerExtraInformation,
            Row::ScanStatistics(_) => TableKind::ScanStatistics,
            Row::ScanObject(_) => TableKind::ScanObject,
            Row::CentroidStream(_) => TableKind::CentroidStream,
            Row::ScanEvent(_) => TableKind::ScanEvent,
            Row::Precursor(_) => TableKind::Precursor,
            Row::CentroidScan(_) => TableKind::CentroidScan,
        }
    }

    /// Key carried by the row itself, `None` for surrogate-keyed tables.
    pub fn natural_key(&self) -> Option<RowKey> {
        match self {
            Row::FileHeader(_) | Row::AutoSampler(_) | Row::RawFile(_) => None,
            Row::InstrumentType(row) => Some(RowKey::Instrument(row.index)),
            Row::InstrumentData(row) => Some(RowKey::Instrument(row.index)),
            Row::RunHeader(row) => Some(RowKey::Instrument(row.instrument)),
            Row::RunHeaderEx(row) => Some(RowKey::Instrument(row.instrument)),
            Row::TrailerExtraHeader(row) => Some(RowKey::HeaderField {
                instrument: row.instrument,
                index: row.header_index,
            }),
            Row::TrailerExtra(row) => Some(RowKey::Scan(row.key)),
            Row::ScanStatistics(row) => Some(RowKey::Scan(row.key)),
            Row::ScanObject(row) => Some(RowKey::Scan(row.key)),
            Row::CentroidStream(row) => Some(RowKey::Scan(row.key)),
            Row::ScanEvent(row) => Some(RowKey::Scan(row.key)),
            Row::Precursor(row) => Some(RowKey::Precursor(row.key)),
            Row::CentroidScan(row) => Some(RowKey::Scan(row.key)),
        }
    }
}

/// Receiver of emitted rows.
pub trait RowSink {
    /// Accept one fully-formed row.
    fn emit(&mut self, row: Row);
}

/// A row together with its resolved primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRow {
    /// Primary key, surrogate or natural
    pub key: RowKey,
    /// The row itself
    pub row: Row,
}

/// In-memory sink holding every row of one conversion, grouped by table.
#[derive(Debug, Default)]
pub struct PendingRows {
    tables: BTreeMap<TableKind, Vec<KeyedRow>>,
}

impl PendingRows {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows emitted to `table`, in emission order.
    pub fn rows(&self, table: TableKind) -> &[KeyedRow] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rows emitted to `table`.
    pub fn count(&self, table: TableKind) -> usize {
        self.rows(table).len()
    }

    /// Total number of rows across all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RowSink for PendingRows {
    fn emit(&mut self, row: Row) {
        let rows = self.tables.entry(row.table()).or_default();
        let key = row
            .natural_key()
            .unwrap_or(RowKey::Surrogate(rows.len() as i64 + 1));
        rows.push(KeyedRow { key, row });
    }
}

impl RowSink for Vec<Row> {
    fn emit(&mut self, row: Row) {
        self.push(row);
    }
}
