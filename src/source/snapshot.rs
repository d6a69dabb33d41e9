//! A raw source backed by an in-memory acquisition snapshot.
//!
//! An [`AcquisitionSnapshot`] is a serde model of the complete object graph a
//! vendor reader exposes: file state, file-level descriptors and, per
//! instrument, its descriptors plus per-scan data keyed by scan number. It is
//! stored as JSON, which makes it usable both as a replayable dump of a real
//! acquisition and as a synthetic source in tests.
//!
//! ```no_run
//! use raw2sqlite::source::{AcquisitionSnapshot, Device, InstrumentSnapshot, ScanSnapshot};
//!
//! let instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 3)
//!     .with_scan(ScanSnapshot::new(3).centroided());
//! let snapshot = AcquisitionSnapshot::new().with_instrument(instrument);
//! snapshot.save("synthetic.json")?;
//! # Ok::<(), raw2sqlite::source::SourceError>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::enums::{Device, MsOrder};
use super::error::SourceError;
use super::types::{
    AutoSamplerInformation, CentroidStream, FileError, FileHeader, HeaderItem, InstrumentContext,
    InstrumentData, RawFileInfo, Reaction, RunHeader, RunHeaderEx, ScanEvent, ScanObject,
    ScanStatistics, TrailerExtra,
};
use super::{RawSource, SourceOpener};

/// Everything a source knows about one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSnapshot {
    /// Trailer-extra values
    pub trailer_extra: TrailerExtra,
    /// Scan statistics
    pub statistics: ScanStatistics,
    /// Processed scan object
    pub scan: ScanObject,
    /// Unmerged centroid stream
    pub centroid_stream: CentroidStream,
    /// Scan event
    pub event: ScanEvent,
    /// Precursor reactions by order index; `None` marks an absent reaction
    pub reactions: Vec<Option<Reaction>>,
    /// Centroid-scan result, present for centroid-mode scans
    pub centroid_scan: Option<CentroidStream>,
}

impl ScanSnapshot {
    /// A profile-mode MS1 scan with empty peak arrays.
    pub fn new(scan_number: i32) -> Self {
        let mut snapshot = Self::default();
        snapshot.statistics.scan_number = scan_number;
        snapshot.centroid_stream.scan_number = scan_number;
        snapshot.centroid_stream.masses = Some(Vec::new());
        snapshot.centroid_stream.intensities = Some(Vec::new());
        snapshot
    }

    /// Mark the scan as centroid-mode and attach a centroid-scan result
    /// mirroring its centroid stream.
    pub fn centroided(mut self) -> Self {
        self.statistics.is_centroid_scan = true;
        let mut centroids = self.centroid_stream.clone();
        centroids.label_peaks = None;
        self.centroid_scan = Some(centroids);
        self
    }

    /// Make this an MS^n scan of the given order with the given reactions.
    pub fn with_order(mut self, order: MsOrder, reactions: Vec<Option<Reaction>>) -> Self {
        self.event.ms_order = order;
        self.reactions = reactions;
        self
    }

    /// Replace the centroid peak arrays.
    pub fn with_peaks(mut self, masses: Vec<f64>, intensities: Vec<f64>) -> Self {
        self.centroid_stream.masses = Some(masses);
        self.centroid_stream.intensities = Some(intensities);
        self
    }
}

/// One declared instrument with its descriptors and scans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentSnapshot {
    /// Device type of the slot
    pub device: Device,
    /// Static descriptor
    pub data: InstrumentData,
    /// Basic run header
    pub run_header: RunHeader,
    /// Extended run header, source of the scan range
    pub run_header_ex: RunHeaderEx,
    /// Trailer-extra schema
    pub trailer_extra_header: Vec<HeaderItem>,
    /// Per-scan data keyed by scan number
    pub scans: BTreeMap<i32, ScanSnapshot>,
}

impl InstrumentSnapshot {
    /// An instrument declaring scans `first..=last`, each filled with
    /// [`ScanSnapshot::new`].
    pub fn with_scan_range(device: Device, first: i32, last: i32) -> Self {
        let mut instrument = Self {
            device,
            ..Self::default()
        };
        instrument.run_header.first_spectrum = first;
        instrument.run_header.last_spectrum = last;
        instrument.run_header_ex.first_spectrum = first;
        instrument.run_header_ex.last_spectrum = last;
        instrument.run_header_ex.spectra_count = (last - first + 1).max(0);
        instrument.scans = (first..=last).map(|s| (s, ScanSnapshot::new(s))).collect();
        instrument
    }

    /// Insert or replace the scan with the snapshot's own scan number.
    pub fn with_scan(mut self, scan: ScanSnapshot) -> Self {
        self.scans.insert(scan.statistics.scan_number, scan);
        self
    }
}

/// Complete acquisition object graph, usable as a [`RawSource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionSnapshot {
    /// Reader reported an internal error
    pub is_error: bool,
    /// Error details
    pub file_error: FileError,
    /// File opened successfully
    pub is_open: bool,
    /// File still being acquired
    pub in_acquisition: bool,
    /// File header block
    pub file_header: FileHeader,
    /// Autosampler configuration
    pub auto_sampler: AutoSamplerInformation,
    /// File-level summary
    pub raw_file: RawFileInfo,
    /// Declared instruments in slot order
    pub instruments: Vec<InstrumentSnapshot>,
    #[serde(skip)]
    selected: Option<InstrumentContext>,
}

impl Default for AcquisitionSnapshot {
    fn default() -> Self {
        Self {
            is_error: false,
            file_error: FileError::default(),
            is_open: true,
            in_acquisition: false,
            file_header: FileHeader::default(),
            auto_sampler: AutoSamplerInformation::default(),
            raw_file: RawFileInfo::default(),
            instruments: Vec::new(),
            selected: None,
        }
    }
}

impl AcquisitionSnapshot {
    /// An open, error-free snapshot without instruments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instrument slot.
    pub fn with_instrument(mut self, instrument: InstrumentSnapshot) -> Self {
        self.instruments.push(instrument);
        self
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a snapshot from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SourceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot as JSON to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SourceError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    fn instrument(&self, ctx: &InstrumentContext) -> Result<&InstrumentSnapshot, SourceError> {
        if self.selected.as_ref() != Some(ctx) {
            return Err(SourceError::StaleContext { index: ctx.index() });
        }
        self.slot(ctx.index())
    }

    fn slot(&self, index1: i32) -> Result<&InstrumentSnapshot, SourceError> {
        usize::try_from(index1 - 1)
            .ok()
            .and_then(|i| self.instruments.get(i))
            .ok_or(SourceError::InstrumentOutOfRange {
                index: index1,
                count: self.instrument_count(),
            })
    }

    fn scan_of(&self, ctx: &InstrumentContext, scan: i32) -> Result<&ScanSnapshot, SourceError> {
        self.instrument(ctx)?
            .scans
            .get(&scan)
            .ok_or(SourceError::ScanOutOfRange {
                instrument: ctx.index(),
                scan,
            })
    }
}

impl RawSource for AcquisitionSnapshot {
    fn is_error(&self) -> bool {
        self.is_error
    }

    fn file_error(&self) -> FileError {
        self.file_error.clone()
    }

    fn is_open(&self) -> bool {
        self.is_open
    }

    fn in_acquisition(&self) -> bool {
        self.in_acquisition
    }

    fn file_header(&self) -> Result<FileHeader, SourceError> {
        Ok(self.file_header.clone())
    }

    fn auto_sampler(&self) -> Result<AutoSamplerInformation, SourceError> {
        Ok(self.auto_sampler.clone())
    }

    fn raw_file_info(&self) -> Result<RawFileInfo, SourceError> {
        Ok(self.raw_file.clone())
    }

    fn instrument_count(&self) -> i32 {
        i32::try_from(self.instruments.len()).unwrap_or(i32::MAX)
    }

    fn instrument_type(&self, index0: i32) -> Result<Device, SourceError> {
        Ok(self.slot(index0 + 1)?.device)
    }

    fn select_instrument(
        &mut self,
        device: Device,
        index1: i32,
    ) -> Result<InstrumentContext, SourceError> {
        let actual = self.slot(index1)?.device;
        if actual != device {
            return Err(SourceError::InstrumentMismatch {
                index: index1,
                requested: device,
                actual,
            });
        }
        let ctx = InstrumentContext::new(device, index1);
        self.selected = Some(ctx);
        Ok(ctx)
    }

    fn instrument_data(&self, ctx: &InstrumentContext) -> Result<InstrumentData, SourceError> {
        Ok(self.instrument(ctx)?.data.clone())
    }

    fn run_header(&self, ctx: &InstrumentContext) -> Result<RunHeader, SourceError> {
        Ok(self.instrument(ctx)?.run_header.clone())
    }

    fn run_header_ex(&self, ctx: &InstrumentContext) -> Result<RunHeaderEx, SourceError> {
        Ok(self.instrument(ctx)?.run_header_ex.clone())
    }

    fn trailer_extra_header(
        &self,
        ctx: &InstrumentContext,
    ) -> Result<Vec<HeaderItem>, SourceError> {
        Ok(self.instrument(ctx)?.trailer_extra_header.clone())
    }

    fn trailer_extra(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<TrailerExtra, SourceError> {
        Ok(self.scan_of(ctx, scan)?.trailer_extra.clone())
    }

    fn scan_statistics(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<ScanStatistics, SourceError> {
        Ok(self.scan_of(ctx, scan)?.statistics.clone())
    }

    fn scan(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanObject, SourceError> {
        Ok(self.scan_of(ctx, scan)?.scan.clone())
    }

    // Snapshots hold the stream as acquired, so merging is a no-op here.
    fn centroid_stream(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        _merge_segments: bool,
    ) -> Result<CentroidStream, SourceError> {
        Ok(self.scan_of(ctx, scan)?.centroid_stream.clone())
    }

    fn scan_event(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanEvent, SourceError> {
        Ok(self.scan_of(ctx, scan)?.event.clone())
    }

    fn reaction(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        order: i32,
    ) -> Result<Option<Reaction>, SourceError> {
        let reactions = &self.scan_of(ctx, scan)?.reactions;
        Ok(usize::try_from(order)
            .ok()
            .and_then(|i| reactions.get(i))
            .cloned()
            .flatten())
    }

    fn centroid_scan(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<CentroidStream, SourceError> {
        self.scan_of(ctx, scan)?.centroid_scan.clone().ok_or_else(|| {
            SourceError::MissingData(format!(
                "centroid scan {} of instrument {}",
                scan,
                ctx.index()
            ))
        })
    }
}

/// Opens JSON acquisition snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotOpener;

impl SourceOpener for SnapshotOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn RawSource>, SourceError> {
        if !path.exists() {
            return Err(SourceError::OpenError(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        let snapshot = AcquisitionSnapshot::from_path(path)
            .map_err(|e| SourceError::OpenError(format!("{}: {}", path.display(), e)))?;
        Ok(Box::new(snapshot))
    }
}
