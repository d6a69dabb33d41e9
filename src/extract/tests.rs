use super::*;
use crate::rows::{PendingRows, PrecursorKey, RowKey, ScanKey, TableKind};
use crate::source::enums::MsOrder;
use crate::source::{
    AcquisitionSnapshot, AutoSamplerInformation, CentroidStream, Device, FileError, FileHeader,
    HeaderItem, InstrumentContext, InstrumentData, InstrumentSnapshot, RawFileInfo, RawSource,
    Reaction, RunHeader, RunHeaderEx, ScanEvent, ScanObject, ScanSnapshot, ScanStatistics,
    SourceError, TrailerExtra,
};

const PER_SCAN: [TableKind; 5] = [
    TableKind::TrailerExtraInformation,
    TableKind::ScanStatistics,
    TableKind::ScanObject,
    TableKind::CentroidStream,
    TableKind::ScanEvent,
];

fn run(mut source: AcquisitionSnapshot) -> (PendingRows, ExtractionStats) {
    let mut rows = PendingRows::new();
    let stats = extract(&mut source, &mut rows).unwrap();
    (rows, stats)
}

fn reaction(mass: f64) -> Option<Reaction> {
    Some(Reaction {
        precursor_mass: mass,
        ..Default::default()
    })
}

#[test]
fn test_one_row_per_scan_in_range() {
    let source = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 3));
    let (rows, stats) = run(source);

    for table in PER_SCAN {
        assert_eq!(rows.count(table), 3, "{}", table);
    }
    let scans: Vec<_> = rows
        .rows(TableKind::ScanEvent)
        .iter()
        .map(|r| r.key)
        .collect();
    assert_eq!(
        scans,
        (1..=3)
            .map(|s| RowKey::Scan(ScanKey::new(1, s)))
            .collect::<Vec<_>>()
    );
    assert_eq!(stats.instruments, 1);
    assert_eq!(stats.scans, 3);
}

#[test]
fn test_file_rows_emitted_once() {
    let source = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 1));
    let (rows, _) = run(source);

    for table in [
        TableKind::FileHeader,
        TableKind::AutoSamplerInformation,
        TableKind::RawFile,
    ] {
        assert_eq!(rows.count(table), 1);
        assert_eq!(rows.rows(table)[0].key, RowKey::Surrogate(1));
    }

    let Row::RawFile(raw_file) = &rows.rows(TableKind::RawFile)[0].row else {
        panic!("expected a RawFile row");
    };
    assert_eq!(raw_file.instrument_count, 1);
    assert!(raw_file.is_open);
}

#[test]
fn test_empty_scan_range() {
    let source = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 5, 4));
    let (rows, stats) = run(source);

    for table in PER_SCAN {
        assert_eq!(rows.count(table), 0);
    }
    assert_eq!(rows.count(TableKind::RunHeaderEx), 1);
    assert_eq!(stats.scans, 0);
}

#[test]
fn test_no_instruments() {
    let (rows, stats) = run(AcquisitionSnapshot::new());
    assert_eq!(rows.count(TableKind::InstrumentType), 0);
    assert_eq!(rows.count(TableKind::RawFile), 1);
    assert_eq!(stats.instruments, 0);
}

#[test]
fn test_precursor_rows_follow_ms_order() {
    let instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 4)
        .with_scan(ScanSnapshot::new(1).with_order(MsOrder::Ms, vec![reaction(1.0)]))
        .with_scan(ScanSnapshot::new(2).with_order(MsOrder::Ms2, vec![reaction(445.12)]))
        .with_scan(
            ScanSnapshot::new(3).with_order(MsOrder::Ms3, vec![reaction(600.3), reaction(410.2)]),
        )
        .with_scan(ScanSnapshot::new(4).with_order(MsOrder::Ms3, vec![None, reaction(388.1)]));
    let (rows, stats) = run(AcquisitionSnapshot::new().with_instrument(instrument));

    let keys: Vec<_> = rows
        .rows(TableKind::Precursor)
        .iter()
        .map(|r| r.key)
        .collect();
    let expected: Vec<_> = [(2, 0), (3, 0), (3, 1), (4, 1)]
        .into_iter()
        .map(|(scan, order)| {
            RowKey::Precursor(PrecursorKey {
                scan: ScanKey::new(1, scan),
                order,
            })
        })
        .collect();
    assert_eq!(keys, expected);
    assert_eq!(stats.precursors, 4);
    assert_eq!(stats.skipped_reactions, 1);

    let Row::Precursor(last) = &rows.rows(TableKind::Precursor)[3].row else {
        panic!("expected a Precursor row");
    };
    assert_eq!(last.precursor_mass, 388.1);
}

#[test]
fn test_centroid_scan_only_for_centroid_mode() {
    let instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 3).with_scan(
        ScanSnapshot::new(3)
            .with_peaks(vec![100.0, 200.0], vec![5.0, 6.0])
            .centroided(),
    );
    let (rows, stats) = run(AcquisitionSnapshot::new().with_instrument(instrument));

    assert_eq!(rows.count(TableKind::CentroidScan), 1);
    assert_eq!(
        rows.rows(TableKind::CentroidScan)[0].key,
        RowKey::Scan(ScanKey::new(1, 3))
    );
    assert_eq!(stats.centroid_scans, 1);

    let Row::CentroidScan(row) = &rows.rows(TableKind::CentroidScan)[0].row else {
        panic!("expected a CentroidScan row");
    };
    assert_eq!(row.peaks.length, 2);
}

#[test]
fn test_instruments_walked_in_order() {
    let mut uv = InstrumentSnapshot::with_scan_range(Device::UV, 1, 2);
    uv.trailer_extra_header = vec![
        HeaderItem {
            label: "Wavelength:".to_string(),
            ..Default::default()
        },
        HeaderItem {
            label: "Bandwidth:".to_string(),
            ..Default::default()
        },
    ];
    let source = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 3))
        .with_instrument(uv);
    let (rows, stats) = run(source);

    let types: Vec<_> = rows
        .rows(TableKind::InstrumentType)
        .iter()
        .map(|r| match &r.row {
            Row::InstrumentType(row) => (row.index, row.instrument_type),
            other => panic!("unexpected row {:?}", other.table()),
        })
        .collect();
    assert_eq!(types, vec![(1, Device::MS), (2, Device::UV)]);

    let header_keys: Vec<_> = rows
        .rows(TableKind::TrailerExtraHeaderInformation)
        .iter()
        .map(|r| r.key)
        .collect();
    assert_eq!(
        header_keys,
        vec![
            RowKey::HeaderField {
                instrument: 2,
                index: 0
            },
            RowKey::HeaderField {
                instrument: 2,
                index: 1
            },
        ]
    );
    assert_eq!(rows.count(TableKind::ScanStatistics), 5);
    assert_eq!(stats.instruments, 2);
}

#[test]
fn test_missing_scan_aborts() {
    let mut instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 3);
    instrument.scans.remove(&2);
    let mut source = AcquisitionSnapshot::new().with_instrument(instrument);
    let mut rows = PendingRows::new();

    let err = extract(&mut source, &mut rows).unwrap_err();
    match err {
        ExtractError::Source {
            scope: Scope::Scan(key),
            source: SourceError::ScanOutOfRange { .. },
        } => assert_eq!(key, ScanKey::new(1, 2)),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_missing_centroid_scan_aborts() {
    let mut scan = ScanSnapshot::new(1);
    scan.statistics.is_centroid_scan = true;
    let mut source = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 1).with_scan(scan));
    let mut rows = PendingRows::new();

    let err = extract(&mut source, &mut rows).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Source {
            source: SourceError::MissingData(_),
            ..
        }
    ));
    assert!(err.to_string().starts_with("Source error at instrument 1 scan 1"));
}

/// Snapshot whose device table disagrees with the slot at `index1`.
struct MislabelledSlot {
    inner: AcquisitionSnapshot,
    index1: i32,
    reported: Device,
}

impl RawSource for MislabelledSlot {
    fn is_error(&self) -> bool {
        self.inner.is_error()
    }

    fn file_error(&self) -> FileError {
        self.inner.file_error()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn in_acquisition(&self) -> bool {
        self.inner.in_acquisition()
    }

    fn file_header(&self) -> Result<FileHeader, SourceError> {
        self.inner.file_header()
    }

    fn auto_sampler(&self) -> Result<AutoSamplerInformation, SourceError> {
        self.inner.auto_sampler()
    }

    fn raw_file_info(&self) -> Result<RawFileInfo, SourceError> {
        self.inner.raw_file_info()
    }

    fn instrument_count(&self) -> i32 {
        self.inner.instrument_count()
    }

    fn instrument_type(&self, index0: i32) -> Result<Device, SourceError> {
        if index0 + 1 == self.index1 {
            return Ok(self.reported);
        }
        self.inner.instrument_type(index0)
    }

    fn select_instrument(
        &mut self,
        device: Device,
        index1: i32,
    ) -> Result<InstrumentContext, SourceError> {
        self.inner.select_instrument(device, index1)
    }

    fn instrument_data(&self, ctx: &InstrumentContext) -> Result<InstrumentData, SourceError> {
        self.inner.instrument_data(ctx)
    }

    fn run_header(&self, ctx: &InstrumentContext) -> Result<RunHeader, SourceError> {
        self.inner.run_header(ctx)
    }

    fn run_header_ex(&self, ctx: &InstrumentContext) -> Result<RunHeaderEx, SourceError> {
        self.inner.run_header_ex(ctx)
    }

    fn trailer_extra_header(
        &self,
        ctx: &InstrumentContext,
    ) -> Result<Vec<HeaderItem>, SourceError> {
        self.inner.trailer_extra_header(ctx)
    }

    fn trailer_extra(&self, ctx: &InstrumentContext, scan: i32) -> Result<TrailerExtra, SourceError> {
        self.inner.trailer_extra(ctx, scan)
    }

    fn scan_statistics(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<ScanStatistics, SourceError> {
        self.inner.scan_statistics(ctx, scan)
    }

    fn scan(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanObject, SourceError> {
        self.inner.scan(ctx, scan)
    }

    fn centroid_stream(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        merge_segments: bool,
    ) -> Result<CentroidStream, SourceError> {
        self.inner.centroid_stream(ctx, scan, merge_segments)
    }

    fn scan_event(&self, ctx: &InstrumentContext, scan: i32) -> Result<ScanEvent, SourceError> {
        self.inner.scan_event(ctx, scan)
    }

    fn reaction(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
        order: i32,
    ) -> Result<Option<Reaction>, SourceError> {
        self.inner.reaction(ctx, scan, order)
    }

    fn centroid_scan(
        &self,
        ctx: &InstrumentContext,
        scan: i32,
    ) -> Result<CentroidStream, SourceError> {
        self.inner.centroid_scan(ctx, scan)
    }
}

#[test]
fn test_failed_selection_aborts_with_instrument_scope() {
    let mut source = MislabelledSlot {
        inner: AcquisitionSnapshot::new()
            .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 2))
            .with_instrument(InstrumentSnapshot::with_scan_range(Device::UV, 1, 2)),
        index1: 2,
        reported: Device::Pda,
    };
    let mut rows = PendingRows::new();

    let err = extract(&mut source, &mut rows).unwrap_err();
    match &err {
        ExtractError::Source {
            scope: Scope::Instrument(2),
            source:
                SourceError::InstrumentMismatch {
                    index: 2,
                    requested: Device::Pda,
                    actual: Device::UV,
                },
        } => {}
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().starts_with("Source error at instrument 2:"));

    // The first instrument was walked completely before the abort.
    assert_eq!(rows.count(TableKind::InstrumentType), 2);
    assert_eq!(rows.count(TableKind::InstrumentData), 1);
    assert_eq!(rows.count(TableKind::ScanEvent), 2);
}
