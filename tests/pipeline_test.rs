//! End-to-end tests: snapshot file on disk to SQLite database.

use std::path::Path;

use raw2sqlite::converter::{ConversionError, RawConverter};
use raw2sqlite::gate::Readiness;
use raw2sqlite::rows::TableKind;
use raw2sqlite::source::{
    AcquisitionSnapshot, Device, FileError, InstrumentSnapshot, MsOrder, Reaction, ScanSnapshot,
};
use rusqlite::Connection;
use tempfile::tempdir;

fn count(conn: &Connection, table: TableKind) -> i64 {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM \"{}\"", table.name()),
        [],
        |row| row.get(0),
    )
    .unwrap()
}

fn three_scan_snapshot() -> AcquisitionSnapshot {
    let instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 3)
        .with_scan(ScanSnapshot::new(3).with_peaks(vec![445.12, 446.12], vec![1.0e6, 2.5e5]).centroided());
    AcquisitionSnapshot::new().with_instrument(instrument)
}

fn write_snapshot(snapshot: &AcquisitionSnapshot, path: &Path) {
    snapshot.save(path).unwrap();
}

/// One instrument, three MS1 scans, only scan 3 in centroid mode.
#[test]
fn test_three_scan_acquisition() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("run01.raw");
    let output = dir.path().join("run01.sqlite");
    write_snapshot(&three_scan_snapshot(), &input);

    let stats = RawConverter::new().convert(&input, &output).unwrap();
    assert_eq!(stats.extraction.instruments, 1);
    assert_eq!(stats.extraction.scans, 3);
    assert_eq!(stats.extraction.precursors, 0);
    assert_eq!(stats.extraction.centroid_scans, 1);

    let conn = Connection::open(&output).unwrap();
    for table in [
        TableKind::FileHeader,
        TableKind::AutoSamplerInformation,
        TableKind::RawFile,
        TableKind::InstrumentType,
        TableKind::InstrumentData,
        TableKind::RunHeader,
        TableKind::RunHeaderEx,
    ] {
        assert_eq!(count(&conn, table), 1, "{}", table);
    }
    for table in [
        TableKind::TrailerExtraInformation,
        TableKind::ScanStatistics,
        TableKind::ScanObject,
        TableKind::CentroidStream,
        TableKind::ScanEvent,
    ] {
        assert_eq!(count(&conn, table), 3, "{}", table);
    }
    assert_eq!(count(&conn, TableKind::Precursor), 0);
    assert_eq!(count(&conn, TableKind::CentroidScan), 1);

    let scan: i64 = conn
        .query_row("SELECT \"ScanNumber\" FROM \"CentroidScan\"", [], |row| row.get(0))
        .unwrap();
    assert_eq!(scan, 3);
}

/// An errored source exits with -2 and never creates the destination.
#[test]
fn test_source_error_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.raw");
    let output = dir.path().join("broken.sqlite");

    let mut snapshot = three_scan_snapshot();
    snapshot.is_error = true;
    snapshot.file_error = FileError {
        error_code: 7,
        error_message: "bad checksum".to_string(),
        has_error: true,
        ..FileError::default()
    };
    write_snapshot(&snapshot, &input);

    let err = RawConverter::new().convert(&input, &output).unwrap_err();
    assert_eq!(err.exit_code(), -2);
    match err {
        ConversionError::Precondition(readiness) => {
            assert_eq!(readiness, Readiness::SourceError("bad checksum".to_string()));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(!output.exists());
}

/// A second run replaces the first database instead of appending to it.
#[test]
fn test_rerun_replaces_destination() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("run02.raw");
    let output = dir.path().join("run02.sqlite");

    write_snapshot(&three_scan_snapshot(), &input);
    RawConverter::new().convert(&input, &output).unwrap();

    let smaller = AcquisitionSnapshot::new()
        .with_instrument(InstrumentSnapshot::with_scan_range(Device::MS, 1, 1));
    write_snapshot(&smaller, &input);
    RawConverter::new().convert(&input, &output).unwrap();

    let conn = Connection::open(&output).unwrap();
    assert_eq!(count(&conn, TableKind::ScanEvent), 1);
    assert_eq!(count(&conn, TableKind::FileHeader), 1);
    assert_eq!(count(&conn, TableKind::CentroidScan), 0);
}

/// MS3 scans get one precursor row per present reaction.
#[test]
fn test_msn_precursors() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("msn.raw");
    let output = dir.path().join("msn.sqlite");

    let reaction = |mass: f64| Reaction {
        precursor_mass: mass,
        ..Reaction::default()
    };
    let instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 3)
        .with_scan(ScanSnapshot::new(2).with_order(MsOrder::Ms2, vec![Some(reaction(445.12))]))
        .with_scan(
            ScanSnapshot::new(3)
                .with_order(MsOrder::Ms3, vec![Some(reaction(445.12)), Some(reaction(301.5))]),
        );
    write_snapshot(&AcquisitionSnapshot::new().with_instrument(instrument), &input);

    let stats = RawConverter::new().convert(&input, &output).unwrap();
    assert_eq!(stats.extraction.precursors, 3);

    let conn = Connection::open(&output).unwrap();
    let mut stmt = conn
        .prepare(
            "SELECT \"ScanNumber\", \"OrderIndex\" FROM \"Precursor\" \
             ORDER BY \"ScanNumber\", \"OrderIndex\"",
        )
        .unwrap();
    let keys: Vec<(i64, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(keys, vec![(2, 0), (3, 0), (3, 1)]);
}

/// Non-finite values saved in a snapshot convert; inside blobs they keep
/// their spelling, as scalar REAL columns NaN reads back as NULL.
#[test]
fn test_non_finite_values_convert() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("noisy.raw");
    let output = dir.path().join("noisy.sqlite");

    let mut scan = ScanSnapshot::new(1).with_peaks(
        vec![100.0, f64::NAN, f64::INFINITY],
        vec![1.0, 2.0, f64::NEG_INFINITY],
    );
    scan.statistics.tic = f64::NAN;
    let mut instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, 1).with_scan(scan);
    instrument.run_header.max_integrated_intensity = f64::INFINITY;
    write_snapshot(&AcquisitionSnapshot::new().with_instrument(instrument), &input);

    RawConverter::new().convert(&input, &output).unwrap();

    let conn = Connection::open(&output).unwrap();
    let (masses, intensities): (String, String) = conn
        .query_row(
            "SELECT \"Masses\", \"Intensities\" FROM \"CentroidStream\"",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(masses, r#"[100.0,"NaN","Infinity"]"#);
    assert_eq!(intensities, r#"[1.0,2.0,"-Infinity"]"#);

    let tic: Option<f64> = conn
        .query_row("SELECT \"TIC\" FROM \"ScanStatistics\"", [], |row| row.get(0))
        .unwrap();
    assert_eq!(tic, None);

    let max: f64 = conn
        .query_row(
            "SELECT \"MaxIntegratedIntensity\" FROM \"RunHeader\"",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(max, f64::INFINITY);
}
