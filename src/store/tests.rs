use super::*;
use crate::extract::extract;
use crate::rows::{PendingRows, RowSink, TableKind};
use crate::source::enums::MsOrder;
use crate::source::{
    AcquisitionSnapshot, Device, HeaderItem, InstrumentSnapshot, Reaction, ScanSnapshot,
};
use tempfile::tempdir;

fn pending(last_scan: i32) -> PendingRows {
    let mut instrument = InstrumentSnapshot::with_scan_range(Device::MS, 1, last_scan).with_scan(
        ScanSnapshot::new(1)
            .with_order(MsOrder::Ms2, vec![Some(Reaction::default())])
            .with_peaks(vec![445.12], vec![1.0e6])
            .centroided(),
    );
    instrument.trailer_extra_header = vec![HeaderItem {
        label: "Charge State:".to_string(),
        is_numeric: true,
        ..Default::default()
    }];
    let mut source = AcquisitionSnapshot::new().with_instrument(instrument);
    let mut rows = PendingRows::new();
    extract(&mut source, &mut rows).unwrap();
    rows
}

fn count(conn: &Connection, table: TableKind) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_values_match_columns() {
    let rows = pending(2);
    for table in TableKind::ALL {
        assert!(rows.count(table) > 0, "no sample row for {}", table);
        for keyed in rows.rows(table) {
            assert_eq!(
                records::values(keyed).len(),
                schema::columns(table).len(),
                "{}",
                table
            );
        }
    }
}

#[test]
fn test_commit_writes_every_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sqlite");

    let rows = pending(3);
    let stats = SqliteStore::new().commit(&rows, &path).unwrap();
    assert_eq!(stats.rows_per_table.len(), TableKind::ALL.len());
    assert_eq!(stats.rows_written, rows.len());
    assert!(stats.file_size_bytes > 0);

    let conn = Connection::open(&path).unwrap();
    for table in TableKind::ALL {
        assert_eq!(count(&conn, table) as usize, rows.count(table), "{}", table);
    }
}

#[test]
fn test_commit_replaces_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sqlite");
    let store = SqliteStore::new();

    store.commit(&pending(5), &path).unwrap();
    store.commit(&pending(2), &path).unwrap();

    let conn = Connection::open(&path).unwrap();
    assert_eq!(count(&conn, TableKind::ScanStatistics), 2);
    assert_eq!(count(&conn, TableKind::FileHeader), 1);

    let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn test_commit_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("out").join("run.sqlite");
    SqliteStore::new().commit(&PendingRows::new(), &path).unwrap();
    assert!(path.exists());

    let conn = Connection::open(&path).unwrap();
    assert_eq!(count(&conn, TableKind::CentroidScan), 0);
}

#[test]
fn test_stored_representation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sqlite");
    SqliteStore::new().commit(&pending(1), &path).unwrap();
    let conn = Connection::open(&path).unwrap();

    let (order, valid): (String, i64) = conn
        .query_row(
            "SELECT \"MSOrder\", \"IsValid\" FROM \"ScanEvent\" WHERE \"ScanNumber\" = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(order, "Ms2");
    assert_eq!(valid, 0);

    let (masses, noises): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT \"Masses\", \"Noises\" FROM \"CentroidStream\" WHERE \"ScanNumber\" = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(masses.as_deref(), Some("[445.12]"));
    assert_eq!(noises, None);

    let created: String = conn
        .query_row("SELECT \"CreationDate\" FROM \"FileHeader\"", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(created, "1970-01-01T00:00:00Z");
}

#[test]
fn test_duplicate_key_fails_without_touching_destination() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sqlite");
    let store = SqliteStore::new();
    store.commit(&pending(1), &path).unwrap();
    let before = std::fs::read(&path).unwrap();

    let mut rows = pending(1);
    let duplicate = rows.rows(TableKind::ScanEvent)[0].row.clone();
    rows.emit(duplicate);

    let result = store.commit(&rows, &path);
    assert!(matches!(result, Err(StoreError::SqliteError(_))));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_config_pragmas() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sqlite");
    let store = SqliteStore::with_config(StoreConfig {
        journal_mode: JournalMode::Wal,
        synchronous: Synchronous::Normal,
    });
    store.commit(&pending(1), &path).unwrap();

    let conn = Connection::open(&path).unwrap();
    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "wal");
    assert_eq!(count(&conn, TableKind::Precursor), 1);
}
