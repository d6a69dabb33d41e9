use std::fmt;

/// Composite key of every per-scan table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScanKey {
    /// 1-based instrument index
    pub instrument: i32,
    /// Scan number within the instrument's range
    pub scan: i32,
}

impl ScanKey {
    /// Key for `scan` of `instrument`.
    pub fn new(instrument: i32, scan: i32) -> Self {
        Self { instrument, scan }
    }

    /// Key of the precursor at `order` of this scan.
    pub fn precursor(self, order: i32) -> PrecursorKey {
        PrecursorKey { scan: self, order }
    }
}

/// Composite key of the Precursor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrecursorKey {
    /// Owning scan
    pub scan: ScanKey,
    /// Zero-based precursor order index
    pub order: i32,
}

/// Primary key of one emitted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    /// Surrogate key assigned at emission, 1-based per table
    Surrogate(i64),
    /// Instrument index
    Instrument(i32),
    /// Trailer-extra header field of an instrument
    HeaderField {
        /// 1-based instrument index
        instrument: i32,
        /// Zero-based position in the header schema
        index: i32,
    },
    /// Per-scan row
    Scan(ScanKey),
    /// Precursor reaction of a scan
    Precursor(PrecursorKey),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Surrogate(key) => write!(f, "#{}", key),
            RowKey::Instrument(index) => write!(f, "instrument {}", index),
            RowKey::HeaderField { instrument, index } => {
                write!(f, "instrument {} header field {}", instrument, index)
            }
            RowKey::Scan(key) => write!(f, "instrument {} scan {}", key.instrument, key.scan),
            RowKey::Precursor(key) => write!(
                f,
                "instrument {} scan {} precursor {}",
                key.scan.instrument, key.scan.scan, key.order
            ),
        }
    }
}
