//! # Array Serializer
//!
//! Array-valued and structured fields never reach the store as native
//! arrays. Each is encoded by the [`BlobCodec`] of its field kind into a
//! [`Blob`]: nullable JSON text that remembers which kind produced it.
//!
//! | Codec | Value | Used for |
//! |-------|-------|----------|
//! | [`Floats`] | `Vec<f64>` | masses, intensities, noises, resolutions, baselines, charges, coefficients, preferred arrays |
//! | [`PeakFlags`] | `Vec<PeakOptions>` | per-peak flags |
//! | [`TextList`] | `Vec<String>` | channel labels, user labels, trailer labels and values |
//! | [`UnitList`] | `Vec<DataUnits>` | channel units |
//! | [`LabelPeaks`] | `Vec<LabelPeak>` | annotated centroids |
//! | [`Segments`] | `SegmentedScan` | segmented scan structure |
//! | [`FileErrorDetail`] | `FileError` | file error details |
//!
//! Guarantees for every codec:
//!
//! 1. Deterministic: equal inputs encode to identical text.
//! 2. Absent (`None`, stored as NULL) is distinct from empty (`[]`).
//! 3. Lossless: `decode(encode(x)) == x`, non-finite floats included.
//!
//! ```
//! use raw2sqlite::blob::{BlobCodec, Floats};
//!
//! let masses = vec![445.12, 445.35, f64::NAN];
//! let blob = Floats::encode(Some(&masses))?;
//! assert_eq!(blob.as_text(), Some(r#"[445.12,445.35,"NaN"]"#));
//!
//! let absent = Floats::encode(None)?;
//! assert!(absent.is_absent());
//! # Ok::<(), raw2sqlite::blob::BlobError>(())
//! ```

mod codec;
mod error;
pub mod float;

#[cfg(test)]
mod tests;

use std::fmt;

pub use codec::{
    BlobCodec, FileErrorDetail, Floats, LabelPeaks, PeakFlags, Segments, TextList, UnitList,
};
pub use error::BlobError;

/// Field kind a blob was encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobKind {
    /// Numeric sequence
    Floats,
    /// Peak option bits
    PeakFlags,
    /// Text labels
    TextList,
    /// Channel units
    UnitList,
    /// Annotated centroids
    LabelPeaks,
    /// Segmented scan
    Segments,
    /// File error details
    FileError,
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlobKind::Floats => "floats",
            BlobKind::PeakFlags => "peak-flags",
            BlobKind::TextList => "text-list",
            BlobKind::UnitList => "unit-list",
            BlobKind::LabelPeaks => "label-peaks",
            BlobKind::Segments => "segments",
            BlobKind::FileError => "file-error",
        };
        f.write_str(name)
    }
}

/// Serialized form of one array or structured field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    kind: BlobKind,
    text: Option<String>,
}

impl Blob {
    /// Rebuild a blob from stored text, e.g. a column read back from the
    /// database, so it can be decoded with the codec of `kind`.
    pub fn from_stored(kind: BlobKind, text: Option<String>) -> Self {
        Self { kind, text }
    }

    /// Kind this blob was encoded as.
    pub fn kind(&self) -> BlobKind {
        self.kind
    }

    /// Encoded text, `None` when the value was absent.
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the encoded value was absent.
    pub fn is_absent(&self) -> bool {
        self.text.is_none()
    }
}
