use serde::{Deserialize, Serialize};

use super::{float, Blob, BlobError, BlobKind};
use crate::source::enums::{DataUnits, PeakOptions};
use crate::source::types::{FileError, LabelPeak, SegmentedScan};

/// Typed encode/decode pair for one field kind.
///
/// `encode(None)` yields an absent blob (SQL NULL), `encode(Some(&[]))` an
/// empty JSON array, so the two never collapse into each other. Decoding
/// checks the blob's kind before touching its text.
pub trait BlobCodec {
    /// Kind tag carried by blobs of this codec.
    const KIND: BlobKind;

    /// Decoded value type.
    type Value;

    /// Encode a present value to text.
    fn encode_value(value: &Self::Value) -> Result<String, BlobError>;

    /// Decode text produced by [`encode_value`](Self::encode_value).
    fn decode_value(text: &str) -> Result<Self::Value, BlobError>;

    /// Encode an optional value.
    fn encode(value: Option<&Self::Value>) -> Result<Blob, BlobError> {
        let text = value.map(Self::encode_value).transpose()?;
        Ok(Blob {
            kind: Self::KIND,
            text,
        })
    }

    /// Decode a blob of this codec's kind back to the optional value.
    fn decode(blob: &Blob) -> Result<Option<Self::Value>, BlobError> {
        if blob.kind != Self::KIND {
            return Err(BlobError::KindMismatch {
                expected: Self::KIND,
                found: blob.kind,
            });
        }
        blob.text.as_deref().map(Self::decode_value).transpose()
    }
}

/// Implements [`BlobCodec`] as plain `serde_json` text of the value.
macro_rules! json_codec {
    ($(#[$meta:meta])* $codec:ident, $kind:expr, $value:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $codec;

        impl BlobCodec for $codec {
            const KIND: BlobKind = $kind;
            type Value = $value;

            fn encode_value(value: &Self::Value) -> Result<String, BlobError> {
                Ok(serde_json::to_string(value)?)
            }

            fn decode_value(text: &str) -> Result<Self::Value, BlobError> {
                Ok(serde_json::from_str(text)?)
            }
        }
    };
}

json_codec!(
    /// Per-peak option bits, one integer per peak.
    PeakFlags,
    BlobKind::PeakFlags,
    Vec<PeakOptions>
);
json_codec!(
    /// Text labels.
    TextList,
    BlobKind::TextList,
    Vec<String>
);
json_codec!(
    /// Channel units by variant name.
    UnitList,
    BlobKind::UnitList,
    Vec<DataUnits>
);
json_codec!(
    /// Annotated centroids.
    LabelPeaks,
    BlobKind::LabelPeaks,
    Vec<LabelPeak>
);
json_codec!(
    /// Segmented scan structure.
    Segments,
    BlobKind::Segments,
    SegmentedScan
);
json_codec!(
    /// File error details.
    FileErrorDetail,
    BlobKind::FileError,
    FileError
);

/// Numeric sequences, with non-finite values spelled out.
#[derive(Debug, Clone, Copy)]
pub struct Floats;

#[derive(Serialize)]
#[serde(transparent)]
struct FloatsOut<'a>(#[serde(with = "float::seq")] &'a [f64]);

#[derive(Deserialize)]
#[serde(transparent)]
struct FloatsIn(#[serde(with = "float::seq")] Vec<f64>);

impl BlobCodec for Floats {
    const KIND: BlobKind = BlobKind::Floats;
    type Value = Vec<f64>;

    fn encode_value(value: &Self::Value) -> Result<String, BlobError> {
        Ok(serde_json::to_string(&FloatsOut(value))?)
    }

    fn decode_value(text: &str) -> Result<Self::Value, BlobError> {
        let FloatsIn(values) = serde_json::from_str(text)?;
        Ok(values)
    }
}
