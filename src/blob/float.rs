//! Lossless JSON representation of `f64`.
//!
//! JSON has no spelling for NaN or the infinities and `serde_json` writes
//! them as `null`. These helpers write finite values as numbers and the
//! non-finite ones as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
//! Use them with `#[serde(with = "...")]` on any float that ends up in a blob
//! or in a saved acquisition snapshot.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

#[derive(Deserialize)]
#[serde(untagged)]
enum FloatRepr {
    Number(f64),
    Text(String),
}

impl FloatRepr {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            FloatRepr::Number(value) => Ok(value),
            FloatRepr::Text(text) => match text.as_str() {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                other => Err(E::custom(format!("invalid float literal {other:?}"))),
            },
        }
    }
}

struct JsonFloat(f64);

impl Serialize for JsonFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() {
            serializer.serialize_f64(value)
        } else if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value > 0.0 {
            serializer.serialize_str(INFINITY)
        } else {
            serializer.serialize_str(NEG_INFINITY)
        }
    }
}

/// Serialize one float.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    JsonFloat(*value).serialize(serializer)
}

/// Deserialize one float.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    FloatRepr::deserialize(deserializer)?.into_f64()
}

/// The same treatment for `Vec<f64>`.
pub mod seq {
    use super::*;

    /// Serialize a float sequence.
    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&JsonFloat(*value))?;
        }
        seq.end()
    }

    /// Deserialize a float sequence.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<FloatRepr>::deserialize(deserializer)?
            .into_iter()
            .map(FloatRepr::into_f64)
            .collect()
    }
}

/// The same treatment for `Option<Vec<f64>>`; `None` stays `null`.
pub mod opt_seq {
    use super::*;

    /// Serialize an optional float sequence.
    pub fn serialize<S: Serializer>(
        values: &Option<Vec<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match values {
            Some(values) => serializer.serialize_some(&Seq(values)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional float sequence.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<f64>>, D::Error> {
        Option::<Vec<FloatRepr>>::deserialize(deserializer)?
            .map(|values| {
                values
                    .into_iter()
                    .map(FloatRepr::into_f64)
                    .collect::<Result<Vec<f64>, D::Error>>()
            })
            .transpose()
    }

    struct Seq<'a>(&'a [f64]);

    impl Serialize for Seq<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            super::seq::serialize(self.0, serializer)
        }
    }
}
