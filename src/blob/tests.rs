use super::*;
use crate::source::enums::{DataUnits, PeakOptions};
use crate::source::types::{FileError, LabelPeak, MassRange, SegmentedScan};
use proptest::prelude::*;

#[test]
fn test_floats_round_trip_shapes() {
    for values in [vec![], vec![445.12], vec![100.0, 200.5, 300.25, -0.0]] {
        let blob = Floats::encode(Some(&values)).unwrap();
        assert_eq!(Floats::decode(&blob).unwrap(), Some(values));
    }
}

#[test]
fn test_absent_distinct_from_empty() {
    let absent = Floats::encode(None).unwrap();
    let empty = Floats::encode(Some(&Vec::new())).unwrap();

    assert!(absent.is_absent());
    assert_eq!(absent.as_text(), None);
    assert_eq!(empty.as_text(), Some("[]"));
    assert_ne!(absent, empty);

    assert_eq!(Floats::decode(&absent).unwrap(), None);
    assert_eq!(Floats::decode(&empty).unwrap(), Some(Vec::new()));
}

#[test]
fn test_absent_distinct_from_empty_text() {
    let absent = TextList::encode(None).unwrap();
    let empty = TextList::encode(Some(&Vec::new())).unwrap();
    let blank = TextList::encode(Some(&vec![String::new()])).unwrap();

    assert_eq!(absent.as_text(), None);
    assert_eq!(empty.as_text(), Some("[]"));
    assert_eq!(blank.as_text(), Some(r#"[""]"#));
}

#[test]
fn test_non_finite_floats_survive() {
    let values = vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.0];
    let blob = Floats::encode(Some(&values)).unwrap();
    assert_eq!(blob.as_text(), Some(r#"["NaN","Infinity","-Infinity",1.0]"#));

    let back = Floats::decode(&blob).unwrap().unwrap();
    assert!(back[0].is_nan());
    assert_eq!(&back[1..], &values[1..]);
}

#[test]
fn test_deterministic_encoding() {
    let labels = vec!["Ion Injection Time (ms):".to_string(), "Charge State:".to_string()];
    let a = TextList::encode(Some(&labels)).unwrap();
    let b = TextList::encode(Some(&labels.clone())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_kind_mismatch_rejected() {
    let blob = TextList::encode(Some(&vec!["a".to_string()])).unwrap();
    let result = Floats::decode(&blob);
    assert!(matches!(
        result,
        Err(BlobError::KindMismatch {
            expected: BlobKind::Floats,
            found: BlobKind::TextList
        })
    ));
}

#[test]
fn test_from_stored_decodes() {
    let blob = Blob::from_stored(BlobKind::PeakFlags, Some("[0,17]".to_string()));
    let flags = PeakFlags::decode(&blob).unwrap().unwrap();
    assert_eq!(flags, vec![PeakOptions::NONE, PeakOptions(17)]);
}

#[test]
fn test_unit_list_uses_names() {
    let units = vec![DataUnits::MilliAbsorbanceUnits, DataUnits::Volts];
    let blob = UnitList::encode(Some(&units)).unwrap();
    assert_eq!(blob.as_text(), Some(r#"["MilliAbsorbanceUnits","Volts"]"#));
    assert_eq!(UnitList::decode(&blob).unwrap(), Some(units));
}

#[test]
fn test_structured_round_trip() {
    let segmented = SegmentedScan {
        scan_number: 12,
        positions: vec![400.1, 400.2, f64::INFINITY],
        intensities: vec![10.0, 20.0, 0.0],
        flags: vec![PeakOptions::NONE, PeakOptions::SATURATED, PeakOptions::NONE],
        ranges: vec![MassRange { low: 400.0, high: 1600.0 }],
        segment_lengths: vec![3],
    };
    let blob = Segments::encode(Some(&segmented)).unwrap();
    assert_eq!(Segments::decode(&blob).unwrap(), Some(segmented));

    let peaks = vec![LabelPeak {
        mass: 524.26,
        intensity: 1.5e6,
        charge: 2.0,
        flags: PeakOptions::FRAGMENTED,
        ..Default::default()
    }];
    let blob = LabelPeaks::encode(Some(&peaks)).unwrap();
    assert_eq!(LabelPeaks::decode(&blob).unwrap(), Some(peaks));

    let error = FileError {
        has_error: true,
        error_message: "bad checksum".to_string(),
        ..Default::default()
    };
    let blob = FileErrorDetail::encode(Some(&error)).unwrap();
    assert_eq!(FileErrorDetail::decode(&blob).unwrap(), Some(error));
}

#[test]
fn test_malformed_text_fails() {
    let blob = Blob::from_stored(BlobKind::Floats, Some("[1.0, \"one\"]".to_string()));
    assert!(matches!(Floats::decode(&blob), Err(BlobError::JsonError(_))));
}

proptest! {
    #[test]
    fn prop_floats_round_trip(values in prop::collection::vec(any::<f64>(), 0..64)) {
        let blob = Floats::encode(Some(&values)).unwrap();
        let back = Floats::decode(&blob).unwrap().unwrap();
        prop_assert_eq!(back.len(), values.len());
        for (a, b) in back.iter().zip(&values) {
            prop_assert_eq!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()), true);
        }
    }

    #[test]
    fn prop_text_round_trip(values in prop::collection::vec(".*", 0..16)) {
        let blob = TextList::encode(Some(&values)).unwrap();
        prop_assert_eq!(TextList::decode(&blob).unwrap(), Some(values));
    }

    #[test]
    fn prop_flags_round_trip(bits in prop::collection::vec(0u32..128, 0..32)) {
        let flags: Vec<PeakOptions> = bits.into_iter().map(PeakOptions).collect();
        let blob = PeakFlags::encode(Some(&flags)).unwrap();
        prop_assert_eq!(PeakFlags::decode(&blob).unwrap(), Some(flags));
    }
}
