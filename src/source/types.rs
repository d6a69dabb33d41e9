//! Read-only views of the objects a raw source exposes.
//!
//! These are plain data carriers shaped after the vendor object graph. Array
//! fields that the vendor may leave unset are `Option<Vec<_>>` so that an
//! absent array stays distinguishable from an empty one all the way into the
//! store.
//!
//! Field names follow the vendor property names in snake case and are not
//! documented individually.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blob::float;

use super::enums::{
    ActivationType, CompensationVoltageType, DataUnits, DetectorValidity, Device,
    EventAccurateMass, FieldFreeRegionType, FileType, GenericDataTypes, IonizationModeType,
    MassAnalyzerType, MsOrder, PeakOptions, PolarityType, ScanDataType, ScanModeType,
    SectorScanType, SourceFragmentationValueType, SpectrumPacketType, ToleranceUnits, TrayShape,
    TriState,
};

/// Error details a source reports about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileError {
    /// Vendor error code (0 when there is no error)
    pub error_code: i32,
    /// Human-readable error message
    pub error_message: String,
    /// Whether an error is present
    pub has_error: bool,
    /// Whether a warning is present
    pub has_warning: bool,
    /// Human-readable warning message
    pub warning_message: String,
}

/// The file header block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHeader {
    pub creation_date: DateTime<Utc>,
    pub file_description: String,
    pub file_type: FileType,
    pub modified_date: DateTime<Utc>,
    pub number_of_times_calibrated: i32,
    pub number_of_times_modified: i32,
    pub revision: i32,
    pub who_created_id: String,
    pub who_modified_logon: String,
}

/// Autosampler tray configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSamplerInformation {
    pub tray_index: i32,
    pub tray_name: String,
    pub tray_shape: TrayShape,
    pub tray_shape_as_string: String,
    pub vial_index: i32,
    pub vials_per_tray: i32,
    pub vials_per_tray_x: i32,
    pub vials_per_tray_y: i32,
}

/// File-level summary that is not part of the header block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFileInfo {
    pub computer_name: String,
    pub creation_date: DateTime<Utc>,
    pub creator_id: String,
    pub file_name: String,
    pub has_instrument_method: bool,
    pub has_ms_data: bool,
    pub include_reference_and_exception_data: bool,
    pub instrument_methods_count: i32,
    pub path: String,
    /// User label captions; `None` when the file carries none.
    pub user_labels: Option<Vec<String>>,
}

/// Static descriptor of the selected instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentData {
    pub axis_label_x: String,
    pub axis_label_y: String,
    pub channel_labels: Option<Vec<String>>,
    pub flags: String,
    pub hardware_version: String,
    pub has_accurate_mass_precursors: bool,
    pub is_tsq_quantum_file: bool,
    pub is_valid: bool,
    pub model: String,
    pub name: String,
    pub serial_number: String,
    pub software_version: String,
    pub units: Option<Vec<DataUnits>>,
}

/// Acquisition-wide summary of one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunHeader {
    #[serde(with = "float")]
    pub start_time: f64,
    #[serde(with = "float")]
    pub end_time: f64,
    #[serde(with = "float")]
    pub expected_runtime: f64,
    pub first_spectrum: i32,
    pub last_spectrum: i32,
    #[serde(with = "float")]
    pub low_mass: f64,
    #[serde(with = "float")]
    pub high_mass: f64,
    #[serde(with = "float")]
    pub mass_resolution: f64,
    #[serde(with = "float")]
    pub max_integrated_intensity: f64,
    pub max_intensity: i32,
    pub tolerance_unit: ToleranceUnits,
}

/// Extended acquisition-wide summary of one instrument.
///
/// `first_spectrum..=last_spectrum` is the scan range the scan walker visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunHeaderEx {
    #[serde(with = "float")]
    pub start_time: f64,
    #[serde(with = "float")]
    pub end_time: f64,
    pub comment1: String,
    pub comment2: String,
    pub error_log_count: i32,
    #[serde(with = "float")]
    pub expected_run_time: f64,
    pub filter_mass_precision: i32,
    pub first_spectrum: i32,
    pub last_spectrum: i32,
    #[serde(with = "float")]
    pub high_mass: f64,
    #[serde(with = "float")]
    pub low_mass: f64,
    pub in_acquisition: bool,
    #[serde(with = "float")]
    pub mass_resolution: f64,
    #[serde(with = "float")]
    pub max_integrated_intensity: f64,
    pub max_intensity: i32,
    pub spectra_count: i32,
    pub status_log_count: i32,
    pub tolerance_unit: ToleranceUnits,
    pub trailer_extra_count: i32,
    pub trailer_scan_event_count: i32,
    pub tune_data_count: i32,
}

/// One field of an instrument's trailer-extra schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderItem {
    pub data_type: GenericDataTypes,
    pub is_numeric: bool,
    pub is_scientific_notation: bool,
    pub label: String,
    pub string_length_or_precision: i32,
}

/// Trailer-extra values of one scan, parallel to the header schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailerExtra {
    pub labels: Option<Vec<String>>,
    pub values: Option<Vec<String>>,
}

/// Summary statistics of one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanStatistics {
    #[serde(with = "float")]
    pub absorbance_unit_scale: f64,
    #[serde(with = "float")]
    pub base_peak_intensity: f64,
    #[serde(with = "float")]
    pub base_peak_mass: f64,
    pub cycle_number: i32,
    #[serde(with = "float")]
    pub frequency: f64,
    #[serde(with = "float")]
    pub high_mass: f64,
    pub is_centroid_scan: bool,
    pub is_uniform_time: bool,
    #[serde(with = "float")]
    pub long_wavelength: f64,
    #[serde(with = "float")]
    pub low_mass: f64,
    pub number_of_channels: i32,
    pub packet_count: i32,
    pub packet_type: i32,
    pub scan_event_number: i32,
    pub scan_number: i32,
    pub scan_type: String,
    pub segment_number: i32,
    #[serde(with = "float")]
    pub short_wavelength: f64,
    pub spectrum_packet_type: SpectrumPacketType,
    #[serde(with = "float")]
    pub start_time: f64,
    #[serde(with = "float")]
    pub tic: f64,
    #[serde(with = "float")]
    pub wavelength_step: f64,
}

/// A labelled centroid with its full annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPeak {
    #[serde(with = "float")]
    pub mass: f64,
    #[serde(with = "float")]
    pub intensity: f64,
    #[serde(with = "float")]
    pub resolution: f64,
    #[serde(with = "float")]
    pub baseline: f64,
    #[serde(with = "float")]
    pub noise: f64,
    #[serde(with = "float")]
    pub charge: f64,
    pub flags: PeakOptions,
    #[serde(with = "float")]
    pub signal_to_noise: f64,
}

/// Mass range of one scan segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassRange {
    #[serde(with = "float")]
    pub low: f64,
    #[serde(with = "float")]
    pub high: f64,
}

/// Profile (or centroid) data of a scan split into segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentedScan {
    pub scan_number: i32,
    #[serde(with = "float::seq")]
    pub positions: Vec<f64>,
    #[serde(with = "float::seq")]
    pub intensities: Vec<f64>,
    pub flags: Vec<PeakOptions>,
    pub ranges: Vec<MassRange>,
    pub segment_lengths: Vec<i32>,
}

/// Centroid peak list, either the raw stream or the processed result.
///
/// Peak arrays are parallel; `len()` is the number of centroids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentroidStream {
    pub scan_number: i32,
    #[serde(with = "float")]
    pub base_peak_intensity: f64,
    #[serde(with = "float")]
    pub base_peak_mass: f64,
    #[serde(with = "float")]
    pub base_peak_noise: f64,
    #[serde(with = "float")]
    pub base_peak_resolution: f64,
    #[serde(with = "float::opt_seq")]
    pub baselines: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub charges: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub coefficients: Option<Vec<f64>>,
    pub coefficients_count: i32,
    pub flags: Option<Vec<PeakOptions>>,
    #[serde(with = "float::opt_seq")]
    pub intensities: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub masses: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub noises: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub resolutions: Option<Vec<f64>>,
    /// Annotated peaks; only the raw centroid stream carries these.
    pub label_peaks: Option<Vec<LabelPeak>>,
}

impl CentroidStream {
    /// Number of centroids.
    pub fn len(&self) -> usize {
        self.masses.as_ref().map_or(0, Vec::len)
    }

    /// Whether the peak list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Processed representation of a scan: the profile/centroid decision object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanObject {
    pub always_merge_segments: bool,
    pub has_centroid_stream: bool,
    pub has_noise_table: bool,
    pub is_user_tolerance: bool,
    #[serde(with = "float")]
    pub mass_resolution: f64,
    pub prefer_centroids: bool,
    #[serde(with = "float::opt_seq")]
    pub preferred_baselines: Option<Vec<f64>>,
    #[serde(with = "float")]
    pub preferred_base_peak_intensity: f64,
    #[serde(with = "float")]
    pub preferred_base_peak_mass: f64,
    #[serde(with = "float")]
    pub preferred_base_peak_noise: f64,
    #[serde(with = "float")]
    pub preferred_base_peak_resolution: f64,
    pub preferred_flags: Option<Vec<PeakOptions>>,
    #[serde(with = "float::opt_seq")]
    pub preferred_intensities: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub preferred_masses: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub preferred_noises: Option<Vec<f64>>,
    #[serde(with = "float::opt_seq")]
    pub preferred_resolutions: Option<Vec<f64>>,
    pub scans_combined: i32,
    pub segmented_scan: Option<SegmentedScan>,
    pub tolerance_unit: ToleranceUnits,
}

/// Instrument configuration active during one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanEvent {
    pub accurate_mass: EventAccurateMass,
    pub compensation_voltage: TriState,
    pub compensation_volt_type: CompensationVoltageType,
    pub corona: TriState,
    pub dependent: TriState,
    pub detector: DetectorValidity,
    #[serde(with = "float")]
    pub detector_value: f64,
    pub electron_capture_dissociation: TriState,
    #[serde(with = "float")]
    pub electron_capture_dissociation_value: f64,
    pub electron_transfer_dissociation: TriState,
    #[serde(with = "float")]
    pub electron_transfer_dissociation_value: f64,
    pub enhanced: TriState,
    pub field_free_region: FieldFreeRegionType,
    pub higher_energy_cid: TriState,
    #[serde(with = "float")]
    pub higher_energy_cid_value: f64,
    pub ionization_mode: IonizationModeType,
    pub is_custom: bool,
    pub is_valid: bool,
    pub lock: TriState,
    pub mass_analyzer: MassAnalyzerType,
    pub mass_calibrator_count: i32,
    pub mass_count: i32,
    pub mass_range_count: i32,
    pub ms_order: MsOrder,
    pub multi_notch: TriState,
    pub multiple_photon_dissociation: TriState,
    #[serde(with = "float")]
    pub multiple_photon_dissociation_value: f64,
    pub multiplex: TriState,
    pub multi_state_activation: TriState,
    pub name: String,
    pub param_a: TriState,
    pub param_b: TriState,
    pub param_f: TriState,
    pub param_r: TriState,
    pub param_v: TriState,
    pub photo_ionization: TriState,
    pub polarity: PolarityType,
    pub pulsed_q_dissociation: TriState,
    #[serde(with = "float")]
    pub pulsed_q_dissociation_value: f64,
    pub scan_data: ScanDataType,
    pub scan_mode: ScanModeType,
    pub scan_type_index: i32,
    pub sector_scan: SectorScanType,
    pub source_fragmentation: TriState,
    pub source_fragmentation_info_count: i32,
    pub source_fragmentation_mass_range_count: i32,
    pub source_fragmentation_type: SourceFragmentationValueType,
    pub supplemental_activation: TriState,
    pub turbo_scan: TriState,
    pub ultra: TriState,
    pub wideband: TriState,
}

/// One MS^n precursor reaction step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub activation_type: ActivationType,
    #[serde(with = "float")]
    pub collision_energy: f64,
    pub collision_energy_valid: bool,
    #[serde(with = "float")]
    pub first_precursor_mass: f64,
    #[serde(with = "float")]
    pub isolation_width: f64,
    #[serde(with = "float")]
    pub isolation_width_offset: f64,
    #[serde(with = "float")]
    pub last_precursor_mass: f64,
    pub multiple_activation: bool,
    #[serde(with = "float")]
    pub precursor_mass: f64,
    pub precursor_range_is_valid: bool,
}

/// Immutable handle to the instrument selected on a source.
///
/// Returned by [`RawSource::select_instrument`](super::RawSource::select_instrument)
/// and passed to every per-instrument and per-scan pull, so the walker never
/// relies on an ambient cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstrumentContext {
    device: Device,
    index: i32,
}

impl InstrumentContext {
    /// Build a context; only sources should need this.
    pub fn new(device: Device, index: i32) -> Self {
        Self { device, index }
    }

    /// Device type of the selected instrument.
    pub fn device(&self) -> Device {
        self.device
    }

    /// 1-based instrument index.
    pub fn index(&self) -> i32 {
        self.index
    }
}
