//! Per-scan rows, keyed by [`ScanKey`] (plus an order index for precursors).

#![allow(missing_docs)]

use super::keys::{PrecursorKey, ScanKey};
use crate::blob::Blob;
use crate::source::enums::{
    ActivationType, CompensationVoltageType, DetectorValidity, EventAccurateMass,
    FieldFreeRegionType, IonizationModeType, MassAnalyzerType, MsOrder, PolarityType,
    ScanDataType, ScanModeType, SectorScanType, SourceFragmentationValueType, SpectrumPacketType,
    ToleranceUnits, TriState,
};

/// Row of the TrailerExtraInformation table.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerExtraRow {
    pub key: ScanKey,
    pub labels: Blob,
    pub values: Blob,
}

/// Row of the ScanStatistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanStatisticsRow {
    pub key: ScanKey,
    pub absorbance_unit_scale: f64,
    pub base_peak_intensity: f64,
    pub base_peak_mass: f64,
    pub cycle_number: i32,
    pub frequency: f64,
    pub high_mass: f64,
    pub is_centroid_scan: bool,
    pub is_uniform_time: bool,
    pub long_wavelength: f64,
    pub low_mass: f64,
    pub number_of_channels: i32,
    pub packet_count: i32,
    pub packet_type: i32,
    pub scan_event_number: i32,
    pub scan_type: String,
    pub segment_number: i32,
    pub short_wavelength: f64,
    pub spectrum_packet_type: SpectrumPacketType,
    pub start_time: f64,
    pub tic: f64,
    pub wavelength_step: f64,
}

/// Row of the ScanObject table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanObjectRow {
    pub key: ScanKey,
    pub always_merge_segments: bool,
    pub has_centroid_stream: bool,
    pub has_noise_table: bool,
    pub is_user_tolerance: bool,
    pub mass_resolution: f64,
    pub prefer_centroids: bool,
    pub preferred_baselines: Blob,
    pub preferred_base_peak_intensity: f64,
    pub preferred_base_peak_mass: f64,
    pub preferred_base_peak_noise: f64,
    pub preferred_base_peak_resolution: f64,
    pub preferred_flags: Blob,
    pub preferred_intensities: Blob,
    pub preferred_masses: Blob,
    pub preferred_noises: Blob,
    pub preferred_resolutions: Blob,
    pub scans_combined: i32,
    pub segmented_scan: Blob,
    pub tolerance_unit: ToleranceUnits,
}

/// Peak columns shared by CentroidStream and CentroidScan.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakColumns {
    pub baselines: Blob,
    pub base_peak_intensity: f64,
    pub base_peak_mass: f64,
    pub base_peak_noise: f64,
    pub base_peak_resolution: f64,
    pub charges: Blob,
    pub coefficients: Blob,
    pub coefficients_count: i32,
    pub flags: Blob,
    pub intensities: Blob,
    /// Number of centroids
    pub length: i32,
    pub masses: Blob,
    pub noises: Blob,
    pub resolutions: Blob,
}

/// Row of the CentroidStream table.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidStreamRow {
    pub key: ScanKey,
    pub peaks: PeakColumns,
    pub label_peaks: Blob,
}

/// Row of the CentroidScan table.
#[derive(Debug, Clone, PartialEq)]
pub struct CentroidScanRow {
    pub key: ScanKey,
    pub peaks: PeakColumns,
}

/// Row of the ScanEvent table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEventRow {
    pub key: ScanKey,
    pub accurate_mass: EventAccurateMass,
    pub compensation_voltage: TriState,
    pub compensation_volt_type: CompensationVoltageType,
    pub corona: TriState,
    pub dependent: TriState,
    pub detector: DetectorValidity,
    pub detector_value: f64,
    pub electron_capture_dissociation: TriState,
    pub electron_capture_dissociation_value: f64,
    pub electron_transfer_dissociation: TriState,
    pub electron_transfer_dissociation_value: f64,
    pub enhanced: TriState,
    pub field_free_region: FieldFreeRegionType,
    pub higher_energy_cid: TriState,
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

/// Row of the Precursor table.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecursorRow {
    pub key: PrecursorKey,
    pub activation_type: ActivationType,
    pub collision_energy: f64,
    pub collision_energy_valid: bool,
    pub first_precursor_mass: f64,
    pub isolation_width: f64,
    pub isolation_width_offset: f64,
    pub last_precursor_mass: f64,
    pub multiple_activation: bool,
    pub precursor_mass: f64,
    pub precursor_range_is_valid: bool,
}
