//! Per-instrument rows, keyed by the 1-based instrument index.

#![allow(missing_docs)]

use crate::blob::Blob;
use crate::source::enums::{Device, GenericDataTypes, ToleranceUnits};

/// Row of the InstrumentType table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentTypeRow {
    pub index: i32,
    pub instrument_type: Device,
}

/// Row of the InstrumentData table.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentDataRow {
    pub index: i32,
    pub axis_label_x: String,
    pub axis_label_y: String,
    pub channel_labels: Blob,
    pub flags: String,
    pub hardware_version: String,
    pub has_accurate_mass_precursors: bool,
    pub is_tsq_quantum_file: bool,
    pub is_valid: bool,
    pub model: String,
    pub name: String,
    pub serial_number: String,
    pub software_version: String,
    pub units: Blob,
}

/// Row of the RunHeader table.
#[derive(Debug, Clone, PartialEq)]
pub struct RunHeaderRow {
    pub instrument: i32,
    pub start_time: f64,
    pub end_time: f64,
    pub expected_runtime: f64,
    pub first_spectrum: i32,
    pub last_spectrum: i32,
    pub low_mass: f64,
    pub high_mass: f64,
    pub mass_resolution: f64,
    pub max_integrated_intensity: f64,
    pub max_intensity: i32,
    pub tolerance_unit: ToleranceUnits,
}

/// Row of the RunHeaderEx table.
#[derive(Debug, Clone, PartialEq)]
pub struct RunHeaderExRow {
    pub instrument: i32,
    pub start_time: f64,
    pub end_time: f64,
    pub comment1: String,
    pub comment2: String,
    pub error_log_count: i32,
    pub expected_run_time: f64,
    pub filter_mass_precision: i32,
    pub first_spectrum: i32,
    pub last_spectrum: i32,
    pub high_mass: f64,
    pub low_mass: f64,
    pub in_acquisition: bool,
    pub mass_resolution: f64,
    pub max_integrated_intensity: f64,
    pub max_intensity: i32,
    pub spectra_count: i32,
    pub status_log_count: i32,
    pub tolerance_unit: ToleranceUnits,
    pub trailer_extra_count: i32,
    pub trailer_scan_event_count: i32,
    pub tune_data_count: i32,
}

/// Row of the TrailerExtraHeaderInformation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerExtraHeaderRow {
    pub instrument: i32,
    /// Zero-based position in the instrument's trailer schema
    pub header_index: i32,
    pub data_type: GenericDataTypes,
    pub is_numeric: bool,
    pub is_scientific_notation: bool,
    pub label: String,
    pub string_length_or_precision: i32,
}
