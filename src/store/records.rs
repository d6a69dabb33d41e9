//! Conversion of typed rows into SQL parameter lists.
//!
//! Enums become TEXT variant names, booleans INTEGER 0/1, dates RFC 3339
//! TEXT and absent blobs NULL. Scalar floats are bound as REAL; SQLite
//! stores a NaN REAL as NULL while the infinities are kept. Floats inside
//! blobs keep every value, NaN included.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Value;

use crate::blob::Blob;
use crate::rows::{KeyedRow, PeakColumns, PrecursorKey, Row, RowKey, ScanKey};

fn int(value: i32) -> Value {
    Value::Integer(i64::from(value))
}

fn real(value: f64) -> Value {
    Value::Real(value)
}

fn flag(value: bool) -> Value {
    Value::Integer(i64::from(value))
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn name(value: impl Display) -> Value {
    Value::Text(value.to_string())
}

fn date(value: &DateTime<Utc>) -> Value {
    Value::Text(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

fn blob(value: &Blob) -> Value {
    value
        .as_text()
        .map_or(Value::Null, |text| Value::Text(text.to_string()))
}

fn surrogate(key: RowKey) -> Value {
    match key {
        RowKey::Surrogate(key) => Value::Integer(key),
        _ => Value::Null,
    }
}

fn scan_key(key: ScanKey) -> [Value; 2] {
    [int(key.instrument), int(key.scan)]
}

fn precursor_key(key: PrecursorKey) -> [Value; 3] {
    [int(key.scan.instrument), int(key.scan.scan), int(key.order)]
}

fn peak_values(peaks: &PeakColumns) -> [Value; 14] {
    [
        blob(&peaks.baselines),
        real(peaks.base_peak_intensity),
        real(peaks.base_peak_mass),
        real(peaks.base_peak_noise),
        real(peaks.base_peak_resolution),
        blob(&peaks.charges),
        blob(&peaks.coefficients),
        int(peaks.coefficients_count),
        blob(&peaks.flags),
        blob(&peaks.intensities),
        int(peaks.length),
        blob(&peaks.masses),
        blob(&peaks.noises),
        blob(&peaks.resolutions),
    ]
}

/// Parameter values of one row, in the column order of its table.
pub fn values(keyed: &KeyedRow) -> Vec<Value> {
    match &keyed.row {
        Row::FileHeader(row) => vec![
            surrogate(keyed.key),
            date(&row.creation_date),
            text(&row.file_description),
            name(row.file_type),
            date(&row.modified_date),
            int(row.number_of_times_calibrated),
            int(row.number_of_times_modified),
            int(row.revision),
            text(&row.who_created_id),
            text(&row.who_modified_logon),
        ],
        Row::AutoSampler(row) => vec![
            surrogate(keyed.key),
            int(row.tray_index),
            text(&row.tray_name),
            name(row.tray_shape),
            text(&row.tray_shape_as_string),
            int(row.vial_index),
            int(row.vials_per_tray),
            int(row.vials_per_tray_x),
            int(row.vials_per_tray_y),
        ],
        Row::RawFile(row) => vec![
            surrogate(keyed.key),
            text(&row.computer_name),
            date(&row.creation_date),
            text(&row.creator_id),
            blob(&row.file_error),
            text(&row.file_name),
            flag(row.has_instrument_method),
            flag(row.has_ms_data),
            flag(row.in_acquisition),
            flag(row.include_reference_and_exception_data),
            int(row.instrument_count),
            int(row.instrument_methods_count),
            flag(row.is_error),
            flag(row.is_open),
            text(&row.path),
            blob(&row.user_labels),
        ],
        Row::InstrumentType(row) => vec![int(row.index), name(row.instrument_type)],
        Row::InstrumentData(row) => vec![
            int(row.index),
            text(&row.axis_label_x),
            text(&row.axis_label_y),
            blob(&row.channel_labels),
            text(&row.flags),
            text(&row.hardware_version),
            flag(row.has_accurate_mass_precursors),
            flag(row.is_tsq_quantum_file),
            flag(row.is_valid),
            text(&row.model),
            text(&row.name),
            text(&row.serial_number),
            text(&row.software_version),
            blob(&row.units),
        ],
        Row::RunHeader(row) => vec![
            int(row.instrument),
            real(row.start_time),
            real(row.end_time),
            real(row.expected_runtime),
            int(row.first_spectrum),
            int(row.last_spectrum),
            real(row.low_mass),
            real(row.high_mass),
            real(row.mass_resolution),
            real(row.max_integrated_intensity),
            int(row.max_intensity),
            name(row.tolerance_unit),
        ],
        Row::RunHeaderEx(row) => vec![
            int(row.instrument),
            real(row.start_time),
            real(row.end_time),
            text(&row.comment1),
            text(&row.comment2),
            int(row.error_log_count),
            real(row.expected_run_time),
            int(row.filter_mass_precision),
            int(row.first_spectrum),
            int(row.last_spectrum),
            real(row.high_mass),
            real(row.low_mass),
            flag(row.in_acquisition),
            real(row.mass_resolution),
            real(row.max_integrated_intensity),
            int(row.max_intensity),
            int(row.spectra_count),
            int(row.status_log_count),
            name(row.tolerance_unit),
            int(row.trailer_extra_count),
            int(row.trailer_scan_event_count),
            int(row.tune_data_count),
        ],
        Row::TrailerExtraHeader(row) => vec![
            int(row.instrument),
            int(row.header_index),
            name(row.data_type),
            flag(row.is_numeric),
            flag(row.is_scientific_notation),
            text(&row.label),
            int(row.string_length_or_precision),
        ],
        Row::TrailerExtra(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend([blob(&row.labels), blob(&row.values)]);
            values
        }
        Row::ScanStatistics(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend([
                real(row.absorbance_unit_scale),
                real(row.base_peak_intensity),
                real(row.base_peak_mass),
                int(row.cycle_number),
                real(row.frequency),
                real(row.high_mass),
                flag(row.is_centroid_scan),
                flag(row.is_uniform_time),
                real(row.long_wavelength),
                real(row.low_mass),
                int(row.number_of_channels),
                int(row.packet_count),
                int(row.packet_type),
                int(row.scan_event_number),
                text(&row.scan_type),
                int(row.segment_number),
                real(row.short_wavelength),
                name(row.spectrum_packet_type),
                real(row.start_time),
                real(row.tic),
                real(row.wavelength_step),
            ]);
            values
        }
        Row::ScanObject(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend([
                flag(row.always_merge_segments),
                flag(row.has_centroid_stream),
                flag(row.has_noise_table),
                flag(row.is_user_tolerance),
                real(row.mass_resolution),
                flag(row.prefer_centroids),
                blob(&row.preferred_baselines),
                real(row.preferred_base_peak_intensity),
                real(row.preferred_base_peak_mass),
                real(row.preferred_base_peak_noise),
                real(row.preferred_base_peak_resolution),
                blob(&row.preferred_flags),
                blob(&row.preferred_intensities),
                blob(&row.preferred_masses),
                blob(&row.preferred_noises),
                blob(&row.preferred_resolutions),
                int(row.scans_combined),
                blob(&row.segmented_scan),
                name(row.tolerance_unit),
            ]);
            values
        }
        Row::CentroidStream(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend(peak_values(&row.peaks));
            values.push(blob(&row.label_peaks));
            values
        }
        Row::CentroidScan(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend(peak_values(&row.peaks));
            values
        }
        Row::ScanEvent(row) => {
            let mut values = scan_key(row.key).to_vec();
            values.extend([
                name(row.accurate_mass),
                name(row.compensation_voltage),
                name(row.compensation_volt_type),
                name(row.corona),
                name(row.dependent),
                name(row.detector),
                real(row.detector_value),
                name(row.electron_capture_dissociation),
                real(row.electron_capture_dissociation_value),
                name(row.electron_transfer_dissociation),
                real(row.electron_transfer_dissociation_value),
                name(row.enhanced),
                name(row.field_free_region),
                name(row.higher_energy_cid),
                real(row.higher_energy_cid_value),
                name(row.ionization_mode),
                flag(row.is_custom),
                flag(row.is_valid),
                name(row.lock),
                name(row.mass_analyzer),
                int(row.mass_calibrator_count),
                int(row.mass_count),
                int(row.mass_range_count),
                name(row.ms_order),
                name(row.multi_notch),
                name(row.multiple_photon_dissociation),
                real(row.multiple_photon_dissociation_value),
                name(row.multiplex),
                name(row.multi_state_activation),
                text(&row.name),
                name(row.param_a),
                name(row.param_b),
                name(row.param_f),
                name(row.param_r),
                name(row.param_v),
                name(row.photo_ionization),
                name(row.polarity),
                name(row.pulsed_q_dissociation),
                real(row.pulsed_q_dissociation_value),
                name(row.scan_data),
                name(row.scan_mode),
                int(row.scan_type_index),
                name(row.sector_scan),
                name(row.source_fragmentation),
                int(row.source_fragmentation_info_count),
                int(row.source_fragmentation_mass_range_count),
                name(row.source_fragmentation_type),
                name(row.supplemental_activation),
                name(row.turbo_scan),
                name(row.ultra),
                name(row.wideband),
            ]);
            values
        }
        Row::Precursor(row) => {
            let mut values = precursor_key(row.key).to_vec();
            values.extend([
                name(row.activation_type),
                real(row.collision_energy),
                flag(row.collision_energy_valid),
                real(row.first_precursor_mass),
                real(row.isolation_width),
                real(row.isolation_width_offset),
                real(row.last_precursor_mass),
                flag(row.multiple_activation),
                real(row.precursor_mass),
                flag(row.precursor_range_is_valid),
            ]);
            values
        }
    }
}
