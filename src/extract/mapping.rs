//! Field-by-field mapping from vendor views to destination rows.
//!
//! Every function consumes the view it maps. Array and structured fields go
//! through their blob codec; everything else is copied as is.

use crate::blob::{
    BlobCodec, BlobError, FileErrorDetail, Floats, LabelPeaks, PeakFlags, Segments, TextList,
    UnitList,
};
use crate::rows::{
    AutoSamplerRow, CentroidScanRow, CentroidStreamRow, FileHeaderRow, InstrumentDataRow,
    InstrumentTypeRow, PeakColumns, PrecursorKey, PrecursorRow, RawFileRow, RunHeaderExRow,
    RunHeaderRow, ScanEventRow, ScanKey, ScanObjectRow, ScanStatisticsRow, TrailerExtraHeaderRow,
    TrailerExtraRow,
};
use crate::source::{
    AutoSamplerInformation, CentroidStream, Device, FileError, FileHeader, HeaderItem,
    InstrumentData, RawFileInfo, Reaction, RunHeader, RunHeaderEx, ScanEvent, ScanObject,
    ScanStatistics, TrailerExtra,
};

/// File state sampled from the source when the RawFile row is built.
#[derive(Debug, Clone, Default)]
pub struct FileState {
    pub is_error: bool,
    pub is_open: bool,
    pub in_acquisition: bool,
    pub instrument_count: i32,
    pub file_error: FileError,
}

pub fn file_header_row(header: FileHeader) -> FileHeaderRow {
    FileHeaderRow {
        creation_date: header.creation_date,
        file_description: header.file_description,
        file_type: header.file_type,
        modified_date: header.modified_date,
        number_of_times_calibrated: header.number_of_times_calibrated,
        number_of_times_modified: header.number_of_times_modified,
        revision: header.revision,
        who_created_id: header.who_created_id,
        who_modified_logon: header.who_modified_logon,
    }
}

pub fn auto_sampler_row(info: AutoSamplerInformation) -> AutoSamplerRow {
    AutoSamplerRow {
        tray_index: info.tray_index,
        tray_name: info.tray_name,
        tray_shape: info.tray_shape,
        tray_shape_as_string: info.tray_shape_as_string,
        vial_index: info.vial_index,
        vials_per_tray: info.vials_per_tray,
        vials_per_tray_x: info.vials_per_tray_x,
        vials_per_tray_y: info.vials_per_tray_y,
    }
}

pub fn raw_file_row(info: RawFileInfo, state: FileState) -> Result<RawFileRow, BlobError> {
    Ok(RawFileRow {
        computer_name: info.computer_name,
        creation_date: info.creation_date,
        creator_id: info.creator_id,
        file_error: FileErrorDetail::encode(Some(&state.file_error))?,
        file_name: info.file_name,
        has_instrument_method: info.has_instrument_method,
        has_ms_data: info.has_ms_data,
        in_acquisition: state.in_acquisition,
        include_reference_and_exception_data: info.include_reference_and_exception_data,
        instrument_count: state.instrument_count,
        instrument_methods_count: info.instrument_methods_count,
        is_error: state.is_error,
        is_open: state.is_open,
        path: info.path,
        user_labels: TextList::encode(info.user_labels.as_ref())?,
    })
}

pub fn instrument_type_row(index: i32, device: Device) -> InstrumentTypeRow {
    InstrumentTypeRow {
        index,
        instrument_type: device,
    }
}

pub fn instrument_data_row(
    index: i32,
    data: InstrumentData,
) -> Result<InstrumentDataRow, BlobError> {
    Ok(InstrumentDataRow {
        index,
        axis_label_x: data.axis_label_x,
        axis_label_y: data.axis_label_y,
        channel_labels: TextList::encode(data.channel_labels.as_ref())?,
        flags: data.flags,
        hardware_version: data.hardware_version,
        has_accurate_mass_precursors: data.has_accurate_mass_precursors,
        is_tsq_quantum_file: data.is_tsq_quantum_file,
        is_valid: data.is_valid,
        model: data.model,
        name: data.name,
        serial_number: data.serial_number,
        software_version: data.software_version,
        units: UnitList::encode(data.units.as_ref())?,
    })
}

pub fn run_header_row(instrument: i32, header: RunHeader) -> RunHeaderRow {
    RunHeaderRow {
        instrument,
        start_time: header.start_time,
        end_time: header.end_time,
        expected_runtime: header.expected_runtime,
        first_spectrum: header.first_spectrum,
        last_spectrum: header.last_spectrum,
        low_mass: header.low_mass,
        high_mass: header.high_mass,
        mass_resolution: header.mass_resolution,
        max_integrated_intensity: header.max_integrated_intensity,
        max_intensity: header.max_intensity,
        tolerance_unit: header.tolerance_unit,
    }
}

pub fn run_header_ex_row(instrument: i32, header: RunHeaderEx) -> RunHeaderExRow {
    RunHeaderExRow {
        instrument,
        start_time: header.start_time,
        end_time: header.end_time,
        comment1: header.comment1,
        comment2: header.comment2,
        error_log_count: header.error_log_count,
        expected_run_time: header.expected_run_time,
        filter_mass_precision: header.filter_mass_precision,
        first_spectrum: header.first_spectrum,
        last_spectrum: header.last_spectrum,
        high_mass: header.high_mass,
        low_mass: header.low_mass,
        in_acquisition: header.in_acquisition,
        mass_resolution: header.mass_resolution,
        max_integrated_intensity: header.max_integrated_intensity,
        max_intensity: header.max_intensity,
        spectra_count: header.spectra_count,
        status_log_count: header.status_log_count,
        tolerance_unit: header.tolerance_unit,
        trailer_extra_count: header.trailer_extra_count,
        trailer_scan_event_count: header.trailer_scan_event_count,
        tune_data_count: header.tune_data_count,
    }
}

pub fn trailer_extra_header_row(
    instrument: i32,
    header_index: i32,
    item: HeaderItem,
) -> TrailerExtraHeaderRow {
    TrailerExtraHeaderRow {
        instrument,
        header_index,
        data_type: item.data_type,
        is_numeric: item.is_numeric,
        is_scientific_notation: item.is_scientific_notation,
        label: item.label,
        string_length_or_precision: item.string_length_or_precision,
    }
}

pub fn trailer_extra_row(key: ScanKey, trailer: TrailerExtra) -> Result<TrailerExtraRow, BlobError> {
    Ok(TrailerExtraRow {
        key,
        labels: TextList::encode(trailer.labels.as_ref())?,
        values: TextList::encode(trailer.values.as_ref())?,
    })
}

pub fn scan_statistics_row(key: ScanKey, stats: ScanStatistics) -> ScanStatisticsRow {
    ScanStatisticsRow {
        key,
        absorbance_unit_scale: stats.absorbance_unit_scale,
        base_peak_intensity: stats.base_peak_intensity,
        base_peak_mass: stats.base_peak_mass,
        cycle_number: stats.cycle_number,
        frequency: stats.frequency,
        high_mass: stats.high_mass,
        is_centroid_scan: stats.is_centroid_scan,
        is_uniform_time: stats.is_uniform_time,
        long_wavelength: stats.long_wavelength,
        low_mass: stats.low_mass,
        number_of_channels: stats.number_of_channels,
        packet_count: stats.packet_count,
        packet_type: stats.packet_type,
        scan_event_number: stats.scan_event_number,
        scan_type: stats.scan_type,
        segment_number: stats.segment_number,
        short_wavelength: stats.short_wavelength,
        spectrum_packet_type: stats.spectrum_packet_type,
        start_time: stats.start_time,
        tic: stats.tic,
        wavelength_step: stats.wavelength_step,
    }
}

pub fn scan_object_row(key: ScanKey, scan: ScanObject) -> Result<ScanObjectRow, BlobError> {
    Ok(ScanObjectRow {
        key,
        always_merge_segments: scan.always_merge_segments,
        has_centroid_stream: scan.has_centroid_stream,
        has_noise_table: scan.has_noise_table,
        is_user_tolerance: scan.is_user_tolerance,
        mass_resolution: scan.mass_resolution,
        prefer_centroids: scan.prefer_centroids,
        preferred_baselines: Floats::encode(scan.preferred_baselines.as_ref())?,
        preferred_base_peak_intensity: scan.preferred_base_peak_intensity,
        preferred_base_peak_mass: scan.preferred_base_peak_mass,
        preferred_base_peak_noise: scan.preferred_base_peak_noise,
        preferred_base_peak_resolution: scan.preferred_base_peak_resolution,
        preferred_flags: PeakFlags::encode(scan.preferred_flags.as_ref())?,
        preferred_intensities: Floats::encode(scan.preferred_intensities.as_ref())?,
        preferred_masses: Floats::encode(scan.preferred_masses.as_ref())?,
        preferred_noises: Floats::encode(scan.preferred_noises.as_ref())?,
        preferred_resolutions: Floats::encode(scan.preferred_resolutions.as_ref())?,
        scans_combined: scan.scans_combined,
        segmented_scan: Segments::encode(scan.segmented_scan.as_ref())?,
        tolerance_unit: scan.tolerance_unit,
    })
}

fn peak_columns(stream: &CentroidStream) -> Result<PeakColumns, BlobError> {
    Ok(PeakColumns {
        baselines: Floats::encode(stream.baselines.as_ref())?,
        base_peak_intensity: stream.base_peak_intensity,
        base_peak_mass: stream.base_peak_mass,
        base_peak_noise: stream.base_peak_noise,
        base_peak_resolution: stream.base_peak_resolution,
        charges: Floats::encode(stream.charges.as_ref())?,
        coefficients: Floats::encode(stream.coefficients.as_ref())?,
        coefficients_count: stream.coefficients_count,
        flags: PeakFlags::encode(stream.flags.as_ref())?,
        intensities: Floats::encode(stream.intensities.as_ref())?,
        length: i32::try_from(stream.len()).unwrap_or(i32::MAX),
        masses: Floats::encode(stream.masses.as_ref())?,
        noises: Floats::encode(stream.noises.as_ref())?,
        resolutions: Floats::encode(stream.resolutions.as_ref())?,
    })
}

pub fn centroid_stream_row(
    key: ScanKey,
    stream: CentroidStream,
) -> Result<CentroidStreamRow, BlobError> {
    Ok(CentroidStreamRow {
        key,
        peaks: peak_columns(&stream)?,
        label_peaks: LabelPeaks::encode(stream.label_peaks.as_ref())?,
    })
}

/// The processed centroid result carries no label peaks.
pub fn centroid_scan_row(
    key: ScanKey,
    stream: CentroidStream,
) -> Result<CentroidScanRow, BlobError> {
    Ok(CentroidScanRow {
        key,
        peaks: peak_columns(&stream)?,
    })
}

pub fn scan_event_row(key: ScanKey, event: ScanEvent) -> ScanEventRow {
    ScanEventRow {
        key,
        accurate_mass: event.accurate_mass,
        compensation_voltage: event.compensation_voltage,
        compensation_volt_type: event.compensation_volt_type,
        corona: event.corona,
        dependent: event.dependent,
        detector: event.detector,
        detector_value: event.detector_value,
        electron_capture_dissociation: event.electron_capture_dissociation,
        electron_capture_dissociation_value: event.electron_capture_dissociation_value,
        electron_transfer_dissociation: event.electron_transfer_dissociation,
        electron_transfer_dissociation_value: event.electron_transfer_dissociation_value,
        enhanced: event.enhanced,
        field_free_region: event.field_free_region,
        higher_energy_cid: event.higher_energy_cid,
        higher_energy_cid_value: event.higher_energy_cid_value,
        ionization_mode: event.ionization_mode,
        is_custom: event.is_custom,
        is_valid: event.is_valid,
        lock: event.lock,
        mass_analyzer: event.mass_analyzer,
        mass_calibrator_count: event.mass_calibrator_count,
        mass_count: event.mass_count,
        mass_range_count: event.mass_range_count,
        ms_order: event.ms_order,
        multi_notch: event.multi_notch,
        multiple_photon_dissociation: event.multiple_photon_dissociation,
        multiple_photon_dissociation_value: event.multiple_photon_dissociation_value,
        multiplex: event.multiplex,
        multi_state_activation: event.multi_state_activation,
        name: event.name,
        param_a: event.param_a,
        param_b: event.param_b,
        param_f: event.param_f,
        param_r: event.param_r,
        param_v: event.param_v,
        photo_ionization: event.photo_ionization,
        polarity: event.polarity,
        pulsed_q_dissociation: event.pulsed_q_dissociation,
        pulsed_q_dissociation_value: event.pulsed_q_dissociation_value,
        scan_data: event.scan_data,
        scan_mode: event.scan_mode,
        scan_type_index: event.scan_type_index,
        sector_scan: event.sector_scan,
        source_fragmentation: event.source_fragmentation,
        source_fragmentation_info_count: event.source_fragmentation_info_count,
        source_fragmentation_mass_range_count: event.source_fragmentation_mass_range_count,
        source_fragmentation_type: event.source_fragmentation_type,
        supplemental_activation: event.supplemental_activation,
        turbo_scan: event.turbo_scan,
        ultra: event.ultra,
        wideband: event.wideband,
    }
}

pub fn precursor_row(key: PrecursorKey, reaction: Reaction) -> PrecursorRow {
    PrecursorRow {
        key,
        activation_type: reaction.activation_type,
        collision_energy: reaction.collision_energy,
        collision_energy_valid: reaction.collision_energy_valid,
        first_precursor_mass: reaction.first_precursor_mass,
        isolation_width: reaction.isolation_width,
        isolation_width_offset: reaction.isolation_width_offset,
        last_precursor_mass: reaction.last_precursor_mass,
        multiple_activation: reaction.multiple_activation,
        precursor_mass: reaction.precursor_mass,
        precursor_range_is_valid: reaction.precursor_range_is_valid,
    }
}
