//! File-level rows. Each is emitted once per source and keyed by a
//! surrogate key assigned at emission.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};

use crate::blob::Blob;
use crate::source::enums::{FileType, TrayShape};

/// Row of the FileHeader table.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHeaderRow {
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

/// Row of the AutoSamplerInformation table.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoSamplerRow {
    pub tray_index: i32,
    pub tray_name: String,
    pub tray_shape: TrayShape,
    pub tray_shape_as_string: String,
    pub vial_index: i32,
    pub vials_per_tray: i32,
    pub vials_per_tray_x: i32,
    pub vials_per_tray_y: i32,
}

/// Row of the RawFile table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFileRow {
    pub computer_name: String,
    pub creation_date: DateTime<Utc>,
    pub creator_id: String,
    /// Serialized file error details
    pub file_error: Blob,
    pub file_name: String,
    pub has_instrument_method: bool,
    pub has_ms_data: bool,
    pub in_acquisition: bool,
    pub include_reference_and_exception_data: bool,
    pub instrument_count: i32,
    pub instrument_methods_count: i32,
    pub is_error: bool,
    pub is_open: bool,
    pub path: String,
    /// Serialized user label captions
    pub user_labels: Blob,
}
