//! Table definitions of the destination database.
//!
//! Column order here is the order [`super::records::values`] produces
//! values in.

use crate::rows::TableKind;

/// SQLite storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// Integers, booleans as 0/1
    Integer,
    /// Floating point
    Real,
    /// Text, enum variant names, dates and blobs
    Text,
}

impl SqlType {
    fn as_str(self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
            SqlType::Text => "TEXT",
        }
    }
}

/// One column definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: &'static str,
    /// Storage class
    pub sql_type: SqlType,
}

const fn int(name: &'static str) -> Column {
    Column {
        name,
        sql_type: SqlType::Integer,
    }
}

const fn real(name: &'static str) -> Column {
    Column {
        name,
        sql_type: SqlType::Real,
    }
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        sql_type: SqlType::Text,
    }
}

const FILE_HEADER: &[Column] = &[
    int("Key"),
    text("CreationDate"),
    text("FileDescription"),
    text("FileType"),
    text("ModifiedDate"),
    int("NumberOfTimesCalibrated"),
    int("NumberOfTimesModified"),
    int("Revision"),
    text("WhoCreatedId"),
    text("WhoModifiedLogon"),
];

const AUTO_SAMPLER: &[Column] = &[
    int("Key"),
    int("TrayIndex"),
    text("TrayName"),
    text("TrayShape"),
    text("TrayShapeAsString"),
    int("VialIndex"),
    int("VialsPerTray"),
    int("VialsPerTrayX"),
    int("VialsPerTrayY"),
];

const RAW_FILE: &[Column] = &[
    int("Key"),
    text("ComputerName"),
    text("CreationDate"),
    text("CreatorId"),
    text("FileError"),
    text("FileName"),
    int("HasInstrumentMethod"),
    int("HasMsData"),
    int("InAcquisition"),
    int("IncludeReferenceAndExceptionData"),
    int("InstrumentCount"),
    int("InstrumentMethodsCount"),
    int("IsError"),
    int("IsOpen"),
    text("Path"),
    text("UserLabels"),
];

const INSTRUMENT_TYPE: &[Column] = &[int("Index"), text("InstrumentType")];

const INSTRUMENT_DATA: &[Column] = &[
    int("Index"),
    text("AxisLabelX"),
    text("AxisLabelY"),
    text("ChannelLabels"),
    text("Flags"),
    text("HardwareVersion"),
    int("HasAccurateMassPrecursors"),
    int("IsTsqQuantumFile"),
    int("IsValid"),
    text("Model"),
    text("Name"),
    text("SerialNumber"),
    text("SoftwareVersion"),
    text("Units"),
];

const RUN_HEADER: &[Column] = &[
    int("Instrument"),
    real("StartTime"),
    real("EndTime"),
    real("ExpectedRuntime"),
    int("FirstSpectrum"),
    int("LastSpectrum"),
    real("LowMass"),
    real("HighMass"),
    real("MassResolution"),
    real("MaxIntegratedIntensity"),
    int("MaxIntensity"),
    text("ToleranceUnit"),
];

const RUN_HEADER_EX: &[Column] = &[
    int("Instrument"),
    real("StartTime"),
    real("EndTime"),
    text("Comment1"),
    text("Comment2"),
    int("ErrorLogCount"),
    real("ExpectedRunTime"),
    int("FilterMassPrecision"),
    int("FirstSpectrum"),
    int("LastSpectrum"),
    real("HighMass"),
    real("LowMass"),
    int("InAcquisition"),
    real("MassResolution"),
    real("MaxIntegratedIntensity"),
    int("MaxIntensity"),
    int("SpectraCount"),
    int("StatusLogCount"),
    text("ToleranceUnit"),
    int("TrailerExtraCount"),
    int("TrailerScanEventCount"),
    int("TuneDataCount"),
];

const TRAILER_EXTRA_HEADER: &[Column] = &[
    int("Instrument"),
    int("HeaderIndex"),
    text("DataType"),
    int("IsNumeric"),
    int("IsScientificNotation"),
    text("Label"),
    int("StringLengthOrPrecision"),
];

const TRAILER_EXTRA: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    text("Labels"),
    text("Values"),
];

const SCAN_STATISTICS: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    real("AbsorbanceUnitScale"),
    real("BasePeakIntensity"),
    real("BasePeakMass"),
    int("CycleNumber"),
    real("Frequency"),
    real("HighMass"),
    int("IsCentroidScan"),
    int("IsUniformTime"),
    real("LongWavelength"),
    real("LowMass"),
    int("NumberOfChannels"),
    int("PacketCount"),
    int("PacketType"),
    int("ScanEventNumber"),
    text("ScanType"),
    int("SegmentNumber"),
    real("ShortWavelength"),
    text("SpectrumPacketType"),
    real("StartTime"),
    real("TIC"),
    real("WavelengthStep"),
];

const SCAN_OBJECT: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    int("AlwaysMergeSegments"),
    int("HasCentroidStream"),
    int("HasNoiseTable"),
    int("IsUserTolerance"),
    real("MassResolution"),
    int("PreferCentroids"),
    text("PreferredBaselines"),
    real("PreferredBasePeakIntensity"),
    real("PreferredBasePeakMass"),
    real("PreferredBasePeakNoise"),
    real("PreferredBasePeakResolution"),
    text("PreferredFlags"),
    text("PreferredIntensities"),
    text("PreferredMasses"),
    text("PreferredNoises"),
    text("PreferredResolutions"),
    int("ScansCombined"),
    text("SegmentedScan"),
    text("ToleranceUnit"),
];

const CENTROID_STREAM: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    text("Baselines"),
    real("BasePeakIntensity"),
    real("BasePeakMass"),
    real("BasePeakNoise"),
    real("BasePeakResolution"),
    text("Charges"),
    text("Coefficients"),
    int("CoefficientsCount"),
    text("Flags"),
    text("Intensities"),
    int("Length"),
    text("Masses"),
    text("Noises"),
    text("Resolutions"),
    text("LabelPeaks"),
];

const CENTROID_SCAN: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    text("Baselines"),
    real("BasePeakIntensity"),
    real("BasePeakMass"),
    real("BasePeakNoise"),
    real("BasePeakResolution"),
    text("Charges"),
    text("Coefficients"),
    int("CoefficientsCount"),
    text("Flags"),
    text("Intensities"),
    int("Length"),
    text("Masses"),
    text("Noises"),
    text("Resolutions"),
];

const SCAN_EVENT: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    text("AccurateMass"),
    text("CompensationVoltage"),
    text("CompensationVoltType"),
    text("Corona"),
    text("Dependent"),
    text("Detector"),
    real("DetectorValue"),
    text("ElectronCaptureDissociation"),
    real("ElectronCaptureDissociationValue"),
    text("ElectronTransferDissociation"),
    real("ElectronTransferDissociationValue"),
    text("Enhanced"),
    text("FieldFreeRegion"),
    text("HigherEnergyCiD"),
    real("HigherEnergyCiDValue"),
    text("IonizationMode"),
    int("IsCustom"),
    int("IsValid"),
    text("Lock"),
    text("MassAnalyzer"),
    int("MassCalibratorCount"),
    int("MassCount"),
    int("MassRangeCount"),
    text("MSOrder"),
    text("MultiNotch"),
    text("MultiplePhotonDissociation"),
    real("MultiplePhotonDissociationValue"),
    text("Multiplex"),
    text("MultiStateActivation"),
    text("Name"),
    text("ParamA"),
    text("ParamB"),
    text("ParamF"),
    text("ParamR"),
    text("ParamV"),
    text("PhotoIonization"),
    text("Polarity"),
    text("PulsedQDissociation"),
    real("PulsedQDissociationValue"),
    text("ScanData"),
    text("ScanMode"),
    int("ScanTypeIndex"),
    text("SectorScan"),
    text("SourceFragmentation"),
    int("SourceFragmentationInfoCount"),
    int("SourceFragmentationMassRangeCount"),
    text("SourceFragmentationType"),
    text("SupplementalActivation"),
    text("TurboScan"),
    text("Ultra"),
    text("Wideband"),
];

const PRECURSOR: &[Column] = &[
    int("Instrument"),
    int("ScanNumber"),
    int("OrderIndex"),
    text("ActivationType"),
    real("CollisionEnergy"),
    int("CollisionEnergyValid"),
    real("FirstPrecursorMass"),
    real("IsolationWidth"),
    real("IsolationWidthOffset"),
    real("LastPrecursorMass"),
    int("MultipleActivation"),
    real("PrecursorMass"),
    int("PrecursorRangeIsValid"),
];

/// Columns of `table`, in insertion order.
pub fn columns(table: TableKind) -> &'static [Column] {
    match table {
        TableKind::FileHeader => FILE_HEADER,
        TableKind::AutoSamplerInformation => AUTO_SAMPLER,
        TableKind::RawFile => RAW_FILE,
        TableKind::InstrumentType => INSTRUMENT_TYPE,
        TableKind::InstrumentData => INSTRUMENT_DATA,
        TableKind::RunHeader => RUN_HEADER,
        TableKind::RunHeaderEx => RUN_HEADER_EX,
        TableKind::TrailerExtraHeaderInformation => TRAILER_EXTRA_HEADER,
        TableKind::TrailerExtraInformation => TRAILER_EXTRA,
        TableKind::ScanStatistics => SCAN_STATISTICS,
        TableKind::ScanObject => SCAN_OBJECT,
        TableKind::CentroidStream => CENTROID_STREAM,
        TableKind::ScanEvent => SCAN_EVENT,
        TableKind::Precursor => PRECURSOR,
        TableKind::CentroidScan => CENTROID_SCAN,
    }
}

/// Primary key columns of `table`.
pub fn primary_key(table: TableKind) -> &'static [&'static str] {
    match table {
        TableKind::FileHeader | TableKind::AutoSamplerInformation | TableKind::RawFile => &["Key"],
        TableKind::InstrumentType | TableKind::InstrumentData => &["Index"],
        TableKind::RunHeader | TableKind::RunHeaderEx => &["Instrument"],
        TableKind::TrailerExtraHeaderInformation => &["Instrument", "HeaderIndex"],
        TableKind::Precursor => &["Instrument", "ScanNumber", "OrderIndex"],
        TableKind::TrailerExtraInformation
        | TableKind::ScanStatistics
        | TableKind::ScanObject
        | TableKind::CentroidStream
        | TableKind::ScanEvent
        | TableKind::CentroidScan => &["Instrument", "ScanNumber"],
    }
}

fn quoted(names: impl Iterator<Item = &'static str>) -> String {
    names
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `CREATE TABLE` statement for `table`.
pub fn create_table_sql(table: TableKind) -> String {
    let columns = columns(table)
        .iter()
        .map(|c| format!("\"{}\" {}", c.name, c.sql_type.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE \"{}\" ({}, PRIMARY KEY ({}))",
        table.name(),
        columns,
        quoted(primary_key(table).iter().copied())
    )
}

/// Parameterized `INSERT` statement for `table`.
pub fn insert_sql(table: TableKind) -> String {
    let columns = columns(table);
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table.name(),
        quoted(columns.iter().map(|c| c.name)),
        placeholders
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_columns_exist() {
        for table in TableKind::ALL {
            let names: Vec<_> = columns(table).iter().map(|c| c.name).collect();
            for key in primary_key(table) {
                assert!(names.contains(key), "{} lacks {}", table, key);
            }
        }
    }

    #[test]
    fn test_column_names_unique() {
        for table in TableKind::ALL {
            let mut names: Vec<_> = columns(table).iter().map(|c| c.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), columns(table).len(), "{}", table);
        }
    }

    #[test]
    fn test_create_table_sql() {
        assert_eq!(
            create_table_sql(TableKind::InstrumentType),
            "CREATE TABLE \"InstrumentType\" (\"Index\" INTEGER, \"InstrumentType\" TEXT, PRIMARY KEY (\"Index\"))"
        );
    }

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            insert_sql(TableKind::TrailerExtraInformation),
            "INSERT INTO \"TrailerExtraInformation\" (\"Instrument\", \"ScanNumber\", \"Labels\", \"Values\") VALUES (?1, ?2, ?3, ?4)"
        );
    }
}
