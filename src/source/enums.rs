//! Vendor vocabulary enums.
//!
//! These mirror the enumerations exposed by Thermo's RawFileReader library.
//! Every enum serializes as its variant name, and that same name is what the
//! store writes into TEXT columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a unit-only vendor enum with `as_str`, `Display` and a default
/// of the first listed variant.
macro_rules! vendor_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $first:ident $(, $variant:ident)* $(,)? }
    ) => {
        $(#[$meta])*
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $first,
            $($variant),*
        }

        impl $name {
            /// Variant name as stored in the database.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vendor_enum! {
    /// Kind of device occupying an instrument slot.
    Device { MS, MSAnalog, Analog, UV, Pda, Other, None }
}

vendor_enum! {
    /// File type recorded in the file header.
    FileType {
        RawFile,
        NotSupported,
        ExperimentMethod,
        SampleList,
        ProcessingMethod,
        TuneMethod,
        ResultsFile,
        QuanFile,
        CalibrationFile,
        MethodFile,
        XqnFile,
        LayoutFile,
        MethodEditorLayout,
    }
}

vendor_enum! {
    /// Shape of an autosampler tray.
    TrayShape { Rectangular, Circular, StaggeredOdd, StaggeredEven, Unknown, Invalid }
}

vendor_enum! {
    /// Units for mass tolerances.
    ToleranceUnits { Mmu, Ppm, Amu }
}

vendor_enum! {
    /// Units of an analog or UV channel.
    DataUnits {
        None,
        AbsorbanceUnits,
        MilliAbsorbanceUnits,
        MicroAbsorbanceUnits,
        Volts,
        MilliVolts,
        MicroVolts,
    }
}

vendor_enum! {
    /// Data type of a trailer-extra field.
    GenericDataTypes {
        Null,
        Char,
        TrueFalse,
        YesNo,
        OnOff,
        UChar,
        Short,
        UShort,
        Long,
        ULong,
        Float,
        Double,
        CharString,
        WCharString,
    }
}

vendor_enum! {
    /// Packet layout of a stored spectrum.
    SpectrumPacketType {
        ProfileSpectrum,
        LowResolutionSpectrum,
        HighResolutionSpectrum,
        ProfileIndex,
        CompressedAccurateSpectrum,
        StandardAccurateSpectrum,
        StandardUncalibratedSpectrum,
        AccurateMassProfileSpectrum,
        PdaUvDiscreteChannel,
        PdaUvDiscreteChannelIndex,
        PdaUvScannedSpectrum,
        PdaUvScannedSpectrumIndex,
        UvChannel,
        MassSpecAnalog,
        ProfileSpectrumType2,
        LowResolutionSpectrumType2,
        ProfileSpectrumType3,
        LowResolutionSpectrumType3,
        LinearTrapCentroid,
        LinearTrapProfile,
        FtCentroid,
        FtProfile,
        HighResolutionCompressedProfile,
        LowResolutionCompressedProfile,
        LowResolutionSpectrumType4,
        InvalidPacket,
    }
}

vendor_enum! {
    /// Three-valued scan filter flag.
    TriState { Off, On, Any }
}

vendor_enum! {
    /// Ion polarity of a scan.
    PolarityType { Negative, Positive, Any }
}

vendor_enum! {
    /// Whether the scan was acquired as centroids or profile.
    ScanDataType { Centroid, Profile, Any }
}

vendor_enum! {
    /// Scan mode of a scan event.
    ScanModeType { Full, Zoom, Sim, Srm, Crm, Any, Q1Ms, Q3Ms }
}

vendor_enum! {
    /// Mass analyzer used for a scan.
    MassAnalyzerType { ITMS, TQMS, SQMS, TOFMS, FTMS, Sector, Any, ASTMS }
}

vendor_enum! {
    /// Ionization source mode.
    IonizationModeType {
        ElectronImpact,
        ChemicalIonization,
        FastAtomBombardment,
        ElectroSpray,
        AtmosphericPressureChemicalIonization,
        NanoSpray,
        ThermoSpray,
        FieldDesorption,
        MatrixAssistedLaserDesorptionIonization,
        GlowDischarge,
        Any,
        PaperSprayIonization,
        CardNanoSprayIonization,
        IonizationMode1,
        IonizationMode2,
        IonizationMode3,
        IonizationMode4,
        IonizationMode5,
        IonizationMode6,
        IonizationMode7,
        IonizationMode8,
        IonizationMode9,
        IonModeBeyondKnown,
    }
}

vendor_enum! {
    /// Accurate-mass calibration mode of a scan event.
    EventAccurateMass { Internal, External, Off }
}

vendor_enum! {
    /// Compensation voltage setting of a scan event.
    CompensationVoltageType { NoValue, SingleValue, Ramp, SIM, Any }
}

vendor_enum! {
    /// Whether a detector value is valid for the scan event.
    DetectorValidity { Valid, Any, NotValid }
}

vendor_enum! {
    /// Field free region of a sector instrument.
    FieldFreeRegionType { FieldFreeRegion1, FieldFreeRegion2, Any }
}

vendor_enum! {
    /// Sector scan type.
    SectorScanType { SectorBScan, SectorEScan, Any }
}

vendor_enum! {
    /// Source fragmentation setting of a scan event.
    SourceFragmentationValueType { NoValue, SingleValue, Ramp, SIM, Any }
}

vendor_enum! {
    /// Activation used for one precursor reaction.
    ActivationType {
        CollisionInducedDissociation,
        MultiPhotonDissociation,
        ElectronCaptureDissociation,
        PQD,
        ElectronTransferDissociation,
        HigherEnergyCollisionalDissociation,
        Any,
        SAactivation,
        ProtonTransferReaction,
        NegativeElectronTransferDissociation,
        NegativeProtonTransferReaction,
        UltraVioletPhotoDissociation,
        ModeA,
        ModeB,
        ModeC,
        ModeD,
        ModeE,
        ModeF,
        ModeG,
        ModeH,
        ModeI,
        ModeJ,
        ModeK,
        ModeL,
        ModeM,
        ModeN,
        ModeO,
        ModeP,
        ModeQ,
        ModeR,
        ModeS,
        ModeT,
        ModeU,
        ModeV,
        ModeW,
        ModeX,
        ModeY,
        ModeZ,
        LastActivation,
    }
}

/// MS order of a scan event.
///
/// Unlike the other vocabulary enums this one carries a numeric level,
/// which drives how many precursor reactions a scan has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MsOrder {
    /// Neutral gain scan
    Ng,
    /// Neutral loss scan
    Nl,
    /// Parent scan
    Par,
    /// Any order (filter wildcard)
    Any,
    /// Full MS survey scan
    #[default]
    Ms,
    /// MS/MS
    Ms2,
    /// MS^3
    Ms3,
    /// MS^4
    Ms4,
    /// MS^5
    Ms5,
    /// MS^6
    Ms6,
    /// MS^7
    Ms7,
    /// MS^8
    Ms8,
    /// MS^9
    Ms9,
    /// MS^10
    Ms10,
}

impl MsOrder {
    /// Numeric order as the vendor encodes it (`Ng` = -3 through `Ms10` = 10).
    pub fn level(&self) -> i32 {
        match self {
            MsOrder::Ng => -3,
            MsOrder::Nl => -2,
            MsOrder::Par => -1,
            MsOrder::Any => 0,
            MsOrder::Ms => 1,
            MsOrder::Ms2 => 2,
            MsOrder::Ms3 => 3,
            MsOrder::Ms4 => 4,
            MsOrder::Ms5 => 5,
            MsOrder::Ms6 => 6,
            MsOrder::Ms7 => 7,
            MsOrder::Ms8 => 8,
            MsOrder::Ms9 => 9,
            MsOrder::Ms10 => 10,
        }
    }

    /// Number of precursor reactions an event of this order carries.
    pub fn precursor_count(&self) -> i32 {
        (self.level() - 1).max(0)
    }

    /// Variant name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            MsOrder::Ng => "Ng",
            MsOrder::Nl => "Nl",
            MsOrder::Par => "Par",
            MsOrder::Any => "Any",
            MsOrder::Ms => "Ms",
            MsOrder::Ms2 => "Ms2",
            MsOrder::Ms3 => "Ms3",
            MsOrder::Ms4 => "Ms4",
            MsOrder::Ms5 => "Ms5",
            MsOrder::Ms6 => "Ms6",
            MsOrder::Ms7 => "Ms7",
            MsOrder::Ms8 => "Ms8",
            MsOrder::Ms9 => "Ms9",
            MsOrder::Ms10 => "Ms10",
        }
    }
}

impl From<i32> for MsOrder {
    fn from(value: i32) -> Self {
        match value {
            -3 => Self::Ng,
            -2 => Self::Nl,
            -1 => Self::Par,
            1 => Self::Ms,
            2 => Self::Ms2,
            3 => Self::Ms3,
            4 => Self::Ms4,
            5 => Self::Ms5,
            6 => Self::Ms6,
            7 => Self::Ms7,
            8 => Self::Ms8,
            9 => Self::Ms9,
            10 => Self::Ms10,
            _ => Self::Any,
        }
    }
}

impl fmt::Display for MsOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-peak option bits of a centroid (saturated, fragmented, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeakOptions(pub u32);

impl PeakOptions {
    /// No flags set
    pub const NONE: PeakOptions = PeakOptions(0);
    /// Detector saturated at this peak
    pub const SATURATED: PeakOptions = PeakOptions(1);
    /// Peak was fragmented
    pub const FRAGMENTED: PeakOptions = PeakOptions(2);
    /// Peak was merged from several
    pub const MERGED: PeakOptions = PeakOptions(4);
    /// Exception peak
    pub const EXCEPTION: PeakOptions = PeakOptions(8);
    /// Reference peak
    pub const REFERENCE: PeakOptions = PeakOptions(16);
    /// Peak was modified
    pub const MODIFIED: PeakOptions = PeakOptions(32);
    /// Lock mass peak
    pub const LOCK_PEAK: PeakOptions = PeakOptions(64);
}
