use std::fmt;

/// Statistics from a completed extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Number of instruments walked
    pub instruments: usize,
    /// Number of scans walked across all instruments
    pub scans: usize,
    /// Number of Precursor rows emitted
    pub precursors: usize,
    /// Number of precursor order indices skipped because the reaction was absent
    pub skipped_reactions: usize,
    /// Number of CentroidScan rows emitted
    pub centroid_scans: usize,
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted {} instruments, {} scans ({} precursors, {} skipped reactions, {} centroid scans)",
            self.instruments,
            self.scans,
            self.precursors,
            self.skipped_reactions,
            self.centroid_scans
        )
    }
}
