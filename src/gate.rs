//! # Precondition Gate
//!
//! One state check run before extraction. A source that fails it produces
//! no rows and no destination file.

use std::fmt;

use crate::source::RawSource;

/// Outcome of checking a freshly opened source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// No reader could be constructed
    Unusable,
    /// The reader reported an internal error
    SourceError(String),
    /// The reader did not open the file
    NotOpen,
    /// The file is still being written by the instrument
    InAcquisition,
    /// Extraction may proceed
    Ready,
}

impl Readiness {
    /// Classify a source. Checks run in declaration order and the first
    /// match wins.
    pub fn classify(source: Option<&dyn RawSource>) -> Self {
        let Some(source) = source else {
            return Readiness::Unusable;
        };
        if source.is_error() {
            return Readiness::SourceError(source.file_error().error_message);
        }
        if !source.is_open() {
            return Readiness::NotOpen;
        }
        if source.in_acquisition() {
            return Readiness::InAcquisition;
        }
        Readiness::Ready
    }

    /// Whether extraction may proceed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Readiness::Unusable => -1,
            Readiness::SourceError(_) => -2,
            Readiness::NotOpen => -3,
            Readiness::InAcquisition => -4,
            Readiness::Ready => 0,
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Unusable => f.write_str("Unable to initialize RawFileReader"),
            Readiness::SourceError(message) => {
                write!(f, "Error during accessing .raw file: {}", message)
            }
            Readiness::NotOpen => f.write_str("Error opening .raw file"),
            Readiness::InAcquisition => f.write_str(".raw file is still being acquired"),
            Readiness::Ready => f.write_str("ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{AcquisitionSnapshot, FileError};

    fn snapshot(is_error: bool, is_open: bool, in_acquisition: bool) -> AcquisitionSnapshot {
        let mut source = AcquisitionSnapshot::new();
        source.is_error = is_error;
        source.is_open = is_open;
        source.in_acquisition = in_acquisition;
        source.file_error = FileError {
            has_error: is_error,
            error_message: "bad checksum".to_string(),
            ..Default::default()
        };
        source
    }

    #[test]
    fn test_missing_source_is_unusable() {
        let readiness = Readiness::classify(None);
        assert_eq!(readiness, Readiness::Unusable);
        assert_eq!(readiness.exit_code(), -1);
        assert_eq!(readiness.to_string(), "Unable to initialize RawFileReader");
    }

    #[test]
    fn test_error_takes_precedence_over_not_open() {
        let source = snapshot(true, false, true);
        let readiness = Readiness::classify(Some(&source));
        assert_eq!(readiness, Readiness::SourceError("bad checksum".to_string()));
        assert_eq!(readiness.exit_code(), -2);
        assert_eq!(
            readiness.to_string(),
            "Error during accessing .raw file: bad checksum"
        );
    }

    #[test]
    fn test_not_open_precedes_acquisition() {
        let source = snapshot(false, false, true);
        let readiness = Readiness::classify(Some(&source));
        assert_eq!(readiness, Readiness::NotOpen);
        assert_eq!(readiness.exit_code(), -3);
    }

    #[test]
    fn test_in_acquisition() {
        let source = snapshot(false, true, true);
        let readiness = Readiness::classify(Some(&source));
        assert_eq!(readiness, Readiness::InAcquisition);
        assert_eq!(readiness.exit_code(), -4);
        assert_eq!(readiness.to_string(), ".raw file is still being acquired");
    }

    #[test]
    fn test_ready() {
        let source = snapshot(false, true, false);
        let readiness = Readiness::classify(Some(&source));
        assert!(readiness.is_ready());
        assert_eq!(readiness.exit_code(), 0);
    }
}
