//! Engine error types.

use thiserror::Error;

use hva_domain::HotelError;

use crate::infrastructure::snapshot::SnapshotError;

/// Failures of the hotel lifecycle: saving, loading and importing.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Saving a changed hotel that was never associated with a file.
    #[error("No file is associated with the hotel")]
    MissingFileAssociation,

    /// The file could not be read as a saved hotel.
    #[error("Unavailable file: {filename}")]
    UnavailableFile {
        filename: String,
        #[source]
        source: SnapshotError,
    },

    /// The import file could not be opened or read.
    #[error("Cannot import file: {filename}")]
    ImportFile {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Hotel(#[from] HotelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ManagerError {
    /// Name of the file involved, when there is one.
    pub fn filename(&self) -> Option<&str> {
        match self {
            ManagerError::UnavailableFile { filename, .. }
            | ManagerError::ImportFile { filename, .. } => Some(filename),
            _ => None,
        }
    }
}
