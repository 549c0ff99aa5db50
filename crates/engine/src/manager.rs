//! Hotel manager - Owns the current hotel and its save file
//!
//! The manager keeps the association between the hotel in memory and the
//! file it is saved to. Saving only writes when the hotel has changed;
//! loading replaces the hotel only when the file could be read.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hva_domain::{Hotel, Season};

use crate::error::ManagerError;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::importer::{self, ImportReport};
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::snapshot;

pub struct HotelManager {
    hotel: Hotel,
    filename: Option<PathBuf>,
    clock: Arc<dyn ClockPort>,
}

impl Default for HotelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HotelManager {
    /// Create a manager with an empty hotel and no associated file.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    pub fn with_clock(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            hotel: Hotel::new(),
            filename: None,
            clock,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn hotel_mut(&mut self) -> &mut Hotel {
        &mut self.hotel
    }

    /// File the hotel is saved to, if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = Some(filename.into());
    }

    /// Whether the hotel has unsaved changes.
    pub fn changed(&self) -> bool {
        self.hotel.has_changed()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Save to the associated file. Does nothing when there are no changes.
    pub fn save(&mut self) -> Result<(), ManagerError> {
        if !self.hotel.has_changed() {
            return Ok(());
        }
        let Some(filename) = self.filename.as_deref() else {
            return Err(ManagerError::MissingFileAssociation);
        };

        let metadata = snapshot::write_snapshot(filename, &self.hotel, self.clock.as_ref())?;
        self.hotel.mark_saved();
        tracing::info!(
            file = %filename.display(),
            saved_at = %metadata.saved_at,
            "Saved hotel"
        );
        Ok(())
    }

    /// Associate a new file, then save to it.
    pub fn save_as(&mut self, filename: impl Into<PathBuf>) -> Result<(), ManagerError> {
        self.filename = Some(filename.into());
        self.save()
    }

    /// Replace the hotel with the one saved in `filename`.
    ///
    /// On failure the current hotel and file association are kept.
    pub fn load(&mut self, filename: impl Into<PathBuf>) -> Result<(), ManagerError> {
        let filename = filename.into();
        let snapshot = snapshot::read_snapshot(&filename).map_err(|source| {
            tracing::warn!(file = %filename.display(), error = %source, "Failed to load hotel");
            ManagerError::UnavailableFile {
                filename: filename.display().to_string(),
                source,
            }
        })?;

        self.hotel = snapshot.hotel;
        self.hotel.mark_saved();
        tracing::info!(
            file = %filename.display(),
            saved_at = %snapshot.metadata.saved_at,
            "Loaded hotel"
        );
        self.filename = Some(filename);
        Ok(())
    }

    /// Replay an import file into the current hotel.
    pub fn import_file(&mut self, filename: impl AsRef<Path>) -> Result<ImportReport, ManagerError> {
        let filename = filename.as_ref();
        let report = importer::import_file(&mut self.hotel, filename).map_err(|source| {
            ManagerError::ImportFile {
                filename: filename.display().to_string(),
                source,
            }
        })?;
        tracing::info!(
            file = %filename.display(),
            accepted = report.accepted,
            rejected = report.failures.len(),
            "Imported hotel entries"
        );
        Ok(report)
    }

    /// Start over with an empty hotel and no associated file.
    pub fn reset(&mut self) {
        self.hotel = Hotel::new();
        self.filename = None;
        tracing::info!("Reset hotel");
    }

    pub fn advance_season(&mut self) -> Season {
        let season = self.hotel.advance_season();
        tracing::debug!(season = %season, "Advanced season");
        season
    }

    pub fn global_satisfaction(&self) -> Result<i64, ManagerError> {
        Ok(self.hotel.global_satisfaction()?)
    }
}
