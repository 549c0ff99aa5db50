//! Snapshot codec for saved hotels
//!
//! A snapshot is the whole hotel plus a small metadata header, written as
//! JSON. Files are opened for the duration of one call and closed on every
//! exit path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hva_domain::Hotel;

use crate::infrastructure::ports::ClockPort;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub version: String,
    pub saved_at: DateTime<Utc>,
}

/// A saved hotel as read back from disk.
#[derive(Debug, Deserialize)]
pub struct HotelSnapshot {
    pub metadata: SnapshotMetadata,
    pub hotel: Hotel,
}

#[derive(Serialize)]
struct HotelSnapshotRef<'a> {
    metadata: &'a SnapshotMetadata,
    hotel: &'a Hotel,
}

/// Errors that can occur while reading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(String),
}

/// Write the hotel to `path`, replacing any previous content.
pub fn write_snapshot(
    path: &Path,
    hotel: &Hotel,
    clock: &dyn ClockPort,
) -> io::Result<SnapshotMetadata> {
    let metadata = SnapshotMetadata {
        version: SNAPSHOT_VERSION.to_string(),
        saved_at: clock.now(),
    };
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(
        &mut writer,
        &HotelSnapshotRef {
            metadata: &metadata,
            hotel,
        },
    )?;
    writer.flush()?;
    Ok(metadata)
}

/// Read a hotel saved by [`write_snapshot`].
pub fn read_snapshot(path: &Path) -> Result<HotelSnapshot, SnapshotError> {
    let reader = BufReader::new(File::open(path)?);
    let snapshot: HotelSnapshot = serde_json::from_reader(reader)?;
    if snapshot.metadata.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.metadata.version));
    }
    Ok(snapshot)
}
