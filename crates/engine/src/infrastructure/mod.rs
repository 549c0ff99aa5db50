//! Infrastructure implementations.
//!
//! File formats and the clock port used by the hotel manager.

pub mod clock;
pub mod importer;
pub mod ports;
pub mod snapshot;
