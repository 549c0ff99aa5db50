//! HVA Engine library.
//!
//! Everything around the hotel model that touches the outside world.
//!
//! ## Structure
//!
//! - `manager` - File association and the save/load/import lifecycle
//! - `infrastructure/` - Snapshot codec, import file reader, clock port
//! - `config` - Settings from the environment and `.env` files
//! - `error` - Engine error type

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod manager;

pub use config::EngineConfig;
pub use error::ManagerError;
pub use manager::HotelManager;
