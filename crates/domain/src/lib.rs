//! HVA domain: the in-memory model of the hotel for wild animals.
//!
//! Keys, enumerations, entities and the [`Hotel`] aggregate with its
//! registration, vaccination and score operations. This crate performs no
//! I/O and does not log.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod records;
pub mod types;
pub mod value_objects;
pub mod views;

pub use aggregates::Hotel;
pub use entities::{Animal, Employee, EmployeeKind, EmployeeRole, Habitat, Species, Tree, Vaccine};
pub use error::{wrong_vaccine_message, HotelError};
pub use ids::{AnimalId, EmployeeId, HabitatId, SpeciesId, TreeId, VaccineId};
pub use records::Record;
pub use types::{HabitatInfluence, Season, VaccineDamage};
pub use value_objects::{TreeKind, TreeState, Vaccination};
pub use views::HabitatView;
