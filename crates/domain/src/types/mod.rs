//! Enumerations shared across the hotel domain

pub mod influence;
pub mod season;
pub mod vaccine_damage;

pub use influence::HabitatInfluence;
pub use season::Season;
pub use vaccine_damage::VaccineDamage;
