//! Domain entities
//!
//! Entities are owned by the [`Hotel`](crate::aggregates::Hotel) aggregate and
//! refer to each other by key.

pub mod animal;
pub mod employee;
pub mod habitat;
pub mod species;
pub mod tree;
pub mod vaccine;

pub use animal::Animal;
pub use employee::{Employee, EmployeeKind, EmployeeRole};
pub use habitat::Habitat;
pub use species::Species;
pub use tree::Tree;
pub use vaccine::Vaccine;
