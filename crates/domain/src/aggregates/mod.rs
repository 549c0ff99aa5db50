//! Aggregate roots - domain objects that own their related data
//!
//! The hotel is the only aggregate: it owns every registry, and entities
//! are reached and mutated through it.

pub mod hotel;

pub use hotel::Hotel;
