//! Value objects - immutable data carried by the hotel's entities

pub mod tree_state;
pub mod vaccination;

pub use tree_state::{TreeKind, TreeState};
pub use vaccination::Vaccination;
