//! Textual views that need more than one entity

use std::fmt;

use crate::aggregates::Hotel;
use crate::entities::Habitat;

/// A habitat followed by one line per tree planted in it.
#[derive(Debug, Clone, Copy)]
pub struct HabitatView<'a> {
    habitat: &'a Habitat,
    hotel: &'a Hotel,
}

impl<'a> HabitatView<'a> {
    pub fn new(habitat: &'a Habitat, hotel: &'a Hotel) -> Self {
        Self { habitat, hotel }
    }

    pub fn habitat(&self) -> &'a Habitat {
        self.habitat
    }
}

impl fmt::Display for HabitatView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let habitat = self.habitat;
        write!(
            f,
            "HABITAT|{}|{}|{}|{}",
            habitat.id(),
            habitat.name(),
            habitat.area(),
            habitat.tree_count()
        )?;
        for tree in habitat.trees().filter_map(|id| self.hotel.tree(id).ok()) {
            write!(f, "\n{}", tree)?;
        }
        Ok(())
    }
}
