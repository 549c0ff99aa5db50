use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{AnimalId, EmployeeId, SpeciesId};

/// A species of animal. Names are unique across the hotel.
///
/// The animal and veterinarian sets are back-references maintained by the
/// hotel; they are not persisted and are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    id: SpeciesId,
    name: String,
    #[serde(skip)]
    animals: BTreeSet<AnimalId>,
    #[serde(skip)]
    veterinarians: BTreeSet<EmployeeId>,
}

impl Species {
    pub fn new(id: SpeciesId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            animals: BTreeSet::new(),
            veterinarians: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &SpeciesId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of animals of this species in the hotel.
    pub fn population(&self) -> usize {
        self.animals.len()
    }

    /// Number of veterinarians responsible for this species.
    pub fn veterinarian_count(&self) -> usize {
        self.veterinarians.len()
    }

    pub fn animals(&self) -> impl Iterator<Item = &AnimalId> {
        self.animals.iter()
    }

    pub fn veterinarians(&self) -> impl Iterator<Item = &EmployeeId> {
        self.veterinarians.iter()
    }

    pub fn has_veterinarian(&self, id: &EmployeeId) -> bool {
        self.veterinarians.contains(id)
    }

    pub(crate) fn add_animal(&mut self, id: AnimalId) {
        self.animals.insert(id);
    }

    pub(crate) fn assign_veterinarian(&mut self, id: EmployeeId) {
        self.veterinarians.insert(id);
    }

    pub(crate) fn unassign_veterinarian(&mut self, id: &EmployeeId) {
        self.veterinarians.remove(id);
    }

    pub(crate) fn clear_references(&mut self) {
        self.animals.clear();
        self.veterinarians.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_references_are_not_serialized() {
        let mut species = Species::new(SpeciesId::new("L"), "LION");
        species.add_animal(AnimalId::new("l1"));
        species.assign_veterinarian(EmployeeId::new("V1"));

        let json = serde_json::to_string(&species).unwrap();
        assert_eq!(json, r#"{"id":"L","name":"LION"}"#);

        let back: Species = serde_json::from_str(&json).unwrap();
        assert_eq!(back.population(), 0);
        assert_eq!(back.veterinarian_count(), 0);
    }

    #[test]
    fn veterinarian_links_are_a_set() {
        let mut species = Species::new(SpeciesId::new("L"), "LION");
        species.assign_veterinarian(EmployeeId::new("V1"));
        species.assign_veterinarian(EmployeeId::new("v1"));
        assert_eq!(species.veterinarian_count(), 1);
        species.unassign_veterinarian(&EmployeeId::new("V1"));
        assert_eq!(species.veterinarian_count(), 0);
    }
}
