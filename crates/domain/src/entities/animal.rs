use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{AnimalId, HabitatId, SpeciesId};
use crate::types::VaccineDamage;
use crate::value_objects::Vaccination;

/// An animal hosted by the hotel.
///
/// Belongs to exactly one species and lives in exactly one habitat; the
/// hotel keeps the matching back-references on both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    id: AnimalId,
    name: String,
    species: SpeciesId,
    habitat: HabitatId,
    /// Damage recorded by each vaccination, in order of administration
    health_history: Vec<VaccineDamage>,
    vaccinations: Vec<Vaccination>,
}

impl Animal {
    pub fn new(
        id: AnimalId,
        name: impl Into<String>,
        species: SpeciesId,
        habitat: HabitatId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            habitat,
            health_history: Vec::new(),
            vaccinations: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &AnimalId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn species(&self) -> &SpeciesId {
        &self.species
    }

    #[inline]
    pub fn habitat(&self) -> &HabitatId {
        &self.habitat
    }

    pub fn health_history(&self) -> &[VaccineDamage] {
        &self.health_history
    }

    pub fn vaccinations(&self) -> &[Vaccination] {
        &self.vaccinations
    }

    pub(crate) fn move_to(&mut self, habitat: HabitatId) {
        self.habitat = habitat;
    }

    pub(crate) fn record_vaccination(&mut self, record: Vaccination, damage: VaccineDamage) {
        self.health_history.push(damage);
        self.vaccinations.push(record);
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let health = if self.health_history.is_empty() {
            "VOID".to_string()
        } else {
            self.health_history
                .iter()
                .map(|damage| damage.label())
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "ANIMAL|{}|{}|{}|{}|{}",
            self.id, self.name, self.species, health, self.habitat
        )
    }
}
