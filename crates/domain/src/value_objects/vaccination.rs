use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{AnimalId, EmployeeId, SpeciesId, VaccineId};

/// Record of one vaccine administered by a veterinarian to an animal.
///
/// The same record is appended to the veterinarian, the vaccine, the animal
/// and the hotel; it refers to all of them by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    vaccine: VaccineId,
    veterinarian: EmployeeId,
    animal: AnimalId,
    /// Species of the animal when vaccinated
    species: SpeciesId,
}

impl Vaccination {
    pub fn new(
        vaccine: VaccineId,
        veterinarian: EmployeeId,
        animal: AnimalId,
        species: SpeciesId,
    ) -> Self {
        Self {
            vaccine,
            veterinarian,
            animal,
            species,
        }
    }

    pub fn vaccine(&self) -> &VaccineId {
        &self.vaccine
    }

    pub fn veterinarian(&self) -> &EmployeeId {
        &self.veterinarian
    }

    pub fn animal(&self) -> &AnimalId {
        &self.animal
    }

    pub fn species(&self) -> &SpeciesId {
        &self.species
    }
}

impl fmt::Display for Vaccination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "REGISTO-VACINA|{}|{}|{}",
            self.vaccine, self.veterinarian, self.species
        )
    }
}
