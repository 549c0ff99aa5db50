//! Persisted form of the hotel
//!
//! Only authoritative links are written: an animal's species and habitat,
//! an employee's responsibilities, a habitat's trees and influences, and the
//! vaccination records. The back-references held by species and habitats are
//! rebuilt when the hotel is read back, and a hotel read back is unchanged.

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::{Animal, Employee, EmployeeRole, Habitat, Species, Tree, Vaccine};
use crate::error::HotelError;
use crate::types::Season;
use crate::value_objects::Vaccination;

use super::Hotel;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotelWireFormat {
    season: Season,
    species: Vec<Species>,
    habitats: Vec<Habitat>,
    trees: Vec<Tree>,
    animals: Vec<Animal>,
    employees: Vec<Employee>,
    vaccines: Vec<Vaccine>,
    #[serde(default)]
    vaccinations: Vec<Vaccination>,
    #[serde(default)]
    wrong_vaccinations: Vec<Vaccination>,
}

impl Serialize for Hotel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = HotelWireFormat {
            season: self.season,
            species: self.species.values().cloned().collect(),
            habitats: self.habitats.values().cloned().collect(),
            trees: self.trees.values().cloned().collect(),
            animals: self.animals.values().cloned().collect(),
            employees: self.employees.values().cloned().collect(),
            vaccines: self.vaccines.values().cloned().collect(),
            vaccinations: self.vaccinations.clone(),
            wrong_vaccinations: self.wrong_vaccinations.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hotel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HotelWireFormat::deserialize(deserializer)?;
        Hotel::from_wire(wire).map_err(de::Error::custom)
    }
}

impl Hotel {
    fn from_wire(wire: HotelWireFormat) -> Result<Self, HotelError> {
        let mut hotel = Hotel {
            season: wire.season,
            vaccinations: wire.vaccinations,
            wrong_vaccinations: wire.wrong_vaccinations,
            ..Hotel::default()
        };

        hotel.species = index(wire.species, |s| s.id().clone(), |s| {
            HotelError::DuplicateSpeciesId(s.id().to_string())
        })?;
        hotel.trees = index(wire.trees, |t| t.id().clone(), |t| {
            HotelError::DuplicateTreeId(t.id().to_string())
        })?;
        hotel.habitats = index(wire.habitats, |h| h.id().clone(), |h| {
            HotelError::DuplicateHabitatId(h.id().to_string())
        })?;
        hotel.animals = index(wire.animals, |a| a.id().clone(), |a| {
            HotelError::DuplicateAnimalId(a.id().to_string())
        })?;
        hotel.employees = index(wire.employees, |e| e.id().clone(), |e| {
            HotelError::DuplicateEmployeeId(e.id().to_string())
        })?;
        hotel.vaccines = index(wire.vaccines, |v| v.id().clone(), |v| {
            HotelError::DuplicateVaccineId(v.id().to_string())
        })?;

        hotel.check_references()?;
        hotel.rebuild_back_references()?;
        hotel.changed = false;
        Ok(hotel)
    }
}

fn index<K: Ord, V>(
    values: Vec<V>,
    key: impl Fn(&V) -> K,
    duplicate: impl Fn(&V) -> HotelError,
) -> Result<BTreeMap<K, V>, HotelError> {
    let mut map = BTreeMap::new();
    for value in values {
        let k = key(&value);
        if map.contains_key(&k) {
            return Err(duplicate(&value));
        }
        map.insert(k, value);
    }
    Ok(map)
}

impl Hotel {
    /// Links that are persisted must point at registered entities.
    fn check_references(&self) -> Result<(), HotelError> {
        for habitat in self.habitats.values() {
            for tree in habitat.trees() {
                self.tree(tree)?;
            }
            for (species, _) in habitat.influences() {
                self.species(species)?;
            }
        }
        for vaccine in self.vaccines.values() {
            for species in vaccine.species() {
                self.species(species)?;
            }
        }
        Ok(())
    }

    fn rebuild_back_references(&mut self) -> Result<(), HotelError> {
        for species in self.species.values_mut() {
            species.clear_references();
        }
        for habitat in self.habitats.values_mut() {
            habitat.clear_references();
        }

        for animal in self.animals.values() {
            self.species
                .get_mut(animal.species())
                .ok_or_else(|| HotelError::UnknownSpeciesId(animal.species().to_string()))?
                .add_animal(animal.id().clone());
            self.habitats
                .get_mut(animal.habitat())
                .ok_or_else(|| HotelError::UnknownHabitatId(animal.habitat().to_string()))?
                .add_animal(animal.id().clone());
        }

        for employee in self.employees.values() {
            match employee.role() {
                EmployeeRole::Zookeeper { habitats } => {
                    for id in habitats {
                        self.habitats
                            .get_mut(id)
                            .ok_or_else(|| HotelError::UnknownHabitatId(id.to_string()))?
                            .assign_zookeeper(employee.id().clone());
                    }
                }
                EmployeeRole::Veterinarian { species, .. } => {
                    for id in species {
                        self.species
                            .get_mut(id)
                            .ok_or_else(|| HotelError::UnknownSpeciesId(id.to_string()))?
                            .assign_veterinarian(employee.id().clone());
                    }
                }
            }
        }
        Ok(())
    }
}
