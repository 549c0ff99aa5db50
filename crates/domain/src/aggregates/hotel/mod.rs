//! Hotel aggregate - The root that owns every registry of the animal hotel
//!
//! # Design
//!
//! - **Registries by key**: one ordered map per entity kind. Keys carry their
//!   own case rule, so map order is listing order.
//! - **Links by key**: entities refer to each other through keys resolved in
//!   these registries. The hotel keeps both sides of every link in sync.
//! - **Atomic registration**: duplicates are checked first, then every
//!   reference is resolved, and only then is anything mutated.
//! - **Dirty flag**: every successful mutation marks the hotel as changed.
//!
//! The vaccination protocol, the score computations and the persisted form
//! live in the submodules.

mod scores;
mod vaccination;
mod wire;

use std::collections::BTreeMap;

use crate::entities::{Animal, Employee, EmployeeKind, Habitat, Species, Tree, Vaccine};
use crate::error::HotelError;
use crate::ids::{AnimalId, EmployeeId, HabitatId, SpeciesId, TreeId, VaccineId};
use crate::records::Record;
use crate::types::{HabitatInfluence, Season};
use crate::value_objects::{TreeKind, Vaccination};
use crate::views::HabitatView;

/// The hotel for wild animals.
///
/// # Invariants
///
/// - Every key is unique within its registry under the registry's case rule
/// - Species names are unique
/// - Each animal is indexed by exactly its own species and habitat
/// - A zookeeper looks after a habitat iff the habitat lists the zookeeper;
///   likewise for veterinarians and species
/// - Every tree is in the state of the current season
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hotel {
    species: BTreeMap<SpeciesId, Species>,
    habitats: BTreeMap<HabitatId, Habitat>,
    animals: BTreeMap<AnimalId, Animal>,
    employees: BTreeMap<EmployeeId, Employee>,
    vaccines: BTreeMap<VaccineId, Vaccine>,
    trees: BTreeMap<TreeId, Tree>,
    /// Every vaccination, in order of administration
    vaccinations: Vec<Vaccination>,
    /// Vaccinations with a vaccine that did not target the animal's species
    wrong_vaccinations: Vec<Vaccination>,
    season: Season,
    changed: bool,
}

impl Hotel {
    /// Create an empty hotel in spring.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // State
    // =========================================================================

    #[inline]
    pub fn current_season(&self) -> Season {
        self.season
    }

    /// Whether the hotel changed since it was created, saved or loaded.
    #[inline]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Record that the hotel now matches what was last saved or loaded.
    pub fn mark_saved(&mut self) {
        self.changed = false;
    }

    fn touch(&mut self) {
        self.changed = true;
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Apply a parsed registration record.
    pub fn register_record(&mut self, record: Record) -> Result<(), HotelError> {
        match record {
            Record::Species { id, name } => self.register_species(id, name),
            Record::Habitat {
                id,
                name,
                area,
                trees,
            } => self.register_habitat(id, name, area, &trees),
            Record::Animal {
                id,
                name,
                species,
                habitat,
            } => self.register_animal(id, name, &species, &habitat),
            Record::Employee {
                kind,
                id,
                name,
                responsibilities,
            } => self.register_employee(kind, id, name, &responsibilities),
            Record::Vaccine { id, name, species } => self.register_vaccine(id, name, &species),
            Record::Tree {
                id,
                name,
                age,
                cleaning_difficulty,
                kind,
            } => self
                .register_tree(id, name, age, cleaning_difficulty, kind)
                .map(|_| ()),
        }
    }

    /// Parse and apply a registration entry given as fields, tag first.
    pub fn register_entry<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), HotelError> {
        let record = Record::from_fields(fields)?;
        self.register_record(record)
    }

    pub fn register_species(
        &mut self,
        id: SpeciesId,
        name: impl Into<String>,
    ) -> Result<(), HotelError> {
        let name = name.into();
        if self.species.contains_key(&id) {
            return Err(HotelError::DuplicateSpeciesId(id.to_string()));
        }
        if self.species.values().any(|species| species.name() == name) {
            return Err(HotelError::DuplicateSpeciesName(name));
        }
        self.species.insert(id.clone(), Species::new(id, name));
        self.touch();
        Ok(())
    }

    /// Register a habitat, planting the listed (already registered) trees.
    pub fn register_habitat(
        &mut self,
        id: HabitatId,
        name: impl Into<String>,
        area: i32,
        trees: &[TreeId],
    ) -> Result<(), HotelError> {
        if self.habitats.contains_key(&id) {
            return Err(HotelError::DuplicateHabitatId(id.to_string()));
        }
        let trees = trees
            .iter()
            .map(|tree| self.tree(tree).map(|tree| tree.id().clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut habitat = Habitat::new(id.clone(), name, area);
        for tree in trees {
            habitat.add_tree(tree);
        }
        self.habitats.insert(id, habitat);
        self.touch();
        Ok(())
    }

    pub fn register_animal(
        &mut self,
        id: AnimalId,
        name: impl Into<String>,
        species: &SpeciesId,
        habitat: &HabitatId,
    ) -> Result<(), HotelError> {
        if self.animals.contains_key(&id) {
            return Err(HotelError::DuplicateAnimalId(id.to_string()));
        }
        let species = self.species(species)?.id().clone();
        let habitat = self.habitat(habitat)?.id().clone();

        self.species_entry(&species)?.add_animal(id.clone());
        self.habitat_entry(&habitat)?.add_animal(id.clone());
        self.animals
            .insert(id.clone(), Animal::new(id, name, species, habitat));
        self.touch();
        Ok(())
    }

    /// Register an employee with its initial responsibilities: habitat keys
    /// for a zookeeper, species keys for a veterinarian.
    pub fn register_employee<S: AsRef<str>>(
        &mut self,
        kind: EmployeeKind,
        id: EmployeeId,
        name: impl Into<String>,
        responsibilities: &[S],
    ) -> Result<(), HotelError> {
        if self.employees.contains_key(&id) {
            return Err(HotelError::DuplicateEmployeeId(id.to_string()));
        }

        let mut employee = Employee::new(id.clone(), name, kind);
        match kind {
            EmployeeKind::Zookeeper => {
                let habitats = responsibilities
                    .iter()
                    .map(|key| {
                        self.habitat(&HabitatId::new(key.as_ref()))
                            .map(|habitat| habitat.id().clone())
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                for habitat in habitats {
                    self.habitat_entry(&habitat)?.assign_zookeeper(id.clone());
                    employee.assign_habitat(habitat);
                }
            }
            EmployeeKind::Veterinarian => {
                let species = responsibilities
                    .iter()
                    .map(|key| {
                        self.species(&SpeciesId::new(key.as_ref()))
                            .map(|species| species.id().clone())
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                for species_id in species {
                    self.species_entry(&species_id)?
                        .assign_veterinarian(id.clone());
                    employee.assign_species(species_id);
                }
            }
        }

        self.employees.insert(id, employee);
        self.touch();
        Ok(())
    }

    pub fn register_vaccine(
        &mut self,
        id: VaccineId,
        name: impl Into<String>,
        species: &[SpeciesId],
    ) -> Result<(), HotelError> {
        if self.vaccines.contains_key(&id) {
            return Err(HotelError::DuplicateVaccineId(id.to_string()));
        }
        let species = species
            .iter()
            .map(|species| self.species(species).map(|species| species.id().clone()))
            .collect::<Result<Vec<_>, _>>()?;

        self.vaccines
            .insert(id.clone(), Vaccine::new(id, name, species));
        self.touch();
        Ok(())
    }

    /// Register a tree in the state of the current season.
    pub fn register_tree(
        &mut self,
        id: TreeId,
        name: impl Into<String>,
        age: u32,
        cleaning_difficulty: i32,
        kind: TreeKind,
    ) -> Result<&Tree, HotelError> {
        if self.trees.contains_key(&id) {
            return Err(HotelError::DuplicateTreeId(id.to_string()));
        }
        let tree = Tree::new(
            id.clone(),
            name,
            age,
            cleaning_difficulty,
            kind,
            self.season,
        );
        self.touch();
        Ok(self.trees.entry(id).or_insert(tree))
    }

    /// Register a tree and plant it in an existing habitat.
    pub fn add_tree_to_habitat(
        &mut self,
        habitat: &HabitatId,
        id: TreeId,
        name: impl Into<String>,
        age: u32,
        cleaning_difficulty: i32,
        kind: TreeKind,
    ) -> Result<&Tree, HotelError> {
        let habitat = self.habitat(habitat)?.id().clone();
        self.register_tree(id.clone(), name, age, cleaning_difficulty, kind)?;
        self.habitat_entry(&habitat)?.add_tree(id.clone());
        self.tree(&id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Move an animal to another habitat. Moving to its own habitat is a no-op.
    pub fn transfer_animal(
        &mut self,
        animal: &AnimalId,
        habitat: &HabitatId,
    ) -> Result<(), HotelError> {
        let (animal, previous) = {
            let animal = self.animal(animal)?;
            (animal.id().clone(), animal.habitat().clone())
        };
        let target = self.habitat(habitat)?.id().clone();
        if previous == target {
            return Ok(());
        }

        self.habitat_entry(&previous)?.remove_animal(&animal);
        self.habitat_entry(&target)?.add_animal(animal.clone());
        if let Some(entry) = self.animals.get_mut(&animal) {
            entry.move_to(target);
        }
        self.touch();
        Ok(())
    }

    /// Change a habitat's area. Callers are expected to pass a positive area.
    pub fn change_habitat_area(&mut self, habitat: &HabitatId, area: i32) -> Result<(), HotelError> {
        self.habitat_entry(habitat)?.change_area(area);
        self.touch();
        Ok(())
    }

    /// Set how a habitat affects a species, from its label (`POS`, `NEU` or `NEG`).
    pub fn change_habitat_influence(
        &mut self,
        habitat: &HabitatId,
        species: &SpeciesId,
        label: &str,
    ) -> Result<(), HotelError> {
        self.habitat(habitat)?;
        let species = self.species(species)?.id().clone();
        let influence: HabitatInfluence = label.parse()?;

        self.habitat_entry(habitat)?
            .change_influence(species, influence);
        self.touch();
        Ok(())
    }

    /// Give an employee a new responsibility: a species for a veterinarian,
    /// a habitat for a zookeeper.
    pub fn add_responsibility(
        &mut self,
        employee: &EmployeeId,
        responsibility: &str,
    ) -> Result<(), HotelError> {
        let (employee, kind) = {
            let employee = self.employee(employee)?;
            (employee.id().clone(), employee.kind())
        };
        let missing = || HotelError::no_such_responsibility(employee.as_str(), responsibility);

        match kind {
            EmployeeKind::Zookeeper => {
                let habitat = self
                    .habitats
                    .get_mut(&HabitatId::new(responsibility))
                    .ok_or_else(missing)?;
                habitat.assign_zookeeper(employee.clone());
                let habitat = habitat.id().clone();
                self.employee_entry(&employee)?.assign_habitat(habitat);
            }
            EmployeeKind::Veterinarian => {
                let species = self
                    .species
                    .get_mut(&SpeciesId::new(responsibility))
                    .ok_or_else(missing)?;
                species.assign_veterinarian(employee.clone());
                let species = species.id().clone();
                self.employee_entry(&employee)?.assign_species(species);
            }
        }
        self.touch();
        Ok(())
    }

    /// Take a responsibility away from an employee. Fails when the employee
    /// does not hold it.
    pub fn remove_responsibility(
        &mut self,
        employee: &EmployeeId,
        responsibility: &str,
    ) -> Result<(), HotelError> {
        let employee = self.employee(employee)?.id().clone();
        let missing = || HotelError::no_such_responsibility(employee.as_str(), responsibility);

        let entry = self.employee_entry(&employee)?;
        match entry.kind() {
            EmployeeKind::Zookeeper => {
                let habitat = HabitatId::new(responsibility);
                if !entry.unassign_habitat(&habitat) {
                    return Err(missing());
                }
                if let Some(habitat) = self.habitats.get_mut(&habitat) {
                    habitat.unassign_zookeeper(&employee);
                }
            }
            EmployeeKind::Veterinarian => {
                let species = SpeciesId::new(responsibility);
                if !entry.unassign_species(&species) {
                    return Err(missing());
                }
                if let Some(species) = self.species.get_mut(&species) {
                    species.unassign_veterinarian(&employee);
                }
            }
        }
        self.touch();
        Ok(())
    }

    /// Advance the global season, moving every tree to its next state.
    /// Returns the new season.
    pub fn advance_season(&mut self) -> Season {
        self.season = self.season.next();
        for tree in self.trees.values_mut() {
            tree.advance_season();
        }
        self.touch();
        self.season
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn species(&self, id: &SpeciesId) -> Result<&Species, HotelError> {
        self.species
            .get(id)
            .ok_or_else(|| HotelError::UnknownSpeciesId(id.to_string()))
    }

    pub fn habitat(&self, id: &HabitatId) -> Result<&Habitat, HotelError> {
        self.habitats
            .get(id)
            .ok_or_else(|| HotelError::UnknownHabitatId(id.to_string()))
    }

    pub fn animal(&self, id: &AnimalId) -> Result<&Animal, HotelError> {
        self.animals
            .get(id)
            .ok_or_else(|| HotelError::UnknownAnimalId(id.to_string()))
    }

    pub fn employee(&self, id: &EmployeeId) -> Result<&Employee, HotelError> {
        self.employees
            .get(id)
            .ok_or_else(|| HotelError::UnknownEmployeeId(id.to_string()))
    }

    pub fn vaccine(&self, id: &VaccineId) -> Result<&Vaccine, HotelError> {
        self.vaccines
            .get(id)
            .ok_or_else(|| HotelError::UnknownVaccineId(id.to_string()))
    }

    pub fn tree(&self, id: &TreeId) -> Result<&Tree, HotelError> {
        self.trees
            .get(id)
            .ok_or_else(|| HotelError::UnknownTreeId(id.to_string()))
    }

    /// Resolve an employee that must be a veterinarian.
    pub fn veterinarian(&self, id: &EmployeeId) -> Result<&Employee, HotelError> {
        self.employees
            .get(id)
            .filter(|employee| employee.is_veterinarian())
            .ok_or_else(|| HotelError::UnknownVeterinarianId(id.to_string()))
    }

    fn species_entry(&mut self, id: &SpeciesId) -> Result<&mut Species, HotelError> {
        self.species
            .get_mut(id)
            .ok_or_else(|| HotelError::UnknownSpeciesId(id.to_string()))
    }

    fn habitat_entry(&mut self, id: &HabitatId) -> Result<&mut Habitat, HotelError> {
        self.habitats
            .get_mut(id)
            .ok_or_else(|| HotelError::UnknownHabitatId(id.to_string()))
    }

    fn employee_entry(&mut self, id: &EmployeeId) -> Result<&mut Employee, HotelError> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| HotelError::UnknownEmployeeId(id.to_string()))
    }

    // =========================================================================
    // Listings (ordered by key under each registry's case rule)
    // =========================================================================

    pub fn all_species(&self) -> impl Iterator<Item = &Species> {
        self.species.values()
    }

    pub fn habitats(&self) -> impl Iterator<Item = &Habitat> {
        self.habitats.values()
    }

    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.animals.values()
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    pub fn vaccines(&self) -> impl Iterator<Item = &Vaccine> {
        self.vaccines.values()
    }

    pub fn trees(&self) -> impl Iterator<Item = &Tree> {
        self.trees.values()
    }

    /// Habitats rendered with their trees.
    pub fn habitat_views(&self) -> impl Iterator<Item = HabitatView<'_>> {
        self.habitats
            .values()
            .map(move |habitat| HabitatView::new(habitat, self))
    }

    pub fn habitat_view(&self, id: &HabitatId) -> Result<HabitatView<'_>, HotelError> {
        Ok(HabitatView::new(self.habitat(id)?, self))
    }

    pub fn trees_in_habitat(&self, id: &HabitatId) -> Result<Vec<&Tree>, HotelError> {
        let habitat = self.habitat(id)?;
        Ok(habitat
            .trees()
            .filter_map(|tree| self.trees.get(tree))
            .collect())
    }

    pub fn animals_in_habitat(&self, id: &HabitatId) -> Result<Vec<&Animal>, HotelError> {
        let habitat = self.habitat(id)?;
        Ok(habitat
            .animals()
            .filter_map(|animal| self.animals.get(animal))
            .collect())
    }

    /// Every vaccination, in order of administration.
    pub fn vaccinations(&self) -> &[Vaccination] {
        &self.vaccinations
    }

    pub fn wrong_vaccinations(&self) -> &[Vaccination] {
        &self.wrong_vaccinations
    }

    /// Vaccinations administered by a veterinarian.
    pub fn veterinarian_vaccinations(
        &self,
        id: &EmployeeId,
    ) -> Result<&[Vaccination], HotelError> {
        Ok(self.veterinarian(id)?.vaccinations())
    }

    /// Vaccinations received by an animal.
    pub fn animal_vaccinations(&self, id: &AnimalId) -> Result<&[Vaccination], HotelError> {
        Ok(self.animal(id)?.vaccinations())
    }
}
