//! Employee entity - Zookeepers and veterinarians
//!
//! Both kinds share an id and a name. What differs is the responsibility
//! they hold: a zookeeper looks after habitats, a veterinarian after species.
//! The kind is a tagged variant, and score computations match on it at the
//! call site.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HotelError;
use crate::ids::{join_species_ids, EmployeeId, HabitatId, SpeciesId};
use crate::value_objects::Vaccination;

/// Which kind of employee a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeKind {
    Zookeeper,
    Veterinarian,
}

impl EmployeeKind {
    /// Short tag used in textual forms.
    pub fn tag(self) -> &'static str {
        match self {
            EmployeeKind::Zookeeper => "TRT",
            EmployeeKind::Veterinarian => "VET",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for EmployeeKind {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRT" | "TRATADOR" => Ok(EmployeeKind::Zookeeper),
            "VET" | "VETERINÁRIO" => Ok(EmployeeKind::Veterinarian),
            _ => Err(HotelError::UnrecognizedEntry(s.to_string())),
        }
    }
}

/// Responsibilities held by an employee, by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    Zookeeper {
        habitats: BTreeSet<HabitatId>,
    },
    Veterinarian {
        species: BTreeSet<SpeciesId>,
        vaccinations: Vec<Vaccination>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    role: EmployeeRole,
}

impl Employee {
    /// Create an employee with no responsibilities.
    pub fn new(id: EmployeeId, name: impl Into<String>, kind: EmployeeKind) -> Self {
        let role = match kind {
            EmployeeKind::Zookeeper => EmployeeRole::Zookeeper {
                habitats: BTreeSet::new(),
            },
            EmployeeKind::Veterinarian => EmployeeRole::Veterinarian {
                species: BTreeSet::new(),
                vaccinations: Vec::new(),
            },
        };
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn role(&self) -> &EmployeeRole {
        &self.role
    }

    pub fn kind(&self) -> EmployeeKind {
        match self.role {
            EmployeeRole::Zookeeper { .. } => EmployeeKind::Zookeeper,
            EmployeeRole::Veterinarian { .. } => EmployeeKind::Veterinarian,
        }
    }

    pub fn is_veterinarian(&self) -> bool {
        self.kind() == EmployeeKind::Veterinarian
    }

    /// Habitats looked after; empty for a veterinarian.
    pub fn habitats(&self) -> impl Iterator<Item = &HabitatId> {
        let habitats = match &self.role {
            EmployeeRole::Zookeeper { habitats } => Some(habitats.iter()),
            EmployeeRole::Veterinarian { .. } => None,
        };
        habitats.into_iter().flatten()
    }

    /// Species treated; empty for a zookeeper.
    pub fn species(&self) -> impl Iterator<Item = &SpeciesId> {
        let species = match &self.role {
            EmployeeRole::Veterinarian { species, .. } => Some(species.iter()),
            EmployeeRole::Zookeeper { .. } => None,
        };
        species.into_iter().flatten()
    }

    /// Whether this employee is a veterinarian responsible for the species.
    pub fn treats(&self, species_id: &SpeciesId) -> bool {
        match &self.role {
            EmployeeRole::Veterinarian { species, .. } => species.contains(species_id),
            EmployeeRole::Zookeeper { .. } => false,
        }
    }

    pub fn looks_after(&self, habitat: &HabitatId) -> bool {
        match &self.role {
            EmployeeRole::Zookeeper { habitats } => habitats.contains(habitat),
            EmployeeRole::Veterinarian { .. } => false,
        }
    }

    /// Vaccinations administered; empty for a zookeeper.
    pub fn vaccinations(&self) -> &[Vaccination] {
        match &self.role {
            EmployeeRole::Veterinarian { vaccinations, .. } => vaccinations,
            EmployeeRole::Zookeeper { .. } => &[],
        }
    }

    // =========================================================================
    // Mutations (driven by the hotel, which keeps the other side in sync)
    // =========================================================================

    /// Returns false when the employee is not a zookeeper.
    pub(crate) fn assign_habitat(&mut self, habitat: HabitatId) -> bool {
        match &mut self.role {
            EmployeeRole::Zookeeper { habitats } => {
                habitats.insert(habitat);
                true
            }
            EmployeeRole::Veterinarian { .. } => false,
        }
    }

    /// Returns false when the habitat was not assigned.
    pub(crate) fn unassign_habitat(&mut self, habitat: &HabitatId) -> bool {
        match &mut self.role {
            EmployeeRole::Zookeeper { habitats } => habitats.remove(habitat),
            EmployeeRole::Veterinarian { .. } => false,
        }
    }

    /// Returns false when the employee is not a veterinarian.
    pub(crate) fn assign_species(&mut self, species_id: SpeciesId) -> bool {
        match &mut self.role {
            EmployeeRole::Veterinarian { species, .. } => {
                species.insert(species_id);
                true
            }
            EmployeeRole::Zookeeper { .. } => false,
        }
    }

    pub(crate) fn unassign_species(&mut self, species_id: &SpeciesId) -> bool {
        match &mut self.role {
            EmployeeRole::Veterinarian { species, .. } => species.remove(species_id),
            EmployeeRole::Zookeeper { .. } => false,
        }
    }

    pub(crate) fn record_vaccination(&mut self, record: Vaccination) {
        if let EmployeeRole::Veterinarian { vaccinations, .. } = &mut self.role {
            vaccinations.push(record);
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.kind().tag(), self.id, self.name)?;
        let responsibilities = match &self.role {
            EmployeeRole::Zookeeper { habitats } => habitats
                .iter()
                .map(HabitatId::as_str)
                .collect::<Vec<_>>()
                .join(","),
            EmployeeRole::Veterinarian { species, .. } => join_species_ids(species),
        };
        if !responsibilities.is_empty() {
            write!(f, "|{}", responsibilities)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod kind {
        use super::*;

        #[test]
        fn parses_long_and_short_tags() {
            assert_eq!("TRT".parse::<EmployeeKind>(), Ok(EmployeeKind::Zookeeper));
            assert_eq!(
                "TRATADOR".parse::<EmployeeKind>(),
                Ok(EmployeeKind::Zookeeper)
            );
            assert_eq!(
                "VET".parse::<EmployeeKind>(),
                Ok(EmployeeKind::Veterinarian)
            );
            assert_eq!(
                "VETERINÁRIO".parse::<EmployeeKind>(),
                Ok(EmployeeKind::Veterinarian)
            );
        }

        #[test]
        fn rejects_unknown_tag() {
            assert_eq!(
                "CHEF".parse::<EmployeeKind>(),
                Err(HotelError::UnrecognizedEntry("CHEF".to_string()))
            );
        }
    }

    mod responsibilities {
        use super::*;

        #[test]
        fn zookeeper_only_takes_habitats() {
            let mut keeper = Employee::new(EmployeeId::new("T1"), "Ana", EmployeeKind::Zookeeper);
            assert!(keeper.assign_habitat(HabitatId::new("H1")));
            assert!(!keeper.assign_species(SpeciesId::new("L")));
            assert!(keeper.looks_after(&HabitatId::new("h1")));
            assert!(!keeper.treats(&SpeciesId::new("L")));
        }

        #[test]
        fn veterinarian_only_takes_species() {
            let mut vet = Employee::new(EmployeeId::new("V1"), "Rui", EmployeeKind::Veterinarian);
            assert!(vet.assign_species(SpeciesId::new("L")));
            assert!(!vet.assign_habitat(HabitatId::new("H1")));
            assert!(vet.treats(&SpeciesId::new("L")));
            assert!(vet.unassign_species(&SpeciesId::new("L")));
            assert!(!vet.unassign_species(&SpeciesId::new("L")));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn zookeeper_lists_habitats_ignoring_case() {
            let mut keeper = Employee::new(EmployeeId::new("T1"), "Ana", EmployeeKind::Zookeeper);
            keeper.assign_habitat(HabitatId::new("h2"));
            keeper.assign_habitat(HabitatId::new("H1"));
            assert_eq!(keeper.to_string(), "TRT|T1|Ana|H1,h2");
        }

        #[test]
        fn veterinarian_without_species_has_no_trailing_field() {
            let vet = Employee::new(EmployeeId::new("V1"), "Rui", EmployeeKind::Veterinarian);
            assert_eq!(vet.to_string(), "VET|V1|Rui");
        }
    }

    #[test]
    fn role_is_tagged_in_json() {
        let vet = Employee::new(EmployeeId::new("V1"), "Rui", EmployeeKind::Veterinarian);
        let json = serde_json::to_value(&vet).unwrap();
        assert_eq!(json["role"]["kind"], "VETERINARIAN");
    }
}
