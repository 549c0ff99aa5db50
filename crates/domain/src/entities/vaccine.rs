use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{join_species_ids, SpeciesId, VaccineId};
use crate::value_objects::Vaccination;

/// A vaccine and the species it is adequate for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    id: VaccineId,
    name: String,
    species: BTreeSet<SpeciesId>,
    vaccinations: Vec<Vaccination>,
}

impl Vaccine {
    pub fn new(
        id: VaccineId,
        name: impl Into<String>,
        species: impl IntoIterator<Item = SpeciesId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into_iter().collect(),
            vaccinations: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &VaccineId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> impl Iterator<Item = &SpeciesId> {
        self.species.iter()
    }

    /// Whether the vaccine targets the given species.
    pub fn is_adequate_for(&self, species: &SpeciesId) -> bool {
        self.species.contains(species)
    }

    /// Number of times this vaccine was administered.
    pub fn administered(&self) -> usize {
        self.vaccinations.len()
    }

    pub fn vaccinations(&self) -> &[Vaccination] {
        &self.vaccinations
    }

    pub(crate) fn record_vaccination(&mut self, record: Vaccination) {
        self.vaccinations.push(record);
    }
}

impl fmt::Display for Vaccine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VACINA|{}|{}|{}",
            self.id,
            self.name,
            self.vaccinations.len()
        )?;
        if !self.species.is_empty() {
            write!(f, "|{}", join_species_ids(&self.species))?;
        }
        Ok(())
    }
}
