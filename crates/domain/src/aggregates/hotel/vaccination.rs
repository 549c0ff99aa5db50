use crate::error::HotelError;
use crate::ids::{AnimalId, EmployeeId, VaccineId};
use crate::types::VaccineDamage;
use crate::value_objects::Vaccination;

use super::Hotel;

impl Hotel {
    /// Administer a vaccine to an animal.
    ///
    /// Only a veterinarian responsible for the animal's species may vaccinate
    /// it. The damage is recorded in the animal's health history and the
    /// vaccination in every list it belongs to. A vaccine that does not
    /// target the animal's species is still administered: the vaccination is
    /// also recorded as wrong and [`HotelError::WrongVaccine`] is returned
    /// after the hotel has changed.
    pub fn vaccinate_animal(
        &mut self,
        vaccine: &VaccineId,
        veterinarian: &EmployeeId,
        animal: &AnimalId,
    ) -> Result<VaccineDamage, HotelError> {
        let (record, damage, adequate) = {
            let vaccine = self.vaccine(vaccine)?;
            let animal = self.animal(animal)?;
            let veterinarian = self.veterinarian(veterinarian)?;

            if !veterinarian.treats(animal.species()) {
                return Err(HotelError::UnauthorizedVeterinarian {
                    veterinarian: veterinarian.id().to_string(),
                    species: animal.species().to_string(),
                });
            }

            let adequate = vaccine.is_adequate_for(animal.species());
            let damage = if adequate {
                VaccineDamage::None
            } else {
                let animal_species = self.species(animal.species())?.name();
                let targets = vaccine
                    .species()
                    .filter_map(|species| self.species.get(species))
                    .map(|species| species.name());
                VaccineDamage::assess(animal_species, targets)
            };

            let record = Vaccination::new(
                vaccine.id().clone(),
                veterinarian.id().clone(),
                animal.id().clone(),
                animal.species().clone(),
            );
            (record, damage, adequate)
        };

        if let Some(veterinarian) = self.employees.get_mut(record.veterinarian()) {
            veterinarian.record_vaccination(record.clone());
        }
        if let Some(vaccine) = self.vaccines.get_mut(record.vaccine()) {
            vaccine.record_vaccination(record.clone());
        }
        if let Some(animal) = self.animals.get_mut(record.animal()) {
            animal.record_vaccination(record.clone(), damage);
        }
        self.vaccinations.push(record.clone());
        self.touch();

        if adequate {
            return Ok(damage);
        }
        let error = HotelError::WrongVaccine {
            vaccine: record.vaccine().to_string(),
            animal: record.animal().to_string(),
        };
        self.wrong_vaccinations.push(record);
        Err(error)
    }
}
