//! Satisfaction and work scores
//!
//! Scores are computed as reals and rounded (half away from zero) only when
//! reported.

use crate::entities::{Animal, Employee, EmployeeRole, Habitat};
use crate::error::HotelError;
use crate::ids::{AnimalId, EmployeeId, HabitatId, TreeId};

use super::Hotel;

const ANIMAL_BASE_SATISFACTION: f64 = 20.0;
const ZOOKEEPER_BASE_SATISFACTION: f64 = 300.0;
const VETERINARIAN_BASE_SATISFACTION: f64 = 20.0;

fn round_score(value: f64) -> i64 {
    value.round() as i64
}

impl Hotel {
    pub fn animal_satisfaction(&self, id: &AnimalId) -> Result<i64, HotelError> {
        let animal = self.animal(id)?;
        Ok(round_score(self.animal_score(animal)?))
    }

    pub fn employee_satisfaction(&self, id: &EmployeeId) -> Result<i64, HotelError> {
        let employee = self.employee(id)?;
        Ok(round_score(self.employee_score(employee)?))
    }

    /// Sum of every animal's and employee's satisfaction, rounded once.
    pub fn global_satisfaction(&self) -> Result<i64, HotelError> {
        let mut total = 0.0;
        for animal in self.animals.values() {
            total += self.animal_score(animal)?;
        }
        for employee in self.employees.values() {
            total += self.employee_score(employee)?;
        }
        Ok(round_score(total))
    }

    pub fn habitat_work(&self, id: &HabitatId) -> Result<i64, HotelError> {
        Ok(round_score(self.habitat_work_score(self.habitat(id)?)))
    }

    pub fn tree_cleaning_effort(&self, id: &TreeId) -> Result<f64, HotelError> {
        Ok(self.tree(id)?.cleaning_effort())
    }

    fn animal_score(&self, animal: &Animal) -> Result<f64, HotelError> {
        let habitat = self.habitat(animal.habitat())?;
        let population = habitat.population();
        let same = habitat
            .animals()
            .filter(|other| *other != animal.id())
            .filter_map(|other| self.animals.get(other))
            .filter(|other| other.species() == animal.species())
            .count();
        let different = population.saturating_sub(same + 1);

        Ok(ANIMAL_BASE_SATISFACTION + 3.0 * same as f64 - 2.0 * different as f64
            + f64::from(habitat.area()) / population.max(1) as f64
            + f64::from(habitat.influence_on(animal.species()).value()))
    }

    fn employee_score(&self, employee: &Employee) -> Result<f64, HotelError> {
        match employee.role() {
            EmployeeRole::Zookeeper { habitats } => {
                let mut work = 0.0;
                for id in habitats {
                    let habitat = self.habitat(id)?;
                    work += self.habitat_work_score(habitat) / habitat.zookeeper_count().max(1) as f64;
                }
                Ok(ZOOKEEPER_BASE_SATISFACTION - work)
            }
            EmployeeRole::Veterinarian { species, .. } => {
                let mut work = 0.0;
                for id in species {
                    let species = self.species(id)?;
                    work += species.population() as f64 / species.veterinarian_count().max(1) as f64;
                }
                Ok(VETERINARIAN_BASE_SATISFACTION - work)
            }
        }
    }

    fn habitat_work_score(&self, habitat: &Habitat) -> f64 {
        let trees: f64 = habitat
            .trees()
            .filter_map(|tree| self.trees.get(tree))
            .map(|tree| tree.cleaning_effort())
            .sum();
        f64::from(habitat.area()) + 3.0 * habitat.population() as f64 + trees
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::savannah;
    use super::*;
    use crate::ids::SpeciesId;
    use crate::value_objects::TreeKind;

    fn positive_for_lions() -> Hotel {
        let mut hotel = savannah();
        hotel
            .change_habitat_influence(&HabitatId::new("H1"), &SpeciesId::new("L"), "POS")
            .unwrap();
        hotel
    }

    mod animals {
        use super::*;

        #[test]
        fn lion_among_lion_and_eagle() {
            let hotel = positive_for_lions();
            // 20 + 3 - 2 + 100/3 + 20
            assert_eq!(hotel.animal_satisfaction(&AnimalId::new("l1")), Ok(74));
        }

        #[test]
        fn eagle_among_two_lions() {
            let hotel = positive_for_lions();
            // 20 - 4 + 100/3
            assert_eq!(hotel.animal_satisfaction(&AnimalId::new("e1")), Ok(49));
        }

        #[test]
        fn negative_influence_lowers_satisfaction() {
            let mut hotel = savannah();
            hotel
                .change_habitat_influence(&HabitatId::new("H1"), &SpeciesId::new("E"), "NEG")
                .unwrap();
            assert_eq!(hotel.animal_satisfaction(&AnimalId::new("e1")), Ok(29));
        }
    }

    mod employees {
        use super::*;

        #[test]
        fn zookeeper_shares_habitat_work() {
            let mut hotel = savannah();
            // work(H1) = 100 + 3*3 = 109
            assert_eq!(hotel.habitat_work(&HabitatId::new("H1")), Ok(109));
            assert_eq!(hotel.employee_satisfaction(&EmployeeId::new("T1")), Ok(191));

            hotel
                .register_employee(
                    crate::entities::EmployeeKind::Zookeeper,
                    EmployeeId::new("T2"),
                    "Bia",
                    &["H1"],
                )
                .unwrap();
            // 300 - 109/2 = 245.5
            assert_eq!(hotel.employee_satisfaction(&EmployeeId::new("T1")), Ok(246));
        }

        #[test]
        fn veterinarian_shares_species_population() {
            let hotel = savannah();
            // 20 - 2/1
            assert_eq!(hotel.employee_satisfaction(&EmployeeId::new("V1")), Ok(18));
        }
    }

    #[test]
    fn tree_effort_adds_to_habitat_work() {
        let mut hotel = savannah();
        hotel
            .add_tree_to_habitat(
                &HabitatId::new("H2"),
                TreeId::new("T1"),
                "Pinheiro",
                0,
                5,
                TreeKind::Evergreen,
            )
            .unwrap();
        assert_eq!(hotel.tree_cleaning_effort(&TreeId::new("T1")), Ok(0.0));
        assert_eq!(hotel.habitat_work(&HabitatId::new("H2")), Ok(40));

        hotel.advance_season();
        let effort = hotel.tree_cleaning_effort(&TreeId::new("T1")).unwrap();
        assert!((effort - 5.0 * 1.25_f64.ln()).abs() < 1e-9);
        assert_eq!(hotel.habitat_work(&HabitatId::new("H2")), Ok(41));
    }

    #[test]
    fn global_satisfaction_rounds_once() {
        let hotel = positive_for_lions();
        // animals: 74.33 + 74.33 + 49.33, zookeeper 191, vet 18
        assert_eq!(hotel.global_satisfaction(), Ok(407));
    }
}
