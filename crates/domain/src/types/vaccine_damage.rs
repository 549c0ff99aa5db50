//! Vaccine damage assessment

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome recorded in an animal's health history after a vaccination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VaccineDamage {
    None,
    Little,
    Medium,
    High,
}

impl VaccineDamage {
    /// Label used in the animal's textual form.
    pub fn label(self) -> &'static str {
        match self {
            VaccineDamage::None => "NORMAL",
            VaccineDamage::Little => "CONFUSÃO",
            VaccineDamage::Medium => "ACIDENTE",
            VaccineDamage::High => "ERRO",
        }
    }

    /// Maps a name distance to a damage level for an inadequate vaccine.
    pub fn from_distance(distance: usize) -> VaccineDamage {
        match distance {
            0 => VaccineDamage::Little,
            1..=4 => VaccineDamage::Medium,
            _ => VaccineDamage::High,
        }
    }

    /// Damage caused by a vaccine that does not target the animal's species.
    ///
    /// The distance to each target species is the longer name length minus the
    /// number of characters the two names share; the worst distance wins.
    pub fn assess<'a>(
        animal_species_name: &str,
        target_species_names: impl IntoIterator<Item = &'a str>,
    ) -> VaccineDamage {
        let distance = target_species_names
            .into_iter()
            .map(|target| name_distance(animal_species_name, target))
            .max()
            .unwrap_or(0);
        VaccineDamage::from_distance(distance)
    }
}

impl fmt::Display for VaccineDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn name_distance(a: &str, b: &str) -> usize {
    let longest = a.chars().count().max(b.chars().count());
    longest.abs_diff(common_characters(a, b))
}

/// Size of the case-insensitive multiset intersection of the characters of both names.
pub(crate) fn common_characters(a: &str, b: &str) -> usize {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in a.to_uppercase().chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut common = 0;
    for c in b.to_uppercase().chars() {
        if let Some(count) = counts.get_mut(&c) {
            if *count > 0 {
                *count -= 1;
                common += 1;
            }
        }
    }
    common
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(VaccineDamage::None.label(), "NORMAL");
        assert_eq!(VaccineDamage::Little.label(), "CONFUSÃO");
        assert_eq!(VaccineDamage::Medium.label(), "ACIDENTE");
        assert_eq!(VaccineDamage::High.label(), "ERRO");
    }

    #[test]
    fn test_distance_thresholds() {
        assert_eq!(VaccineDamage::from_distance(0), VaccineDamage::Little);
        assert_eq!(VaccineDamage::from_distance(1), VaccineDamage::Medium);
        assert_eq!(VaccineDamage::from_distance(4), VaccineDamage::Medium);
        assert_eq!(VaccineDamage::from_distance(5), VaccineDamage::High);
    }

    #[test]
    fn test_common_characters_is_case_insensitive_multiset() {
        assert_eq!(common_characters("LION", "TIGER"), 1);
        assert_eq!(common_characters("lion", "LION"), 4);
        assert_eq!(common_characters("aab", "ab"), 2);
        assert_eq!(common_characters("a-b", "b-a"), 3);
    }

    #[test]
    fn test_lion_given_tiger_vaccine_is_an_accident() {
        assert_eq!(VaccineDamage::assess("LION", ["TIGER"]), VaccineDamage::Medium);
    }

    #[test]
    fn test_anagram_species_cause_confusion() {
        assert_eq!(VaccineDamage::assess("ELAPS", ["PALES"]), VaccineDamage::Little);
    }

    #[test]
    fn test_worst_target_wins() {
        let damage = VaccineDamage::assess("CAT", ["CAT", "HIPPOPOTAMUS"]);
        assert_eq!(damage, VaccineDamage::High);
    }
}
