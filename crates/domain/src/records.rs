//! Registration records
//!
//! A record is one `|`-separated entry of an import file (or of an
//! interactive registration). The first field is a type tag; parsing turns
//! the remaining fields into typed keys and numbers, and the hotel then
//! applies the record with [`Hotel::register_record`](crate::Hotel::register_record).

use std::str::FromStr;

use crate::error::HotelError;
use crate::entities::EmployeeKind;
use crate::ids::{AnimalId, EmployeeId, HabitatId, SpeciesId, TreeId, VaccineId};
use crate::value_objects::TreeKind;

pub const SPECIES_TAG: &str = "ESPÉCIE";
pub const HABITAT_TAG: &str = "HABITAT";
pub const ANIMAL_TAG: &str = "ANIMAL";
pub const ZOOKEEPER_TAG: &str = "TRATADOR";
pub const VETERINARIAN_TAG: &str = "VETERINÁRIO";
pub const VACCINE_TAG: &str = "VACINA";
pub const TREE_TAG: &str = "ÁRVORE";

/// A parsed registration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Species {
        id: SpeciesId,
        name: String,
    },
    Habitat {
        id: HabitatId,
        name: String,
        area: i32,
        trees: Vec<TreeId>,
    },
    Animal {
        id: AnimalId,
        name: String,
        species: SpeciesId,
        habitat: HabitatId,
    },
    /// Responsibilities are habitat keys for a zookeeper and species keys for
    /// a veterinarian; they are resolved when the record is applied.
    Employee {
        kind: EmployeeKind,
        id: EmployeeId,
        name: String,
        responsibilities: Vec<String>,
    },
    Vaccine {
        id: VaccineId,
        name: String,
        species: Vec<SpeciesId>,
    },
    Tree {
        id: TreeId,
        name: String,
        age: u32,
        cleaning_difficulty: i32,
        kind: TreeKind,
    },
}

impl Record {
    /// Parse a record from its fields, tag first.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, HotelError> {
        let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
        let Some((&tag, rest)) = fields.split_first() else {
            return Err(HotelError::UnrecognizedEntry(String::new()));
        };

        match tag {
            SPECIES_TAG => {
                let [id, name] = exact::<2>(tag, rest)?;
                Ok(Record::Species {
                    id: SpeciesId::new(id),
                    name: name.to_string(),
                })
            }
            HABITAT_TAG => {
                let ([id, name, area], list) = with_optional_list::<3>(tag, rest)?;
                Ok(Record::Habitat {
                    id: HabitatId::new(id),
                    name: name.to_string(),
                    area: parse_number(tag, "area", area)?,
                    trees: split_list(list).map(TreeId::new).collect(),
                })
            }
            ANIMAL_TAG => {
                let [id, name, species, habitat] = exact::<4>(tag, rest)?;
                Ok(Record::Animal {
                    id: AnimalId::new(id),
                    name: name.to_string(),
                    species: SpeciesId::new(species),
                    habitat: HabitatId::new(habitat),
                })
            }
            VACCINE_TAG => {
                let ([id, name], list) = with_optional_list::<2>(tag, rest)?;
                Ok(Record::Vaccine {
                    id: VaccineId::new(id),
                    name: name.to_string(),
                    species: split_list(list).map(SpeciesId::new).collect(),
                })
            }
            TREE_TAG => {
                let [id, name, age, difficulty, kind] = exact::<5>(tag, rest)?;
                Ok(Record::Tree {
                    id: TreeId::new(id),
                    name: name.to_string(),
                    age: parse_number(tag, "age", age)?,
                    cleaning_difficulty: parse_number(tag, "cleaning difficulty", difficulty)?,
                    kind: kind.parse()?,
                })
            }
            ZOOKEEPER_TAG | VETERINARIAN_TAG => {
                let kind: EmployeeKind = tag.parse()?;
                let ([id, name], list) = with_optional_list::<2>(tag, rest)?;
                Ok(Record::Employee {
                    kind,
                    id: EmployeeId::new(id),
                    name: name.to_string(),
                    responsibilities: split_list(list).map(str::to_string).collect(),
                })
            }
            other => Err(HotelError::UnrecognizedEntry(other.to_string())),
        }
    }

    /// Tag identifying the record kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Record::Species { .. } => SPECIES_TAG,
            Record::Habitat { .. } => HABITAT_TAG,
            Record::Animal { .. } => ANIMAL_TAG,
            Record::Employee {
                kind: EmployeeKind::Zookeeper,
                ..
            } => ZOOKEEPER_TAG,
            Record::Employee {
                kind: EmployeeKind::Veterinarian,
                ..
            } => VETERINARIAN_TAG,
            Record::Vaccine { .. } => VACCINE_TAG,
            Record::Tree { .. } => TREE_TAG,
        }
    }
}

impl FromStr for Record {
    type Err = HotelError;

    /// Parse one import line.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split('|').collect();
        Record::from_fields(&fields)
    }
}

fn exact<'a, const N: usize>(tag: &str, rest: &[&'a str]) -> Result<[&'a str; N], HotelError> {
    <[&str; N]>::try_from(rest).map_err(|_| {
        HotelError::malformed(tag, format!("expected {} fields, found {}", N, rest.len()))
    })
}

fn with_optional_list<'a, const N: usize>(
    tag: &str,
    rest: &[&'a str],
) -> Result<([&'a str; N], Option<&'a str>), HotelError> {
    match rest.len() {
        len if len == N => Ok((exact::<N>(tag, rest)?, None)),
        len if len == N + 1 => Ok((exact::<N>(tag, &rest[..N])?, Some(rest[N]))),
        len => Err(HotelError::malformed(
            tag,
            format!("expected {} or {} fields, found {}", N, N + 1, len),
        )),
    }
}

fn split_list(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.into_iter()
        .flat_map(|list| list.split(','))
        .filter(|key| !key.is_empty())
}

fn parse_number<T: FromStr>(tag: &str, field: &str, value: &str) -> Result<T, HotelError> {
    value
        .trim()
        .parse()
        .map_err(|_| HotelError::malformed(tag, format!("{} is not a valid number: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn species_line() {
            let record: Record = "ESPÉCIE|L|LION".parse().unwrap();
            assert_eq!(
                record,
                Record::Species {
                    id: SpeciesId::new("L"),
                    name: "LION".to_string()
                }
            );
        }

        #[test]
        fn habitat_with_and_without_trees() {
            let bare: Record = "HABITAT|H1|Savana|100".parse().unwrap();
            assert!(matches!(bare, Record::Habitat { ref trees, area: 100, .. } if trees.is_empty()));

            let planted: Record = "HABITAT|H1|Savana|100|T1,T2".parse().unwrap();
            let Record::Habitat { trees, .. } = planted else {
                panic!("expected a habitat record");
            };
            assert_eq!(trees, vec![TreeId::new("T1"), TreeId::new("T2")]);
        }

        #[test]
        fn employee_tags() {
            let keeper: Record = "TRATADOR|T1|Ana|H1,H2".parse().unwrap();
            assert_eq!(keeper.tag(), ZOOKEEPER_TAG);
            let vet: Record = "VETERINÁRIO|V1|Rui".parse().unwrap();
            assert!(matches!(
                vet,
                Record::Employee { kind: EmployeeKind::Veterinarian, ref responsibilities, .. }
                    if responsibilities.is_empty()
            ));
        }

        #[test]
        fn short_employee_tags_are_not_entries() {
            for line in ["TRT|T1|Ana|H1", "VET|V1|Rui|L"] {
                let err = line.parse::<Record>().unwrap_err();
                assert!(matches!(err, HotelError::UnrecognizedEntry(_)), "{line}");
            }
        }

        #[test]
        fn tree_line() {
            let record: Record = "ÁRVORE|T1|Pinheiro|3|5|PERENE".parse().unwrap();
            assert_eq!(
                record,
                Record::Tree {
                    id: TreeId::new("T1"),
                    name: "Pinheiro".to_string(),
                    age: 3,
                    cleaning_difficulty: 5,
                    kind: TreeKind::Evergreen,
                }
            );
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn unknown_tag_is_unrecognized() {
            assert_eq!(
                "PEIXE|P1|Nemo".parse::<Record>(),
                Err(HotelError::UnrecognizedEntry("PEIXE".to_string()))
            );
        }

        #[test]
        fn unknown_tree_type_is_unrecognized() {
            assert_eq!(
                "ÁRVORE|T1|Pinheiro|3|5|PALMEIRA".parse::<Record>(),
                Err(HotelError::UnrecognizedEntry("PALMEIRA".to_string()))
            );
        }

        #[test]
        fn non_numeric_area_is_malformed() {
            let err = "HABITAT|H1|Savana|big".parse::<Record>().unwrap_err();
            assert!(matches!(err, HotelError::MalformedEntry { ref tag, .. } if tag == HABITAT_TAG));
        }

        #[test]
        fn negative_age_is_malformed() {
            let err = "ÁRVORE|T1|Pinheiro|-1|5|PERENE".parse::<Record>().unwrap_err();
            assert!(matches!(err, HotelError::MalformedEntry { .. }));
        }

        #[test]
        fn missing_fields_are_malformed() {
            let err = "ANIMAL|a1|Simba|L".parse::<Record>().unwrap_err();
            assert!(matches!(err, HotelError::MalformedEntry { .. }));
        }
    }
}
