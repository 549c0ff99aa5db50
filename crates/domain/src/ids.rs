//! Entity keys
//!
//! Every entity is identified by the textual key it was registered with.
//! Habitat, animal, employee, vaccine and tree keys compare case-insensitively
//! (and therefore sort case-insensitively); species keys compare exactly.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

macro_rules! define_case_insensitive_id {
    ($name:ident) => {
        /// Case-insensitive key. Keeps the spelling it was created with for display.
        #[derive(Debug, Clone, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name {
            raw: String,
            folded: String,
        }

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                let raw = raw.into();
                let folded = raw.to_lowercase();
                Self { raw, folded }
            }

            /// Returns the key as originally spelled.
            pub fn as_str(&self) -> &str {
                &self.raw
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.folded == other.folded
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.folded.hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.folded.cmp(&other.folded)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.raw)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.raw
            }
        }
    };
}

define_case_insensitive_id!(HabitatId);
define_case_insensitive_id!(AnimalId);
define_case_insensitive_id!(EmployeeId);
define_case_insensitive_id!(VaccineId);
define_case_insensitive_id!(TreeId);

/// Species key. Unlike every other key it is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Listing order for species ids shown next to other keys (vaccines, veterinarians).
    pub fn cmp_case_insensitive(&self, other: &Self) -> Ordering {
        self.0
            .to_lowercase()
            .cmp(&other.0.to_lowercase())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpeciesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SpeciesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Sorts species ids case-insensitively and joins them with commas.
pub(crate) fn join_species_ids<'a>(ids: impl IntoIterator<Item = &'a SpeciesId>) -> String {
    let mut ids: Vec<&SpeciesId> = ids.into_iter().collect();
    ids.sort_by(|a, b| a.cmp_case_insensitive(b));
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
