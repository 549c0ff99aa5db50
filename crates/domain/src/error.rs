//! Unified error type for the hotel domain
//!
//! Every failure the core can raise is a variant of [`HotelError`]. Variants
//! carry the offending key(s) exactly as the caller supplied them (or the
//! canonical id once an entity has been resolved), so the outer layers can
//! render their own messages.

use thiserror::Error;

/// Unified error type for hotel operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    // =========================================================================
    // Lookup misses
    // =========================================================================
    #[error("Unknown species id: {0}")]
    UnknownSpeciesId(String),

    #[error("Unknown habitat id: {0}")]
    UnknownHabitatId(String),

    #[error("Unknown animal id: {0}")]
    UnknownAnimalId(String),

    #[error("Unknown employee id: {0}")]
    UnknownEmployeeId(String),

    #[error("Unknown vaccine id: {0}")]
    UnknownVaccineId(String),

    #[error("Unknown tree id: {0}")]
    UnknownTreeId(String),

    /// The id does not name a veterinarian (unknown, or a zookeeper)
    #[error("Unknown veterinarian id: {0}")]
    UnknownVeterinarianId(String),

    // =========================================================================
    // Key collisions
    // =========================================================================
    #[error("Duplicate species id: {0}")]
    DuplicateSpeciesId(String),

    #[error("Duplicate species name: {0}")]
    DuplicateSpeciesName(String),

    #[error("Duplicate habitat id: {0}")]
    DuplicateHabitatId(String),

    #[error("Duplicate animal id: {0}")]
    DuplicateAnimalId(String),

    #[error("Duplicate employee id: {0}")]
    DuplicateEmployeeId(String),

    #[error("Duplicate vaccine id: {0}")]
    DuplicateVaccineId(String),

    #[error("Duplicate tree id: {0}")]
    DuplicateTreeId(String),

    // =========================================================================
    // Record parsing
    // =========================================================================
    /// Unknown type tag (entry tag, employee kind or tree type)
    #[error("Unrecognized entry: {0}")]
    UnrecognizedEntry(String),

    /// Known tag, but the fields do not fit the record shape
    #[error("Malformed {tag} entry: {reason}")]
    MalformedEntry { tag: String, reason: String },

    #[error("Unrecognized habitat influence: {0}")]
    UnrecognizedInfluence(String),

    // =========================================================================
    // Business rules
    // =========================================================================
    #[error("Employee {employee} has no responsibility {responsibility}")]
    NoSuchResponsibility {
        employee: String,
        responsibility: String,
    },

    #[error("Veterinarian {veterinarian} is not authorized for species {species}")]
    UnauthorizedVeterinarian {
        veterinarian: String,
        species: String,
    },

    /// The vaccination was recorded anyway; see [`HotelError::is_informational`].
    #[error("Vaccine {vaccine} is not adequate for animal {animal}")]
    WrongVaccine { vaccine: String, animal: String },
}

impl HotelError {
    /// Create a malformed entry error
    pub fn malformed(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing responsibility error
    pub fn no_such_responsibility(
        employee: impl Into<String>,
        responsibility: impl Into<String>,
    ) -> Self {
        Self::NoSuchResponsibility {
            employee: employee.into(),
            responsibility: responsibility.into(),
        }
    }

    /// Whether the operation that raised this error still changed the hotel.
    ///
    /// Only [`HotelError::WrongVaccine`] behaves this way: the vaccination is
    /// recorded in every list before the error is reported.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::WrongVaccine { .. })
    }

    /// Returns the primary key carried by the error, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownSpeciesId(key)
            | Self::UnknownHabitatId(key)
            | Self::UnknownAnimalId(key)
            | Self::UnknownEmployeeId(key)
            | Self::UnknownVaccineId(key)
            | Self::UnknownTreeId(key)
            | Self::UnknownVeterinarianId(key)
            | Self::DuplicateSpeciesId(key)
            | Self::DuplicateSpeciesName(key)
            | Self::DuplicateHabitatId(key)
            | Self::DuplicateAnimalId(key)
            | Self::DuplicateEmployeeId(key)
            | Self::DuplicateVaccineId(key)
            | Self::DuplicateTreeId(key)
            | Self::UnrecognizedEntry(key)
            | Self::UnrecognizedInfluence(key) => Some(key),
            Self::NoSuchResponsibility { employee, .. } => Some(employee),
            Self::UnauthorizedVeterinarian { veterinarian, .. } => Some(veterinarian),
            Self::WrongVaccine { vaccine, .. } => Some(vaccine),
            Self::MalformedEntry { .. } => None,
        }
    }
}

/// Message shown when a vaccine was given to an animal of a species it does not target.
pub fn wrong_vaccine_message(vaccine_id: &str, animal_id: &str) -> String {
    format!("wrongVaccine({}, {})", vaccine_id, animal_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_error_display() {
        let err = HotelError::UnknownHabitatId("H9".to_string());
        assert_eq!(err.to_string(), "Unknown habitat id: H9");
        assert_eq!(err.key(), Some("H9"));
    }

    #[test]
    fn test_no_such_responsibility_carries_both_keys() {
        let err = HotelError::no_such_responsibility("T1", "H1");
        assert!(matches!(
            &err,
            HotelError::NoSuchResponsibility { employee, responsibility }
                if employee == "T1" && responsibility == "H1"
        ));
        assert_eq!(err.to_string(), "Employee T1 has no responsibility H1");
    }

    #[test]
    fn test_only_wrong_vaccine_is_informational() {
        let wrong = HotelError::WrongVaccine {
            vaccine: "V1".to_string(),
            animal: "A1".to_string(),
        };
        assert!(wrong.is_informational());
        assert!(!HotelError::UnknownAnimalId("A1".to_string()).is_informational());
    }

    #[test]
    fn test_malformed_has_no_key() {
        let err = HotelError::malformed("HABITAT", "area is not an integer");
        assert_eq!(err.key(), None);
        assert_eq!(
            err.to_string(),
            "Malformed HABITAT entry: area is not an integer"
        );
    }

    #[test]
    fn test_wrong_vaccine_message() {
        assert_eq!(wrong_vaccine_message("V1", "a1"), "wrongVaccine(V1, a1)");
    }
}
