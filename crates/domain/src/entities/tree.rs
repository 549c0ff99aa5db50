//! Tree entity - Planted in habitats, cleaned by zookeepers
//!
//! A tree's age is kept in quarters of a year: every season advance adds
//! 0.25. The public age is the whole number of years.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::TreeId;
use crate::types::Season;
use crate::value_objects::{TreeKind, TreeState};

/// A tree, evergreen or deciduous, in its current seasonal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    id: TreeId,
    name: String,
    /// Accumulated age in years, advanced by quarters
    age: f64,
    cleaning_difficulty: i32,
    state: TreeState,
}

impl Tree {
    /// Create a tree in the state of the given season.
    pub fn new(
        id: TreeId,
        name: impl Into<String>,
        age: u32,
        cleaning_difficulty: i32,
        kind: TreeKind,
        season: Season,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age: f64::from(age),
            cleaning_difficulty,
            state: TreeState::new(kind, season),
        }
    }

    #[inline]
    pub fn id(&self) -> &TreeId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whole years of age.
    pub fn age(&self) -> u32 {
        self.age.floor() as u32
    }

    /// Age including the quarters accumulated by season advances.
    #[inline]
    pub fn accumulated_age(&self) -> f64 {
        self.age
    }

    #[inline]
    pub fn cleaning_difficulty(&self) -> i32 {
        self.cleaning_difficulty
    }

    #[inline]
    pub fn kind(&self) -> TreeKind {
        self.state.kind()
    }

    #[inline]
    pub fn state(&self) -> TreeState {
        self.state
    }

    #[inline]
    pub fn season(&self) -> Season {
        self.state.season()
    }

    pub fn biological_cycle(&self) -> &'static str {
        self.state.biological_cycle()
    }

    pub fn seasonal_effort(&self) -> u32 {
        self.state.seasonal_effort()
    }

    /// Move to the next season's state and age by a quarter.
    pub fn advance_season(&mut self) {
        self.state = self.state.next();
        self.age += 0.25;
    }

    /// Work needed to clean this tree in its current state.
    pub fn cleaning_effort(&self) -> f64 {
        f64::from(self.cleaning_difficulty)
            * f64::from(self.seasonal_effort())
            * (self.age + 1.0).ln()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ÁRVORE|{}|{}|{}|{}|{}|{}",
            self.id,
            self.name,
            self.age(),
            self.cleaning_difficulty,
            self.kind().tag(),
            self.biological_cycle()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evergreen(age: u32, difficulty: i32) -> Tree {
        Tree::new(
            TreeId::new("T1"),
            "Pinheiro",
            age,
            difficulty,
            TreeKind::Evergreen,
            Season::Spring,
        )
    }

    mod seasons {
        use super::*;

        #[test]
        fn four_advances_restore_state_and_add_one_year() {
            let mut tree = evergreen(3, 5);
            let initial = tree.state();
            for _ in 0..4 {
                tree.advance_season();
            }
            assert_eq!(tree.state(), initial);
            assert!((tree.accumulated_age() - 4.0).abs() < f64::EPSILON);
            assert_eq!(tree.age(), 4);
        }

        #[test]
        fn public_age_is_floored() {
            let mut tree = evergreen(0, 5);
            tree.advance_season();
            tree.advance_season();
            tree.advance_season();
            assert_eq!(tree.age(), 0);
            assert!((tree.accumulated_age() - 0.75).abs() < f64::EPSILON);
        }
    }

    mod cleaning {
        use super::*;

        #[test]
        fn newborn_tree_needs_no_cleaning() {
            assert_eq!(evergreen(0, 5).cleaning_effort(), 0.0);
        }

        #[test]
        fn effort_grows_with_accumulated_age() {
            let mut tree = evergreen(0, 5);
            tree.advance_season();
            assert_eq!(tree.season(), Season::Summer);
            let expected = 5.0 * 1.0 * 1.25_f64.ln();
            assert!((tree.cleaning_effort() - expected).abs() < 1e-9);
            assert!((tree.cleaning_effort() - 1.116).abs() < 1e-3);
        }

        #[test]
        fn leafless_deciduous_tree_needs_no_cleaning() {
            let tree = Tree::new(
                TreeId::new("T2"),
                "Carvalho",
                10,
                7,
                TreeKind::Deciduous,
                Season::Winter,
            );
            assert_eq!(tree.cleaning_effort(), 0.0);
        }
    }

    #[test]
    fn display_form() {
        let tree = Tree::new(
            TreeId::new("T2"),
            "Carvalho",
            10,
            7,
            TreeKind::Deciduous,
            Season::Autumn,
        );
        assert_eq!(tree.to_string(), "ÁRVORE|T2|Carvalho|10|7|CADUCA|LARGARFOLHAS");
    }
}
