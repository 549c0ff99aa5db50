//! The seasonal clock

use std::fmt;

use serde::{Deserialize, Serialize};

/// A season of the hotel's clock. The hotel starts in spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Numeric value reported when the season advances (SPRING=0 .. WINTER=3).
    pub fn value(self) -> u8 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
        }
    }

    /// Returns the next season in the cycle.
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    /// Returns all seasons in order.
    pub fn all() -> [Season; 4] {
        [Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Autumn => "AUTUMN",
            Season::Winter => "WINTER",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spring() {
        assert_eq!(Season::default(), Season::Spring);
    }

    #[test]
    fn test_cycle_wraps_after_four_steps() {
        let mut season = Season::Spring;
        for expected in [Season::Summer, Season::Autumn, Season::Winter, Season::Spring] {
            season = season.next();
            assert_eq!(season, expected);
        }
    }

    #[test]
    fn test_values_follow_cycle_order() {
        let values: Vec<u8> = Season::all().iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }
}
