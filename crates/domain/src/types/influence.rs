use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HotelError;

/// How a habitat affects the satisfaction of animals of a given species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitatInfluence {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl HabitatInfluence {
    /// Satisfaction contribution of this influence.
    pub fn value(self) -> i32 {
        match self {
            HabitatInfluence::Positive => 20,
            HabitatInfluence::Neutral => 0,
            HabitatInfluence::Negative => -20,
        }
    }

    /// Short label accepted from the outside (POS, NEU, NEG).
    pub fn label(self) -> &'static str {
        match self {
            HabitatInfluence::Positive => "POS",
            HabitatInfluence::Neutral => "NEU",
            HabitatInfluence::Negative => "NEG",
        }
    }
}

impl fmt::Display for HabitatInfluence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for HabitatInfluence {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POS" => Ok(HabitatInfluence::Positive),
            "NEU" => Ok(HabitatInfluence::Neutral),
            "NEG" => Ok(HabitatInfluence::Negative),
            _ => Err(HotelError::UnrecognizedInfluence(s.to_string())),
        }
    }
}
