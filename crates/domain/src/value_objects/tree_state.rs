//! Seasonal tree state machine
//!
//! A tree is always in one of eight states: its variant (evergreen or
//! deciduous) paired with a season. Each state exposes a biological cycle
//! label and a seasonal effort multiplier, read from a static table. The only
//! transition is to the next season of the same variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HotelError;
use crate::types::Season;

/// `(biological cycle, seasonal effort)` indexed by season value.
const EVERGREEN_TABLE: [(&str, u32); 4] = [
    ("GERARFOLHAS", 1),
    ("COMFOLHAS", 1),
    ("COMFOLHAS", 1),
    ("LARGARFOLHAS", 2),
];

const DECIDUOUS_TABLE: [(&str, u32); 4] = [
    ("GERARFOLHAS", 1),
    ("COMFOLHAS", 2),
    ("LARGARFOLHAS", 5),
    ("SEMFOLHAS", 0),
];

/// The two tree variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeKind {
    Evergreen,
    Deciduous,
}

impl TreeKind {
    /// Type tag used in records and in the tree's textual form.
    pub fn tag(self) -> &'static str {
        match self {
            TreeKind::Evergreen => "PERENE",
            TreeKind::Deciduous => "CADUCA",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for TreeKind {
    type Err = HotelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PERENE" => Ok(TreeKind::Evergreen),
            "CADUCA" => Ok(TreeKind::Deciduous),
            _ => Err(HotelError::UnrecognizedEntry(s.to_string())),
        }
    }
}

/// Current state of a tree: variant and season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeState {
    kind: TreeKind,
    season: Season,
}

impl TreeState {
    pub fn new(kind: TreeKind, season: Season) -> Self {
        Self { kind, season }
    }

    #[inline]
    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    #[inline]
    pub fn season(&self) -> Season {
        self.season
    }

    /// The state this one transitions to when the season advances.
    pub fn next(self) -> Self {
        Self {
            kind: self.kind,
            season: self.season.next(),
        }
    }

    /// Foliage phase label of this state.
    pub fn biological_cycle(&self) -> &'static str {
        self.entry().0
    }

    /// Multiplier applied to the tree's cleaning effort in this state.
    pub fn seasonal_effort(&self) -> u32 {
        self.entry().1
    }

    fn entry(&self) -> (&'static str, u32) {
        let table = match self.kind {
            TreeKind::Evergreen => &EVERGREEN_TABLE,
            TreeKind::Deciduous => &DECIDUOUS_TABLE,
        };
        table[usize::from(self.season.value())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(kind: TreeKind) -> Vec<(&'static str, u32)> {
        Season::all()
            .iter()
            .map(|season| {
                let state = TreeState::new(kind, *season);
                (state.biological_cycle(), state.seasonal_effort())
            })
            .collect()
    }

    #[test]
    fn evergreen_table() {
        assert_eq!(
            cycle(TreeKind::Evergreen),
            vec![
                ("GERARFOLHAS", 1),
                ("COMFOLHAS", 1),
                ("COMFOLHAS", 1),
                ("LARGARFOLHAS", 2)
            ]
        );
    }

    #[test]
    fn deciduous_table() {
        assert_eq!(
            cycle(TreeKind::Deciduous),
            vec![
                ("GERARFOLHAS", 1),
                ("COMFOLHAS", 2),
                ("LARGARFOLHAS", 5),
                ("SEMFOLHAS", 0)
            ]
        );
    }

    #[test]
    fn transition_keeps_variant() {
        let state = TreeState::new(TreeKind::Deciduous, Season::Winter).next();
        assert_eq!(state.kind(), TreeKind::Deciduous);
        assert_eq!(state.season(), Season::Spring);
    }

    #[test]
    fn kind_parse() {
        assert_eq!("PERENE".parse::<TreeKind>(), Ok(TreeKind::Evergreen));
        assert_eq!("CADUCA".parse::<TreeKind>(), Ok(TreeKind::Deciduous));
        assert_eq!(
            "CONIFERA".parse::<TreeKind>(),
            Err(HotelError::UnrecognizedEntry("CONIFERA".to_string()))
        );
    }
}
