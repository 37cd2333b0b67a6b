//! Civilization presets - named initial army compositions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::UnitType;
use crate::core::error::GameError;
use crate::core::types::Gold;

/// Every civilization starts with the same treasury
pub const STARTING_GOLD: Gold = 1000;

/// Playable civilizations, each with a fixed starting composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civilization {
    Chinese,
    English,
    Byzantine,
}

impl Civilization {
    pub const ALL: [Civilization; 3] = [
        Civilization::Chinese,
        Civilization::English,
        Civilization::Byzantine,
    ];

    /// Initial unit counts, grouped by type in catalog order so that
    /// army construction is deterministic
    pub fn composition(self) -> [(UnitType, usize); 3] {
        match self {
            Civilization::Chinese => [
                (UnitType::Pikeman, 2),
                (UnitType::Archer, 25),
                (UnitType::Knight, 2),
            ],
            Civilization::English => [
                (UnitType::Pikeman, 10),
                (UnitType::Archer, 10),
                (UnitType::Knight, 10),
            ],
            Civilization::Byzantine => [
                (UnitType::Pikeman, 5),
                (UnitType::Archer, 8),
                (UnitType::Knight, 15),
            ],
        }
    }

    pub fn starting_gold(self) -> Gold {
        STARTING_GOLD
    }

    pub fn name(self) -> &'static str {
        match self {
            Civilization::Chinese => "Chinese",
            Civilization::English => "English",
            Civilization::Byzantine => "Byzantine",
        }
    }
}

impl fmt::Display for Civilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Civilization {
    type Err = GameError;

    /// Case-insensitive lookup; unknown names report the valid options
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chinese" => Ok(Civilization::Chinese),
            "english" => Ok(Civilization::English),
            "byzantine" => Ok(Civilization::Byzantine),
            _ => Err(GameError::UnknownCivilization(s.to_string())),
        }
    }
}
