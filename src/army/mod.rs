//! Army state - a civilization's units and its gold balance

pub mod catalog;
pub mod civilization;
pub mod unit;

pub use catalog::UnitType;
pub use civilization::Civilization;
pub use unit::Unit;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::Gold;

/// A civilization's live collection of units plus its gold balance
///
/// The unit list may shrink (battle losses) but never grows after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Army {
    pub owner: String,
    pub civilization: Civilization,
    pub units: Vec<Unit>,
    pub gold: Gold,
}

impl Army {
    /// Build an army from a civilization preset: units grouped by type
    /// in catalog order, each at base strength and age 0
    pub fn from_civilization(owner: impl Into<String>, civilization: Civilization) -> Self {
        let mut units = Vec::new();
        for (kind, count) in civilization.composition() {
            units.extend((0..count).map(|_| Unit::new(kind)));
        }
        Self {
            owner: owner.into(),
            civilization,
            units,
            gold: civilization.starting_gold(),
        }
    }

    /// Sum of all unit strengths; an empty army has strength 0
    pub fn total_strength(&self) -> u32 {
        self.units.iter().map(|u| u.strength).sum()
    }

    pub fn unit(&self, index: usize) -> Result<&Unit> {
        self.units.get(index).ok_or(GameError::UnitNotFound(index))
    }

    pub fn count_of(&self, kind: UnitType) -> usize {
        self.units.iter().filter(|u| u.kind == kind).count()
    }
}
