//! Unit catalog - the static rule table for unit stats and transformations
//!
//! All tunable values live here. The transformation graph is a strict
//! ladder (pikeman -> archer -> knight); knights have no outgoing edge.

use serde::{Deserialize, Serialize};

use crate::core::types::Gold;

// Base strength by type
pub const PIKEMAN_BASE_STRENGTH: u32 = 5;
pub const ARCHER_BASE_STRENGTH: u32 = 10;
pub const KNIGHT_BASE_STRENGTH: u32 = 20;

// Training: gold cost per session and strength gained
pub const PIKEMAN_TRAINING_COST: Gold = 10;
pub const ARCHER_TRAINING_COST: Gold = 20;
pub const KNIGHT_TRAINING_COST: Gold = 30;
pub const PIKEMAN_TRAINING_GAIN: u32 = 3;
pub const ARCHER_TRAINING_GAIN: u32 = 7;
pub const KNIGHT_TRAINING_GAIN: u32 = 10;

// Transformation costs along the ladder
pub const PIKEMAN_TO_ARCHER_COST: Gold = 30;
pub const ARCHER_TO_KNIGHT_COST: Gold = 40;

/// Type of military unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Pikeman,
    Archer,
    Knight,
}

impl UnitType {
    /// All types in catalog order (also the order armies muster in)
    pub const ALL: [UnitType; 3] = [UnitType::Pikeman, UnitType::Archer, UnitType::Knight];

    /// Strength a freshly mustered unit of this type starts with
    pub fn base_strength(self) -> u32 {
        match self {
            UnitType::Pikeman => PIKEMAN_BASE_STRENGTH,
            UnitType::Archer => ARCHER_BASE_STRENGTH,
            UnitType::Knight => KNIGHT_BASE_STRENGTH,
        }
    }

    /// Gold required for one training session
    pub fn training_cost(self) -> Gold {
        match self {
            UnitType::Pikeman => PIKEMAN_TRAINING_COST,
            UnitType::Archer => ARCHER_TRAINING_COST,
            UnitType::Knight => KNIGHT_TRAINING_COST,
        }
    }

    /// Strength gained per training session
    pub fn training_gain(self) -> u32 {
        match self {
            UnitType::Pikeman => PIKEMAN_TRAINING_GAIN,
            UnitType::Archer => ARCHER_TRAINING_GAIN,
            UnitType::Knight => KNIGHT_TRAINING_GAIN,
        }
    }

    /// The type this unit can transform into, with the gold cost.
    /// Knights are the end of the ladder.
    pub fn transform_target(self) -> Option<(UnitType, Gold)> {
        match self {
            UnitType::Pikeman => Some((UnitType::Archer, PIKEMAN_TO_ARCHER_COST)),
            UnitType::Archer => Some((UnitType::Knight, ARCHER_TO_KNIGHT_COST)),
            UnitType::Knight => None,
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitType::Pikeman => "pikeman",
            UnitType::Archer => "archer",
            UnitType::Knight => "knight",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_table() {
        assert_eq!(UnitType::Pikeman.base_strength(), 5);
        assert_eq!(UnitType::Archer.base_strength(), 10);
        assert_eq!(UnitType::Knight.base_strength(), 20);

        assert_eq!(UnitType::Pikeman.training_cost(), 10);
        assert_eq!(UnitType::Archer.training_cost(), 20);
        assert_eq!(UnitType::Knight.training_cost(), 30);

        assert_eq!(UnitType::Pikeman.training_gain(), 3);
        assert_eq!(UnitType::Archer.training_gain(), 7);
        assert_eq!(UnitType::Knight.training_gain(), 10);
    }

    #[test]
    fn test_transformation_ladder() {
        assert_eq!(
            UnitType::Pikeman.transform_target(),
            Some((UnitType::Archer, 30))
        );
        assert_eq!(
            UnitType::Archer.transform_target(),
            Some((UnitType::Knight, 40))
        );
        assert_eq!(UnitType::Knight.transform_target(), None);
    }
}
