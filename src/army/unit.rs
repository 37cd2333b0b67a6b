//! Individual soldier instances

use serde::{Deserialize, Serialize};

use super::catalog::UnitType;
use crate::core::types::UnitId;

/// An individual soldier with a type, strength, and age
///
/// Strength never drops below the type's base: it starts there and only
/// grows through training, and transformation re-bases it on the new
/// type while keeping the accumulated bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitType,
    pub strength: u32,
    /// Years of life, incremented once per battle survived
    pub age: u32,
}

impl Unit {
    /// Muster a fresh unit at the type's base strength, age 0
    pub fn new(kind: UnitType) -> Self {
        Self {
            id: UnitId::new(),
            kind,
            strength: kind.base_strength(),
            age: 0,
        }
    }

    /// Strength accumulated beyond the type's base through training
    pub fn training_bonus(&self) -> u32 {
        self.strength - self.kind.base_strength()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_unit() {
        let unit = Unit::new(UnitType::Archer);
        assert_eq!(unit.kind, UnitType::Archer);
        assert_eq!(unit.strength, 10);
        assert_eq!(unit.age, 0);
        assert_eq!(unit.training_bonus(), 0);
    }

    #[test]
    fn test_training_bonus_tracks_excess_strength() {
        let mut unit = Unit::new(UnitType::Pikeman);
        unit.strength += 6; // two training sessions
        assert_eq!(unit.training_bonus(), 6);
    }
}
