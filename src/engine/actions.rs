//! Training and transformation - gold-funded unit improvements
//!
//! Every action validates all preconditions before touching anything,
//! so a failed action leaves the army exactly as it was.

use crate::army::{Army, UnitType};
use crate::core::error::{GameError, Result};
use crate::core::types::{Gold, UnitId};

/// What a successful training session did
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub unit: UnitId,
    pub kind: UnitType,
    pub strength: u32,
    pub gold_spent: Gold,
}

/// What a successful transformation did
#[derive(Debug, Clone)]
pub struct TransformReport {
    pub unit: UnitId,
    pub from: UnitType,
    pub to: UnitType,
    pub gold_spent: Gold,
}

/// Train one unit: strength rises by the type's training gain, gold
/// drops by its training cost. Training never ages a unit.
pub fn train(army: &mut Army, unit_index: usize) -> Result<TrainReport> {
    let unit = army
        .units
        .get(unit_index)
        .ok_or(GameError::UnitNotFound(unit_index))?;
    let cost = unit.kind.training_cost();
    if army.gold < cost {
        return Err(GameError::InsufficientGold {
            required: cost,
            available: army.gold,
        });
    }
    let gain = unit.kind.training_gain();

    let unit = &mut army.units[unit_index];
    unit.strength += gain;
    army.gold -= cost;

    Ok(TrainReport {
        unit: unit.id,
        kind: unit.kind,
        strength: unit.strength,
        gold_spent: cost,
    })
}

/// Transform one unit along the catalog ladder. The unit keeps its id,
/// age, and training bonus; strength is re-based on the target type
/// (new base + accumulated bonus).
pub fn transform(army: &mut Army, unit_index: usize) -> Result<TransformReport> {
    let unit = army
        .units
        .get(unit_index)
        .ok_or(GameError::UnitNotFound(unit_index))?;
    let (target, cost) = unit
        .kind
        .transform_target()
        .ok_or(GameError::InvalidTransformation(unit.kind))?;
    if army.gold < cost {
        return Err(GameError::InsufficientGold {
            required: cost,
            available: army.gold,
        });
    }
    let from = unit.kind;
    let bonus = unit.training_bonus();

    let unit = &mut army.units[unit_index];
    unit.kind = target;
    unit.strength = target.base_strength() + bonus;
    army.gold -= cost;

    Ok(TransformReport {
        unit: unit.id,
        from,
        to: target,
        gold_spent: cost,
    })
}
