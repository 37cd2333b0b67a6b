//! Battle outcome records
//!
//! One record is created per battle, immutable thereafter, and appended
//! to the session history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::army::Unit;
use crate::core::types::Gold;

/// Result of a battle from the attacker's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResultTag {
    Victory,
    Defeat,
    Draw,
}

impl BattleResultTag {
    /// The same result seen from the other side
    pub fn inverted(self) -> Self {
        match self {
            BattleResultTag::Victory => BattleResultTag::Defeat,
            BattleResultTag::Defeat => BattleResultTag::Victory,
            BattleResultTag::Draw => BattleResultTag::Draw,
        }
    }
}

impl fmt::Display for BattleResultTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BattleResultTag::Victory => "victory",
            BattleResultTag::Defeat => "defeat",
            BattleResultTag::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

/// Everything a battle changed, captured at resolution time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub attacker: String,
    pub defender: String,
    /// Total strengths before any units were removed
    pub attacker_strength: u32,
    pub defender_strength: u32,
    pub result: BattleResultTag,
    pub attacker_gold_delta: Gold,
    pub defender_gold_delta: Gold,
    /// Units each side lost, in removal order
    pub attacker_losses: Vec<Unit>,
    pub defender_losses: Vec<Unit>,
}
