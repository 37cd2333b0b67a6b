//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gold currency amount
///
/// Balances are unsigned, so a negative balance is unrepresentable;
/// every action checks costs before deducting anything.
pub type Gold = u32;

/// Unique identifier for a logical unit
///
/// Transformation keeps the id: same soldier, new equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}
