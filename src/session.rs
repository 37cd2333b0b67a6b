//! Session orchestration - owns the armies and the battle history
//!
//! A session is the unit of play: armies are mustered into it, actions
//! run against it one at a time, and the history it owns records every
//! battle. Sessions serialize whole, so saved state reproduces
//! identical future behavior.

use std::fs::File;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::army::{Army, Civilization};
use crate::core::error::{GameError, Result};
use crate::engine::{self, BattleOutcome, TrainReport, TransformReport};
use crate::history::BattleHistory;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    armies: AHashMap<String, Army>,
    history: BattleHistory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Muster an army from a civilization preset under the given owner
    /// name, replacing any previous army with that name
    pub fn muster(&mut self, owner: impl Into<String>, civilization: Civilization) {
        let owner = owner.into();
        let army = Army::from_civilization(owner.clone(), civilization);
        tracing::debug!(
            owner = %owner,
            civilization = %civilization,
            units = army.units.len(),
            gold = army.gold,
            "army mustered"
        );
        self.armies.insert(owner, army);
    }

    pub fn army(&self, owner: &str) -> Result<&Army> {
        self.armies
            .get(owner)
            .ok_or_else(|| GameError::ArmyNotFound(owner.to_string()))
    }

    fn army_mut(&mut self, owner: &str) -> Result<&mut Army> {
        self.armies
            .get_mut(owner)
            .ok_or_else(|| GameError::ArmyNotFound(owner.to_string()))
    }

    /// Owner names in sorted order, for deterministic display
    pub fn army_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.armies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn train(&mut self, owner: &str, unit_index: usize) -> Result<TrainReport> {
        let army = self.army_mut(owner)?;
        let report = engine::train(army, unit_index)?;
        tracing::debug!(owner = %owner, unit = unit_index, strength = report.strength, "unit trained");
        Ok(report)
    }

    pub fn transform(&mut self, owner: &str, unit_index: usize) -> Result<TransformReport> {
        let army = self.army_mut(owner)?;
        let report = engine::transform(army, unit_index)?;
        tracing::debug!(owner = %owner, unit = unit_index, source = %report.from, target = %report.to, "unit transformed");
        Ok(report)
    }

    /// Resolve a battle between two mustered armies and record the
    /// outcome. An army cannot battle itself: once the attacker is
    /// checked out of the registry, looking it up as defender fails
    /// with `ArmyNotFound`.
    pub fn battle(&mut self, attacker: &str, defender: &str) -> Result<BattleOutcome> {
        let mut attacking = self
            .armies
            .remove(attacker)
            .ok_or_else(|| GameError::ArmyNotFound(attacker.to_string()))?;
        let defending = match self.armies.get_mut(defender) {
            Some(army) => army,
            None => {
                self.armies.insert(attacker.to_string(), attacking);
                return Err(GameError::ArmyNotFound(defender.to_string()));
            }
        };

        let outcome = engine::battle(&mut attacking, defending);
        self.armies.insert(attacker.to_string(), attacking);

        tracing::debug!(
            attacker = %outcome.attacker,
            defender = %outcome.defender,
            result = %outcome.result,
            "battle resolved"
        );
        self.history.record(outcome.clone());
        Ok(outcome)
    }

    pub fn history(&self) -> &BattleHistory {
        &self.history
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
