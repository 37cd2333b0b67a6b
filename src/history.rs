//! Battle history - append-only log of outcomes for one session
//!
//! Insertion order is chronological order. Records are never mutated
//! or removed once appended.

use serde::{Deserialize, Serialize};

use crate::engine::outcome::BattleOutcome;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleHistory {
    outcomes: Vec<BattleOutcome>,
}

impl BattleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: BattleOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[BattleOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Render the battle record from one army's perspective, one line
    /// per battle it took part in
    pub fn report_for(&self, owner: &str) -> String {
        let mut lines = vec![format!("Army of {}", owner)];
        for outcome in &self.outcomes {
            let (opponent, result, ours, theirs) = if outcome.attacker == owner {
                (
                    &outcome.defender,
                    outcome.result,
                    outcome.attacker_strength,
                    outcome.defender_strength,
                )
            } else if outcome.defender == owner {
                (
                    &outcome.attacker,
                    outcome.result.inverted(),
                    outcome.defender_strength,
                    outcome.attacker_strength,
                )
            } else {
                continue;
            };
            lines.push(format!("Vs {}: {} ({} vs {})", opponent, result, ours, theirs));
        }
        if lines.len() == 1 {
            lines.push("No battles recorded".to_string());
        }
        lines.join("\n")
    }
}
