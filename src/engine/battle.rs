//! Battle resolution - deterministic strength comparison between armies
//!
//! The stronger side wins gold, the weaker side forfeits its best
//! units, and every survivor on either side ages one year. There is no
//! randomness: equal totals always draw.

use crate::army::{Army, Unit};
use crate::core::types::Gold;

use super::outcome::{BattleOutcome, BattleResultTag};

/// Gold awarded to the winning side
pub const VICTORY_GOLD: Gold = 100;

/// Units the losing side forfeits
pub const DEFEAT_UNIT_LOSSES: usize = 2;

/// Units each side forfeits on a draw
pub const DRAW_UNIT_LOSSES: usize = 1;

/// Resolve a battle between two armies, mutating both in place.
///
/// Empty armies fight at strength 0; two empty armies draw with no
/// removals and no aging. Units removed in this battle do not age.
pub fn battle(attacker: &mut Army, defender: &mut Army) -> BattleOutcome {
    let attacker_strength = attacker.total_strength();
    let defender_strength = defender.total_strength();

    let (result, attacker_losses, defender_losses) = if attacker_strength > defender_strength {
        attacker.gold += VICTORY_GOLD;
        let losses = remove_strongest(defender, DEFEAT_UNIT_LOSSES);
        (BattleResultTag::Victory, Vec::new(), losses)
    } else if defender_strength > attacker_strength {
        defender.gold += VICTORY_GOLD;
        let losses = remove_strongest(attacker, DEFEAT_UNIT_LOSSES);
        (BattleResultTag::Defeat, losses, Vec::new())
    } else {
        let attacker_losses = remove_strongest(attacker, DRAW_UNIT_LOSSES);
        let defender_losses = remove_strongest(defender, DRAW_UNIT_LOSSES);
        (BattleResultTag::Draw, attacker_losses, defender_losses)
    };

    age_survivors(attacker);
    age_survivors(defender);

    BattleOutcome {
        attacker: attacker.owner.clone(),
        defender: defender.owner.clone(),
        attacker_strength,
        defender_strength,
        result,
        attacker_gold_delta: match result {
            BattleResultTag::Victory => VICTORY_GOLD,
            _ => 0,
        },
        defender_gold_delta: match result {
            BattleResultTag::Defeat => VICTORY_GOLD,
            _ => 0,
        },
        attacker_losses,
        defender_losses,
    }
}

/// Remove up to `count` units, strongest first. Ties break by position:
/// among equal-strength units the earliest in the sequence goes first.
fn remove_strongest(army: &mut Army, count: usize) -> Vec<Unit> {
    let mut removed = Vec::new();
    for _ in 0..count {
        let Some(index) = strongest_index(&army.units) else {
            break;
        };
        removed.push(army.units.remove(index));
    }
    removed
}

fn strongest_index(units: &[Unit]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, unit) in units.iter().enumerate() {
        // Strict comparison keeps the first of equal-strength units
        if best.map_or(true, |b| unit.strength > units[b].strength) {
            best = Some(i);
        }
    }
    best
}

fn age_survivors(army: &mut Army) {
    for unit in &mut army.units {
        unit.age += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::army::{Civilization, UnitType};

    /// Army A = one pikeman (5) + one knight (20), army B = one archer (10)
    fn fixture() -> (Army, Army) {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units = vec![Unit::new(UnitType::Pikeman), Unit::new(UnitType::Knight)];
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units = vec![Unit::new(UnitType::Archer)];
        (a, b)
    }

    #[test]
    fn test_attacker_victory() {
        let (mut a, mut b) = fixture();
        let outcome = battle(&mut a, &mut b);

        assert_eq!(outcome.result, BattleResultTag::Victory);
        assert_eq!(outcome.attacker_strength, 25);
        assert_eq!(outcome.defender_strength, 10);
        assert_eq!(outcome.attacker_gold_delta, 100);
        assert_eq!(outcome.defender_gold_delta, 0);

        // Winner keeps everything and gains gold
        assert_eq!(a.gold, 1100);
        assert_eq!(a.units.len(), 2);
        // Loser had one unit, loses it (two strongest capped at army size)
        assert_eq!(b.gold, 1000);
        assert!(b.units.is_empty());
        assert_eq!(outcome.defender_losses.len(), 1);

        // Survivors age, removed units do not
        assert!(a.units.iter().all(|u| u.age == 1));
        assert_eq!(outcome.defender_losses[0].age, 0);
    }

    #[test]
    fn test_defender_victory_is_symmetric() {
        let (mut a, mut b) = fixture();
        let outcome = battle(&mut b, &mut a);

        assert_eq!(outcome.result, BattleResultTag::Defeat);
        assert_eq!(outcome.attacker_gold_delta, 0);
        assert_eq!(outcome.defender_gold_delta, 100);
        assert_eq!(a.gold, 1100);
        assert_eq!(b.gold, 1000);
        assert!(b.units.is_empty());
    }

    #[test]
    fn test_loser_forfeits_two_strongest() {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units = vec![Unit::new(UnitType::Knight); 3]; // 60
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units = vec![
            Unit::new(UnitType::Pikeman), // 5
            Unit::new(UnitType::Knight),  // 20
            Unit::new(UnitType::Archer),  // 10
        ];

        let outcome = battle(&mut a, &mut b);
        assert_eq!(outcome.result, BattleResultTag::Victory);
        assert_eq!(
            outcome
                .defender_losses
                .iter()
                .map(|u| u.strength)
                .collect::<Vec<_>>(),
            vec![20, 10]
        );
        assert_eq!(b.units.len(), 1);
        assert_eq!(b.units[0].kind, UnitType::Pikeman);
        assert_eq!(b.units[0].age, 1);
    }

    #[test]
    fn test_draw_removes_one_per_side() {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units = vec![Unit::new(UnitType::Pikeman), Unit::new(UnitType::Knight)]; // 25
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units = vec![
            Unit::new(UnitType::Pikeman),
            Unit::new(UnitType::Archer),
            Unit::new(UnitType::Archer),
        ]; // 25

        let outcome = battle(&mut a, &mut b);
        assert_eq!(outcome.result, BattleResultTag::Draw);
        assert_eq!(outcome.attacker_gold_delta, 0);
        assert_eq!(outcome.defender_gold_delta, 0);
        assert_eq!(a.gold, 1000);
        assert_eq!(b.gold, 1000);

        assert_eq!(a.units.len(), 1);
        assert_eq!(a.units[0].kind, UnitType::Pikeman);
        assert_eq!(b.units.len(), 2);
        assert_eq!(outcome.attacker_losses[0].kind, UnitType::Knight);
        assert!(a.units.iter().chain(b.units.iter()).all(|u| u.age == 1));
    }

    #[test]
    fn test_tie_break_removes_first_of_equals() {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units = vec![Unit::new(UnitType::Archer), Unit::new(UnitType::Archer)]; // 20
        let first_id = a.units[0].id;
        let second_id = a.units[1].id;
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units = vec![Unit::new(UnitType::Knight)]; // 20, draw

        let outcome = battle(&mut a, &mut b);
        assert_eq!(outcome.result, BattleResultTag::Draw);
        assert_eq!(outcome.attacker_losses[0].id, first_id);
        assert_eq!(a.units[0].id, second_id);
    }

    #[test]
    fn test_two_empty_armies_draw() {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units.clear();
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units.clear();

        let outcome = battle(&mut a, &mut b);
        assert_eq!(outcome.result, BattleResultTag::Draw);
        assert_eq!(outcome.attacker_strength, 0);
        assert_eq!(outcome.defender_strength, 0);
        assert!(outcome.attacker_losses.is_empty());
        assert!(outcome.defender_losses.is_empty());
        assert_eq!(a.gold, 1000);
        assert_eq!(b.gold, 1000);
    }

    #[test]
    fn test_empty_army_loses_to_any_units() {
        let mut a = Army::from_civilization("A", Civilization::English);
        a.units = vec![Unit::new(UnitType::Pikeman)];
        let mut b = Army::from_civilization("B", Civilization::English);
        b.units.clear();

        let outcome = battle(&mut a, &mut b);
        assert_eq!(outcome.result, BattleResultTag::Victory);
        assert_eq!(a.gold, 1100);
        assert!(outcome.defender_losses.is_empty());
        assert_eq!(a.units[0].age, 1);
    }

    #[test]
    fn test_strength_sum_consistent_for_survivors() {
        let (mut a, mut b) = fixture();
        battle(&mut a, &mut b);
        assert_eq!(
            a.total_strength(),
            a.units.iter().map(|u| u.strength).sum::<u32>()
        );
        assert_eq!(a.total_strength(), 25); // aging does not change strength
    }
}
