//! Resolution of one attacker-to-defender exchange.

use crate::battle_log::BattleLog;
use crate::data::abilities::{anti_ohko, blocks_move_type, contact_status};
use crate::data::moves::select_move;
use crate::data::types::combined_multiplier;
use crate::rng::RandomSource;
use crate::sim::combatant::{Combatant, Status};
use crate::sim::damage::{
    base_damage, effective_attack, final_damage, CRIT_CHANCE, CRIT_MULTIPLIER, VARIANCE_MAX,
    VARIANCE_MIN,
};

/// Resolve a single exchange, mutating both sides and appending to the log.
///
/// Returns `false` when a faint occurred during the exchange, which ends the
/// round; `true` otherwise (including skipped or missed exchanges).
pub fn resolve_exchange<R: RandomSource>(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    log: &mut BattleLog,
    rng: &mut R,
) -> bool {
    if attacker.is_fainted() || defender.is_fainted() {
        return true;
    }

    let can_act = attacker.apply_status_upkeep(log, rng);
    if attacker.is_fainted() {
        log.faint(&attacker.name);
        return false;
    }
    if !can_act {
        return true;
    }

    let chosen = select_move(&attacker.types, rng);
    log.move_attempt(&attacker.name, chosen.name);

    if rng.next_unit() > chosen.accuracy {
        log.miss(&attacker.name, chosen.name);
        return true;
    }

    // The move has no elemental identity of its own; it borrows the
    // attacker's primary type.
    if blocks_move_type(&defender.abilities, attacker.primary_type()) {
        log.ability_block(&defender.name, chosen.name);
        return true;
    }

    let attack = effective_attack(attacker.attack, attacker.status == Some(Status::Burn));
    let base = base_damage(attack, defender.defense, chosen.power);
    let multiplier = combined_multiplier(&attacker.types, &defender.types);
    let crit = if rng.roll(CRIT_CHANCE) {
        CRIT_MULTIPLIER
    } else {
        1.0
    };
    let variance = rng.uniform(VARIANCE_MIN, VARIANCE_MAX);
    let mut damage = final_damage(base, multiplier, crit, variance);

    if let Some(ability) = anti_ohko(&defender.abilities) {
        if damage >= defender.current_hp && defender.current_hp == defender.max_hp {
            damage = defender.current_hp - 1;
            log.ohko_prevented(&defender.name, ability);
        }
    }

    defender.take_damage(damage);
    log.hit(&attacker.name, chosen.name, &defender.name, damage);
    if multiplier > 1.0 {
        log.super_effective();
    } else if multiplier > 0.0 && multiplier < 1.0 {
        log.not_very_effective();
    } else if multiplier == 0.0 {
        log.no_effect();
    }
    if crit > 1.0 {
        log.critical_hit();
    }
    log.hp_left(&defender.name, defender.current_hp);

    roll_secondary_status(defender, chosen.status, log, rng);

    if let Some((ability, chance)) = contact_status(&defender.abilities) {
        if rng.roll(chance) && attacker.status.is_none() {
            attacker.apply_status(Status::Paralysis);
            log.contact_status(&attacker.name, &defender.name, ability);
        }
    }

    if defender.is_fainted() {
        log.faint(&defender.name);
        return false;
    }
    true
}

/// Roll the move's secondary-status table against the defender.
///
/// Skipped entirely when the defender already carries a status; otherwise
/// each entry is an independent roll in table order, and the first success
/// ends the iteration, so at most one new status lands per exchange.
pub(crate) fn roll_secondary_status<R: RandomSource>(
    defender: &mut Combatant,
    table: &[(&str, f64)],
    log: &mut BattleLog,
    rng: &mut R,
) {
    if defender.status.is_some() {
        return;
    }
    for (status_id, chance) in table {
        if rng.roll(*chance) {
            if let Some(status) = Status::from_id(status_id) {
                defender.apply_status(status);
                log.status_applied(&defender.name, status.label());
            }
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SeededSource, SequenceSource};
    use crate::sim::combatant::StatSnapshot;

    fn combatant(
        name: &str,
        types: &[&str],
        hp: u16,
        attack: u16,
        defense: u16,
        abilities: &[&str],
    ) -> Combatant {
        Combatant::from_snapshot(&StatSnapshot {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            hp,
            attack,
            defense,
            speed: 50,
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
        })
        .expect("valid snapshot")
    }

    fn count_lines(log: &BattleLog, needle: &str) -> usize {
        log.lines().iter().filter(|l| l.contains(needle)).count()
    }

    #[test]
    fn missed_move_has_no_further_effects() {
        let mut attacker = combatant("bulbasaur", &["grass"], 45, 49, 49, &[]);
        let mut defender = combatant("pikachu", &["electric"], 35, 55, 40, &["static"]);
        let mut log = BattleLog::new();
        // draws: move pick (0.99 -> Leech Seed, accuracy 0.9), accuracy
        // (0.95 -> miss).
        let mut rng = SequenceSource::new(vec![0.99, 0.95]);
        assert!(resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert_eq!(defender.current_hp, 35);
        assert_eq!(defender.status, None);
        assert_eq!(count_lines(&log, "missed"), 1);
        // A miss never reaches the contact-proc roll.
        assert_eq!(attacker.status, None);
    }

    #[test]
    fn immunity_negates_the_whole_exchange() {
        let mut attacker = combatant("diglett", &["ground"], 10, 55, 25, &[]);
        let mut defender = combatant("gengar", &["ghost"], 60, 65, 60, &["levitate", "static"]);
        let mut log = BattleLog::new();
        // Ground has no pool -> Struggle (no pick draw); accuracy draw only.
        let mut rng = SequenceSource::new(vec![0.5]);
        assert!(resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert_eq!(defender.current_hp, 60);
        assert_eq!(count_lines(&log, "prevents damage from Struggle"), 1);
        // Negated exchanges skip the contact proc too.
        assert_eq!(attacker.status, None);
    }

    #[test]
    fn sturdy_leaves_the_defender_at_exactly_one_hp() {
        let mut attacker = combatant("machamp", &["fighting"], 90, 150, 80, &[]);
        let mut defender = combatant("golem", &["rock"], 100, 110, 10, &["sturdy"]);
        let mut log = BattleLog::new();
        // draws: accuracy (pass), crit (no), variance (0.0 -> 0.85)
        let mut rng = SequenceSource::new(vec![0.5, 0.5, 0.0]);
        assert!(resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert_eq!(defender.current_hp, 1);
        assert_eq!(count_lines(&log, "prevents it from fainting"), 1);
        // The clamped hit is logged as max_hp - 1 damage.
        assert_eq!(count_lines(&log, "for 99 damage"), 1);
    }

    #[test]
    fn sturdy_does_not_fire_below_full_hp() {
        let mut attacker = combatant("machamp", &["fighting"], 90, 150, 80, &[]);
        let mut defender = combatant("golem", &["rock"], 100, 110, 10, &["sturdy"]);
        defender.current_hp = 99;
        let mut log = BattleLog::new();
        let mut rng = SequenceSource::new(vec![0.5, 0.5, 0.0]);
        assert!(!resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert!(defender.is_fainted());
        assert_eq!(count_lines(&log, "prevents it from fainting"), 0);
        assert_eq!(count_lines(&log, "has fainted"), 1);
    }

    #[test]
    fn paralyzed_attacker_can_lose_the_turn_entirely() {
        let mut attacker = combatant("raichu", &["electric"], 60, 90, 55, &[]);
        attacker.apply_status(Status::Paralysis);
        let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
        let mut log = BattleLog::new();
        // Single draw: the 25% full-paralysis roll.
        let mut rng = SequenceSource::new(vec![0.1]);
        assert!(resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert_eq!(defender.current_hp, 44);
        assert_eq!(count_lines(&log, "fully paralyzed"), 1);
        assert_eq!(count_lines(&log, "tries to use"), 0);
    }

    #[test]
    fn fainting_to_status_damage_forfeits_the_move() {
        let mut attacker = combatant("paras", &["grass"], 35, 70, 55, &[]);
        attacker.apply_status(Status::Poison);
        attacker.current_hp = 3;
        let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
        let mut log = BattleLog::new();
        let mut rng = SequenceSource::new(vec![0.5]);
        // Poison drains max(1, 35/8) = 4 HP, fainting the attacker.
        assert!(!resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng));
        assert!(attacker.is_fainted());
        assert_eq!(defender.current_hp, 44);
        assert_eq!(count_lines(&log, "has fainted"), 1);
        assert_eq!(count_lines(&log, "tries to use"), 0);
    }

    #[test]
    fn secondary_status_applies_on_a_successful_roll() {
        let mut attacker = combatant("charmander", &["fire"], 39, 52, 43, &[]);
        let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
        let mut log = BattleLog::new();
        // draws: pick (0.0 -> Flamethrower), accuracy, crit (no), variance,
        // burn proc (0.05 < 0.1).
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.5, 0.5, 0.05]);
        resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
        assert_eq!(defender.status, Some(Status::Burn));
        assert_eq!(count_lines(&log, "is now burned"), 1);
    }

    #[test]
    fn secondary_status_respects_an_existing_affliction() {
        let mut attacker = combatant("charmander", &["fire"], 39, 52, 43, &[]);
        let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
        defender.apply_status(Status::Paralysis);
        let mut log = BattleLog::new();
        // Same script as above minus the proc draw.
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.5, 0.5]);
        resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
        assert_eq!(defender.status, Some(Status::Paralysis));
        assert_eq!(count_lines(&log, "is now"), 0);
    }

    #[test]
    fn secondary_table_first_success_wins() {
        let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
        let mut log = BattleLog::new();
        let table = [("paralyzed", 0.5), ("burned", 1.0)];
        // First entry misses its roll, second lands, iteration stops there.
        let mut rng = SequenceSource::new(vec![0.9, 0.0]);
        roll_secondary_status(&mut defender, &table, &mut log, &mut rng);
        assert_eq!(defender.status, Some(Status::Burn));
    }

    #[test]
    fn contact_proc_paralyzes_the_attacker_only() {
        let mut attacker = combatant("rattata", &["normal"], 30, 56, 35, &[]);
        let mut defender = combatant("pikachu", &["electric"], 35, 55, 40, &["static"]);
        let mut log = BattleLog::new();
        // draws: pick (0.0 -> Tackle), accuracy, crit (no), variance,
        // contact proc (0.1 < 0.3). Tackle has no secondary table.
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.5, 0.5, 0.1]);
        resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
        assert_eq!(attacker.status, Some(Status::Paralysis));
        assert_eq!(defender.status, None);
        assert_eq!(count_lines(&log, "was paralyzed by Pikachu's Static ability"), 1);
    }

    #[test]
    fn contact_proc_spares_an_already_statused_attacker() {
        let mut attacker = combatant("rattata", &["normal"], 30, 56, 35, &[]);
        attacker.apply_status(Status::Burn);
        let mut defender = combatant("pikachu", &["electric"], 35, 55, 40, &["static"]);
        let mut log = BattleLog::new();
        // Burn upkeep (no draw), pick, accuracy, crit, variance, contact roll
        // succeeds but the attacker keeps its burn.
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.5, 0.5, 0.1]);
        resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
        assert_eq!(attacker.status, Some(Status::Burn));
        assert_eq!(count_lines(&log, "Static ability"), 0);
    }

    #[test]
    fn secondary_proc_rate_is_neither_zero_nor_certain() {
        let mut rng = SeededSource::from_seed(0);
        let mut burned = 0;
        for _ in 0..100 {
            let mut attacker = combatant("charmander", &["fire"], 39, 52, 43, &[]);
            let mut defender = combatant("squirtle", &["water"], 44, 48, 65, &[]);
            let mut log = BattleLog::new();
            resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
            if defender.status == Some(Status::Burn) {
                burned += 1;
            }
        }
        assert!(burned > 0);
        assert!(burned < 100);
    }

    #[test]
    fn immune_hit_still_deducts_the_floor_damage() {
        let mut attacker = combatant("rattata", &["normal"], 30, 56, 35, &[]);
        let mut defender = combatant("gastly", &["ghost"], 30, 35, 30, &[]);
        let mut log = BattleLog::new();
        // draws: pick (0.0 -> Tackle), accuracy, crit (no), variance.
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.5, 0.5]);
        resolve_exchange(&mut attacker, &mut defender, &mut log, &mut rng);
        assert_eq!(defender.current_hp, 29);
        assert_eq!(count_lines(&log, "It had no effect!"), 1);
        assert_eq!(count_lines(&log, "for 1 damage"), 1);
    }
}
