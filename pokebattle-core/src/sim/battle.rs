//! Battle orchestration: turn order, the round loop, and outcome assembly.

use crate::battle_log::BattleLog;
use crate::error::BattleError;
use crate::rng::{RandomSource, SeededSource};
use crate::sim::combatant::{Combatant, StatSnapshot};
use crate::sim::turn::resolve_exchange;
use serde::ser::{Serialize, Serializer};

/// Defensive cap on the round loop. HP only ever decreases, so any real
/// pairing terminates long before this; a pairing where no move can deal
/// damage (mutual ability immunity) trips it instead of spinning forever.
pub const MAX_ROUNDS: u32 = 500;

/// Final standing of a battle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Winner {
    /// The named combatant won.
    Combatant(String),
    /// Both sides fainted in the same round.
    Draw,
    /// Neither side fainted. Unreachable from the round loop; kept as a
    /// defensive fallback.
    Unknown,
}

impl Winner {
    pub fn as_str(&self) -> &str {
        match self {
            Winner::Combatant(name) => name,
            Winner::Draw => "Draw",
            Winner::Unknown => "Unknown",
        }
    }
}

impl Serialize for Winner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Everything that survives a battle: the winner and the full event log.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BattleResult {
    pub winner: Winner,
    #[serde(rename = "battle_log")]
    pub log: Vec<String>,
}

impl BattleResult {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "winner": self.winner.as_str(),
            "battle_log": self.log,
        })
    }
}

/// Run one full battle between two snapshots.
///
/// Both snapshots are validated up front; a malformed one rejects the whole
/// battle rather than running a partial one. All randomness flows through
/// `rng`, so a seeded source replays the identical battle.
pub fn simulate<R: RandomSource>(
    one: &StatSnapshot,
    two: &StatSnapshot,
    rng: &mut R,
) -> Result<BattleResult, BattleError> {
    let mut combatants = [
        Combatant::from_snapshot(one)?,
        Combatant::from_snapshot(two)?,
    ];
    let mut log = BattleLog::new();
    log.battle_start(&combatants[0].name, &combatants[1].name);

    // Turn order is decided once and holds for the entire battle.
    let order = decide_order(&combatants, rng);
    log.first_mover(&combatants[order[0]].name);

    let mut turn: u32 = 1;
    while !combatants[0].is_fainted() && !combatants[1].is_fainted() {
        if turn > MAX_ROUNDS {
            return Err(BattleError::SimulationExceeded { rounds: MAX_ROUNDS });
        }
        log.turn_start(turn);
        for &attacker_idx in &order {
            let (attacker, defender) = ordered_pair(&mut combatants, attacker_idx);
            if !resolve_exchange(attacker, defender, &mut log, rng) {
                break;
            }
        }
        turn += 1;
    }

    let winner = battle_outcome(&combatants[0], &combatants[1]);
    match &winner {
        Winner::Combatant(name) => log.win(name),
        Winner::Draw => log.draw(),
        Winner::Unknown => log.unknown_outcome(),
    }
    Ok(BattleResult {
        winner,
        log: log.into_lines(),
    })
}

/// [`simulate`] with a [`SeededSource`] built from `seed`; same seed, same
/// battle.
pub fn simulate_seeded(
    one: &StatSnapshot,
    two: &StatSnapshot,
    seed: u64,
) -> Result<BattleResult, BattleError> {
    simulate(one, two, &mut SeededSource::from_seed(seed))
}

/// Standing of the two sides: both down is a draw, one down names the other
/// side winner, neither down falls back to `Unknown`.
pub fn battle_outcome(one: &Combatant, two: &Combatant) -> Winner {
    match (one.is_fainted(), two.is_fainted()) {
        (true, true) => Winner::Draw,
        (true, false) => Winner::Combatant(two.name.clone()),
        (false, true) => Winner::Combatant(one.name.clone()),
        (false, false) => Winner::Unknown,
    }
}

/// Strictly higher speed moves first; an exact tie is broken uniformly.
fn decide_order<R: RandomSource>(combatants: &[Combatant; 2], rng: &mut R) -> [usize; 2] {
    if combatants[0].speed > combatants[1].speed {
        [0, 1]
    } else if combatants[1].speed > combatants[0].speed {
        [1, 0]
    } else if rng.pick_index(2) == 0 {
        [0, 1]
    } else {
        [1, 0]
    }
}

fn ordered_pair(combatants: &mut [Combatant; 2], attacker_idx: usize) -> (&mut Combatant, &mut Combatant) {
    let (first, second) = combatants.split_at_mut(1);
    if attacker_idx == 0 {
        (&mut first[0], &mut second[0])
    } else {
        (&mut second[0], &mut first[0])
    }
}
