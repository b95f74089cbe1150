use crate::battle_log::BattleLog;
use crate::error::BattleError;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Chance a paralyzed combatant loses its move for the turn.
const FULL_PARALYSIS_CHANCE: f64 = 0.25;
/// Burn drains max_hp / 16 per turn, minimum 1.
const BURN_DIVISOR: u32 = 16;
/// Poison drains max_hp / 8 per turn, minimum 1.
const POISON_DIVISOR: u32 = 8;

/// Immutable combatant description as resolved by the caller's data lookup.
/// The simulator validates it and copies what it needs; it is never mutated.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatSnapshot {
    pub name: String,
    /// Ordered; the first type selects the move pool.
    pub types: Vec<String>,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    #[serde(default)]
    pub abilities: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Burn,
    Paralysis,
    Poison,
}

impl Status {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "burned" => Some(Status::Burn),
            "paralyzed" => Some(Status::Paralysis),
            "poisoned" => Some(Status::Poison),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Burn => "burned",
            Status::Paralysis => "paralyzed",
            Status::Poison => "poisoned",
        }
    }
}

/// One participant's mutable state for the duration of a single battle.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub max_hp: u32,
    pub current_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub status: Option<Status>,
}

impl Combatant {
    /// Validate a snapshot and seed battle state from it.
    ///
    /// Types and abilities are normalized to lowercase so table lookups are
    /// insensitive to upstream casing.
    pub fn from_snapshot(snapshot: &StatSnapshot) -> Result<Self, BattleError> {
        if snapshot.name.trim().is_empty() {
            return Err(BattleError::InvalidInput {
                name: snapshot.name.clone(),
                reason: "name is empty".to_string(),
            });
        }
        if snapshot.types.is_empty() {
            return Err(BattleError::InvalidInput {
                name: snapshot.name.clone(),
                reason: "snapshot lists no types".to_string(),
            });
        }
        if snapshot.hp == 0 {
            return Err(BattleError::InvalidInput {
                name: snapshot.name.clone(),
                reason: "hp must be positive".to_string(),
            });
        }
        Ok(Self {
            name: snapshot.name.clone(),
            types: snapshot
                .types
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            abilities: snapshot
                .abilities
                .iter()
                .map(|a| a.to_ascii_lowercase())
                .collect(),
            max_hp: u32::from(snapshot.hp),
            current_hp: u32::from(snapshot.hp),
            attack: u32::from(snapshot.attack),
            defense: u32::from(snapshot.defense),
            speed: u32::from(snapshot.speed),
            status: None,
        })
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    /// The type a move borrows when this combatant attacks.
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("normal")
    }

    /// Afflict a status. Only transitions from `None`; an already afflicted
    /// combatant keeps its current status for the rest of the battle.
    pub fn apply_status(&mut self, status: Status) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }

    /// Per-turn status resolution, run before this combatant's move.
    ///
    /// Returns whether the combatant may still act. Burn and poison drain HP
    /// here; the caller must re-check for a faint immediately afterwards, so
    /// a combatant killed by its own status never takes its move.
    pub fn apply_status_upkeep<R: RandomSource>(
        &mut self,
        log: &mut BattleLog,
        rng: &mut R,
    ) -> bool {
        match self.status {
            Some(Status::Paralysis) => {
                log.paralysis_warning(&self.name);
                if rng.roll(FULL_PARALYSIS_CHANCE) {
                    log.fully_paralyzed(&self.name);
                    return false;
                }
                // Any speed penalty from paralysis is not modeled: turn
                // order is decided once, before either side can be statused.
                true
            }
            Some(Status::Burn) => {
                let loss = (self.max_hp / BURN_DIVISOR).max(1);
                self.take_damage(loss);
                log.burn_damage(&self.name, loss);
                true
            }
            Some(Status::Poison) => {
                let loss = (self.max_hp / POISON_DIVISOR).max(1);
                self.take_damage(loss);
                log.poison_damage(&self.name, loss);
                true
            }
            None => true,
        }
    }
}
