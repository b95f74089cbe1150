//! Two-combatant battle simulator.
//!
//! Seeds two [`sim::Combatant`]s from immutable stat snapshots and resolves a
//! full battle, producing a winner and an ordered event log. The main entry
//! point is [`sim::battle::simulate`] (or [`sim::battle::simulate_seeded`] for
//! deterministic replay).

pub mod battle_log;
pub mod data;
pub mod error;
pub mod rng;
pub mod sim;

pub use error::BattleError;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle_log::BattleLog;
    pub use crate::error::BattleError;
    pub use crate::rng::{RandomSource, SeededSource, SequenceSource};
    pub use crate::sim::battle::{
        battle_outcome, simulate, simulate_seeded, BattleResult, Winner, MAX_ROUNDS,
    };
    pub use crate::sim::combatant::{Combatant, StatSnapshot, Status};
}
