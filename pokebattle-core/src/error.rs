use thiserror::Error;

/// Failures the simulator itself can surface.
///
/// Randomness-driven branches (miss, crit, status procs, tie-break) are
/// expected outcomes, not errors. Lookup failures from whatever resolves a
/// snapshot belong to the caller and must be handled before `simulate` is
/// ever invoked.
#[derive(Debug, Error)]
pub enum BattleError {
    /// A snapshot failed validation before the battle started.
    #[error("invalid combatant '{name}': {reason}")]
    InvalidInput { name: String, reason: String },

    /// The round cap tripped without either side fainting.
    #[error("battle exceeded {rounds} rounds without a winner")]
    SimulationExceeded { rounds: u32 },
}
