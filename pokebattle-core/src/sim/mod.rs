pub mod battle;
pub mod combatant;
pub mod damage;
pub mod turn;

pub use battle::{simulate, simulate_seeded, BattleResult, Winner};
pub use combatant::{Combatant, StatSnapshot, Status};
