//! Append-only battle event log.
//!
//! One push method per event kind; the log is produced once per battle,
//! returned whole, and never mutated afterwards.

use serde_json::json;

#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.entries
    }

    pub fn into_lines(self) -> Vec<String> {
        self.entries
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!(self.entries)
    }

    pub fn battle_start(&mut self, one: &str, two: &str) {
        self.entries.push(format!(
            "🎮 Battle Start! {} vs {}!",
            display_name(one),
            display_name(two)
        ));
        self.entries.push("⚔️ Let the battle begin!\n".to_string());
    }

    pub fn first_mover(&mut self, name: &str) {
        self.entries.push(format!(
            "⚡ {} is quicker and makes the first move!\n",
            display_name(name)
        ));
    }

    pub fn turn_start(&mut self, turn: u32) {
        self.entries.push(format!("🌀 Turn {turn} starts!"));
    }

    pub fn paralysis_warning(&mut self, name: &str) {
        self.entries.push(format!(
            "⚡ {} is paralyzed and may be unable to move!",
            display_name(name)
        ));
    }

    pub fn fully_paralyzed(&mut self, name: &str) {
        self.entries.push(format!(
            "❌ {} is fully paralyzed and can't move this turn!",
            display_name(name)
        ));
    }

    pub fn burn_damage(&mut self, name: &str, loss: u32) {
        self.entries.push(format!(
            "🔥 {} is hurt by its burn and loses {loss} HP!",
            display_name(name)
        ));
    }

    pub fn poison_damage(&mut self, name: &str, loss: u32) {
        self.entries.push(format!(
            "☠️ {} is hurt by poison and loses {loss} HP!",
            display_name(name)
        ));
    }

    pub fn faint(&mut self, name: &str) {
        self.entries
            .push(format!("☠️ {} has fainted!", display_name(name)));
    }

    pub fn move_attempt(&mut self, name: &str, move_name: &str) {
        self.entries.push(format!(
            "🗡️ {} tries to use {move_name}!",
            display_name(name)
        ));
    }

    pub fn miss(&mut self, name: &str, move_name: &str) {
        self.entries.push(format!(
            "❌ {}'s {move_name} missed!",
            display_name(name)
        ));
    }

    pub fn ability_block(&mut self, defender: &str, move_name: &str) {
        self.entries.push(format!(
            "🚫 {}'s ability prevents damage from {move_name}!",
            display_name(defender)
        ));
    }

    pub fn ohko_prevented(&mut self, defender: &str, ability: &str) {
        self.entries.push(format!(
            "🛡️ {}'s {} ability prevents it from fainting!",
            display_name(defender),
            display_name(ability)
        ));
    }

    pub fn hit(&mut self, attacker: &str, move_name: &str, defender: &str, damage: u32) {
        self.entries.push(format!(
            "💥 {}'s {move_name} hit {} for {damage} damage!",
            display_name(attacker),
            display_name(defender)
        ));
    }

    pub fn super_effective(&mut self) {
        self.entries.push("🔥 It's super effective!".to_string());
    }

    pub fn not_very_effective(&mut self) {
        self.entries
            .push("🧊 It's not very effective...".to_string());
    }

    pub fn no_effect(&mut self) {
        self.entries.push("🚫 It had no effect!".to_string());
    }

    pub fn critical_hit(&mut self) {
        self.entries.push("💥 A critical hit!".to_string());
    }

    pub fn hp_left(&mut self, name: &str, hp: u32) {
        self.entries
            .push(format!("🧪 {} has {hp} HP left.", display_name(name)));
    }

    pub fn status_applied(&mut self, name: &str, status_label: &str) {
        self.entries.push(format!(
            "☣️ {} is now {status_label}!",
            display_name(name)
        ));
    }

    pub fn contact_status(&mut self, attacker: &str, defender: &str, ability: &str) {
        self.entries.push(format!(
            "⚡ {} was paralyzed by {}'s {} ability!",
            display_name(attacker),
            display_name(defender),
            display_name(ability)
        ));
    }

    pub fn draw(&mut self) {
        self.entries
            .push("🤝 The battle ended in a draw!".to_string());
    }

    pub fn win(&mut self, name: &str) {
        self.entries.push(format!(
            "\n🏆 {} wins the battle with style!\n🎉🎉🎉",
            name.to_uppercase()
        ));
    }

    pub fn unknown_outcome(&mut self) {
        self.entries
            .push("❓ Battle ended unexpectedly.".to_string());
    }
}

/// First letter uppercased, the rest lowercased, as names render in battle.
fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
