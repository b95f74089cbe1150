/// Combat modifier granted by one ability.
#[derive(Clone, Copy, Debug)]
pub struct AbilityData {
    /// Move types this ability fully negates when held by the defender.
    pub immune_to: &'static [&'static str],
    /// Survive any hit taken at full HP with exactly 1 HP left.
    pub prevents_ohko: bool,
    /// Chance to paralyze the attacker after a resolved exchange.
    pub contact_status_chance: f64,
}

pub static ABILITIES: phf::Map<&'static str, AbilityData> = phf::phf_map! {
    "levitate" => AbilityData {
        immune_to: &["ground"],
        prevents_ohko: false,
        contact_status_chance: 0.0,
    },
    "sturdy" => AbilityData {
        immune_to: &[],
        prevents_ohko: true,
        contact_status_chance: 0.0,
    },
    "static" => AbilityData {
        immune_to: &[],
        prevents_ohko: false,
        contact_status_chance: 0.3,
    },
};

/// True if any held ability lists `move_type` in its immunity set.
pub fn blocks_move_type(abilities: &[String], move_type: &str) -> bool {
    abilities
        .iter()
        .filter_map(|name| ABILITIES.get(name.as_str()))
        .any(|ability| ability.immune_to.iter().any(|immune| *immune == move_type))
}

/// First held ability that prevents one-hit knockouts, by id.
pub fn anti_ohko(abilities: &[String]) -> Option<&'static str> {
    abilities.iter().find_map(|name| {
        ABILITIES
            .get_entry(name.as_str())
            .filter(|(_, ability)| ability.prevents_ohko)
            .map(|(id, _)| *id)
    })
}

/// First held ability with an on-contact paralysis proc, with its chance.
pub fn contact_status(abilities: &[String]) -> Option<(&'static str, f64)> {
    abilities.iter().find_map(|name| {
        ABILITIES
            .get_entry(name.as_str())
            .filter(|(_, ability)| ability.contact_status_chance > 0.0)
            .map(|(id, ability)| (*id, ability.contact_status_chance))
    })
}
