/// Damage multiplier for one attacking type against one defending type.
///
/// Pairs without a chart entry are neutral (1.0), so unknown types simply
/// pass through.
pub fn effectiveness(attacking: &str, defending: &str) -> f64 {
    match attacking {
        "fire" => match defending {
            "grass" => 2.0,
            "water" | "fire" => 0.5,
            _ => 1.0,
        },
        "water" => match defending {
            "fire" => 2.0,
            "grass" | "water" => 0.5,
            _ => 1.0,
        },
        "grass" => match defending {
            "water" => 2.0,
            "fire" | "grass" => 0.5,
            _ => 1.0,
        },
        "electric" => match defending {
            "water" => 2.0,
            "grass" | "electric" => 0.5,
            _ => 1.0,
        },
        "normal" => match defending {
            "ghost" => 0.0,
            _ => 1.0,
        },
        "ghost" => match defending {
            "normal" => 0.0,
            _ => 1.0,
        },
        _ => 1.0,
    }
}

/// Combined multiplier over every attacker-type x defender-type pair.
///
/// Dual types compound multiplicatively on both sides, including immunities:
/// a single 0.0 pair zeroes the whole product.
pub fn combined_multiplier(attacker_types: &[String], defender_types: &[String]) -> f64 {
    let mut multiplier = 1.0;
    for attacking in attacker_types {
        for defending in defender_types {
            multiplier *= effectiveness(attacking, defending);
        }
    }
    multiplier
}
