use crate::rng::RandomSource;

/// One catalog entry. Power 0 means no direct damage; the secondary-status
/// table is ordered, and the first entry whose roll succeeds wins.
#[derive(Clone, Copy, Debug)]
pub struct MoveData {
    pub name: &'static str,
    pub power: u32,
    pub accuracy: f64,
    pub status: &'static [(&'static str, f64)],
}

/// Used when none of the attacker's types has a registered pool.
pub const FALLBACK_MOVE: MoveData = MoveData {
    name: "Struggle",
    power: 50,
    accuracy: 1.0,
    status: &[],
};

const FIRE_MOVES: &[MoveData] = &[
    MoveData {
        name: "Flamethrower",
        power: 90,
        accuracy: 1.0,
        status: &[("burned", 0.1)],
    },
    MoveData {
        name: "Fire Blast",
        power: 110,
        accuracy: 0.85,
        status: &[("burned", 0.3)],
    },
    MoveData {
        name: "Ember",
        power: 40,
        accuracy: 1.0,
        status: &[("burned", 0.1)],
    },
];

const WATER_MOVES: &[MoveData] = &[
    MoveData {
        name: "Hydro Pump",
        power: 110,
        accuracy: 0.8,
        status: &[],
    },
    MoveData {
        name: "Water Gun",
        power: 40,
        accuracy: 1.0,
        status: &[],
    },
    MoveData {
        name: "Bubble Beam",
        power: 65,
        accuracy: 1.0,
        status: &[],
    },
];

const GRASS_MOVES: &[MoveData] = &[
    MoveData {
        name: "Vine Whip",
        power: 45,
        accuracy: 1.0,
        status: &[],
    },
    MoveData {
        name: "Razor Leaf",
        power: 55,
        accuracy: 0.95,
        status: &[],
    },
    // Poison stands in for the seed's per-turn drain.
    MoveData {
        name: "Leech Seed",
        power: 0,
        accuracy: 0.9,
        status: &[("poisoned", 1.0)],
    },
];

const ELECTRIC_MOVES: &[MoveData] = &[
    MoveData {
        name: "Thunderbolt",
        power: 90,
        accuracy: 1.0,
        status: &[("paralyzed", 0.1)],
    },
    MoveData {
        name: "Spark",
        power: 65,
        accuracy: 1.0,
        status: &[("paralyzed", 0.3)],
    },
    MoveData {
        name: "Thunder Shock",
        power: 40,
        accuracy: 1.0,
        status: &[("paralyzed", 0.1)],
    },
];

const NORMAL_MOVES: &[MoveData] = &[
    MoveData {
        name: "Tackle",
        power: 40,
        accuracy: 1.0,
        status: &[],
    },
    MoveData {
        name: "Quick Attack",
        power: 40,
        accuracy: 1.0,
        status: &[],
    },
    MoveData {
        name: "Headbutt",
        power: 70,
        accuracy: 1.0,
        status: &[("paralyzed", 0.05)],
    },
];

const GHOST_MOVES: &[MoveData] = &[
    MoveData {
        name: "Shadow Ball",
        power: 80,
        accuracy: 1.0,
        status: &[],
    },
    MoveData {
        name: "Lick",
        power: 30,
        accuracy: 1.0,
        status: &[("paralyzed", 0.05)],
    },
    // Fixed-damage move in the source game; modeled as zero power here.
    MoveData {
        name: "Night Shade",
        power: 0,
        accuracy: 1.0,
        status: &[],
    },
];

static MOVE_POOLS: phf::Map<&'static str, &'static [MoveData]> = phf::phf_map! {
    "fire" => FIRE_MOVES,
    "water" => WATER_MOVES,
    "grass" => GRASS_MOVES,
    "electric" => ELECTRIC_MOVES,
    "normal" => NORMAL_MOVES,
    "ghost" => GHOST_MOVES,
};

/// Registered pool for a type, if any.
pub fn pool_for(type_name: &str) -> Option<&'static [MoveData]> {
    MOVE_POOLS.get(type_name).copied()
}

/// Pick a move for an attacker: iterate its types in order and draw uniformly
/// from the first type with a registered pool; fall back to [`FALLBACK_MOVE`]
/// when no type matches.
///
/// Which move comes up is intentionally non-deterministic for fixed inputs,
/// standing in for an unpredictable opponent.
pub fn select_move<R: RandomSource>(types: &[String], rng: &mut R) -> &'static MoveData {
    for type_name in types {
        if let Some(pool) = pool_for(type_name) {
            return &pool[rng.pick_index(pool.len())];
        }
    }
    &FALLBACK_MOVE
}
