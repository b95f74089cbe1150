//! Stat lookup against the PokeAPI REST service.
//!
//! Resolves a creature name to the [`StatSnapshot`] the simulator consumes.
//! Lookup failures stay on this side of the boundary: the simulator never
//! sees a partial snapshot.

use pokebattle_core::prelude::StatSnapshot;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("pokemon '{0}' was not found")]
    NotFound(String),
    #[error("pokeapi request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("pokeapi response is missing base stat '{0}'")]
    MissingStat(&'static str),
}

pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `POKEAPI_URL`, falling back to the public instance.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POKEAPI_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub async fn fetch_snapshot(&self, name: &str) -> Result<StatSnapshot, FetchError> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_ascii_lowercase());
        tracing::debug!(%url, "fetching combatant stats");
        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(name.to_string()));
        }
        let payload: ApiPokemon = response.error_for_status()?.json().await?;
        snapshot_from_api(payload)
    }
}

#[derive(Debug, Deserialize)]
struct ApiPokemon {
    name: String,
    stats: Vec<ApiStat>,
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    abilities: Vec<ApiAbilitySlot>,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u16,
    stat: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiAbilitySlot {
    ability: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiNamed {
    name: String,
}

fn snapshot_from_api(payload: ApiPokemon) -> Result<StatSnapshot, FetchError> {
    let base_stat = |key: &'static str| {
        payload
            .stats
            .iter()
            .find(|entry| entry.stat.name == key)
            .map(|entry| entry.base_stat)
            .ok_or(FetchError::MissingStat(key))
    };
    let hp = base_stat("hp")?;
    let attack = base_stat("attack")?;
    let defense = base_stat("defense")?;
    let speed = base_stat("speed")?;
    Ok(StatSnapshot {
        name: payload.name,
        types: payload
            .types
            .iter()
            .map(|slot| slot.kind.name.clone())
            .collect(),
        hp,
        attack,
        defense,
        speed,
        abilities: payload
            .abilities
            .iter()
            .map(|slot| slot.ability.name.clone())
            .collect(),
    })
}
