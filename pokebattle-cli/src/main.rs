mod fetch;

use anyhow::{anyhow, Context};
use fetch::PokeApiClient;
use pokebattle_core::prelude::*;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Offline input for `run-file`: two pre-resolved snapshots.
#[derive(Deserialize)]
struct SnapshotFile {
    combatant1: StatSnapshot,
    combatant2: StatSnapshot,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("simulate") => {
            let one = args
                .next()
                .ok_or_else(|| anyhow!("Usage: pokebattle-cli simulate <name1> <name2> [--seed N]"))?;
            let two = args
                .next()
                .ok_or_else(|| anyhow!("Usage: pokebattle-cli simulate <name1> <name2> [--seed N]"))?;
            let seed = parse_seed(&mut args)?;
            simulate_remote(&one, &two, seed).await
        }
        Some("run-file") => {
            let path = args
                .next()
                .ok_or_else(|| anyhow!("Usage: pokebattle-cli run-file <path> [--seed N]"))?;
            let seed = parse_seed(&mut args)?;
            run_file(&path, seed)
        }
        Some("fetch") => {
            let name = args
                .next()
                .ok_or_else(|| anyhow!("Usage: pokebattle-cli fetch <name>"))?;
            fetch_one(&name).await
        }
        Some(cmd) => Err(anyhow!("Unknown command '{}'", cmd)),
        // Same demonstration matchup the service ran when invoked directly.
        None => simulate_remote("pikachu", "bulbasaur", None).await,
    }
}

fn parse_seed(args: &mut impl Iterator<Item = String>) -> anyhow::Result<Option<u64>> {
    let mut seed = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a value"))?;
                seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed '{}'", value))?,
                );
            }
            other => return Err(anyhow!("Unknown arg '{}'", other)),
        }
    }
    Ok(seed)
}

async fn simulate_remote(one: &str, two: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let client = PokeApiClient::from_env();
    let first = client
        .fetch_snapshot(one)
        .await
        .with_context(|| format!("failed to resolve '{}'", one))?;
    let second = client
        .fetch_snapshot(two)
        .await
        .with_context(|| format!("failed to resolve '{}'", two))?;
    run_battle(&first, &second, seed)
}

fn run_file(path: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let file: SnapshotFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshots from {}", path))?;
    run_battle(&file.combatant1, &file.combatant2, seed)
}

async fn fetch_one(name: &str) -> anyhow::Result<()> {
    let client = PokeApiClient::from_env();
    let snapshot = client
        .fetch_snapshot(name)
        .await
        .with_context(|| format!("failed to resolve '{}'", name))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_battle(one: &StatSnapshot, two: &StatSnapshot, seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(seed, one = %one.name, two = %two.name, "simulating battle");
    let result = simulate_seeded(one, two, seed)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
