//! Headless game between automated seats.
//!
//! Usage: `simulate [seed] [players] [random|priority]`
//!
//! Set `RUST_LOG=debug` to see every action.

use std::str::FromStr;

use flip_out::core::GameConfig;
use flip_out::games::table::{PlayerPolicy, PriorityPolicy, RandomPolicy, Table};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MAX_TURNS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyChoice {
    Random,
    Priority,
}

impl FromStr for PolicyChoice {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(PolicyChoice::Random),
            "priority" => Ok(PolicyChoice::Priority),
            other => Err(ArgError::Policy(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
enum ArgError {
    #[error("seed must be an unsigned integer, got `{0}`")]
    Seed(String),

    #[error("player count must be a positive integer, got `{0}`")]
    Players(String),

    #[error("unknown policy `{0}`, expected `random` or `priority`")]
    Policy(String),

    #[error("unexpected argument `{0}`")]
    Extra(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    seed: u64,
    seats: usize,
    policy: PolicyChoice,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 42,
            seats: 4,
            policy: PolicyChoice::Priority,
        }
    }
}

/// Positional `[seed] [players] [policy]`; a missing argument keeps its
/// default, a malformed one is an error.
fn parse_options(args: impl IntoIterator<Item = String>) -> Result<Options, ArgError> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    if let Some(raw) = args.next() {
        options.seed = raw.parse().map_err(|_| ArgError::Seed(raw))?;
    }
    if let Some(raw) = args.next() {
        options.seats = raw.parse().map_err(|_| ArgError::Players(raw))?;
    }
    if let Some(raw) = args.next() {
        options.policy = raw.parse()?;
    }
    if let Some(extra) = args.next() {
        return Err(ArgError::Extra(extra));
    }
    Ok(options)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = match parse_options(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            error!(error = %err, "usage: simulate [seed] [players] [random|priority]");
            std::process::exit(64);
        }
    };
    let Options { seed, seats: seat_count, policy } = options;
    let mut policy: Box<dyn PlayerPolicy> = match policy {
        PolicyChoice::Random => Box::new(RandomPolicy),
        PolicyChoice::Priority => Box::new(PriorityPolicy),
    };

    let names: Vec<String> = (1..=seat_count).map(|i| format!("Bot {i}")).collect();
    let seats: Vec<(&str, bool)> = names.iter().map(|n| (n.as_str(), true)).collect();

    let mut table = match Table::new(GameConfig::default().with_seed(seed), &seats) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "could not set up the table");
            std::process::exit(1);
        }
    };

    info!(seed, players = seat_count, "simulation started");
    match table.run_to_completion(policy.as_mut(), MAX_TURNS) {
        Ok(_) => {}
        Err(err) => {
            error!(error = %err, "engine contract violated");
            std::process::exit(2);
        }
    }

    let snapshot = table.snapshot();
    match snapshot.winner_name.as_deref() {
        Some(name) => info!(winner = name, turns = snapshot.turn_number, "game over"),
        None => info!(turns = snapshot.turn_number, "no winner within the turn limit"),
    }
    for player in &snapshot.players {
        info!(
            player = %player.name,
            moods = player.unique_mood_count,
            collected = ?player.collected_mood_names,
            hand = player.hand_size,
            "final state"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_arguments_keep_defaults() {
        assert_eq!(parse_options(args(&[])), Ok(Options::default()));
        assert_eq!(
            parse_options(args(&["7", "3", "random"])),
            Ok(Options { seed: 7, seats: 3, policy: PolicyChoice::Random })
        );
    }

    #[test]
    fn test_malformed_arguments_are_errors() {
        assert_eq!(parse_options(args(&["abc"])), Err(ArgError::Seed("abc".to_string())));
        assert_eq!(parse_options(args(&["1", "-2"])), Err(ArgError::Players("-2".to_string())));
        assert_eq!(
            parse_options(args(&["1", "2", "greedy"])),
            Err(ArgError::Policy("greedy".to_string()))
        );
        assert_eq!(
            parse_options(args(&["1", "2", "random", "more"])),
            Err(ArgError::Extra("more".to_string()))
        );
    }
}
