use std::env;
use std::time::Duration;

use atomic_puzzler::acquire::DEFAULT_MAX_ATTEMPTS;
use atomic_puzzler::sampler::{DEFAULT_MAX_PLY, DEFAULT_MIN_PLY};

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Playout length used when a request does not give one
    pub min_ply: u32,
    pub max_ply: u32,
    pub max_attempts: u32,
    /// Upper bound on `max_attempts` a request may ask for
    pub attempt_cap: u32,
    /// Upper bound on `max_ply` a request may ask for
    pub ply_cap: u32,
    pub time_budget: Option<Duration>,
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 8000),
            min_ply: parse_or("PUZZLE_MIN_PLY", DEFAULT_MIN_PLY),
            max_ply: parse_or("PUZZLE_MAX_PLY", DEFAULT_MAX_PLY),
            max_attempts: parse_or("PUZZLE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS),
            attempt_cap: parse_or("PUZZLE_ATTEMPT_CAP", 10_000),
            ply_cap: parse_or("PUZZLE_PLY_CAP", 200),
            time_budget: env::var("PUZZLE_TIME_BUDGET_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis), // unset = attempts are the only limit
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            min_ply: DEFAULT_MIN_PLY,
            max_ply: DEFAULT_MAX_PLY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_cap: 10_000,
            ply_cap: 200,
            time_budget: None,
        }
    }
}
