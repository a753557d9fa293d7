//! Generate Atomic mate-in-one puzzles and print them as JSON lines.
//!
//! Usage: cargo run --bin generate-puzzles -- [--count N] [--min-ply A]
//!        [--max-ply B] [--max-attempts M] [--seed S]

use atomic_puzzler::{acquire_puzzle, AcquireParams, Acquisition, PlyRange};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::variant::Atomic;
use tracing::{info, warn};

/// Value following `--name` on the command line, if any.
fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str) -> anyhow::Result<Option<T>> {
    for i in 0..args.len() {
        if args[i] == name {
            let raw = args
                .get(i + 1)
                .ok_or_else(|| anyhow::anyhow!("{name} needs a value"))?;
            let value = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid value for {name}: {raw}"))?;
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = AcquireParams::default();

    let count: u32 = parse_flag(&args, "--count")?.unwrap_or(1);
    let min_ply = parse_flag(&args, "--min-ply")?.unwrap_or(defaults.plies.min());
    let max_ply = parse_flag(&args, "--max-ply")?.unwrap_or(defaults.plies.max());
    let max_attempts = parse_flag(&args, "--max-attempts")?.unwrap_or(defaults.max_attempts);
    let seed: Option<u64> = parse_flag(&args, "--seed")?;

    let params = AcquireParams {
        plies: PlyRange::new(min_ply, max_ply)?,
        max_attempts,
        time_budget: None,
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(count, min_ply, max_ply, max_attempts, ?seed, "Generating puzzles");

    let mut found = 0u32;
    let mut exhausted = 0u32;
    for _ in 0..count {
        match acquire_puzzle::<Atomic, _>(&params, &mut rng) {
            Acquisition::Found { puzzle, .. } => {
                println!("{}", serde_json::to_string(&puzzle)?);
                found += 1;
            }
            Acquisition::NotFound { stats } => {
                warn!(attempts = stats.attempts, "Gave up on a puzzle");
                exhausted += 1;
            }
        }
    }

    info!(found, exhausted, "Done");
    Ok(())
}
