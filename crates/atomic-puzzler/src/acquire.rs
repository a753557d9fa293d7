//! Puzzle acquisition loop: sample, scan, retry.

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use shakmaty::variant::Atomic;
use shakmaty::Position;
use tracing::{debug, info};

use crate::puzzle::Puzzle;
use crate::sampler::{sample_position, PlyRange, SampleError};

/// Attempts used when the caller does not say otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquireParams {
    pub plies: PlyRange,
    pub max_attempts: u32,
    /// Wall-clock cap, checked between attempts
    pub time_budget: Option<Duration>,
}

impl Default for AcquireParams {
    fn default() -> Self {
        Self {
            plies: PlyRange::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            time_budget: None,
        }
    }
}

/// What happened to the attempts of one acquisition run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcquireStats {
    pub attempts: u32,
    /// Playouts that ended in a finished game
    pub terminal_playouts: u32,
    /// Playouts aborted by the rules engine
    pub engine_errors: u32,
    /// Live positions without a mate in one
    pub no_mate: u32,
    pub timed_out: bool,
}

impl AcquireStats {
    /// Count a playout the sampler threw away.
    pub fn record_discard(&mut self, err: &SampleError) {
        match err {
            SampleError::Terminal { .. } => self.terminal_playouts += 1,
            SampleError::Engine { .. } => self.engine_errors += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Found { puzzle: Puzzle, stats: AcquireStats },
    /// Attempts or time ran out. Routine under bad luck: ask again.
    NotFound { stats: AcquireStats },
}

impl Acquisition {
    pub fn stats(&self) -> &AcquireStats {
        match self {
            Acquisition::Found { stats, .. } | Acquisition::NotFound { stats } => stats,
        }
    }

    pub fn into_puzzle(self) -> Option<Puzzle> {
        match self {
            Acquisition::Found { puzzle, .. } => Some(puzzle),
            Acquisition::NotFound { .. } => None,
        }
    }
}

/// Sample random playouts of variant `P` until one reaches a position with a
/// mate in one, or `max_attempts` (or the time budget) runs out.
pub fn acquire_puzzle<P, R>(params: &AcquireParams, rng: &mut R) -> Acquisition
where
    P: Position + Clone + Default + fmt::Debug,
    R: Rng,
{
    let started = Instant::now();
    let mut stats = AcquireStats::default();

    while stats.attempts < params.max_attempts {
        if let Some(budget) = params.time_budget {
            if started.elapsed() >= budget {
                stats.timed_out = true;
                break;
            }
        }
        stats.attempts += 1;

        let sample = match sample_position::<P, R>(params.plies, rng) {
            Ok(sample) => sample,
            Err(e) => {
                stats.record_discard(&e);
                debug!(attempt = stats.attempts, error = %e, "Discarding playout");
                continue;
            }
        };

        match Puzzle::scan(&sample.position, sample.plies) {
            Some(puzzle) => {
                info!(
                    attempts = stats.attempts,
                    plies = puzzle.plies(),
                    solutions = puzzle.winning_moves().len(),
                    fen = %puzzle.fen(),
                    "Puzzle found"
                );
                return Acquisition::Found { puzzle, stats };
            }
            None => stats.no_mate += 1,
        }
    }

    info!(
        attempts = stats.attempts,
        terminal = stats.terminal_playouts,
        engine_errors = stats.engine_errors,
        timed_out = stats.timed_out,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "No puzzle found"
    );
    Acquisition::NotFound { stats }
}

/// Atomic puzzle from the process RNG.
pub fn acquire_atomic_puzzle(params: &AcquireParams) -> Acquisition {
    acquire_puzzle::<Atomic, _>(params, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomic_core::{apply_move_codes, parse_fen, terminal_state, Terminal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Finds a puzzle within `attempts` tries, walking seeds so one unlucky
    /// stream cannot fail the test.
    fn find_puzzle(plies: PlyRange, attempts: u32) -> Puzzle {
        let params = AcquireParams {
            plies,
            max_attempts: attempts,
            time_budget: None,
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(puzzle) = acquire_puzzle::<Atomic, _>(&params, &mut rng).into_puzzle() {
                return puzzle;
            }
        }
        panic!("no puzzle found for {plies:?}");
    }

    #[test]
    fn test_zero_attempts_is_not_found() {
        let params = AcquireParams {
            max_attempts: 0,
            ..AcquireParams::default()
        };
        let result = acquire_puzzle::<Atomic, _>(&params, &mut StdRng::seed_from_u64(1));
        assert_eq!(
            result,
            Acquisition::NotFound {
                stats: AcquireStats::default()
            }
        );
    }

    #[test]
    fn test_spent_time_budget_is_not_found() {
        let params = AcquireParams {
            time_budget: Some(Duration::ZERO),
            ..AcquireParams::default()
        };
        let result = acquire_puzzle::<Atomic, _>(&params, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.stats().attempts, 0);
        assert!(result.stats().timed_out);
        assert!(result.into_puzzle().is_none());
    }

    #[test]
    fn test_found_puzzle_moves_all_mate() {
        let puzzle = find_puzzle(PlyRange::default(), 2000);
        assert!(!puzzle.winning_moves().is_empty());

        let pos: Atomic = parse_fen(puzzle.fen()).unwrap();
        assert_eq!(terminal_state(&pos), None);
        for code in puzzle.winning_moves() {
            let after = apply_move_codes(pos.clone(), &[code]).unwrap();
            assert_eq!(terminal_state(&after), Some(Terminal::Checkmate), "{code}");
        }
    }

    #[test]
    fn test_fixed_length_playouts_find_puzzles() {
        let plies = PlyRange::fixed(30).unwrap();
        let puzzle = find_puzzle(plies, 2000);
        assert_eq!(puzzle.plies(), 30);
    }

    #[test]
    fn test_stats_account_for_every_attempt() {
        let params = AcquireParams {
            plies: PlyRange::new(5, 30).unwrap(),
            max_attempts: 50,
            time_budget: None,
        };
        let result = acquire_puzzle::<Atomic, _>(&params, &mut StdRng::seed_from_u64(3));
        let stats = *result.stats();
        let failed = stats.terminal_playouts + stats.engine_errors + stats.no_mate;
        match result {
            Acquisition::Found { .. } => assert_eq!(failed + 1, stats.attempts),
            Acquisition::NotFound { .. } => {
                assert_eq!(failed, stats.attempts);
                assert_eq!(stats.attempts, 50);
            }
        }
        assert_eq!(stats.engine_errors, 0);
    }

    #[test]
    fn test_discards_are_counted_by_cause() {
        let mut stats = AcquireStats::default();
        stats.record_discard(&SampleError::Terminal {
            kind: Terminal::KingExploded,
            plies: 7,
        });
        // shakmaty only offers legal moves, so a rejected playout move never
        // shows up in a real run; it still must not count as a finished game.
        stats.record_discard(&SampleError::Engine {
            code: "e2e5".to_string(),
            reason: "illegal move".to_string(),
        });
        stats.record_discard(&SampleError::Engine {
            code: "a1a8".to_string(),
            reason: "illegal move".to_string(),
        });
        assert_eq!(stats.terminal_playouts, 1);
        assert_eq!(stats.engine_errors, 2);
        assert_eq!(stats.no_mate, 0);
        assert_eq!(stats.attempts, 0);
    }
}
