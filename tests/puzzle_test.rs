//! Property checks for generated puzzles.
//!
//! Runs the whole sample → scan → retry loop on seeded streams and replays
//! every answer through the rules engine.

use atomic_core::{apply_move_codes, parse_fen, terminal_state, Terminal};
use atomic_puzzler::{acquire_puzzle, scanner, AcquireParams, Acquisition, PlyRange, Puzzle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::variant::Atomic;

fn collect_puzzles(plies: PlyRange, seeds: std::ops::Range<u64>) -> Vec<Puzzle> {
    let params = AcquireParams {
        plies,
        max_attempts: 2000,
        time_budget: None,
    };
    seeds
        .filter_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            acquire_puzzle::<Atomic, _>(&params, &mut rng).into_puzzle()
        })
        .collect()
}

#[test]
fn test_every_solution_is_checkmate() {
    let puzzles = collect_puzzles(PlyRange::default(), 0..8);
    assert!(!puzzles.is_empty());

    for puzzle in &puzzles {
        let pos: Atomic = parse_fen(puzzle.fen()).unwrap();
        assert_eq!(terminal_state(&pos), None, "{}", puzzle.fen());
        assert!(!puzzle.winning_moves().is_empty());

        for code in puzzle.winning_moves() {
            let after = apply_move_codes(pos.clone(), &[code]).unwrap();
            assert_eq!(
                terminal_state(&after),
                Some(Terminal::Checkmate),
                "{code} in {}",
                puzzle.fen()
            );
        }
    }
}

#[test]
fn test_rescanning_a_puzzle_gives_the_same_answers() {
    for puzzle in collect_puzzles(PlyRange::new(15, 50).unwrap(), 100..104) {
        let pos: Atomic = parse_fen(puzzle.fen()).unwrap();
        assert_eq!(&scanner::mating_moves(&pos), puzzle.winning_moves());

        let again = Puzzle::from_fen(puzzle.fen()).unwrap().unwrap();
        assert_eq!(again.winning_moves(), puzzle.winning_moves());
        assert_eq!(again.legal_moves(), puzzle.legal_moves());
    }
}

#[test]
fn test_non_solutions_do_not_mate() {
    for puzzle in collect_puzzles(PlyRange::new(5, 30).unwrap(), 200..204) {
        let pos: Atomic = parse_fen(puzzle.fen()).unwrap();
        for code in puzzle.legal_moves() {
            if puzzle.is_solution(code) {
                continue;
            }
            let after = apply_move_codes(pos.clone(), &[code]).unwrap();
            assert_ne!(terminal_state(&after), Some(Terminal::Checkmate), "{code}");
        }
    }
}

#[test]
fn test_fixed_length_playouts() {
    let plies = PlyRange::fixed(20).unwrap();
    let puzzles = collect_puzzles(plies, 300..310);
    assert!(!puzzles.is_empty(), "fixed-length playouts never found a puzzle");
    for puzzle in puzzles {
        assert_eq!(puzzle.plies(), 20);
    }
}

#[test]
fn test_zero_attempts_never_samples() {
    let params = AcquireParams {
        max_attempts: 0,
        ..AcquireParams::default()
    };
    let result = acquire_puzzle::<Atomic, _>(&params, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Acquisition::NotFound { .. }));
    assert_eq!(result.stats().attempts, 0);
}
