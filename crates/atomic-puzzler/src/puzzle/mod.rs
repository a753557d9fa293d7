//! Puzzle data model and answer checking

use std::collections::BTreeSet;

use atomic_core::{legal_move_codes, parse_fen, side_name, terminal_state, to_fen, MoveCode};
use serde::Serialize;
use shakmaty::variant::Atomic;
use shakmaty::Position;

use crate::error::PuzzleError;
use crate::scanner;

/// How a submitted answer fares against a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveVerdict {
    /// Legal and delivers mate
    Solved,
    /// Legal but does not mate
    Wrong,
    /// Not playable in the puzzle position
    Illegal,
}

/// A position with at least one mate-in-one for the side to move.
///
/// Only built by scanning a live position, so `winning_moves` is never empty
/// and every entry mates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    fen: String,
    side_to_move: &'static str,
    winning_moves: BTreeSet<String>,
    legal_moves: Vec<String>,
    /// Length of the playout that produced the position (0 if supplied)
    plies: u32,
}

impl Puzzle {
    /// Scan a position supplied by the caller.
    ///
    /// `Ok(None)` when no move mates. A finished game is a caller mistake and
    /// is rejected.
    pub fn from_position<P: Position + Clone>(pos: &P) -> Result<Option<Self>, PuzzleError> {
        if let Some(kind) = terminal_state(pos) {
            return Err(PuzzleError::TerminalPosition(kind));
        }
        Ok(Self::scan(pos, 0))
    }

    /// [`Puzzle::from_position`] for an Atomic FEN string.
    pub fn from_fen(fen: &str) -> Result<Option<Self>, PuzzleError> {
        let pos: Atomic = parse_fen(fen)?;
        Self::from_position(&pos)
    }

    /// `pos` must still be in play.
    pub(crate) fn scan<P: Position + Clone>(pos: &P, plies: u32) -> Option<Self> {
        let winning_moves = scanner::mating_moves(pos);
        if winning_moves.is_empty() {
            return None;
        }

        Some(Self {
            fen: to_fen(pos),
            side_to_move: side_name(pos.turn()),
            winning_moves,
            legal_moves: legal_move_codes(pos),
            plies,
        })
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn side_to_move(&self) -> &'static str {
        self.side_to_move
    }

    pub fn winning_moves(&self) -> &BTreeSet<String> {
        &self.winning_moves
    }

    /// Every legal move in the puzzle position, sorted
    pub fn legal_moves(&self) -> &[String] {
        &self.legal_moves
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn is_solution(&self, code: &str) -> bool {
        self.winning_moves.contains(code)
    }

    /// Grade a submitted move code. Malformed codes are an error, legal
    /// ones are graded against the winning set.
    pub fn check_move(&self, code: &str) -> Result<MoveVerdict, PuzzleError> {
        let code = code.trim().parse::<MoveCode>()?.to_string();

        if self.is_solution(&code) {
            Ok(MoveVerdict::Solved)
        } else if self.legal_moves.contains(&code) {
            Ok(MoveVerdict::Wrong)
        } else {
            Ok(MoveVerdict::Illegal)
        }
    }
}
