//! FEN round-tripping and game-over classification on top of shakmaty.

use serde::Serialize;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Color, EnPassantMode, FromSetup, Position};

use crate::error::CoreError;
use crate::move_code::MoveCode;

/// Why a position is game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminal {
    Checkmate,
    Stalemate,
    /// A king was caught in an explosion.
    KingExploded,
    InsufficientMaterial,
}

/// Parse a FEN string into a position of variant `P`.
pub fn parse_fen<P: FromSetup + Position>(fen: &str) -> Result<P, CoreError> {
    let parsed: Fen = fen.trim().parse().map_err(|e| CoreError::InvalidFen {
        fen: fen.to_string(),
        reason: format!("{e}"),
    })?;

    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| CoreError::IllegalPosition {
            fen: fen.to_string(),
            reason: format!("{e}"),
        })
}

pub fn to_fen<P: Position>(pos: &P) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// `None` while the game is still running.
pub fn terminal_state<P: Position>(pos: &P) -> Option<Terminal> {
    // Checked first: with a king gone there are no legal moves either.
    if pos.is_variant_end() {
        Some(Terminal::KingExploded)
    } else if pos.is_checkmate() {
        Some(Terminal::Checkmate)
    } else if pos.is_stalemate() {
        Some(Terminal::Stalemate)
    } else if pos.is_insufficient_material() {
        Some(Terminal::InsufficientMaterial)
    } else {
        None
    }
}

/// All legal move codes, sorted.
pub fn legal_move_codes<P: Position>(pos: &P) -> Vec<String> {
    let mut codes: Vec<String> = pos.legal_moves().iter().map(MoveCode::of).collect();
    codes.sort();
    codes
}

/// Replay a line of move codes from `pos`. Stops at the first malformed or
/// illegal code.
pub fn apply_move_codes<P, S>(mut pos: P, codes: &[S]) -> Result<P, CoreError>
where
    P: Position + Clone,
    S: AsRef<str>,
{
    for code in codes {
        let mv = code.as_ref().parse::<MoveCode>()?.to_move(&pos)?;
        pos.play_unchecked(mv);
    }
    Ok(pos)
}

pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
