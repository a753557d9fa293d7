//! Mate-in-one detection.

use std::collections::BTreeSet;

use atomic_core::MoveCode;
use shakmaty::{Move, Position};

/// Does `mv` checkmate the opponent? `pos` itself is left untouched.
pub fn delivers_mate<P: Position + Clone>(pos: &P, mv: &Move) -> bool {
    let mut after = pos.clone();
    after.play_unchecked(mv.clone());
    after.is_checkmate()
}

/// Codes of every legal move that mates immediately.
///
/// Blowing up the enemy king ends the game too, but it is not a checkmate
/// and is not collected. A finished position has no legal moves and yields
/// an empty set.
pub fn mating_moves<P: Position + Clone>(pos: &P) -> BTreeSet<String> {
    pos.legal_moves()
        .iter()
        .filter(|mv| delivers_mate(pos, mv))
        .map(MoveCode::of)
        .collect()
}
