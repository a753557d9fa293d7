//! Move codes: `<from><to>[promotion]`, e.g. `e2e4`, `a7a8q`, `e1g1`.
//! Castling is written king-from to king-to, never king-takes-rook.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use shakmaty::{CastlingMode, File, Move, Position, Rank, Role, Square};

use crate::error::CoreError;
use crate::position::to_fen;

static MOVE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-h][1-8][a-h][1-8][qrbnk]?$").unwrap());

/// A syntactically valid move code. Legality is only known once it is
/// resolved against a position with [`MoveCode::to_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCode {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveCode {
    /// Canonical code of a legal move.
    pub fn of(m: &Move) -> String {
        m.to_uci(CastlingMode::Standard).to_string()
    }

    /// Find the legal move in `pos` this code stands for.
    pub fn to_move<P: Position + Clone>(&self, pos: &P) -> Result<Move, CoreError> {
        let code = self.to_string();
        pos.legal_moves()
            .into_iter()
            .find(|m| Self::of(m) == code)
            .ok_or_else(|| CoreError::IllegalMove {
                code,
                fen: to_fen(pos),
            })
    }
}

fn square_at(file: u8, rank: u8) -> Option<Square> {
    let file = File::from_char(file as char)?;
    let rank = Rank::from_char(rank as char)?;
    Some(Square::from_coords(file, rank))
}

impl FromStr for MoveCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::MalformedMoveCode(s.to_string());
        if !MOVE_CODE_RE.is_match(s) {
            return Err(malformed());
        }

        let bytes = s.as_bytes();
        let from = square_at(bytes[0], bytes[1]).ok_or_else(malformed)?;
        let to = square_at(bytes[2], bytes[3]).ok_or_else(malformed)?;
        let promotion = match bytes.get(4) {
            Some(&c) => Some(Role::from_char(c as char).ok_or_else(malformed)?),
            None => None,
        };

        Ok(MoveCode {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}
