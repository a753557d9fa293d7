//! Rules-engine adapter errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("Illegal position '{fen}': {reason}")]
    IllegalPosition { fen: String, reason: String },

    #[error("Malformed move code: '{0}'")]
    MalformedMoveCode(String),

    #[error("Move {code} is not legal in {fen}")]
    IllegalMove { code: String, fen: String },
}
