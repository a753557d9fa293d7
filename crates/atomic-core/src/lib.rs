//! Thin adapter over shakmaty's Atomic variant: move codes, FEN handling and
//! game-over classification shared by the puzzler, the server and the CLI.

pub use shakmaty;

pub mod error;
pub mod move_code;
pub mod position;

pub use error::CoreError;
pub use move_code::MoveCode;
pub use position::{
    apply_move_codes, legal_move_codes, parse_fen, side_name, terminal_state, to_fen, Terminal,
};
