//! Random playouts from the starting position.

use std::fmt;

use atomic_core::{terminal_state, MoveCode, Terminal};
use rand::seq::IndexedRandom;
use rand::Rng;
use shakmaty::Position;
use thiserror::Error;

use crate::error::PuzzleError;

/// Default playout length, in plies.
pub const DEFAULT_MIN_PLY: u32 = 10;
pub const DEFAULT_MAX_PLY: u32 = 50;

/// Inclusive playout length range. `min <= max` and `max >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyRange {
    min: u32,
    max: u32,
}

impl PlyRange {
    pub fn new(min: u32, max: u32) -> Result<Self, PuzzleError> {
        if min > max || max == 0 {
            return Err(PuzzleError::InvalidPlyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Playouts of exactly `plies` half-moves.
    pub fn fixed(plies: u32) -> Result<Self, PuzzleError> {
        Self::new(plies, plies)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for PlyRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PLY,
            max: DEFAULT_MAX_PLY,
        }
    }
}

/// A playout that cannot seed a puzzle. Both cases are expected under random
/// play; the caller just tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("playout ended in a finished game ({kind:?}) after {plies} plies")]
    Terminal { kind: Terminal, plies: u32 },

    #[error("rules engine rejected playout move {code}: {reason}")]
    Engine { code: String, reason: String },
}

/// Position reached by a playout that is still in progress.
#[derive(Debug, Clone)]
pub struct Sample<P> {
    pub position: P,
    pub plies: u32,
}

/// Play uniformly random legal moves from `P::default()`.
///
/// The playout length is drawn from `range`; it stops early when the game
/// ends. A finished game is reported as [`SampleError::Terminal`] since it
/// has no move left to find.
pub fn sample_position<P, R>(range: PlyRange, rng: &mut R) -> Result<Sample<P>, SampleError>
where
    P: Position + Clone + Default + fmt::Debug,
    R: Rng,
{
    let target = range.draw(rng);
    let mut pos = P::default();
    let mut plies = 0;

    for _ in 0..target {
        if pos.is_game_over() {
            break;
        }
        let moves = pos.legal_moves();
        let Some(mv) = moves.as_slice().choose(rng) else {
            break;
        };
        let code = MoveCode::of(mv);
        pos = pos.play(mv.clone()).map_err(|e| SampleError::Engine {
            code,
            reason: e.to_string(),
        })?;
        plies += 1;
    }

    if let Some(kind) = terminal_state(&pos) {
        return Err(SampleError::Terminal { kind, plies });
    }

    Ok(Sample {
        position: pos,
        plies,
    })
}
