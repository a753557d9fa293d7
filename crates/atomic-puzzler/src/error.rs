//! Puzzler error types.
//!
//! Only caller mistakes end up here. A playout that dies early is a
//! [`crate::sampler::SampleError`] and never leaves the acquisition loop, and
//! running out of attempts is an ordinary [`crate::acquire::Acquisition`].

use atomic_core::{CoreError, Terminal};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid ply range {min}..={max}")]
    InvalidPlyRange { min: u32, max: u32 },

    #[error("Position is already over ({0:?}), there is nothing to solve")]
    TerminalPosition(Terminal),

    #[error(transparent)]
    Core(#[from] CoreError),
}
