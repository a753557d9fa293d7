//! Atomic chess mate-in-one puzzle generator.
//!
//! Random playouts from the starting position are scanned for a move that
//! checkmates; the first position that has one becomes a [`Puzzle`].

pub use atomic_core;

pub mod acquire;
pub mod error;
pub mod puzzle;
pub mod sampler;
pub mod scanner;

pub use acquire::{
    acquire_atomic_puzzle, acquire_puzzle, AcquireParams, AcquireStats, Acquisition,
};
pub use error::PuzzleError;
pub use puzzle::{MoveVerdict, Puzzle};
pub use sampler::{sample_position, PlyRange, Sample, SampleError};
