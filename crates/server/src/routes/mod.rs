pub mod health;
pub mod puzzles;
