pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{InvalidInput, Outcome, PuzzleGame, PuzzleRenderer, Step};
pub use crate::core::rng::GameRng;
