/// Maze escape: find the hidden exit by following closer/farther hints
pub mod game;
pub mod renderer;

pub use game::{Direction, MazeGame, MazeState, MazeStatus, Position};
pub use renderer::MazeRenderer;
