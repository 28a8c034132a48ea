/// Picas y Fijas: crack a four-digit code with unique digits
pub mod game;
pub mod renderer;

pub use game::{GuessRecord, PicasGame, PicasState, PicasStatus, SecretCode};
pub use renderer::PicasRenderer;
