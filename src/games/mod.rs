pub mod macros;
pub mod maze;
pub mod picas;

use std::io::{BufRead, Write};

use anyhow::Result;
use ratatui::DefaultTerminal;

use crate::core::rng::GameRng;
use crate::register_games;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

/// Runs a game in the full-screen terminal UI
pub type TuiLauncher = fn(&mut DefaultTerminal, &mut GameRng) -> Result<()>;

/// Runs a game reading commands line by line; the flag enables colors
pub type PlainLauncher = fn(&mut dyn BufRead, &mut dyn Write, &mut GameRng, bool) -> Result<()>;

/// Registry entry containing metadata and launchers
pub struct GameRegistry {
    pub info: GameInfo,
    pub tui: TuiLauncher,
    pub plain: PlainLauncher,
}

// Register all games here
register_games! {
    maze => {
        types: (MazeGame, MazeRenderer),
        author: "termpuzzles"
    },
    picas => {
        types: (PicasGame, PicasRenderer),
        author: "termpuzzles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_both_games() {
        let ids: Vec<_> = get_all_games().iter().map(|g| g.info.id).collect();
        assert_eq!(ids, vec!["maze", "picas"]);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(get_game("picas").map(|g| g.info.name), Some("Picas y Fijas"));
        assert!(get_game("pong").is_none());
    }
}
