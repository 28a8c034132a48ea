/// Macro to register games in the registry with automatic launcher generation
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     maze => {
///         types: (MazeGame, MazeRenderer),
///         author: "termpuzzles"
///     },
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    (
        $(
            $module:ident => {
                types: ($game:ident, $renderer:ident),
                author: $author:expr
            }
        ),* $(,)?
    ) => {
        /// Get all available games with their metadata and launchers
        pub fn get_all_games() -> Vec<GameRegistry> {
            use $crate::core::game::PuzzleGame;

            vec![
                $(
                    GameRegistry {
                        info: GameInfo {
                            id: <$crate::games::$module::$game as PuzzleGame>::ID,
                            name: <$crate::games::$module::$game as PuzzleGame>::NAME,
                            description: <$crate::games::$module::$game as PuzzleGame>::DESCRIPTION,
                            author: $author,
                        },
                        tui: |terminal, rng| {
                            use $crate::games::$module::{$game, $renderer};
                            $crate::core::engine::Engine::<$game, $renderer>::new(rng).run(terminal)
                        },
                        plain: |input, out, rng, color| {
                            use $crate::games::$module::{$game, $renderer};
                            $crate::core::console::run::<$game, $renderer>(input, out, rng, color)
                        },
                    }
                ),*
            ]
        }

        /// Get a game by ID
        pub fn get_game(id: &str) -> Option<GameRegistry> {
            get_all_games().into_iter().find(|g| g.info.id == id)
        }
    };
}
