use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::core::logging::{self, LogTarget};
use crate::core::menu::{GameMenu, MenuResult};
use crate::core::rng::GameRng;
use crate::games::{get_all_games, get_game, GameRegistry};

#[derive(Parser, Debug)]
#[command(name = "termpuzzles")]
#[command(about = "Terminal puzzle games: maze escape and picas y fijas")]
#[command(version)]
pub struct Cli {
    /// Seed for reproducible games
    #[arg(long, global = true, env = "TERMPUZZLES_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play a game
    Play {
        /// Game id (see `list`)
        game: String,

        /// Read commands line by line instead of opening the full-screen UI
        #[arg(long)]
        plain: bool,
    },
    /// List available games
    List,
}

impl Cli {
    fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Some(Commands::Play { plain: true, .. })) => LogTarget::Stderr,
            (None, _) => LogTarget::Off,
        }
    }

    fn rng(&self) -> GameRng {
        self.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy)
    }
}

pub fn run_cli(cli: Cli) -> Result<()> {
    logging::init(&cli.log_target(), cli.log_level)?;
    let mut rng = cli.rng();

    match cli.command {
        Some(Commands::List) => {
            println!("Available games:");
            println!();
            for game in get_all_games() {
                println!(
                    "  {:<8} {} - {} (by {})",
                    game.info.id, game.info.name, game.info.description, game.info.author
                );
            }
        }

        Some(Commands::Play { game, plain }) => {
            let Some(entry) = get_game(&game) else {
                let ids: Vec<_> = get_all_games().iter().map(|g| g.info.id).collect();
                bail!("Game '{}' not found. Available: {}", game, ids.join(", "));
            };
            tracing::info!(game = entry.info.id, seed = rng.seed(), plain, "launching");
            if plain {
                let stdout = io::stdout();
                let color = stdout.is_terminal();
                (entry.plain)(&mut io::stdin().lock(), &mut stdout.lock(), &mut rng, color)?;
            } else {
                run_tui(&entry, &mut rng)?;
            }
        }

        None => show_main_menu(&mut rng)?,
    }

    Ok(())
}

fn run_tui(entry: &GameRegistry, rng: &mut GameRng) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = (entry.tui)(&mut terminal, rng);
    ratatui::restore();
    result
}

fn show_main_menu(rng: &mut GameRng) -> Result<()> {
    let games: Vec<_> = get_all_games().into_iter().map(|g| g.info).collect();
    let mut terminal = ratatui::init();
    let mut menu = GameMenu::new();

    let result = loop {
        match menu.run(&mut terminal, &games) {
            Ok(MenuResult::Play(id)) => {
                let launched = get_game(id).map(|entry| (entry.tui)(&mut terminal, rng));
                if let Some(Err(e)) = launched {
                    break Err(e);
                }
            }
            Ok(MenuResult::Quit) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    ratatui::restore();
    result
}
