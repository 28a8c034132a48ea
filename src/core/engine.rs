use std::marker::PhantomData;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::game::{PuzzleGame, PuzzleRenderer, Step};
use crate::core::rng::GameRng;

/// Whether the front end keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One player's game: the current state plus the last feedback line.
///
/// Both front ends drive games through this so reset, quit and
/// game-over handling behave the same everywhere.
pub struct Session<'r, G: PuzzleGame> {
    state: G::State,
    feedback: String,
    rng: &'r mut GameRng,
}

impl<'r, G: PuzzleGame> Session<'r, G> {
    pub fn new(rng: &'r mut GameRng) -> Self {
        let state = G::new_game(rng);
        info!(game = G::ID, seed = rng.seed(), "new game");
        let feedback = G::status(&state).to_string();
        Self { state, feedback, rng }
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_over(&self) -> bool {
        G::outcome(&self.state).is_some()
    }

    pub fn reset(&mut self) {
        self.state = G::reset(self.rng);
        self.feedback = G::status(&self.state).to_string();
        info!(game = G::ID, "game reset");
    }

    /// Handle a submitted line: built-in commands first, then the game's parser.
    pub fn submit_line(&mut self, line: &str) -> Flow {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Flow::Quit,
            "reset" | "new" => {
                self.reset();
                return Flow::Continue;
            }
            _ => {}
        }
        let step = G::apply_input(&self.state, line);
        self.commit(step);
        Flow::Continue
    }

    pub fn apply(&mut self, action: G::Action) {
        debug!(game = G::ID, ?action, "action");
        let step = G::apply_action(&self.state, action);
        self.commit(step);
    }

    /// Finished games still answer moves, followed by a hint to start over.
    fn commit(&mut self, step: Step<G::State>) {
        let was_over = self.is_over();
        let Step { state, message, outcome } = step;
        self.state = state;
        self.feedback = message;
        if was_over {
            self.feedback.push_str(" Type 'reset' to play again.");
        } else if let Some(outcome) = outcome {
            info!(game = G::ID, ?outcome, "game finished");
        }
    }
}

/// Full-screen ratatui front end
pub struct Engine<'r, G: PuzzleGame, R: PuzzleRenderer<G::State>> {
    session: Session<'r, G>,
    input: String,
    _renderer: PhantomData<R>,
}

impl<'r, G: PuzzleGame, R: PuzzleRenderer<G::State>> Engine<'r, G, R> {
    pub fn new(rng: &'r mut GameRng) -> Self {
        Self {
            session: Session::new(rng),
            input: String::new(),
            _renderer: PhantomData,
        }
    }

    pub fn session(&self) -> &Session<'r, G> {
        &self.session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal
                .draw(|f| R::render(f, self.session.state(), self.session.feedback(), &self.input))
                .context("failed to draw frame")?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key) == Flow::Quit {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Keyboard handling, separate from the loop so it can be driven in tests
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Esc => Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.session.submit_line(&line)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Flow::Continue
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                Flow::Continue
            }
            code => {
                if self.input.is_empty() {
                    if let Some(action) = G::key_action(code) {
                        self.session.apply(action);
                    }
                }
                Flow::Continue
            }
        }
    }
}
