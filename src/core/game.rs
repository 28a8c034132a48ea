/// Core game interface shared by every puzzle
use std::fmt;

use crossterm::event::KeyCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::terminal::TerminalContext;

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of applying one action: the next state plus the feedback to show.
///
/// The caller replaces its current state with `state`; nothing else is mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub state: S,
    pub message: String,
    pub outcome: Option<Outcome>,
}

impl<S> Step<S> {
    pub fn new(state: S, message: impl Into<String>) -> Self {
        Self { state, message: message.into(), outcome: None }
    }

    pub fn with_outcome(mut self, outcome: Option<Outcome>) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The one error kind a game can report. It never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    Empty,
    BadDirection(String),
    BadGuess,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "Type a command first."),
            InvalidInput::BadDirection(token) => {
                write!(f, "Unknown direction '{}'. Use up, down, left or right.", token)
            }
            InvalidInput::BadGuess => write!(f, "Please enter a four-digit number."),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Main game trait that all puzzles implement.
///
/// Every transition is a pure function from the current state and an action to a
/// [`Step`]. Front ends own the state value and swap it on each step.
pub trait PuzzleGame: 'static {
    /// State snapshot, serializable so front ends can keep or inspect it
    type State: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug;

    /// Discrete user action understood by the engine
    type Action: Clone + fmt::Debug;

    const ID: &'static str;
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// Initialize a fresh game
    fn new_game(rng: &mut GameRng) -> Self::State;

    /// Start over; identical to a new game
    fn reset(rng: &mut GameRng) -> Self::State {
        Self::new_game(rng)
    }

    fn apply_action(state: &Self::State, action: Self::Action) -> Step<Self::State>;

    /// Game controls its own text parsing
    fn parse_command(line: &str) -> Result<Self::Action, InvalidInput>;

    /// Optional direct key binding, checked before text input
    fn key_action(_key: KeyCode) -> Option<Self::Action> {
        None
    }

    /// Current status message held by the state
    fn status(state: &Self::State) -> &str;

    /// Terminal outcome already reached, if any
    fn outcome(state: &Self::State) -> Option<Outcome>;

    /// Parse a line and apply it. Invalid input leaves the state untouched.
    fn apply_input(state: &Self::State, line: &str) -> Step<Self::State> {
        match Self::parse_command(line) {
            Ok(action) => Self::apply_action(state, action),
            Err(err) => {
                tracing::debug!(game = Self::ID, input = line, error = %err, "rejected input");
                Step::new(state.clone(), err.to_string())
            }
        }
    }
}

/// Renderer trait for drawing a game state.
pub trait PuzzleRenderer<S> {
    /// Render the current state into the Ratatui Frame
    fn render(frame: &mut ratatui::Frame, state: &S, feedback: &str, input: &str);

    /// Line-oriented rendering for plain console mode
    fn render_plain<W: std::io::Write>(
        ctx: &mut TerminalContext<W>,
        state: &S,
    ) -> std::io::Result<()>;
}
