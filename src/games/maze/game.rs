use std::str::FromStr;

use crossterm::event::KeyCode;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::game::{InvalidInput, Outcome, PuzzleGame, Step};
use crate::core::rng::GameRng;

pub const GRID_SIZE: u8 = 5;
pub const MAX_ATTEMPTS: u8 = 8;

const INITIAL_PROMPT: &str = "Find the exit in fewer than 8 moves.";
const VICTORY: &str = "Congratulations, you found the exit!";
const TRAPPED: &str = "You ran out of moves. You are trapped.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0..GRID_SIZE),
            y: rng.random_range(0..GRID_SIZE),
        }
    }

    /// Manhattan distance
    pub fn distance(self, other: Position) -> u8 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// One step in `direction`, staying put at a wall
    pub fn step(self, direction: Direction) -> Self {
        let Position { x, y } = self;
        match direction {
            Direction::Up => Self { x, y: y.saturating_sub(1) },
            Direction::Down => Self { x, y: (y + 1).min(GRID_SIZE - 1) },
            Direction::Left => Self { x: x.saturating_sub(1), y },
            Direction::Right => Self { x: (x + 1).min(GRID_SIZE - 1), y },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl FromStr for Direction {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Err(InvalidInput::Empty),
            "up" | "u" | "arriba" => Ok(Direction::Up),
            "down" | "d" | "abajo" => Ok(Direction::Down),
            "left" | "l" | "izquierda" => Ok(Direction::Left),
            "right" | "r" | "derecha" => Ok(Direction::Right),
            _ => Err(InvalidInput::BadDirection(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MazeStatus {
    Idle,
    Active,
    Won,
    Trapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeState {
    pub player: Position,
    pub exit: Position,
    pub attempts: u8,
    pub status: MazeStatus,
    pub message: String,
}

impl MazeState {
    /// Fresh game with a known exit
    pub fn with_exit(exit: Position) -> Self {
        Self {
            player: Position::ORIGIN,
            exit,
            attempts: 0,
            status: MazeStatus::Idle,
            message: INITIAL_PROMPT.to_string(),
        }
    }

    pub fn remaining(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            MazeStatus::Won => Some(Outcome::Won),
            MazeStatus::Trapped => Some(Outcome::Lost),
            MazeStatus::Idle | MazeStatus::Active => None,
        }
    }
}

pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> MazeState {
    MazeState::with_exit(Position::random(rng))
}

/// Apply one move. The counter is checked before anything changes; once it
/// reaches [`MAX_ATTEMPTS`] the state is frozen until reset.
pub fn move_player(state: &MazeState, direction: Direction) -> Step<MazeState> {
    if state.status == MazeStatus::Won {
        return Step::new(state.clone(), VICTORY).with_outcome(Some(Outcome::Won));
    }
    if state.attempts >= MAX_ATTEMPTS {
        let mut next = state.clone();
        next.status = MazeStatus::Trapped;
        next.message = TRAPPED.to_string();
        return Step::new(next, TRAPPED).with_outcome(Some(Outcome::Lost));
    }

    let candidate = state.player.step(direction);
    let mut next = state.clone();
    next.attempts += 1;
    next.player = candidate;

    if candidate == state.exit {
        next.status = MazeStatus::Won;
        next.message = VICTORY.to_string();
        return Step::new(next, VICTORY).with_outcome(Some(Outcome::Won));
    }

    let hint = if candidate.distance(state.exit) < state.player.distance(state.exit) {
        "Closer"
    } else {
        "Farther"
    };
    next.message = format!("{}. Moves left: {}", hint, next.remaining());
    next.status = if next.attempts >= MAX_ATTEMPTS {
        MazeStatus::Trapped
    } else {
        MazeStatus::Active
    };

    let outcome = next.outcome();
    let message = next.message.clone();
    Step::new(next, message).with_outcome(outcome)
}

pub struct MazeGame;

impl PuzzleGame for MazeGame {
    type State = MazeState;
    type Action = Direction;

    const ID: &'static str = "maze";
    const NAME: &'static str = "Maze Escape";
    const DESCRIPTION: &'static str = "Find the hidden exit of a 5x5 maze in 8 moves";

    fn new_game(rng: &mut GameRng) -> Self::State {
        new_game(rng)
    }

    fn apply_action(state: &Self::State, action: Self::Action) -> Step<Self::State> {
        move_player(state, action)
    }

    fn parse_command(line: &str) -> Result<Self::Action, InvalidInput> {
        line.parse()
    }

    fn key_action(key: KeyCode) -> Option<Self::Action> {
        match key {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }

    fn status(state: &Self::State) -> &str {
        &state.message
    }

    fn outcome(state: &Self::State) -> Option<Outcome> {
        state.outcome()
    }
}
