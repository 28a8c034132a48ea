//! Maze escape integration tests.
//!
//! These drive the engine through the public `PuzzleGame` surface with fixed
//! exits so every move's feedback is known in advance.

use termpuzzles::games::maze::game::{move_player, MAX_ATTEMPTS};
use termpuzzles::games::maze::{Direction, MazeGame, MazeState, MazeStatus, Position};
use termpuzzles::{GameRng, InvalidInput, Outcome, PuzzleGame};

fn play(state: &MazeState, moves: &[Direction]) -> MazeState {
    moves
        .iter()
        .fold(state.clone(), |s, d| move_player(&s, *d).state)
}

// =============================================================================
// Feedback
// =============================================================================

/// Moving right from the origin toward (4,4) shortens the distance from 8 to 7.
#[test]
fn test_move_toward_exit_is_closer() {
    let state = MazeState::with_exit(Position::new(4, 4));
    let step = MazeGame::apply_input(&state, "derecha");

    assert_eq!(step.state.player, Position::new(1, 0));
    assert_eq!(step.state.attempts, 1);
    assert_eq!(step.message, "Closer. Moves left: 7");
    assert_eq!(step.outcome, None);
    assert_eq!(step.state.status, MazeStatus::Active);
}

/// Moving away from the exit reports farther.
#[test]
fn test_move_away_is_farther() {
    let state = MazeState::with_exit(Position::new(0, 4));
    let state = play(&state, &[Direction::Right]);

    assert_eq!(state.message, "Farther. Moves left: 7");
}

/// Bumping into a wall keeps the distance equal, which counts as farther,
/// and still spends an attempt.
#[test]
fn test_wall_bump_costs_an_attempt() {
    let state = MazeState::with_exit(Position::new(2, 2));
    let step = move_player(&state, Direction::Up);

    assert_eq!(step.state.player, Position::ORIGIN);
    assert_eq!(step.state.attempts, 1);
    assert!(step.message.starts_with("Farther"));
}

/// Remaining moves count down using the counter after the increment.
#[test]
fn test_remaining_moves_count_down() {
    let mut state = MazeState::with_exit(Position::new(4, 4));
    for expected_left in (1..MAX_ATTEMPTS).rev() {
        state = move_player(&state, Direction::Up).state;
        assert!(state.message.ends_with(&format!("Moves left: {}", expected_left)));
    }
}

// =============================================================================
// Terminal states
// =============================================================================

/// Reaching the exit wins and moves the player onto it.
#[test]
fn test_reaching_exit_wins() {
    let state = MazeState::with_exit(Position::new(1, 1));
    let state = play(&state, &[Direction::Right]);
    let step = MazeGame::apply_action(&state, Direction::Down);

    assert_eq!(step.outcome, Some(Outcome::Won));
    assert_eq!(step.state.status, MazeStatus::Won);
    assert_eq!(step.state.player, Position::new(1, 1));
    assert_eq!(step.state.attempts, 2);
    assert_eq!(step.message, "Congratulations, you found the exit!");
}

/// A won game ignores further moves.
#[test]
fn test_won_game_is_frozen() {
    let state = MazeState::with_exit(Position::new(1, 0));
    let won = move_player(&state, Direction::Right).state;
    let step = move_player(&won, Direction::Down);

    assert_eq!(step.state, won);
    assert_eq!(step.outcome, Some(Outcome::Won));
}

/// The eighth non-winning move traps the player; later moves change nothing.
#[test]
fn test_trapped_after_max_attempts() {
    let state = MazeState::with_exit(Position::new(4, 4));
    let state = play(&state, &[Direction::Up; 7]);
    assert_eq!(MazeGame::outcome(&state), None);

    let last = move_player(&state, Direction::Left);
    assert!(last.is_terminal());
    assert_eq!(last.outcome, Some(Outcome::Lost));
    assert_eq!(last.state.status, MazeStatus::Trapped);
    assert_eq!(last.state.attempts, MAX_ATTEMPTS);
    assert_eq!(last.message, "Farther. Moves left: 0");

    let after = move_player(&last.state, Direction::Right);
    assert_eq!(after.outcome, Some(Outcome::Lost));
    assert_eq!(after.state.player, last.state.player);
    assert_eq!(after.state.attempts, MAX_ATTEMPTS);
    assert_eq!(after.message, "You ran out of moves. You are trapped.");
}

// =============================================================================
// Input and lifecycle
// =============================================================================

/// Unknown direction tokens leave the state untouched and explain why.
#[test]
fn test_unknown_direction_is_rejected() {
    let state = MazeState::with_exit(Position::new(3, 3));
    let step = MazeGame::apply_input(&state, "sideways");

    assert_eq!(step.state, state);
    assert_eq!(step.outcome, None);
    assert_eq!(step.message, InvalidInput::BadDirection("sideways".into()).to_string());
}

/// The same seed always hides the exit in the same place.
#[test]
fn test_seeded_games_are_reproducible() {
    let a = MazeGame::new_game(&mut GameRng::new(99));
    let b = MazeGame::new_game(&mut GameRng::new(99));

    assert_eq!(a, b);
}

/// Reset returns to the initial prompt at the origin with no attempts used.
#[test]
fn test_reset_reinitializes() {
    let mut rng = GameRng::new(4);
    let start = MazeState::with_exit(Position::new(4, 4));
    let played = play(&start, &[Direction::Down, Direction::Right]);
    assert_eq!(played.attempts, 2);
    assert_eq!(played.status, MazeStatus::Active);

    let fresh = MazeGame::reset(&mut rng);
    assert_eq!(fresh.player, Position::ORIGIN);
    assert_eq!(fresh.attempts, 0);
    assert_eq!(fresh.status, MazeStatus::Idle);
    assert_eq!(MazeGame::status(&fresh), "Find the exit in fewer than 8 moves.");
}

/// State snapshots survive a JSON round trip.
#[test]
fn test_state_snapshot_serde() {
    let state = play(&MazeState::with_exit(Position::new(2, 3)), &[Direction::Down]);

    let json = serde_json::to_string(&state).unwrap();
    let restored: MazeState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, restored);
}
