use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::game::{InvalidInput, Outcome, PuzzleGame, Step};
use crate::core::rng::GameRng;

pub const CODE_LEN: usize = 4;
pub const MAX_GUESSES: usize = 12;

const TIERS: [(usize, &str); 4] = [
    (2, "Excellent, you are a master beyond everyone else's reach"),
    (4, "Very good, you could be a great competitor"),
    (8, "Good, you are making progress, go find your limits"),
    (10, "Fair, there is still a long road ahead"),
];
pub const WORST_TIER: &str = "Bad, this game is not for you";

/// Final message for a game won after `attempts` guesses
pub fn final_message(attempts: usize) -> &'static str {
    TIERS
        .iter()
        .find(|(limit, _)| attempts <= *limit)
        .map(|(_, msg)| *msg)
        .unwrap_or(WORST_TIER)
}

/// Hidden code: four distinct decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretCode([u8; CODE_LEN]);

impl SecretCode {
    /// Draw digits one at a time, skipping any already taken.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = Vec::with_capacity(CODE_LEN);
        while digits.len() < CODE_LEN {
            let digit = rng.random_range(0..10u8);
            if !digits.contains(&digit) {
                digits.push(digit);
            }
        }
        let mut code = [0; CODE_LEN];
        code.copy_from_slice(&digits);
        Self(code)
    }

    pub fn digits(&self) -> [u8; CODE_LEN] {
        self.0
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl FromStr for SecretCode {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = parse_digits(s)?;
        let unique = digits.iter().enumerate().all(|(i, d)| !digits[..i].contains(d));
        if !unique {
            return Err(InvalidInput::BadGuess);
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|d| write!(f, "{}", d))
    }
}

/// Exactly four ASCII decimal digits, repeats allowed
pub fn parse_digits(text: &str) -> Result<[u8; CODE_LEN], InvalidInput> {
    let bytes = text.as_bytes();
    if bytes.len() != CODE_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(InvalidInput::BadGuess);
    }
    let mut digits = [0; CODE_LEN];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Ok(digits)
}

/// Count `(picas, fijas)` for a guess.
///
/// Each index is judged on its own: a fija if the digit matches in place,
/// otherwise a pica if the digit appears anywhere in the secret. A guess with a
/// repeated digit can therefore score more picas than the classic multiset rule.
pub fn score_guess(secret: &SecretCode, guess: &[u8; CODE_LEN]) -> (u8, u8) {
    secret
        .digits()
        .iter()
        .zip(guess)
        .fold((0, 0), |(picas, fijas), (s, g)| {
            if s == g {
                (picas, fijas + 1)
            } else if secret.contains(*g) {
                (picas + 1, fijas)
            } else {
                (picas, fijas)
            }
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: String,
    pub picas: u8,
    pub fijas: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PicasStatus {
    Idle,
    Active,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PicasState {
    secret: SecretCode,
    history: Vec<GuessRecord>,
    pub status: PicasStatus,
    pub message: String,
}

impl PicasState {
    pub fn with_secret(secret: SecretCode) -> Self {
        Self {
            secret,
            history: Vec::new(),
            status: PicasStatus::Idle,
            message: String::new(),
        }
    }

    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            PicasStatus::Won => Some(Outcome::Won),
            PicasStatus::Lost => Some(Outcome::Lost),
            PicasStatus::Idle | PicasStatus::Active => None,
        }
    }
}

pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> PicasState {
    PicasState::with_secret(SecretCode::generate(rng))
}

/// Score a guess and append it to the history.
///
/// Malformed guesses and guesses after the game has ended leave the state as is.
pub fn submit_guess(state: &PicasState, guess: &str) -> Step<PicasState> {
    if let Some(outcome) = state.outcome() {
        return Step::new(state.clone(), state.message.clone()).with_outcome(Some(outcome));
    }
    let digits = match parse_digits(guess) {
        Ok(digits) => digits,
        Err(err) => return Step::new(state.clone(), err.to_string()),
    };

    let (picas, fijas) = score_guess(&state.secret, &digits);
    let mut next = state.clone();
    next.history.push(GuessRecord {
        guess: guess.to_string(),
        picas,
        fijas,
    });
    let attempts = next.history.len();

    if usize::from(fijas) == CODE_LEN {
        next.status = PicasStatus::Won;
        next.message = final_message(attempts).to_string();
    } else if attempts >= MAX_GUESSES {
        next.status = PicasStatus::Lost;
        next.message = WORST_TIER.to_string();
    } else {
        next.status = PicasStatus::Active;
        next.message = format!("Attempt {}: {} picas, {} fijas.", attempts, picas, fijas);
    }

    let outcome = next.outcome();
    let message = next.message.clone();
    Step::new(next, message).with_outcome(outcome)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PicasAction {
    Guess(String),
}

pub struct PicasGame;

impl PuzzleGame for PicasGame {
    type State = PicasState;
    type Action = PicasAction;

    const ID: &'static str = "picas";
    const NAME: &'static str = "Picas y Fijas";
    const DESCRIPTION: &'static str = "Crack the four-digit code in 12 guesses";

    fn new_game(rng: &mut GameRng) -> Self::State {
        new_game(rng)
    }

    fn apply_action(state: &Self::State, action: Self::Action) -> Step<Self::State> {
        match action {
            PicasAction::Guess(guess) => submit_guess(state, &guess),
        }
    }

    fn parse_command(line: &str) -> Result<Self::Action, InvalidInput> {
        let line = line.trim();
        if line.is_empty() {
            return Err(InvalidInput::Empty);
        }
        parse_digits(line)?;
        Ok(PicasAction::Guess(line.to_string()))
    }

    fn status(state: &Self::State) -> &str {
        &state.message
    }

    fn outcome(state: &Self::State) -> Option<Outcome> {
        state.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> SecretCode {
        s.parse().unwrap()
    }

    #[test]
    fn scores_shifted_digits_as_picas() {
        assert_eq!(score_guess(&code("1234"), &parse_digits("1243").unwrap()), (2, 2));
        assert_eq!(score_guess(&code("1234"), &parse_digits("4321").unwrap()), (4, 0));
        assert_eq!(score_guess(&code("1234"), &parse_digits("5678").unwrap()), (0, 0));
        assert_eq!(score_guess(&code("1234"), &parse_digits("1234").unwrap()), (0, 4));
    }

    #[test]
    fn repeated_guess_digits_count_per_index() {
        // '1' at indexes 1..3 each count as a pica against the single '1' in the secret
        assert_eq!(score_guess(&code("1234"), &parse_digits("1111").unwrap()), (3, 1));
        assert_eq!(score_guess(&code("1234"), &parse_digits("2111").unwrap()), (4, 0));
    }

    #[test]
    fn rejects_malformed_digits() {
        assert_eq!(parse_digits("123"), Err(InvalidInput::BadGuess));
        assert_eq!(parse_digits("12345"), Err(InvalidInput::BadGuess));
        assert_eq!(parse_digits("12a4"), Err(InvalidInput::BadGuess));
        assert_eq!(parse_digits(" 123"), Err(InvalidInput::BadGuess));
        assert_eq!(parse_digits("١٢٣٤"), Err(InvalidInput::BadGuess));
        assert_eq!(parse_digits("0042"), Ok([0, 0, 4, 2]));
    }

    #[test]
    fn secret_code_requires_unique_digits() {
        assert!("1123".parse::<SecretCode>().is_err());
        assert_eq!(code("0987").to_string(), "0987");
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(final_message(1), TIERS[0].1);
        assert_eq!(final_message(2), TIERS[0].1);
        assert_eq!(final_message(3), TIERS[1].1);
        assert_eq!(final_message(4), TIERS[1].1);
        assert_eq!(final_message(8), TIERS[2].1);
        assert_eq!(final_message(10), TIERS[3].1);
        assert_eq!(final_message(11), WORST_TIER);
        assert_eq!(final_message(12), WORST_TIER);
    }

    #[test]
    fn generated_code_has_distinct_digits() {
        let mut rng = GameRng::new(11);
        for _ in 0..50 {
            let digits = SecretCode::generate(&mut rng).digits();
            for i in 0..CODE_LEN {
                assert!(digits[i] < 10);
                assert!(!digits[i + 1..].contains(&digits[i]));
            }
        }
    }
}
