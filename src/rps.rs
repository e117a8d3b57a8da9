//! Rock-Paper-Scissors.
//!
//! A self-contained companion game: parse two moves and settle the duel.
//! The computer's move comes from an injected random number generator so
//! matches can be seeded deterministically.

use core::fmt;

use rand::Rng;

/// A throw in rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Rock smashes scissors.
    Rock,
    /// Paper covers rock.
    Paper,
    /// Scissors cut paper.
    Scissors,
}

impl Move {
    /// All three moves.
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Parses a move from free-form input.
    ///
    /// Returns `None` for anything other than "rock", "paper", or
    /// "scissors" (any case, surrounding whitespace ignored). Unlike the
    /// blackjack decision boundary, invalid input here is rejected rather
    /// than defaulted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if input.eq_ignore_ascii_case("rock") {
            Some(Self::Rock)
        } else if input.eq_ignore_ascii_case("paper") {
            Some(Self::Paper)
        } else if input.eq_ignore_ascii_case("scissors") {
            Some(Self::Scissors)
        } else {
            None
        }
    }

    /// Picks a move uniformly at random.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Returns whether this move beats `other`.
    #[must_use]
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        };
        f.write_str(name)
    }
}

/// Outcome of a duel, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player's move beats the computer's.
    Win,
    /// The computer's move beats the player's.
    Lose,
    /// Both threw the same move.
    Tie,
}

/// Settles a duel between the player's move and the computer's.
///
/// ```
/// use parlor::rps::{self, Move, Outcome};
///
/// assert_eq!(rps::duel(Move::Rock, Move::Scissors), Outcome::Win);
/// assert_eq!(rps::duel(Move::Rock, Move::Rock), Outcome::Tie);
/// ```
#[must_use]
pub const fn duel(player: Move, computer: Move) -> Outcome {
    if player.beats(computer) {
        Outcome::Win
    } else if computer.beats(player) {
        Outcome::Lose
    } else {
        Outcome::Tie
    }
}
