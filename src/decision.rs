//! The player decision boundary.

extern crate alloc;

use alloc::vec::Vec;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// End the turn.
    Stand,
}

impl Decision {
    /// Classifies free-form input into a decision.
    ///
    /// Recognizes `"h"` and `"hit"` (any case, surrounding whitespace
    /// ignored). Anything else stands; malformed input is never an error.
    ///
    /// ```
    /// use parlor::Decision;
    ///
    /// assert_eq!(Decision::from_input("h"), Decision::Hit);
    /// assert_eq!(Decision::from_input("HIT"), Decision::Hit);
    /// assert_eq!(Decision::from_input("what"), Decision::Stand);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hit") {
            Self::Hit
        } else {
            Self::Stand
        }
    }
}

/// Supplies a decision on each player-turn iteration.
///
/// The round asks for one decision per iteration of the player loop; a
/// console adapter blocks on input, a scripted source replays a sequence.
pub trait DecisionSource {
    /// Returns the next decision.
    fn decide(&mut self) -> Decision;
}

/// A predetermined sequence of decisions.
///
/// Stands once the sequence is exhausted, so a short script always ends the
/// player turn.
#[derive(Debug, Clone)]
pub struct ScriptedDecisions {
    /// The scripted sequence.
    decisions: Vec<Decision>,
    /// Index of the next decision to hand out.
    next: usize,
}

impl ScriptedDecisions {
    /// Creates a source that replays `decisions` in order.
    #[must_use]
    pub fn new(decisions: &[Decision]) -> Self {
        Self {
            decisions: decisions.to_vec(),
            next: 0,
        }
    }
}

impl DecisionSource for ScriptedDecisions {
    fn decide(&mut self) -> Decision {
        let decision = self
            .decisions
            .get(self.next)
            .copied()
            .unwrap_or(Decision::Stand);
        self.next += 1;
        decision
    }
}
