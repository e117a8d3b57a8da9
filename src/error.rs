//! Error types for deck operations.

use thiserror::Error;

/// Error returned when drawing from an empty deck.
///
/// Not locally recoverable: a round has no reshuffle strategy, so the error
/// propagates and terminates the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;
