//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards, drawn from the end like a stack.
///
/// A fresh deck holds all 52 unique suit/rank pairs. The size only ever
/// decreases, one card per draw.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top of the deck last.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck in a deterministic order (suits outer
    /// loop, ranks inner loop).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with an explicit arrangement.
    ///
    /// Cards are drawn from the end of the sequence, so the last card is the
    /// first one dealt. Useful for stacking known draw orders in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place with the provided random number generator.
    ///
    /// Uses a uniform permutation: with an unbiased `rng`, every ordering is
    /// equally likely. Membership is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain. The deck is left
    /// unchanged on failure.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
