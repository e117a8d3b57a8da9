//! Hand accumulation with soft-ace correction.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Nominal contribution of a rank before any ace correction.
const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

/// A hand of cards with a running total.
///
/// Each ace enters the total at 11 and is demoted to 1 only when the total
/// would otherwise exceed 21, one ace at a time, so the total is always the
/// lowest-busting valuation the hand admits.
///
/// ```
/// use parlor::{Card, Hand, Rank, Suit};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
/// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
/// hand.add_card(Card::new(Suit::Clubs, Rank::Nine));
/// assert_eq!(hand.total(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards received so far, in order.
    cards: Vec<Card>,
    /// Running total after ace correction.
    total: u8,
    /// Number of aces currently counted as 11.
    soft_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
            soft_aces: 0,
        }
    }

    /// Adds a card and updates the running total.
    ///
    /// A single addition may demote several aces: {Ace, Ace} followed by a
    /// ten demotes both to reach 12.
    pub fn add_card(&mut self, card: Card) {
        if card.rank == Rank::Ace {
            self.soft_aces += 1;
        }
        self.total = self.total.saturating_add(card_value(card.rank));
        self.cards.push(card);

        while self.total > 21 && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total after ace correction.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand is bust.
    ///
    /// The total is already minimal, so bust means over 21 even with every
    /// ace counted as 1.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
